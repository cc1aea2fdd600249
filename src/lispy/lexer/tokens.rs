//! Token definitions for the lispy language

use serde::{Deserialize, Serialize};

/// All token kinds a lispy source can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// One or more decimal digits, no sign, no decimal point
    Number,
    /// Exactly one of `+ - * /`
    Operator,
    LeftParen,
    RightParen,
    /// A maximal run of whitespace; recognized but never consumed by the grammar
    Whitespace,
    /// Synthetic terminator appended by the tokenizer, never matched from input
    EndOfInput,
}

impl TokenKind {
    pub fn is_whitespace(&self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }

    pub fn is_end_of_input(&self) -> bool {
        matches!(self, TokenKind::EndOfInput)
    }

    /// Whether a token of this kind can begin an `expression`
    pub fn starts_expression(&self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::LeftParen)
    }
}

/// A classified, positioned substring of the source
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact matched substring; empty for END_OF_INPUT
    pub text: String,
    /// Byte offset of the match in the source
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Token {
            kind,
            text: text.into(),
            position,
        }
    }

    /// The terminator token; carries empty text so the reconstruction
    /// invariant of the raw stream holds
    pub fn end_of_input(position: usize) -> Self {
        Token::new(TokenKind::EndOfInput, "", position)
    }

    /// Text to show in parse trees and error messages. Identical to the
    /// matched text except for END_OF_INPUT, which displays as `<EOF>`.
    pub fn display_text(&self) -> &str {
        match self.kind {
            TokenKind::EndOfInput => "<EOF>",
            _ => &self.text,
        }
    }
}
