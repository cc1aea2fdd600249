//! Implementation of the lispy lexer
//!
//! The character-level matching is handled entirely by logos. The raw
//! lexeme enum stays private; the public [`Token`] carries the matched
//! text and byte offset alongside its [`TokenKind`], and the synthetic
//! END_OF_INPUT terminator is appended after the scan.

use logos::Logos;

use super::tokens::{Token, TokenKind};
use crate::lispy::error::LexError;

/// Lexemes recognized directly from source text. Longest match wins, so
/// digit and whitespace runs are maximal.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawLexeme {
    #[regex("[0-9]+")]
    Number,

    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    Operator,

    #[token("(")]
    LeftParen,

    #[token(")")]
    RightParen,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,
}

impl RawLexeme {
    fn kind(self) -> TokenKind {
        match self {
            RawLexeme::Number => TokenKind::Number,
            RawLexeme::Operator => TokenKind::Operator,
            RawLexeme::LeftParen => TokenKind::LeftParen,
            RawLexeme::RightParen => TokenKind::RightParen,
            RawLexeme::Whitespace => TokenKind::Whitespace,
        }
    }
}

/// Tokenize a source string into the raw token stream.
///
/// Every character belongs to exactly one token, so concatenating the
/// matched texts reconstructs the source. The stream always ends with a
/// single END_OF_INPUT token positioned at the end of the source. A
/// character matching no rule aborts the scan with a [`LexError`].
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = RawLexeme::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(raw) => tokens.push(Token::new(raw.kind(), lexer.slice(), span.start)),
            Err(_) => {
                let character = source[span.start..].chars().next().unwrap_or('\u{FFFD}');
                return Err(LexError::IllegalCharacter {
                    character,
                    position: span.start,
                });
            }
        }
    }

    tokens.push(Token::end_of_input(source.len()));
    Ok(tokens)
}

/// Tokenize and drop whitespace tokens, yielding the parse-ready stream
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let tokens = tokenize(source)?;
    Ok(tokens
        .into_iter()
        .filter(|token| !token.kind.is_whitespace())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_digits_lex_to_a_single_number() {
        let tokens = lex("100").unwrap();
        assert_eq!(kinds(&tokens), vec![TokenKind::Number, TokenKind::EndOfInput]);
        assert_eq!(tokens[0].text, "100");
    }

    #[test]
    fn test_several_numbers() {
        let tokens = lex("100 200 4324892").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Number,
                TokenKind::Number,
                TokenKind::Number,
                TokenKind::EndOfInput
            ]
        );
        assert_eq!(texts(&tokens), vec!["100", "200", "4324892", ""]);
    }

    #[test]
    fn test_all_operators() {
        let tokens = lex("+ - * /").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Operator,
                TokenKind::Operator,
                TokenKind::Operator,
                TokenKind::Operator,
                TokenKind::EndOfInput
            ]
        );
        assert_eq!(texts(&tokens), vec!["+", "-", "*", "/", ""]);
    }

    #[test]
    fn test_raw_stream_keeps_whitespace() {
        let tokens = tokenize("1 +").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Number,
                TokenKind::Whitespace,
                TokenKind::Operator,
                TokenKind::EndOfInput
            ]
        );
    }

    #[test]
    fn test_raw_stream_reconstructs_source() {
        let source = "+ 5 (* 2  2)\n";
        let tokens = tokenize(source).unwrap();
        let reconstructed: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(reconstructed, source);
    }

    #[test]
    fn test_whitespace_runs_are_maximal() {
        let tokens = tokenize("1  \t 2").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Number,
                TokenKind::Whitespace,
                TokenKind::Number,
                TokenKind::EndOfInput
            ]
        );
        assert_eq!(tokens[1].text, "  \t ");
    }

    #[test]
    fn test_positions_are_byte_offsets() {
        let tokens = tokenize("(+ 12 3)").unwrap();
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_empty_input_yields_only_the_terminator() {
        let tokens = tokenize("").unwrap();
        assert_eq!(tokens, vec![Token::end_of_input(0)]);
    }

    #[test]
    fn test_illegal_character_is_reported_with_position() {
        let err = tokenize("1 $ 2").unwrap_err();
        assert_eq!(
            err,
            LexError::IllegalCharacter {
                character: '$',
                position: 2
            }
        );
    }

    #[test]
    fn test_operators_need_no_separating_whitespace() {
        let tokens = lex("+-*/").unwrap();
        assert_eq!(
            texts(&tokens),
            vec!["+", "-", "*", "/", ""]
        );
    }

    #[test]
    fn test_repeated_scans_are_identical() {
        let first = tokenize("+ 1 2").unwrap();
        let second = tokenize("+ 1 2").unwrap();
        assert_eq!(first, second);
    }
}
