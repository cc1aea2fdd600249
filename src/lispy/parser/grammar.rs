//! Recursive-descent implementation of the lispy grammar
//!
//! The cursor exposes exactly one token of lookahead, which is all this
//! grammar needs once whitespace has been filtered out of the stream.
//! Parenthesized groups nest through plain recursion, so nesting depth is
//! bounded only by the call stack.

use super::cst::{CstChild, Rule, RuleMatch};
use crate::lispy::error::ParseError;
use crate::lispy::lexer::{Token, TokenKind};

/// Parse a whitespace-filtered token stream into a `program` tree.
///
/// The stream is expected to end with an END_OF_INPUT token, as produced
/// by [`lex`](crate::lispy::lexer::lex). No partial tree is returned on
/// failure.
pub fn parse(tokens: Vec<Token>) -> Result<RuleMatch, ParseError> {
    let mut cursor = TokenCursor::new(tokens);
    program(&mut cursor)
}

struct TokenCursor {
    tokens: Vec<Token>,
    index: usize,
}

impl TokenCursor {
    fn new(tokens: Vec<Token>) -> Self {
        TokenCursor { tokens, index: 0 }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    /// Consume the lookahead token if it has the wanted kind
    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<Token, ParseError> {
        match self.tokens.get(self.index) {
            Some(token) if token.kind == kind => {
                let token = token.clone();
                self.index += 1;
                Ok(token)
            }
            Some(token) => Err(ParseError::UnexpectedToken {
                expected,
                found: token.clone(),
            }),
            None => Err(ParseError::UnexpectedEnd { expected }),
        }
    }

    fn next_starts_expression(&self) -> bool {
        self.peek().map_or(false, |token| token.kind.starts_expression())
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::UnexpectedToken {
                expected,
                found: token.clone(),
            },
            None => ParseError::UnexpectedEnd { expected },
        }
    }
}

/// program := operator expression+ END_OF_INPUT
fn program(cursor: &mut TokenCursor) -> Result<RuleMatch, ParseError> {
    let mut children = vec![CstChild::Token(operator(cursor)?)];

    children.push(CstChild::Rule(expression(cursor)?));
    while cursor.next_starts_expression() {
        children.push(CstChild::Rule(expression(cursor)?));
    }

    // Anything left over here is a trailing-token failure
    let terminator = cursor.expect(TokenKind::EndOfInput, "end of input")?;
    children.push(CstChild::Token(terminator));

    Ok(RuleMatch::new(Rule::Program, children))
}

/// expression := NUMBER | '(' operator expression+ ')'
fn expression(cursor: &mut TokenCursor) -> Result<RuleMatch, ParseError> {
    match cursor.peek().map(|token| token.kind) {
        Some(TokenKind::Number) => {
            let number = cursor.expect(TokenKind::Number, "a number")?;
            Ok(RuleMatch::new(
                Rule::Expression,
                vec![CstChild::Token(number)],
            ))
        }
        Some(TokenKind::LeftParen) => {
            let open = cursor.expect(TokenKind::LeftParen, "'('")?;
            let mut children = vec![CstChild::Token(open), CstChild::Token(operator(cursor)?)];

            children.push(CstChild::Rule(expression(cursor)?));
            while cursor.next_starts_expression() {
                children.push(CstChild::Rule(expression(cursor)?));
            }

            let close = cursor.expect(TokenKind::RightParen, "')'")?;
            children.push(CstChild::Token(close));

            Ok(RuleMatch::new(Rule::Expression, children))
        }
        _ => Err(cursor.unexpected("an expression")),
    }
}

/// operator := OPERATOR, consumed verbatim into the parent rule
fn operator(cursor: &mut TokenCursor) -> Result<Token, ParseError> {
    cursor.expect(TokenKind::Operator, "an operator")
}
