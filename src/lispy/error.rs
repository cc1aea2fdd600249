//! Error types for the lispy front-end
//!
//! Lexing and parsing failures are unrecoverable for the current input:
//! no partial token streams or partial trees are produced. The caller
//! decides whether to retry with new input or abort.

use std::fmt;

use crate::lispy::lexer::Token;

/// A character in the source matched none of the lexer's rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    IllegalCharacter { character: char, position: usize },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::IllegalCharacter {
                character,
                position,
            } => {
                write!(f, "illegal character '{}' at position {}", character, position)
            }
        }
    }
}

impl std::error::Error for LexError {}

/// The token stream did not match the grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The lookahead token was not what the active rule required
    UnexpectedToken {
        expected: &'static str,
        found: Token,
    },
    /// The token stream ran out without its END_OF_INPUT terminator.
    /// Streams produced by the lexer always carry the terminator, so this
    /// is only reachable with a hand-built token vector.
    UnexpectedEnd { expected: &'static str },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken { expected, found } => {
                write!(
                    f,
                    "expected {}, found '{}' at position {}",
                    expected,
                    found.display_text(),
                    found.position
                )
            }
            ParseError::UnexpectedEnd { expected } => {
                write!(f, "expected {}, but the token stream ended", expected)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Either failure of the text-to-tree pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LispyError {
    Lex(LexError),
    Parse(ParseError),
}

impl fmt::Display for LispyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LispyError::Lex(e) => write!(f, "{}", e),
            LispyError::Parse(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for LispyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LispyError::Lex(e) => Some(e),
            LispyError::Parse(e) => Some(e),
        }
    }
}

impl From<LexError> for LispyError {
    fn from(e: LexError) -> Self {
        LispyError::Lex(e)
    }
}

impl From<ParseError> for LispyError {
    fn from(e: ParseError) -> Self {
        LispyError::Parse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lispy::lexer::TokenKind;

    #[test]
    fn test_lex_error_display() {
        let err = LexError::IllegalCharacter {
            character: '$',
            position: 2,
        };
        assert_eq!(err.to_string(), "illegal character '$' at position 2");
    }

    #[test]
    fn test_parse_error_display_names_the_found_token() {
        let err = ParseError::UnexpectedToken {
            expected: "an operator",
            found: Token::new(TokenKind::Number, "5", 0),
        };
        assert_eq!(err.to_string(), "expected an operator, found '5' at position 0");
    }

    #[test]
    fn test_parse_error_display_uses_eof_marker() {
        let err = ParseError::UnexpectedToken {
            expected: "')'",
            found: Token::end_of_input(6),
        };
        assert_eq!(err.to_string(), "expected ')', found '<EOF>' at position 6");
    }
}
