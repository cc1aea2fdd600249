//! Parser module for the lispy language
//!
//! The grammar, with one token of lookahead:
//!
//! ```text
//! program     := operator expression+ END_OF_INPUT
//! expression  := NUMBER | '(' operator expression+ ')'
//! operator    := OPERATOR
//! ```
//!
//! Parsing only validates structure and builds the concrete syntax tree;
//! there is no evaluation and no error recovery. A failure aborts the
//! whole parse for that input.

pub mod cst;
pub mod grammar;

pub use cst::{CstChild, Rule, RuleMatch};
pub use grammar::parse;

use crate::lispy::error::LispyError;
use crate::lispy::lexer;

/// Parse a source string end to end: tokenize, drop whitespace, run the
/// grammar. This is the primary entry point for callers holding text.
pub fn parse_source(source: &str) -> Result<RuleMatch, LispyError> {
    let tokens = lexer::lex(source)?;
    Ok(grammar::parse(tokens)?)
}
