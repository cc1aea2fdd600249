//! Lexer module for the lispy language
//!
//! This module contains the tokenization logic for lispy sources,
//! including token definitions and the lexer implementation.
//!
//! Two entry points are exposed. [`tokenize`] produces the raw stream:
//! every character of the source is covered by exactly one token
//! (whitespace included), so concatenating the matched texts reconstructs
//! the source. [`lex`] produces the parse-ready stream with whitespace
//! dropped, since no grammar rule references it. Both streams end with a
//! single synthetic END_OF_INPUT token.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{lex, tokenize};
pub use tokens::{Token, TokenKind};
