//! Main module for the lispy front-end
//!
//! The pipeline runs text -> tokens -> concrete syntax tree -> generic
//! parse tree -> rendered string. Each stage is a pure function over
//! in-memory values; all failures surface as typed errors in
//! [`error`](crate::lispy::error).

pub mod error;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod tree;
