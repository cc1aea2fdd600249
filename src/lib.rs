//! # lispy
//!
//! A parser front-end for the lispy expression language: programs are
//! Polish-prefix expressions such as `+ 5 (* 2 2)`. The crate tokenizes a
//! source string, parses it into a concrete syntax tree, and renders that
//! tree in an indented multi-line form for diagnostics.
//!
//! Evaluation is not part of this crate; the parse tree is the product.

pub mod lispy;
