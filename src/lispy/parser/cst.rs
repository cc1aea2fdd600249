//! Concrete syntax tree produced by the lispy grammar
//!
//! The tree is a closed pair of variants: a child of a rule match is
//! either a nested rule match or a consumed token. Every token the parser
//! consumes appears in the tree, structural parentheses and the
//! END_OF_INPUT terminator included, in source order.

use crate::lispy::lexer::Token;

/// Grammar rules that materialize as tree nodes. The `operator` rule
/// consumes its token verbatim into the parent's children, so it has no
/// node of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Program,
    Expression,
}

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Program => "program",
            Rule::Expression => "expression",
        }
    }
}

/// One successful match of a grammar rule
#[derive(Debug, Clone, PartialEq)]
pub struct RuleMatch {
    pub rule: Rule,
    /// Sub-matches and consumed tokens in left-to-right parse order;
    /// never empty for this grammar
    pub children: Vec<CstChild>,
}

impl RuleMatch {
    pub fn new(rule: Rule, children: Vec<CstChild>) -> Self {
        RuleMatch { rule, children }
    }
}

/// A child of a rule match
#[derive(Debug, Clone, PartialEq)]
pub enum CstChild {
    Rule(RuleMatch),
    Token(Token),
}
