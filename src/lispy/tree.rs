//! Generic parse tree model and its renderers
//!
//! [`ParseTreeElement`] is grammar-independent: an internal node carries a
//! rule name and ordered children, a leaf carries one consumed token's
//! display text. The tree is a pure value, rebuilt on every parse and
//! immutable once constructed.

use std::fmt;

use super::parser::{CstChild, RuleMatch};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseTreeElement {
    Leaf {
        text: String,
    },
    Node {
        name: String,
        children: Vec<ParseTreeElement>,
    },
}

impl ParseTreeElement {
    pub fn leaf(text: impl Into<String>) -> Self {
        ParseTreeElement::Leaf { text: text.into() }
    }

    pub fn node(name: impl Into<String>, children: Vec<ParseTreeElement>) -> Self {
        ParseTreeElement::Node {
            name: name.into(),
            children,
        }
    }

    /// Render the tree as an indented multi-line string: a leaf as
    /// `T[text]`, a node as its name followed by its children indented by
    /// one extra space per level. Each line ends with a newline.
    pub fn to_multiline_string(&self) -> String {
        let mut out = String::new();
        self.append_multiline(&mut out, "");
        out
    }

    fn append_multiline(&self, out: &mut String, indentation: &str) {
        match self {
            ParseTreeElement::Leaf { text } => {
                out.push_str(indentation);
                out.push_str("T[");
                out.push_str(text);
                out.push_str("]\n");
            }
            ParseTreeElement::Node { name, children } => {
                out.push_str(indentation);
                out.push_str(name);
                out.push('\n');
                let child_indentation = format!("{} ", indentation);
                for child in children {
                    child.append_multiline(out, &child_indentation);
                }
            }
        }
    }
}

/// Compact single-line form, mainly for assertion messages and logs
impl fmt::Display for ParseTreeElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseTreeElement::Leaf { text } => write!(f, "T{}", text),
            ParseTreeElement::Node { name, children } => {
                let rendered: Vec<String> =
                    children.iter().map(|child| child.to_string()).collect();
                write!(f, "Node({}) [{}]", name, rendered.join(", "))
            }
        }
    }
}

/// Convert the grammar's concrete syntax tree into the generic model.
///
/// Every consumed token becomes a leaf in source order, structural
/// parentheses and the END_OF_INPUT terminator included; nothing is
/// filtered. Total over any tree the parser can produce.
pub fn to_parse_tree(node: &RuleMatch) -> ParseTreeElement {
    let children = node
        .children
        .iter()
        .map(|child| match child {
            CstChild::Rule(rule) => to_parse_tree(rule),
            CstChild::Token(token) => ParseTreeElement::leaf(token.display_text()),
        })
        .collect();
    ParseTreeElement::node(node.rule.name(), children)
}
