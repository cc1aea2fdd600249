//! Processing API for lispy sources
//!
//! This module maps a format string like `token-simple` or
//! `tree-multiline` onto a processing stage (what to extract) and an
//! output format (how to render it), and runs the pipeline accordingly.
//! The CLI's `parse` subcommand is a thin wrapper around
//! [`process_source`].

use std::fmt;

use crate::lispy::error::LispyError;
use crate::lispy::lexer::{tokenize, Token};
use crate::lispy::parser::parse_source;
use crate::lispy::tree::to_parse_tree;

/// The processing stage: what data to extract from the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Tree,
}

/// The output format for the extracted data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Multiline,
}

/// A complete processing specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "tree-multiline"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let Some((stage_str, format_part)) = format_str.split_once('-') else {
            return Err(ProcessingError::InvalidFormat(format_str.to_string()));
        };

        let stage = match stage_str {
            "token" => ProcessingStage::Token,
            "tree" => ProcessingStage::Tree,
            _ => return Err(ProcessingError::InvalidStage(stage_str.to_string())),
        };

        let format = match format_part {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "multiline" => OutputFormat::Multiline,
            _ => return Err(ProcessingError::InvalidFormatType(format_part.to_string())),
        };

        // Validate stage/format compatibility
        match (stage, format) {
            (ProcessingStage::Token, OutputFormat::Multiline) => {
                return Err(ProcessingError::InvalidFormatType(
                    "Format 'multiline' only works with the tree stage".to_string(),
                ))
            }
            (ProcessingStage::Tree, OutputFormat::Simple | OutputFormat::Json) => {
                return Err(ProcessingError::InvalidFormatType(
                    "The tree stage only supports the 'multiline' format".to_string(),
                ))
            }
            _ => {}
        }

        Ok(ProcessingSpec { stage, format })
    }

    /// All format strings accepted by [`ProcessingSpec::from_string`]
    pub fn available_formats() -> &'static [&'static str] {
        &["token-simple", "token-json", "tree-multiline"]
    }
}

/// Errors from the processing API
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    InvalidFormat(String),
    InvalidStage(String),
    InvalidFormatType(String),
    Serialization(String),
    Frontend(LispyError),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::InvalidFormat(s) => {
                write!(f, "Invalid format string '{}', expected '<stage>-<format>'", s)
            }
            ProcessingError::InvalidStage(s) => write!(f, "Invalid processing stage '{}'", s),
            ProcessingError::InvalidFormatType(s) => write!(f, "Invalid output format: {}", s),
            ProcessingError::Serialization(s) => write!(f, "Serialization failed: {}", s),
            ProcessingError::Frontend(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ProcessingError {}

impl From<LispyError> for ProcessingError {
    fn from(e: LispyError) -> Self {
        ProcessingError::Frontend(e)
    }
}

/// Process a source string according to a format string
pub fn process_source(source: &str, format_str: &str) -> Result<String, ProcessingError> {
    let spec = ProcessingSpec::from_string(format_str)?;
    match (spec.stage, spec.format) {
        (ProcessingStage::Token, OutputFormat::Simple) => {
            let tokens = tokenize(source).map_err(LispyError::from)?;
            Ok(format_tokens_simple(&tokens))
        }
        (ProcessingStage::Token, OutputFormat::Json) => {
            let tokens = tokenize(source).map_err(LispyError::from)?;
            serde_json::to_string_pretty(&tokens)
                .map_err(|e| ProcessingError::Serialization(e.to_string()))
        }
        // screened out by from_string, kept for exhaustiveness
        (ProcessingStage::Token, OutputFormat::Multiline) => Err(
            ProcessingError::InvalidFormatType("Format 'multiline' only works with the tree stage".to_string()),
        ),
        (ProcessingStage::Tree, _) => {
            let cst = parse_source(source)?;
            Ok(to_parse_tree(&cst).to_multiline_string())
        }
    }
}

/// One token per line: kind, display text, byte offset
fn format_tokens_simple(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&format!(
            "{:?}[{}]@{}\n",
            token.kind,
            token.display_text(),
            token.position
        ));
    }
    out
}
