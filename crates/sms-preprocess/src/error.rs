//! Error types for text preprocessing

use thiserror::Error;

/// Failures while building the normalizer.
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// A tokenizer rewrite rule failed to compile
    #[error("Invalid tokenizer rule: {0}")]
    TokenizerRule(#[from] regex::Error),

    /// The pinned stopword list is not available
    #[error("No stopword list available for {0}")]
    MissingStopwords(&'static str),
}

/// A label other than `ham` or `spam`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown label '{0}', expected 'ham' or 'spam'")]
pub struct ParseLabelError(pub String);

/// Failures while reading a labelled message collection.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing tab delimiter on line {line}")]
    MissingDelimiter { line: usize },

    #[error("Invalid label '{label}' on line {line}")]
    InvalidLabel { line: usize, label: String },
}
