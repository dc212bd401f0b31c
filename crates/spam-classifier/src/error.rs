//! Error types for the classifier adapter

use std::path::PathBuf;

use sms_preprocess::NormalizeError;
use smartcore::error::Failed;
use thiserror::Error;

/// Artifacts could not be loaded or do not fit together. Fatal at startup.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Failed to read artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid vectorizer: {0}")]
    InvalidVectorizer(String),

    #[error("Invalid token pattern: {0}")]
    TokenPattern(#[from] regex::Error),

    #[error("Vectorizer was fit with {field} '{found}', this build uses '{expected}'")]
    NormalizerMismatch {
        field: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error("Classifier expects {classifier} features, vectorizer produces {vectorizer}")]
    DimensionMismatch { vectorizer: usize, classifier: usize },

    #[error("Normalizer setup failed: {0}")]
    Normalizer(#[from] NormalizeError),
}

/// A single vectorize/predict call failed. Reported per request.
#[derive(Error, Debug)]
pub enum ClassificationError {
    #[error("Feature vector has {found} dimensions, classifier expects {expected}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Model prediction failed: {0}")]
    Model(#[from] Failed),

    #[error("Model returned no prediction")]
    EmptyPrediction,

    #[error("Model returned unknown class {0}")]
    UnknownClass(u32),
}

/// Errors surfaced by [`SpamClassifierService`](crate::SpamClassifierService).
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Empty or missing message; nothing was classified
    #[error("No message provided")]
    Input,

    #[error(transparent)]
    Classification(#[from] ClassificationError),
}
