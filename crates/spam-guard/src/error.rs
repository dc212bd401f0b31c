//! Error types for spam-guard

use spam_classifier::ArtifactError;
use sms_preprocess::DatasetError;
use thiserror::Error;

/// Result type alias for spam-guard operations
pub type Result<T> = std::result::Result<T, GuardError>;

#[derive(Error, Debug)]
pub enum GuardError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Artifacts failed to load; the service must not start
    #[error("Artifact error: {0}")]
    Artifact(#[from] ArtifactError),

    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
