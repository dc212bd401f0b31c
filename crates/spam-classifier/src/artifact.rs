//! Loading fitted artifacts from disk
//!
//! Both artifacts are JSON documents written when the model was fit.
//! Loading happens once at startup; any failure here is fatal.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ArtifactError;
use crate::model::Classifier;
use crate::vectorizer::{TfidfVectorizer, VectorizerArtifact};

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let content = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and validate a vectorizer artifact.
pub fn load_vectorizer<P: AsRef<Path>>(path: P) -> Result<TfidfVectorizer, ArtifactError> {
    let path = path.as_ref();
    let artifact: VectorizerArtifact = read_json(path)?;
    debug!(path = %path.display(), terms = artifact.vocabulary.len(), "read vectorizer");
    TfidfVectorizer::from_artifact(artifact)
}

/// Load a classifier artifact.
pub fn load_classifier<P: AsRef<Path>>(path: P) -> Result<Classifier, ArtifactError> {
    let path = path.as_ref();
    let classifier: Classifier = read_json(path)?;
    debug!(path = %path.display(), kind = classifier.kind(), "read classifier");
    Ok(classifier)
}
