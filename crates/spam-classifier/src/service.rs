//! Classification service
//!
//! [`SpamClassifier`] is the context object holding the normalizer and the
//! two fitted artifacts. It is built once at startup, then shared read-only
//! across requests (typically behind an `Arc`). Transports depend on the
//! [`SpamClassifierService`] trait so they can be driven by a mock.

use std::path::Path;

use sms_preprocess::{Label, Normalizer};
use tracing::{debug, info};

use crate::artifact::{load_classifier, load_vectorizer};
use crate::error::{ArtifactError, ClassificationError, ServiceError};
use crate::model::Classifier;
use crate::vectorizer::{FeatureVector, TfidfVectorizer};

/// Outcome of classifying one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    pub label: Label,
    /// The original input, echoed back.
    pub message: String,
}

/// Capability consumed by every transport.
pub trait SpamClassifierService: Send + Sync {
    /// Classify a raw message. An empty message is an input error.
    fn predict(&self, message: &str) -> Result<Prediction, ServiceError>;
}

/// Normalizer, vectorizer and classifier wired together.
#[derive(Debug)]
pub struct SpamClassifier {
    normalizer: Normalizer,
    vectorizer: TfidfVectorizer,
    classifier: Classifier,
}

impl SpamClassifier {
    /// Check that the artifacts fit this normalizer and each other.
    pub fn new(
        normalizer: Normalizer,
        vectorizer: TfidfVectorizer,
        classifier: Classifier,
    ) -> Result<Self, ArtifactError> {
        let profile = normalizer.profile();
        let fitted = vectorizer.normalizer();
        if fitted.stemmer != profile.stemmer {
            return Err(ArtifactError::NormalizerMismatch {
                field: "stemmer",
                expected: profile.stemmer,
                found: fitted.stemmer.clone(),
            });
        }
        if fitted.stopwords != profile.stopwords {
            return Err(ArtifactError::NormalizerMismatch {
                field: "stopwords",
                expected: profile.stopwords,
                found: fitted.stopwords.clone(),
            });
        }
        if classifier.n_features() != vectorizer.dim() {
            return Err(ArtifactError::DimensionMismatch {
                vectorizer: vectorizer.dim(),
                classifier: classifier.n_features(),
            });
        }

        Ok(Self {
            normalizer,
            vectorizer,
            classifier,
        })
    }

    /// Load both artifacts from disk.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(
        vectorizer_path: P,
        classifier_path: Q,
    ) -> Result<Self, ArtifactError> {
        let normalizer = Normalizer::english()?;
        let vectorizer = load_vectorizer(vectorizer_path)?;
        let classifier = load_classifier(classifier_path)?;
        let service = Self::new(normalizer, vectorizer, classifier)?;

        info!(
            vocabulary = service.vectorizer.dim(),
            classifier = service.classifier.kind(),
            "Loaded spam classifier artifacts"
        );
        Ok(service)
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    pub fn vectorize(&self, normalized: &str) -> FeatureVector {
        self.vectorizer.vectorize(normalized)
    }

    /// Classify already-normalized text. Class `1` is spam, `0` ham.
    pub fn classify(&self, normalized: &str) -> Result<Label, ClassificationError> {
        let features = self.vectorize(normalized);
        let class = self.classifier.predict(&features)?;
        let label = Label::from_class(class).ok_or(ClassificationError::UnknownClass(class))?;
        debug!(features = features.nnz(), %label, "classified message");
        Ok(label)
    }
}

impl SpamClassifierService for SpamClassifier {
    fn predict(&self, message: &str) -> Result<Prediction, ServiceError> {
        if message.is_empty() {
            return Err(ServiceError::Input);
        }
        let normalized = self.normalize(message);
        let label = self.classify(&normalized)?;
        Ok(Prediction {
            label,
            message: message.to_string(),
        })
    }
}
