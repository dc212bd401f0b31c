//! SMS spam classification over pre-fitted artifacts
//!
//! `raw message -> Normalizer -> TfidfVectorizer -> Classifier -> Label`.
//!
//! The vectorizer and classifier are loaded once and never mutated, so a
//! single [`SpamClassifier`] can serve any number of concurrent callers.
//!
//! # Example
//!
//! ```no_run
//! use spam_classifier::{SpamClassifier, SpamClassifierService};
//!
//! let service = SpamClassifier::load("vectorizer.json", "classifier.json")?;
//! let prediction = service.predict("WINNER!! Claim your prize now")?;
//! println!("{}", prediction.label);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod artifact;
pub mod error;
pub mod model;
pub mod service;
pub mod vectorizer;

pub use artifact::{load_classifier, load_vectorizer};
pub use error::{ArtifactError, ClassificationError, ServiceError};
pub use model::Classifier;
pub use service::{Prediction, SpamClassifier, SpamClassifierService};
pub use sms_preprocess::Label;
pub use vectorizer::{FeatureVector, Norm, NormalizerSpec, TfidfVectorizer, VectorizerArtifact};
