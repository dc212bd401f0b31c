//! Pre-fitted classifiers
//!
//! The decision rule belongs to the artifact; this module only applies it.
//! Every model answers with class `1` (spam) or `0` (ham).

use std::fmt;

use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_classifier::RandomForestClassifier;
use smartcore::linalg::basic::arrays::{Array, Array2};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::logistic_regression::LogisticRegression;

use crate::error::ClassificationError;
use crate::vectorizer::FeatureVector;

pub type LogisticModel = LogisticRegression<f64, u32, DenseMatrix<f64>, Vec<u32>>;
pub type ForestModel = RandomForestClassifier<f64, u32, DenseMatrix<f64>, Vec<u32>>;

/// A fitted classifier artifact, tagged by `kind`.
#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Classifier {
    /// `w . x + b > 0` is spam.
    Linear {
        coefficients: Vec<f64>,
        intercept: f64,
    },
    LogisticRegression { model: LogisticModel },
    /// Trees do not expose their input width, so the artifact carries it.
    RandomForest { n_features: usize, model: ForestModel },
}

impl Classifier {
    pub fn kind(&self) -> &'static str {
        match self {
            Classifier::Linear { .. } => "linear",
            Classifier::LogisticRegression { .. } => "logistic_regression",
            Classifier::RandomForest { .. } => "random_forest",
        }
    }

    /// Feature count the model was fit on.
    pub fn n_features(&self) -> usize {
        match self {
            Classifier::Linear { coefficients, .. } => coefficients.len(),
            Classifier::LogisticRegression { model } => model.coefficients().shape().1,
            Classifier::RandomForest { n_features, .. } => *n_features,
        }
    }

    /// Predict the class of a single feature vector.
    ///
    /// The width is checked first: smartcore panics on a row of the wrong
    /// length instead of returning an error.
    pub fn predict(&self, features: &FeatureVector) -> Result<u32, ClassificationError> {
        let expected = self.n_features();
        if expected != features.dim() {
            return Err(ClassificationError::DimensionMismatch {
                expected,
                found: features.dim(),
            });
        }

        match self {
            Classifier::Linear {
                coefficients,
                intercept,
            } => {
                let score = features.dot(coefficients) + intercept;
                Ok(u32::from(score > 0.0))
            }
            Classifier::LogisticRegression { model } => first(model.predict(&as_row(features))?),
            Classifier::RandomForest { model, .. } => first(model.predict(&as_row(features))?),
        }
    }
}

fn as_row(features: &FeatureVector) -> DenseMatrix<f64> {
    let dense = features.to_dense();
    DenseMatrix::from_row(&dense)
}

fn first(y: Vec<u32>) -> Result<u32, ClassificationError> {
    y.first()
        .copied()
        .ok_or(ClassificationError::EmptyPrediction)
}

impl fmt::Debug for Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Classifier")
            .field("kind", &self.kind())
            .field("n_features", &self.n_features())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorizer::{Norm, NormalizerSpec, TfidfVectorizer, VectorizerArtifact};

    fn vectorizer() -> TfidfVectorizer {
        TfidfVectorizer::from_artifact(VectorizerArtifact {
            normalizer: NormalizerSpec {
                stemmer: "porter".to_string(),
                stopwords: "nltk-english".to_string(),
            },
            vocabulary: [("prize", 0), ("lunch", 1)]
                .into_iter()
                .map(|(t, i)| (t.to_string(), i))
                .collect(),
            idf: vec![1.0, 1.0],
            norm: Norm::L2,
            sublinear_tf: false,
            token_pattern: r"\b\w\w+\b".to_string(),
            ngram_range: (1, 1),
        })
        .unwrap()
    }

    #[test]
    fn test_linear_decision() {
        let model = Classifier::Linear {
            coefficients: vec![3.0, -2.0],
            intercept: -0.5,
        };
        let v = vectorizer();
        assert_eq!(model.predict(&v.vectorize("prize")).unwrap(), 1);
        assert_eq!(model.predict(&v.vectorize("lunch")).unwrap(), 0);
        assert_eq!(model.predict(&v.vectorize("")).unwrap(), 0);
    }

    #[test]
    fn test_dimension_mismatch() {
        let model = Classifier::Linear {
            coefficients: vec![1.0, 1.0, 1.0],
            intercept: 0.0,
        };
        let err = model.predict(&FeatureVector::zeros(2)).unwrap_err();
        assert!(matches!(
            err,
            ClassificationError::DimensionMismatch {
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_linear_artifact_json() {
        let json = r#"{"kind": "linear", "coefficients": [0.5, -0.5], "intercept": 0.1}"#;
        let model: Classifier = serde_json::from_str(json).unwrap();
        assert_eq!(model.kind(), "linear");
        assert_eq!(model.n_features(), 2);

        let unknown = r#"{"kind": "svm", "support_vectors": []}"#;
        assert!(serde_json::from_str::<Classifier>(unknown).is_err());
    }

    fn fit_logistic(n_features: usize) -> LogisticModel {
        let rows: Vec<Vec<f64>> = (0..8)
            .map(|i| {
                let mut row = vec![0.0; n_features];
                row[i % 2] = 1.0;
                row
            })
            .collect();
        let y: Vec<u32> = (0..8).map(|i| (i % 2) as u32).collect();
        LogisticRegression::fit(&DenseMatrix::from_2d_vec(&rows), &y, Default::default()).unwrap()
    }

    #[test]
    fn test_logistic_width_checked_before_smartcore() {
        let model = Classifier::LogisticRegression {
            model: fit_logistic(3),
        };
        assert_eq!(model.n_features(), 3);

        let err = model.predict(&vectorizer().vectorize("prize")).unwrap_err();
        assert!(matches!(
            err,
            ClassificationError::DimensionMismatch {
                expected: 3,
                found: 2
            }
        ));
    }
}
