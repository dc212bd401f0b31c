//! TF-IDF vectorizer over a frozen vocabulary
//!
//! Applies an already-fitted term-frequency/inverse-document-frequency
//! weighting. Terms missing from the vocabulary contribute nothing; the
//! vocabulary never grows.

use std::collections::{BTreeMap, HashMap};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ArtifactError;

fn default_token_pattern() -> String {
    r"\b\w\w+\b".to_string()
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

/// Row normalisation applied after IDF weighting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    #[default]
    L2,
    None,
}

/// Normalizer identity the vocabulary was fit with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizerSpec {
    pub stemmer: String,
    pub stopwords: String,
}

/// Serialized form of a fitted vectorizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerArtifact {
    pub normalizer: NormalizerSpec,
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f64>,
    #[serde(default)]
    pub norm: Norm,
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default = "default_token_pattern")]
    pub token_pattern: String,
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
}

/// Sparse feature vector indexed by vocabulary position.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    dim: usize,
    entries: Vec<(usize, f64)>,
}

impl FeatureVector {
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            entries: Vec::new(),
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Non-zero entries sorted by index.
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, index: usize) -> f64 {
        self.entries
            .binary_search_by_key(&index, |(i, _)| *i)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }

    pub fn to_dense(&self) -> Vec<f64> {
        let mut dense = vec![0.0; self.dim];
        for &(index, value) in &self.entries {
            dense[index] = value;
        }
        dense
    }

    pub fn dot(&self, weights: &[f64]) -> f64 {
        self.entries
            .iter()
            .filter_map(|&(index, value)| weights.get(index).map(|w| w * value))
            .sum()
    }
}

/// Fitted TF-IDF vectorizer. Read-only after load.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    normalizer: NormalizerSpec,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    norm: Norm,
    sublinear_tf: bool,
    token_pattern: Regex,
    ngram_range: (usize, usize),
}

impl TfidfVectorizer {
    /// Validate an artifact and build the vectorizer.
    pub fn from_artifact(artifact: VectorizerArtifact) -> Result<Self, ArtifactError> {
        let dim = artifact.idf.len();
        if artifact.vocabulary.len() != dim {
            return Err(ArtifactError::InvalidVectorizer(format!(
                "vocabulary has {} terms but idf has {} weights",
                artifact.vocabulary.len(),
                dim
            )));
        }

        let mut seen = vec![false; dim];
        for (term, &index) in &artifact.vocabulary {
            match seen.get_mut(index) {
                Some(slot) if !*slot => *slot = true,
                Some(_) => {
                    return Err(ArtifactError::InvalidVectorizer(format!(
                        "index {} assigned to more than one term",
                        index
                    )))
                }
                None => {
                    return Err(ArtifactError::InvalidVectorizer(format!(
                        "term '{}' has out-of-range index {}",
                        term, index
                    )))
                }
            }
        }

        if let Some(bad) = artifact.idf.iter().position(|w| !w.is_finite()) {
            return Err(ArtifactError::InvalidVectorizer(format!(
                "idf weight {} is not finite",
                bad
            )));
        }

        let (min_n, max_n) = artifact.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(ArtifactError::InvalidVectorizer(format!(
                "invalid ngram range ({}, {})",
                min_n, max_n
            )));
        }

        Ok(Self {
            normalizer: artifact.normalizer,
            vocabulary: artifact.vocabulary,
            idf: artifact.idf,
            norm: artifact.norm,
            sublinear_tf: artifact.sublinear_tf,
            token_pattern: Regex::new(&artifact.token_pattern)?,
            ngram_range: artifact.ngram_range,
        })
    }

    pub fn dim(&self) -> usize {
        self.idf.len()
    }

    pub fn normalizer(&self) -> &NormalizerSpec {
        &self.normalizer
    }

    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocabulary
    }

    /// Terms the analyzer extracts from `text`: pattern tokens plus n-grams.
    pub fn analyze(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let words: Vec<&str> = self
            .token_pattern
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .collect();

        let (min_n, max_n) = self.ngram_range;
        let mut terms = Vec::new();
        for n in min_n..=max_n.min(words.len()) {
            terms.extend(words.windows(n).map(|gram| gram.join(" ")));
        }
        terms
    }

    /// Weight `text` against the fitted vocabulary.
    pub fn vectorize(&self, text: &str) -> FeatureVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for term in self.analyze(text) {
            if let Some(&index) = self.vocabulary.get(&term) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut entries: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(index, tf)| {
                let tf = if self.sublinear_tf { 1.0 + tf.ln() } else { tf };
                (index, tf * self.idf[index])
            })
            .collect();

        let scale = match self.norm {
            Norm::L2 => entries.iter().map(|(_, v)| v * v).sum::<f64>().sqrt(),
            Norm::L1 => entries.iter().map(|(_, v)| v.abs()).sum::<f64>(),
            Norm::None => 1.0,
        };
        if scale > 0.0 {
            for (_, value) in entries.iter_mut() {
                *value /= scale;
            }
        }

        FeatureVector {
            dim: self.dim(),
            entries,
        }
    }

    /// Vectorize several documents at once.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Vec<FeatureVector> {
        documents
            .iter()
            .map(|doc| self.vectorize(doc.as_ref()))
            .collect()
    }
}
