//! Pinned English stopword list

use std::collections::HashSet;

use stopwords::{Language, Stopwords, NLTK};

use crate::error::NormalizeError;

/// Identifier recorded in model artifacts for this stopword list.
pub const STOPWORDS_ID: &str = "nltk-english";

/// Fixed set of English stopwords, read-only after construction.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<&'static str>,
}

impl StopwordSet {
    /// The NLTK English list.
    pub fn english() -> Result<Self, NormalizeError> {
        let words = NLTK::stopwords(Language::English)
            .ok_or(NormalizeError::MissingStopwords(STOPWORDS_ID))?
            .iter()
            .copied()
            .collect();
        Ok(Self { words })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
