//! Canonical text normalization
//!
//! `raw text -> lowercase -> word tokens -> alphanumeric tokens ->
//! without punctuation and stopwords -> stems -> space-joined string`.
//!
//! The output has to match, token for token, the transformation the
//! vectorizer vocabulary was fit against.

use tracing::trace;

use crate::error::NormalizeError;
use crate::stemmer::{TokenStemmer, STEMMER_ID};
use crate::stoplist::{StopwordSet, STOPWORDS_ID};
use crate::tokenizer::WordTokenizer;

/// ASCII punctuation; a token contained in this string is dropped.
const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Identity of the fixed rules a normalizer applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizerProfile {
    pub stemmer: &'static str,
    pub stopwords: &'static str,
}

/// Token sequence moving through the normalization steps.
#[derive(Debug, Default, Clone)]
pub struct TokenizedText {
    pub tokens: Vec<String>,
}

impl TokenizedText {
    pub fn alphanumeric(self) -> Self {
        Self {
            tokens: self
                .tokens
                .into_iter()
                .filter(|token| !token.is_empty() && token.chars().all(char::is_alphanumeric))
                .collect(),
        }
    }

    pub fn without_punctuation(self) -> Self {
        Self {
            tokens: self
                .tokens
                .into_iter()
                .filter(|token| !PUNCTUATION.contains(token.as_str()))
                .collect(),
        }
    }

    pub fn stop_words(self, stops: &StopwordSet) -> Self {
        Self {
            tokens: self
                .tokens
                .into_iter()
                .filter(|token| !stops.contains(token))
                .collect(),
        }
    }

    pub fn stemmed(self, stemmer: &TokenStemmer) -> Self {
        Self {
            tokens: self
                .tokens
                .iter()
                .map(|token| stemmer.stem(token))
                .collect(),
        }
    }

    pub fn join(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Deterministic text normalizer. Immutable once built; safe to share
/// across threads.
#[derive(Debug)]
pub struct Normalizer {
    tokenizer: WordTokenizer,
    stopwords: StopwordSet,
    stemmer: TokenStemmer,
}

impl Normalizer {
    /// Build the English normalizer with the pinned stopwords and stemmer.
    pub fn english() -> Result<Self, NormalizeError> {
        Ok(Self {
            tokenizer: WordTokenizer::new()?,
            stopwords: StopwordSet::english()?,
            stemmer: TokenStemmer::english(),
        })
    }

    pub fn profile(&self) -> NormalizerProfile {
        NormalizerProfile {
            stemmer: STEMMER_ID,
            stopwords: STOPWORDS_ID,
        }
    }

    /// Surviving stems of `text`, in order.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let tokenized = TokenizedText {
            tokens: self.tokenizer.tokenize(&lowered),
        };
        let raw_count = tokenized.tokens.len();

        let stems = tokenized
            .alphanumeric()
            .without_punctuation()
            .stop_words(&self.stopwords)
            .stemmed(&self.stemmer);

        trace!(raw_count, kept = stems.tokens.len(), "normalized message");
        stems.tokens
    }

    /// Canonical space-joined form of `text`.
    pub fn normalize(&self, text: &str) -> String {
        self.tokens(text).join(" ")
    }
}
