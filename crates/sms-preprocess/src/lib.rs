//! Text preprocessing for SMS spam classification
//!
//! Turns a raw message into the canonical, space-joined stem sequence the
//! TF-IDF vocabulary was fit against, and reads labelled message
//! collections for offline evaluation.

pub mod dataset;
pub mod error;
pub mod normalizer;
pub mod stemmer;
pub mod stoplist;
pub mod tokenizer;

pub use dataset::{Label, RawData, RawDataset};
pub use error::{DatasetError, NormalizeError, ParseLabelError};
pub use normalizer::{Normalizer, NormalizerProfile, TokenizedText};
pub use stemmer::{TokenStemmer, STEMMER_ID};
pub use stoplist::{StopwordSet, STOPWORDS_ID};
pub use tokenizer::WordTokenizer;
