//! Pinned suffix-stripping stemmer
//!
//! Porter's algorithm with the NLTK extensions applied on top: a pool of
//! irregular forms, the four-letter `-ies`/`-ied` rules, the stricter
//! `y -> i` rule and the extra step 2 suffixes (`fulli`, `logi`, `bli`).
//! The base algorithm never rewrites a word ending in `y` or in a vowel
//! followed by `i` after step 1, so those rules can be settled on the
//! stemmed output.

use std::fmt;

/// Identifier recorded in model artifacts for this stemmer.
pub const STEMMER_ID: &str = "porter";

const IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("sky", "sky"),
    ("skies", "sky"),
    ("dying", "die"),
    ("lying", "lie"),
    ("tying", "tie"),
    ("news", "news"),
    ("innings", "inning"),
    ("inning", "inning"),
    ("outings", "outing"),
    ("outing", "outing"),
    ("cannings", "canning"),
    ("canning", "canning"),
    ("howe", "howe"),
    ("proceed", "proceed"),
    ("exceed", "exceed"),
    ("succeed", "succeed"),
];

/// Step 2 rewrites the base algorithm lacks, as `(suffix, replacement)`.
const STEP2_EXTENSIONS: &[(&str, &str)] = &[("fulli", "ful"), ("logi", "log"), ("bli", "ble")];

/// Porter stemmer, NLTK flavour.
#[derive(Default)]
pub struct TokenStemmer;

impl TokenStemmer {
    pub fn english() -> Self {
        Self
    }

    pub fn stem(&self, word: &str) -> String {
        if word.chars().count() <= 2 {
            return word.to_string();
        }
        if let Some(&(_, stem)) = IRREGULAR_FORMS.iter().find(|(form, _)| *form == word) {
            return stem.to_string();
        }
        if word.len() == 4 && (word.ends_with("ies") || word.ends_with("ied")) {
            return word[..3].to_string();
        }

        let stemmed = porter_stemmer::stem(word);
        let stemmed = Self::step2_extensions(stemmed);
        Self::final_y(word, stemmed)
    }

    fn step2_extensions(stemmed: String) -> String {
        for (suffix, replacement) in STEP2_EXTENSIONS {
            if let Some(prefix) = stemmed.strip_suffix(suffix) {
                if measure(prefix) > 0 {
                    return porter_stemmer::stem(&format!("{}{}", prefix, replacement));
                }
            }
        }
        stemmed
    }

    /// `y -> i` only after a consonant, and only past two letters.
    fn final_y(word: &str, stemmed: String) -> String {
        let mut chars: Vec<char> = stemmed.chars().collect();
        let n = chars.len();
        if n < 2 {
            return stemmed;
        }
        let rewrites = n > 2 && is_consonant(&chars, n - 2);

        match chars[n - 1] {
            'i' if !rewrites && word.chars().nth(n - 1) == Some('y') => {
                let prefix: String = chars[..n - 1].iter().collect();
                if word.starts_with(&prefix) {
                    chars[n - 1] = 'y';
                }
            }
            'y' if rewrites => chars[n - 1] = 'i',
            _ => {}
        }
        chars.into_iter().collect()
    }
}

fn is_consonant(chars: &[char], i: usize) -> bool {
    match chars[i] {
        'a' | 'e' | 'i' | 'o' | 'u' => false,
        'y' if i > 0 => !is_consonant(chars, i - 1),
        _ => true,
    }
}

/// Number of vowel-consonant sequences in `stem`.
fn measure(stem: &str) -> usize {
    let chars: Vec<char> = stem.chars().collect();
    let mut m = 0;
    let mut previous_vowel = false;
    for i in 0..chars.len() {
        let consonant = is_consonant(&chars, i);
        if consonant && previous_vowel {
            m += 1;
        }
        previous_vowel = !consonant;
    }
    m
}

impl fmt::Debug for TokenStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenStemmer")
            .field("algorithm", &STEMMER_ID)
            .finish()
    }
}
