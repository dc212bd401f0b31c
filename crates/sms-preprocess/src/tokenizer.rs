//! Treebank-style word tokenizer
//!
//! Splits text into sentences first, then runs each sentence through the
//! ordered Penn Treebank rewrite rules (quotes, punctuation, brackets,
//! dashes, contractions) and splits on whitespace. The granularity matters:
//! `$1000` becomes `$` `1000`, `don't` becomes `do` `n't`, and a period only
//! separates from its word at the end of a sentence.

use std::collections::HashSet;

use regex::{Captures, Regex};

use crate::error::NormalizeError;

/// Abbreviations that do not end a sentence when followed by a period.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "e.g", "i.e", "u.s", "u.k",
    "a.m", "p.m", "inc", "ltd", "co", "corp", "jan", "feb", "mar", "apr", "jun", "jul", "aug",
    "sep", "sept", "oct", "nov", "dec",
];

/// Characters that may trail sentence-final punctuation.
const CLOSERS: &[char] = &['"', '\'', ')', ']', '}', '»', '”', '’'];

/// A compiled rewrite rule: pattern and replacement template.
#[derive(Debug)]
struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(pattern: &str, replacement: &'static str) -> Result<Self, NormalizeError> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            replacement,
        })
    }

    fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, self.replacement)
            .into_owned()
    }
}

fn compile(rules: &[(&str, &'static str)]) -> Result<Vec<Rule>, NormalizeError> {
    rules
        .iter()
        .map(|(pattern, replacement)| Rule::new(pattern, replacement))
        .collect()
}

/// Word tokenizer with the standard Treebank granularity.
#[derive(Debug)]
pub struct WordTokenizer {
    starting_quotes: Vec<Rule>,
    lone_quote: Regex,
    punctuation: Vec<Rule>,
    brackets: Rule,
    double_dashes: Rule,
    ending_quotes: Vec<Rule>,
    contractions: Vec<Rule>,
    sentence_chunks: Regex,
    abbreviations: HashSet<&'static str>,
}

impl WordTokenizer {
    pub fn new() -> Result<Self, NormalizeError> {
        let starting_quotes = compile(&[
            (r"([«“‘„]|[`]+)", " ${1} "),
            (r#"^""#, "``"),
            (r"(``)", " ${1} "),
            (r#"([ (\[{<])("|'{2})"#, "${1} `` "),
        ])?;

        let punctuation = compile(&[
            (r#"([^\.])(\.)([\]\)}>"'»”’ ]*)\s*$"#, "${1} ${2} ${3} "),
            (r"([:,])([^\d])", " ${1} ${2}"),
            (r"([:,])$", " ${1} "),
            (r"\.{2,}", " ${0} "),
            (r"[;@#$%&]", " ${0} "),
            (r#"([^\.])(\.)([\]\)}>"']*)\s*$"#, "${1} ${2}${3} "),
            (r"[?!]", " ${0} "),
            (r"([^'])' ", "${1} ' "),
            (r"[*]", " ${0} "),
        ])?;

        let ending_quotes = compile(&[
            (r"([»”’])", " ${1} "),
            (r"''", " '' "),
            (r#"""#, " '' "),
            (r"([^' ])('[sS]|'[mM]|'[dD]|') ", "${1} ${2} "),
            (r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "${1} ${2} "),
        ])?;

        let contractions = compile(&[
            (r"(?i)\b(can)(not)\b", " ${1} ${2} "),
            (r"(?i)\b(d)('ye)\b", " ${1} ${2} "),
            (r"(?i)\b(gim)(me)\b", " ${1} ${2} "),
            (r"(?i)\b(gon)(na)\b", " ${1} ${2} "),
            (r"(?i)\b(got)(ta)\b", " ${1} ${2} "),
            (r"(?i)\b(lem)(me)\b", " ${1} ${2} "),
            (r"(?i)\b(more)('n)\b", " ${1} ${2} "),
            (r"(?i)\b(wan)(na)(\s)", " ${1} ${2} ${3}"),
            (r"(?i) ('t)(is)\b", " ${1} ${2} "),
            (r"(?i) ('t)(was)\b", " ${1} ${2} "),
        ])?;

        Ok(Self {
            starting_quotes,
            lone_quote: Regex::new(r"'(\w)\b")?,
            punctuation,
            brackets: Rule::new(r"[\]\[\(\)\{\}<>]", " ${0} ")?,
            double_dashes: Rule::new(r"--", " -- ")?,
            ending_quotes,
            contractions,
            sentence_chunks: Regex::new(r"\S+")?,
            abbreviations: ABBREVIATIONS.iter().copied().collect(),
        })
    }

    /// Tokenize `text` into words and punctuation tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.sentences(text)
            .into_iter()
            .flat_map(|sentence| self.tokenize_sentence(sentence))
            .collect()
    }

    /// Split `text` into sentences on `.`, `?` and `!` followed by whitespace.
    pub fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let chunks: Vec<_> = self.sentence_chunks.find_iter(text).collect();
        let mut sentences = Vec::new();
        let mut start = match chunks.first() {
            Some(chunk) => chunk.start(),
            None => return sentences,
        };

        for pair in chunks.windows(2) {
            if self.ends_sentence(pair[0].as_str()) {
                sentences.push(&text[start..pair[0].end()]);
                start = pair[1].start();
            }
        }
        let rest = text[start..].trim_end();
        if !rest.is_empty() {
            sentences.push(rest);
        }
        sentences
    }

    fn ends_sentence(&self, chunk: &str) -> bool {
        let chunk = chunk.trim_end_matches(CLOSERS);
        if chunk.ends_with(['?', '!']) {
            return true;
        }
        let Some(word) = chunk.strip_suffix('.') else {
            return false;
        };
        // ellipsis
        if word.ends_with('.') {
            return false;
        }
        let word = word.trim_start_matches(|c: char| !c.is_alphanumeric());
        if self.abbreviations.contains(word) {
            return false;
        }
        // a number before a lowercase word does not close the sentence
        if word.starts_with(|c: char| c.is_ascii_digit())
            && word.chars().all(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-'))
        {
            return false;
        }
        let mut chars = word.chars();
        !matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
    }

    fn tokenize_sentence(&self, sentence: &str) -> Vec<String> {
        let mut text = sentence.trim().to_string();

        for rule in &self.starting_quotes {
            text = rule.apply(&text);
        }
        text = self
            .lone_quote
            .replace_all(&text, |caps: &Captures| {
                let next = &caps[1];
                if matches!(next.to_ascii_lowercase().as_str(), "m" | "t" | "s" | "d" | "n") {
                    caps[0].to_string()
                } else {
                    format!("' {}", next)
                }
            })
            .into_owned();

        for rule in &self.punctuation {
            text = rule.apply(&text);
        }
        text = self.brackets.apply(&text);
        text = self.double_dashes.apply(&text);

        let mut text = format!(" {} ", text);
        for rule in self.ending_quotes.iter().chain(&self.contractions) {
            text = rule.apply(&text);
        }

        text.split_whitespace().map(ToString::to_string).collect()
    }
}
