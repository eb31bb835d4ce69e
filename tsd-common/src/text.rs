//! Post text cleaning and word counting

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static MENTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\w+").expect("static pattern"));
static HASHTAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\w+").expect("static pattern"));
static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"http\S+").expect("static pattern"));
static DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("static pattern"));
static PUNCT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").expect("static pattern"));

/// Normalise post text for word statistics
///
/// Lower-cases, then strips mentions, hashtags, URLs, digits and punctuation
/// (in that order) and collapses whitespace runs to single spaces.
///
/// # Examples
/// ```
/// use tsd_common::text::clean_text;
///
/// assert_eq!(
///     clean_text("Loving it @bob #Rust http://x.io 100%!"),
///     "loving it"
/// );
/// ```
pub fn clean_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let s = MENTION_RE.replace_all(&lowered, "");
    let s = HASHTAG_RE.replace_all(&s, "");
    let s = URL_RE.replace_all(&s, "");
    let s = DIGITS_RE.replace_all(&s, "");
    let s = PUNCT_RE.replace_all(&s, "");
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Number of whitespace-separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Word frequency accumulator
#[derive(Debug, Default, Clone)]
pub struct WordCounter {
    counts: HashMap<String, u64>,
}

impl WordCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every whitespace-separated word in `text`
    pub fn add(&mut self, text: &str) {
        for word in text.split_whitespace() {
            *self.counts.entry(word.to_string()).or_insert(0) += 1;
        }
    }

    pub fn unique(&self) -> usize {
        self.counts.len()
    }

    /// The `n` most frequent words; ties broken alphabetically
    pub fn most_common(&self, n: usize) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|(w, c)| (w.clone(), *c))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(n);
        entries
    }
}
