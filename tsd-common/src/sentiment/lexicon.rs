//! Lexicon-based sentiment oracle
//!
//! Scores text by averaging per-word polarity and subjectivity over the
//! words found in a fixed lexicon. Two modifiers are recognised:
//! - Intensifiers ("very", "extremely", ...) scale the next word's scores
//! - Negations ("not", "never", "...n't") flip and halve the polarity of the
//!   next lexicon word within a short window
//!
//! Words outside the lexicon carry no opinion and do not dilute the average.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use super::{Sentiment, SentimentOracle};

/// Polarity factor applied to a negated word
const NEGATION_FACTOR: f64 = -0.5;

/// Tokens a negation stays pending for before it lapses
const NEGATION_WINDOW: u8 = 3;

static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{N}]+(?:'[\p{L}]+)?").expect("static word pattern"));

/// (word, polarity, subjectivity)
const WORDS: &[(&str, f64, f64)] = &[
    // Strongly positive
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("best", 1.0, 0.3),
    ("brilliant", 0.9, 1.0),
    ("delighted", 0.7, 0.7),
    ("excellent", 1.0, 1.0),
    ("fantastic", 0.4, 0.9),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("perfect", 1.0, 1.0),
    ("superb", 1.0, 1.0),
    ("thrilled", 0.6, 0.8),
    ("wonderful", 1.0, 1.0),
    // Moderately positive
    ("beautiful", 0.85, 1.0),
    ("excited", 0.4, 0.75),
    ("glad", 0.5, 1.0),
    ("good", 0.7, 0.6),
    ("grateful", 0.5, 0.7),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("lovely", 0.5, 0.75),
    ("nice", 0.6, 1.0),
    ("pleasant", 0.73, 0.97),
    ("pleased", 0.5, 1.0),
    ("succeed", 0.4, 0.6),
    ("success", 0.3, 0.5),
    ("win", 0.8, 0.4),
    // Mildly positive
    ("acceptable", 0.3, 0.5),
    ("always", 0.15, 0.3),
    ("challenging", 0.2, 0.45),
    ("fine", 0.42, 0.5),
    ("interesting", 0.5, 0.5),
    ("notable", 0.2, 0.6),
    ("okay", 0.5, 0.5),
    ("opportunity", 0.25, 0.4),
    ("possible", 0.1, 0.5),
    ("prefer", 0.15, 0.4),
    ("right", 0.29, 0.54),
    ("useful", 0.3, 0.2),
    // Mildly negative
    ("dislike", -0.3, 0.6),
    ("flawed", -0.35, 0.6),
    ("inadequate", -0.3, 0.5),
    ("lack", -0.2, 0.3),
    ("mediocre", -0.35, 0.6),
    ("missing", -0.2, 0.05),
    ("poor", -0.4, 0.6),
    ("problem", -0.25, 0.4),
    ("unattractive", -0.4, 0.8),
    // Moderately negative
    ("angry", -0.5, 1.0),
    ("bad", -0.7, 0.67),
    ("difficult", -0.5, 1.0),
    ("disappointed", -0.75, 0.75),
    ("disappointing", -0.6, 0.7),
    ("fail", -0.5, 0.3),
    ("failed", -0.5, 0.3),
    ("frustrated", -0.7, 0.4),
    ("sad", -0.5, 1.0),
    ("sadly", -0.5, 1.0),
    ("ugly", -0.7, 1.0),
    ("unfortunately", -0.5, 1.0),
    ("unhappy", -0.6, 0.9),
    ("wrong", -0.5, 0.9),
    // Strongly negative
    ("awful", -1.0, 1.0),
    ("dreadful", -1.0, 1.0),
    ("hate", -0.8, 0.9),
    ("horrible", -1.0, 1.0),
    ("impossible", -0.67, 1.0),
    ("terrible", -1.0, 1.0),
    ("worst", -1.0, 1.0),
];

/// (word, multiplier)
const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.4),
    ("barely", 0.4),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("quite", 1.1),
    ("really", 1.3),
    ("slightly", 0.5),
    ("so", 1.3),
    ("somewhat", 0.7),
    ("totally", 1.3),
    ("very", 1.3),
];

const NEGATIONS: &[&str] = &["cannot", "hardly", "never", "no", "nor", "not", "nothing"];

static DEFAULT_WORDS: Lazy<HashMap<String, (f64, f64)>> = Lazy::new(|| {
    WORDS
        .iter()
        .map(|(w, p, s)| (w.to_string(), (*p, *s)))
        .collect()
});

/// Bundled [`SentimentOracle`] backed by a word lexicon
#[derive(Debug, Clone)]
pub struct LexiconOracle {
    words: HashMap<String, (f64, f64)>,
}

impl LexiconOracle {
    pub fn new() -> Self {
        Self {
            words: DEFAULT_WORDS.clone(),
        }
    }

    /// Add or replace a lexicon entry (word is lower-cased)
    pub fn with_entry(mut self, word: &str, polarity: f64, subjectivity: f64) -> Self {
        self.words.insert(
            word.to_lowercase(),
            (polarity.clamp(-1.0, 1.0), subjectivity.clamp(0.0, 1.0)),
        );
        self
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for LexiconOracle {
    fn default() -> Self {
        Self::new()
    }
}

fn intensifier(word: &str) -> Option<f64> {
    INTENSIFIERS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, factor)| *factor)
}

fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.ends_with("n't")
}

impl SentimentOracle for LexiconOracle {
    fn classify(&self, text: &str) -> Sentiment {
        let lowered = text.to_lowercase();

        let mut assessed: Vec<(f64, f64)> = Vec::new();
        let mut multiplier: Option<f64> = None;
        let mut negation_left: u8 = 0;

        for token in WORD_RE.find_iter(&lowered) {
            let word = token.as_str();

            if is_negation(word) {
                negation_left = NEGATION_WINDOW;
                multiplier = None;
                continue;
            }

            if let Some(factor) = intensifier(word) {
                multiplier = Some(multiplier.unwrap_or(1.0) * factor);
                continue;
            }

            match self.words.get(word) {
                Some(&(polarity, subjectivity)) => {
                    let m = multiplier.take().unwrap_or(1.0);
                    let mut p = polarity * m;
                    if negation_left > 0 {
                        p *= NEGATION_FACTOR;
                        negation_left = 0;
                    }
                    assessed.push((p.clamp(-1.0, 1.0), (subjectivity * m).clamp(0.0, 1.0)));
                }
                None => {
                    // Intensifiers only reach the word directly after them
                    multiplier = None;
                    negation_left = negation_left.saturating_sub(1);
                }
            }
        }

        if assessed.is_empty() {
            return Sentiment::default();
        }

        let n = assessed.len() as f64;
        let polarity = assessed.iter().map(|(p, _)| p).sum::<f64>() / n;
        let subjectivity = assessed.iter().map(|(_, s)| s).sum::<f64>() / n;

        Sentiment {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::SentimentClass;

    fn score(text: &str) -> Sentiment {
        LexiconOracle::new().classify(text)
    }

    #[test]
    fn test_empty_text_scores_zero() {
        let s = score("");
        assert_eq!(s.polarity, 0.0);
        assert_eq!(s.subjectivity, 0.0);
    }

    #[test]
    fn test_unknown_words_score_zero() {
        let s = score("the meeting is at noon on tuesday");
        assert_eq!(s.polarity, 0.0);
        assert_eq!(s.class(), SentimentClass::Neutral);
    }

    #[test]
    fn test_positive_and_negative_words() {
        assert_eq!(score("What a wonderful day").class(), SentimentClass::Positive);
        assert_eq!(score("This is terrible").class(), SentimentClass::Negative);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(score("GREAT"), score("great"));
    }

    #[test]
    fn test_average_over_assessed_words() {
        // good (0.7) and bad (-0.7) cancel; filler words are ignored
        let s = score("good food, bad service");
        assert!(s.polarity.abs() < 1e-9);
    }

    #[test]
    fn test_intensifier_scales_next_word() {
        let plain = score("good").polarity;
        let boosted = score("very good").polarity;
        assert!((boosted - plain * 1.3).abs() < 1e-9);
    }

    #[test]
    fn test_intensifier_does_not_skip_words() {
        // "very" is followed by a non-lexicon word, so "good" is unscaled
        assert_eq!(score("very tasty good").polarity, score("good").polarity);
    }

    #[test]
    fn test_negation_flips_and_halves() {
        let s = score("not good");
        assert!((s.polarity - 0.7 * -0.5).abs() < 1e-9);
        assert_eq!(s.class(), SentimentClass::Negative);

        let s = score("I don't love it");
        assert!((s.polarity - 0.5 * -0.5).abs() < 1e-9);
    }

    #[test]
    fn test_negation_window_lapses() {
        let s = score("not a single thing was good");
        assert!(s.polarity > 0.0);
    }

    #[test]
    fn test_scores_are_clamped() {
        let s = score("absolutely extremely wonderful");
        assert!(s.polarity <= 1.0);
        assert!(s.subjectivity <= 1.0);
    }

    #[test]
    fn test_unicode_input_is_total() {
        let s = score("¡Qué día! 🌞 日本語 good");
        assert_eq!(s.class(), SentimentClass::Positive);
    }

    #[test]
    fn test_deterministic() {
        let text = "Really happy but slightly sad";
        assert_eq!(score(text), score(text));
    }

    #[test]
    fn test_custom_entry() {
        let oracle = LexiconOracle::new().with_entry("Rad", 0.9, 0.8);
        assert_eq!(oracle.classify("rad").class(), SentimentClass::Positive);
        assert_eq!(oracle.len(), LexiconOracle::new().len() + 1);
    }
}
