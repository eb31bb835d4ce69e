//! Sentiment scoring and classification
//!
//! The scorer itself is an oracle behind [`SentimentOracle`]: given text it
//! returns a polarity in `[-1, 1]` and a subjectivity in `[0, 1]`. Anything
//! satisfying that signature can be plugged in. [`LexiconOracle`] is the
//! bundled implementation.
//!
//! Classification is NOT the oracle's job. [`to_class`] maps a polarity to a
//! [`SentimentClass`] with fixed, exclusive thresholds and is used everywhere a
//! class is shown: analyzer input, rewritten text, and every dataset row.

mod lexicon;

pub use lexicon::LexiconOracle;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Polarity above this is Positive (exclusive)
pub const POSITIVE_THRESHOLD: f64 = 0.1;

/// Polarity below this is Negative (exclusive)
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Sentiment class derived from polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SentimentClass {
    Positive,
    Negative,
    Neutral,
}

impl SentimentClass {
    /// All classes in display order
    pub const ALL: [SentimentClass; 3] = [
        SentimentClass::Positive,
        SentimentClass::Negative,
        SentimentClass::Neutral,
    ];

    /// Classify a polarity score
    ///
    /// # Examples
    /// ```
    /// use tsd_common::SentimentClass;
    ///
    /// assert_eq!(SentimentClass::from_polarity(0.5), SentimentClass::Positive);
    /// assert_eq!(SentimentClass::from_polarity(0.1), SentimentClass::Neutral);
    /// assert_eq!(SentimentClass::from_polarity(-0.3), SentimentClass::Negative);
    /// ```
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > POSITIVE_THRESHOLD {
            SentimentClass::Positive
        } else if polarity < NEGATIVE_THRESHOLD {
            SentimentClass::Negative
        } else {
            SentimentClass::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentClass::Positive => "Positive",
            SentimentClass::Negative => "Negative",
            SentimentClass::Neutral => "Neutral",
        }
    }

    /// Parse a class name, case-insensitive
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Some(SentimentClass::Positive),
            "negative" => Some(SentimentClass::Negative),
            "neutral" => Some(SentimentClass::Neutral),
            _ => None,
        }
    }
}

impl fmt::Display for SentimentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shorthand for [`SentimentClass::from_polarity`]
pub fn to_class(polarity: f64) -> SentimentClass {
    SentimentClass::from_polarity(polarity)
}

/// Raw oracle output
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sentiment {
    /// Negative-to-positive score, `[-1, 1]`
    pub polarity: f64,
    /// Factual-to-opinion score, `[0, 1]`
    pub subjectivity: f64,
}

impl Sentiment {
    pub fn class(&self) -> SentimentClass {
        to_class(self.polarity)
    }
}

/// Text scorer consumed by the dashboard and the tone rewriter
///
/// Implementations must be deterministic, side-effect free, total over
/// Unicode input, and return polarity 0.0 for the empty string.
pub trait SentimentOracle: Send + Sync {
    fn classify(&self, text: &str) -> Sentiment;
}

/// Polarity, subjectivity and class of one text
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reading {
    pub polarity: f64,
    pub subjectivity: f64,
    pub class: SentimentClass,
}

impl From<Sentiment> for Reading {
    fn from(s: Sentiment) -> Self {
        Reading {
            polarity: s.polarity,
            subjectivity: s.subjectivity,
            class: s.class(),
        }
    }
}

/// Treat absent text as the empty string
pub fn normalize_input(text: Option<&str>) -> &str {
    text.unwrap_or("")
}

/// Score possibly-absent text; the oracle is never handed a missing value
pub fn read(oracle: &dyn SentimentOracle, text: Option<&str>) -> Reading {
    Reading::from(oracle.classify(normalize_input(text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_boundaries_are_exclusive() {
        assert_eq!(to_class(0.1), SentimentClass::Neutral);
        assert_eq!(to_class(0.1000001), SentimentClass::Positive);
        assert_eq!(to_class(-0.1), SentimentClass::Neutral);
        assert_eq!(to_class(-0.1000001), SentimentClass::Negative);
        assert_eq!(to_class(0.0), SentimentClass::Neutral);
    }

    #[test]
    fn test_class_extremes() {
        assert_eq!(to_class(1.0), SentimentClass::Positive);
        assert_eq!(to_class(-1.0), SentimentClass::Negative);
    }

    #[test]
    fn test_class_parse_and_display() {
        for class in SentimentClass::ALL {
            assert_eq!(SentimentClass::parse(class.as_str()), Some(class));
            assert_eq!(class.to_string(), class.as_str());
        }
        assert_eq!(SentimentClass::parse(" POSITIVE "), Some(SentimentClass::Positive));
        assert_eq!(SentimentClass::parse("happy"), None);
    }

    #[test]
    fn test_absent_text_reads_as_empty() {
        struct Recording;
        impl SentimentOracle for Recording {
            fn classify(&self, text: &str) -> Sentiment {
                assert_eq!(text, "");
                Sentiment::default()
            }
        }

        let reading = read(&Recording, None);
        assert_eq!(reading.polarity, 0.0);
        assert_eq!(reading.class, SentimentClass::Neutral);
    }
}
