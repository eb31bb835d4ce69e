//! Rule-based tone rewriter
//!
//! Shifts a text toward a target sentiment by lexical substitution and a
//! framing prefix, then (optionally) re-scores the result.
//!
//! # Rewrite steps
//!
//! 1. [`TargetTone::KeepCurrent`] returns the input untouched.
//! 2. The text is lower-cased. Case is not restored afterwards.
//! 3. The target's substitutions are applied longest key first, each as a
//!    literal replace-all over the string produced by the previous step.
//!    A shorter key may therefore match text that a longer key's
//!    replacement introduced.
//! 4. A framing template is chosen from a SHA-256 of the original text and
//!    prepended.
//! 5. The first character of the result is upper-cased.
//!
//! The rewrite is total over all strings and is not idempotent: a second
//! pass adds a second prefix.
//!
//! # Example
//! ```
//! use tsd_common::{TargetTone, ToneRewriter};
//!
//! let rewriter = ToneRewriter::new();
//! let out = rewriter.rewrite("This is a bad and terrible day", TargetTone::Positive);
//! assert!(out.contains("good"));
//! assert!(out.contains("wonderful"));
//! ```

pub mod framing;
pub mod tables;

pub use tables::{ToneTable, ToneTables};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::sentiment::{read, Reading, SentimentClass, SentimentOracle};
use crate::Error;

/// Requested tone for a rewrite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TargetTone {
    KeepCurrent,
    Positive,
    Negative,
    Neutral,
}

impl TargetTone {
    /// Target class, `None` for `KeepCurrent`
    pub fn class(&self) -> Option<SentimentClass> {
        match self {
            TargetTone::KeepCurrent => None,
            TargetTone::Positive => Some(SentimentClass::Positive),
            TargetTone::Negative => Some(SentimentClass::Negative),
            TargetTone::Neutral => Some(SentimentClass::Neutral),
        }
    }

    /// Canonical selector name
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetTone::KeepCurrent => "KeepCurrent",
            TargetTone::Positive => "MakePositive",
            TargetTone::Negative => "MakeNegative",
            TargetTone::Neutral => "MakeNeutral",
        }
    }
}

impl From<SentimentClass> for TargetTone {
    fn from(class: SentimentClass) -> Self {
        match class {
            SentimentClass::Positive => TargetTone::Positive,
            SentimentClass::Negative => TargetTone::Negative,
            SentimentClass::Neutral => TargetTone::Neutral,
        }
    }
}

impl fmt::Display for TargetTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetTone {
    type Err = Error;

    /// Accepts `KeepCurrent`, `Make Positive`, `make-negative`, `neutral`, ...
    /// (case-insensitive; spaces, `-` and `_` are ignored)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "keepcurrent" | "keep" => Ok(TargetTone::KeepCurrent),
            "makepositive" | "positive" => Ok(TargetTone::Positive),
            "makenegative" | "negative" => Ok(TargetTone::Negative),
            "makeneutral" | "neutral" => Ok(TargetTone::Neutral),
            _ => Err(Error::UnknownTone(s.to_string())),
        }
    }
}

impl TryFrom<String> for TargetTone {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TargetTone> for String {
    fn from(tone: TargetTone) -> Self {
        tone.as_str().to_string()
    }
}

/// Before/after readings for one rewrite
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RewriteReport {
    pub target: TargetTone,
    pub original_text: String,
    pub rewritten_text: String,
    pub original: Reading,
    pub rewritten: Reading,
    /// Whether the oracle now places the text in the requested class
    /// (`None` for `KeepCurrent`)
    pub reached_target: Option<bool>,
}

/// Applies the per-tone tables to text
///
/// Immutable after construction; share it behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct ToneRewriter {
    tables: ToneTables,
}

impl ToneRewriter {
    /// Rewriter over the built-in tables
    pub fn new() -> Self {
        Self::with_tables(ToneTables::builtin())
    }

    pub fn with_tables(tables: ToneTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &ToneTables {
        &self.tables
    }

    /// Rewrite `text` toward `target`
    pub fn rewrite(&self, text: &str, target: TargetTone) -> String {
        let Some(class) = target.class() else {
            return text.to_string();
        };
        let table = self.tables.get(class);

        let mut body = text.to_lowercase();
        let mut applied = 0usize;
        for (key, replacement) in table.substitutions() {
            if body.contains(key.as_str()) {
                body = body.replace(key.as_str(), replacement);
                applied += 1;
            }
        }

        let framing = framing::select(text, table.framings());
        debug!(
            "Rewrote text toward {} ({} substitution keys matched)",
            class, applied
        );

        framing::capitalize_first(&format!("{}{}", framing, body))
    }

    /// Rewrite, then score both texts with `oracle`
    ///
    /// The readings are informational; they never influence the rewrite.
    pub fn report(
        &self,
        oracle: &dyn SentimentOracle,
        text: &str,
        target: TargetTone,
    ) -> RewriteReport {
        let rewritten_text = self.rewrite(text, target);
        let original = read(oracle, Some(text));
        let rewritten = read(oracle, Some(&rewritten_text));

        RewriteReport {
            target,
            original_text: text.to_string(),
            reached_target: target.class().map(|c| c == rewritten.class),
            rewritten_text,
            original,
            rewritten,
        }
    }
}
