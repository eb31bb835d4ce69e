//! Substitution tables and framing templates
//!
//! One [`ToneTable`] per target class. Tables are built once (built-in
//! defaults or a TOML file named in the config) and are read-only afterwards.
//! Substitutions are stored sorted by descending key length so the rewriter
//! can apply them front to back.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::sentiment::SentimentClass;
use crate::{Error, Result};

const POSITIVE_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("bad", "good"),
    ("terrible", "wonderful"),
    ("awful", "amazing"),
    ("hate", "love"),
    ("worst", "best"),
    ("problem", "opportunity"),
    ("fail", "succeed"),
    ("wrong", "right"),
    ("difficult", "challenging"),
    ("impossible", "possible"),
    ("never", "always"),
    ("lack", "have"),
    ("missing", "includes"),
    ("sad", "happy"),
    ("disappointed", "pleased"),
    // Negated forms are replaced whole; otherwise "not bad" would become
    // "not good" once the shorter key fires.
    ("not good", "good"),
    ("not happy", "happy"),
    ("not bad", "good"),
    ("not sad", "happy"),
    ("not wrong", "right"),
];

const NEGATIVE_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("good", "mediocre"),
    ("great", "disappointing"),
    ("love", "dislike"),
    ("best", "worst"),
    ("wonderful", "terrible"),
    ("amazing", "dreadful"),
    ("excellent", "poor"),
    ("perfect", "flawed"),
    ("happy", "unhappy"),
    ("very good", "mediocre"),
];

const NEUTRAL_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("love", "prefer"),
    ("hate", "dislike"),
    ("amazing", "notable"),
    ("terrible", "inadequate"),
    ("wonderful", "good"),
    ("awful", "poor"),
    ("beautiful", "pleasant"),
    ("ugly", "unattractive"),
    ("really love", "prefer"),
];

const POSITIVE_FRAMINGS: &[&str] = &[
    "Thrilled to share: ",
    "Great news: ",
    "Feeling grateful: ",
    "So happy to say: ",
];

const NEGATIVE_FRAMINGS: &[&str] = &[
    "Sadly, ",
    "Unfortunately, ",
    "Frustrated to report: ",
    "Disappointed to say: ",
];

const NEUTRAL_FRAMINGS: &[&str] = &[
    "For the record: ",
    "Update: ",
    "Noting that ",
    "In summary: ",
];

static BUILTIN: Lazy<ToneTables> = Lazy::new(|| ToneTables {
    positive: ToneTable::from_static(POSITIVE_SUBSTITUTIONS, POSITIVE_FRAMINGS),
    negative: ToneTable::from_static(NEGATIVE_SUBSTITUTIONS, NEGATIVE_FRAMINGS),
    neutral: ToneTable::from_static(NEUTRAL_SUBSTITUTIONS, NEUTRAL_FRAMINGS),
});

/// Substitutions and framing templates for one target class
#[derive(Debug, Clone, PartialEq)]
pub struct ToneTable {
    substitutions: Vec<(String, String)>,
    framings: Vec<String>,
}

impl ToneTable {
    /// Build a table, lower-casing keys and sorting them longest first
    ///
    /// Keys of equal length keep their given order. Empty keys are dropped.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if `framings` is empty.
    pub fn new<K, V, F>(
        substitutions: impl IntoIterator<Item = (K, V)>,
        framings: impl IntoIterator<Item = F>,
    ) -> Result<Self>
    where
        K: Into<String>,
        V: Into<String>,
        F: Into<String>,
    {
        let mut substitutions: Vec<(String, String)> = substitutions
            .into_iter()
            .map(|(k, v)| (k.into().to_lowercase(), v.into()))
            .filter(|(k, _)| !k.is_empty())
            .collect();
        // sort_by is stable: ties stay in declaration order
        substitutions.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        let framings: Vec<String> = framings.into_iter().map(Into::into).collect();
        if framings.is_empty() {
            return Err(Error::Config(
                "tone table needs at least one framing template".to_string(),
            ));
        }

        Ok(Self {
            substitutions,
            framings,
        })
    }

    fn from_static(substitutions: &[(&str, &str)], framings: &[&str]) -> Self {
        Self::new(substitutions.iter().copied(), framings.iter().copied())
            .unwrap_or_else(|_| unreachable!("built-in tables carry framings"))
    }

    /// Substitutions in application order (longest key first)
    pub fn substitutions(&self) -> &[(String, String)] {
        &self.substitutions
    }

    /// Framing templates in declaration order (never empty)
    pub fn framings(&self) -> &[String] {
        &self.framings
    }
}

/// The three per-class tables
#[derive(Debug, Clone, PartialEq)]
pub struct ToneTables {
    pub positive: ToneTable,
    pub negative: ToneTable,
    pub neutral: ToneTable,
}

impl ToneTables {
    /// Built-in tables
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    pub fn get(&self, class: SentimentClass) -> &ToneTable {
        match class {
            SentimentClass::Positive => &self.positive,
            SentimentClass::Negative => &self.negative,
            SentimentClass::Neutral => &self.neutral,
        }
    }

    /// Parse tables from TOML
    ///
    /// ```toml
    /// [positive]
    /// framings = ["Great news: "]
    /// [positive.substitutions]
    /// bad = "good"
    /// ```
    ///
    /// A section that is absent falls back to the built-in table for that
    /// class. TOML maps are unordered, so equal-length keys are applied in
    /// alphabetical order.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: TablesFile = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse tone tables: {}", e)))?;

        let builtin = Self::builtin();
        Ok(Self {
            positive: section_or(file.positive, builtin.positive)?,
            negative: section_or(file.negative, builtin.negative)?,
            neutral: section_or(file.neutral, builtin.neutral)?,
        })
    }

    /// Load tables from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read tone tables {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }
}

impl Default for ToneTables {
    fn default() -> Self {
        Self::builtin()
    }
}

#[derive(Debug, Deserialize)]
struct TablesFile {
    positive: Option<TableSection>,
    negative: Option<TableSection>,
    neutral: Option<TableSection>,
}

#[derive(Debug, Deserialize)]
struct TableSection {
    #[serde(default)]
    substitutions: BTreeMap<String, String>,
    framings: Vec<String>,
}

fn section_or(section: Option<TableSection>, fallback: ToneTable) -> Result<ToneTable> {
    match section {
        Some(s) => ToneTable::new(s.substitutions, s.framings),
        None => Ok(fallback),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sorted_longest_first() {
        let tables = ToneTables::builtin();
        for class in SentimentClass::ALL {
            let subs = tables.get(class).substitutions();
            assert!(!subs.is_empty());
            for pair in subs.windows(2) {
                assert!(pair[0].0.len() >= pair[1].0.len(), "{:?} not sorted", class);
            }
        }
    }

    #[test]
    fn test_builtin_keys_are_lowercase() {
        let tables = ToneTables::builtin();
        for class in SentimentClass::ALL {
            for (key, _) in tables.get(class).substitutions() {
                assert_eq!(key, &key.to_lowercase());
            }
        }
    }

    #[test]
    fn test_builtin_framings_capitalized_at_start_only() {
        let tables = ToneTables::builtin();
        for class in SentimentClass::ALL {
            let framings = tables.get(class).framings();
            assert!(!framings.is_empty());
            for framing in framings {
                let mut chars = framing.chars();
                assert!(chars.next().map_or(false, char::is_uppercase), "{}", framing);
                assert!(chars.all(|c| !c.is_uppercase()), "{}", framing);
            }
        }
    }

    #[test]
    fn test_builtin_replacements_contain_no_later_key() {
        let tables = ToneTables::builtin();
        for class in SentimentClass::ALL {
            let subs = tables.get(class).substitutions();
            for (i, (key, replacement)) in subs.iter().enumerate() {
                for (later, _) in &subs[i + 1..] {
                    assert!(
                        !replacement.contains(later.as_str()),
                        "{:?}: {:?} -> {:?} is rewritten again by {:?}",
                        class,
                        key,
                        replacement,
                        later
                    );
                }
            }
        }
    }

    #[test]
    fn test_equal_length_keeps_declaration_order() {
        let table = ToneTable::new([("bb", "1"), ("aa", "2"), ("ccc", "3")], ["x "]).unwrap();
        let keys: Vec<&str> = table.substitutions().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["ccc", "bb", "aa"]);
    }

    #[test]
    fn test_keys_lowercased_and_empty_dropped() {
        let table = ToneTable::new([("BAD", "good"), ("", "x")], ["x "]).unwrap();
        assert_eq!(table.substitutions(), &[("bad".to_string(), "good".to_string())]);
    }

    #[test]
    fn test_empty_framings_rejected() {
        let result = ToneTable::new([("bad", "good")], Vec::<String>::new());
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_from_toml_overrides_one_section() {
        let tables = ToneTables::from_toml_str(
            r#"
            [positive]
            framings = ["Yay: "]

            [positive.substitutions]
            meh = "fine"
            "not great" = "great"
            "#,
        )
        .unwrap();

        assert_eq!(tables.positive.framings(), &["Yay: ".to_string()]);
        assert_eq!(tables.positive.substitutions()[0].0, "not great");
        assert_eq!(tables.negative, ToneTables::builtin().negative);
    }

    #[test]
    fn test_from_toml_empty_framings_is_config_error() {
        let result = ToneTables::from_toml_str("[neutral]\nframings = []\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_from_toml_malformed() {
        assert!(matches!(
            ToneTables::from_toml_str("[positive\n"),
            Err(Error::Config(_))
        ));
    }
}
