//! Dataset loading and derived per-post fields
//!
//! The dashboard reads one CSV of posts at startup with columns
//! `Tweet_ID, Username, Text, Retweets, Likes, Timestamp` and scores every row
//! once. The resulting [`Dataset`] is immutable and shared by all requests.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::Path;
use tracing::{debug, info};

use crate::sentiment::{SentimentClass, SentimentOracle};
use crate::text::{clean_text, word_count};
use crate::{Error, Result};

/// Timestamp layout used by the dataset and by exports
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One CSV row
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Post {
    #[serde(rename = "Tweet_ID")]
    pub tweet_id: u64,

    #[serde(rename = "Username")]
    pub username: String,

    #[serde(rename = "Text", default)]
    pub text: String,

    #[serde(rename = "Retweets")]
    pub retweets: u64,

    #[serde(rename = "Likes")]
    pub likes: u64,

    #[serde(
        rename = "Timestamp",
        deserialize_with = "deserialize_timestamp",
        serialize_with = "serialize_timestamp"
    )]
    pub timestamp: NaiveDateTime,
}

/// Parse a dataset timestamp
///
/// Accepts `YYYY-MM-DD HH:MM:SS`, the same with a `T` separator, RFC 3339
/// (offset dropped, wall-clock time kept) and a bare `YYYY-MM-DD` (midnight).
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    if let Ok(ts) = NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT) {
        return Ok(ts);
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(ts);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Ok(ts.naive_local());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(ts) = date.and_hms_opt(0, 0, 0) {
            return Ok(ts);
        }
    }
    Err(Error::InvalidInput(format!("Unrecognised timestamp: {:?}", s)))
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> std::result::Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

fn serialize_timestamp<S>(ts: &NaiveDateTime, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&ts.format(TIMESTAMP_FORMAT).to_string())
}

/// Read posts from a CSV file
///
/// # Errors
/// - [`Error::NotFound`] if the file does not exist
/// - [`Error::Csv`] for unreadable or malformed rows (message carries the
///   record position)
pub fn load_posts(path: &Path) -> Result<Vec<Post>> {
    if !path.exists() {
        return Err(Error::NotFound(format!(
            "Dataset not found: {}",
            path.display()
        )));
    }

    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_path(path)?;
    read_posts(reader)
}

/// Read posts from any CSV source (headers required)
pub fn read_posts<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<Post>> {
    let mut posts = Vec::new();
    for record in reader.deserialize() {
        let post: Post = record?;
        posts.push(post);
    }
    debug!("Read {} posts", posts.len());
    Ok(posts)
}

/// A post with its derived fields
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedPost {
    pub post: Post,
    pub polarity: f64,
    pub subjectivity: f64,
    pub sentiment: SentimentClass,
    /// Lower-cased text without mentions, hashtags, URLs, digits, punctuation
    pub cleaned_text: String,
    /// Words in `cleaned_text`
    pub word_count: usize,
}

impl AnalyzedPost {
    pub fn new(post: Post, oracle: &dyn SentimentOracle) -> Self {
        let score = oracle.classify(&post.text);
        let cleaned_text = clean_text(&post.text);
        let word_count = word_count(&cleaned_text);
        Self {
            polarity: score.polarity,
            subjectivity: score.subjectivity,
            sentiment: score.class(),
            cleaned_text,
            word_count,
            post,
        }
    }

    /// Likes plus retweets
    pub fn engagement(&self) -> u64 {
        self.post.likes + self.post.retweets
    }
}

/// Scored, read-only post collection
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    posts: Vec<AnalyzedPost>,
}

impl Dataset {
    /// Score every post with `oracle`
    pub fn analyze(posts: Vec<Post>, oracle: &dyn SentimentOracle) -> Self {
        let posts = posts
            .into_iter()
            .map(|p| AnalyzedPost::new(p, oracle))
            .collect();
        Self { posts }
    }

    /// Load and score a CSV file
    pub fn load(path: &Path, oracle: &dyn SentimentOracle) -> Result<Self> {
        let posts = load_posts(path)?;
        let dataset = Self::analyze(posts, oracle);
        info!(
            "Loaded {} posts from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    pub fn posts(&self) -> &[AnalyzedPost] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LexiconOracle;

    const CSV: &str = "\
Tweet_ID,Username,Text,Retweets,Likes,Timestamp
1,alice,What a wonderful day,3,10,2023-01-30 11:00:51
2,bob,This is terrible,0,2,2023-02-01 08:15:00
3,alice,Meeting at noon,1,1,2023-02-03T22:05:00
";

    fn parse(csv_text: &str) -> Result<Vec<Post>> {
        read_posts(csv::Reader::from_reader(csv_text.as_bytes()))
    }

    #[test]
    fn test_read_posts() {
        let posts = parse(CSV).unwrap();
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].username, "alice");
        assert_eq!(posts[0].likes, 10);
        assert_eq!(posts[2].timestamp, parse_timestamp("2023-02-03 22:05:00").unwrap());
    }

    #[test]
    fn test_malformed_row_is_csv_error() {
        let bad = "Tweet_ID,Username,Text,Retweets,Likes,Timestamp\nx,bob,hi,0,0,2023-01-01 00:00:00\n";
        assert!(matches!(parse(bad), Err(Error::Csv(_))));
    }

    #[test]
    fn test_bad_timestamp_is_csv_error() {
        let bad = "Tweet_ID,Username,Text,Retweets,Likes,Timestamp\n1,bob,hi,0,0,yesterday\n";
        let err = parse(bad).unwrap_err();
        assert!(err.to_string().contains("Unrecognised timestamp"));
    }

    #[test]
    fn test_parse_timestamp_variants() {
        let expected = parse_timestamp("2023-05-01 00:00:00").unwrap();
        assert_eq!(parse_timestamp("2023-05-01").unwrap(), expected);
        assert_eq!(parse_timestamp("2023-05-01T00:00:00").unwrap(), expected);
        assert_eq!(parse_timestamp("2023-05-01T00:00:00+02:00").unwrap(), expected);
        assert!(parse_timestamp("05/01/2023").is_err());
    }

    #[test]
    fn test_analyze_derives_fields() {
        let dataset = Dataset::analyze(parse(CSV).unwrap(), &LexiconOracle::new());
        let posts = dataset.posts();
        assert_eq!(posts[0].sentiment, SentimentClass::Positive);
        assert_eq!(posts[1].sentiment, SentimentClass::Negative);
        assert_eq!(posts[2].sentiment, SentimentClass::Neutral);
        assert_eq!(posts[0].cleaned_text, "what a wonderful day");
        assert_eq!(posts[0].word_count, 4);
        assert_eq!(posts[0].engagement(), 13);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let result = load_posts(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(Error::NotFound(_))));
    }
}
