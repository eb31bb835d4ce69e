//! CSV and JSON export of explorer selections

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::dataset::TIMESTAMP_FORMAT;
use crate::{AnalyzedPost, Error, Result, SentimentClass};

/// Download format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }

    /// Suggested download file name
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "twitter_data_filtered.csv",
            ExportFormat::Json => "twitter_data_filtered.json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        })
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(Error::InvalidInput(format!(
                "Unsupported export format: {}",
                other
            ))),
        }
    }
}

/// One exported record: dataset columns plus the derived scores
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    #[serde(rename = "Tweet_ID")]
    pub tweet_id: u64,
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Text")]
    pub text: String,
    #[serde(rename = "Retweets")]
    pub retweets: u64,
    #[serde(rename = "Likes")]
    pub likes: u64,
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Sentiment")]
    pub sentiment: SentimentClass,
    #[serde(rename = "Polarity")]
    pub polarity: f64,
    #[serde(rename = "Subjectivity")]
    pub subjectivity: f64,
}

impl From<&AnalyzedPost> for ExportRow {
    fn from(p: &AnalyzedPost) -> Self {
        Self {
            tweet_id: p.post.tweet_id,
            username: p.post.username.clone(),
            text: p.post.text.clone(),
            retweets: p.post.retweets,
            likes: p.post.likes,
            timestamp: p.post.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            sentiment: p.sentiment,
            polarity: p.polarity,
            subjectivity: p.subjectivity,
        }
    }
}

/// CSV with a header row (header only for an empty selection)
pub fn to_csv(rows: &[&AnalyzedPost]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record([
        "Tweet_ID",
        "Username",
        "Text",
        "Retweets",
        "Likes",
        "Timestamp",
        "Sentiment",
        "Polarity",
        "Subjectivity",
    ])?;
    for row in rows {
        writer.serialize(ExportRow::from(*row))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Internal(format!("CSV writer flush failed: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| Error::Internal(format!("CSV output not UTF-8: {}", e)))
}

/// Pretty-printed JSON array of records
pub fn to_json(rows: &[&AnalyzedPost]) -> Result<String> {
    let records: Vec<ExportRow> = rows.iter().map(|p| ExportRow::from(*p)).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Render `rows` in `format`
pub fn render(rows: &[&AnalyzedPost], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Csv => to_csv(rows),
        ExportFormat::Json => to_json(rows),
    }
}
