//! # TSD Common Library
//!
//! Shared code for the tweet sentiment dashboard:
//! - Sentiment scoring (oracle trait, bundled lexicon oracle, class thresholds)
//! - Tone rewriting (substitution tables, framing templates, round-trip report)
//! - Dataset loading and per-post derived fields
//! - Dashboard aggregates (overview, engagement, text, users, temporal, explorer)
//! - Export of filtered selections
//! - Configuration loading

pub mod analytics;
pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod sentiment;
pub mod text;
pub mod tone;

pub use dataset::{AnalyzedPost, Dataset, Post};
pub use error::{Error, Result};
pub use sentiment::{to_class, LexiconOracle, Sentiment, SentimentClass, SentimentOracle};
pub use tone::{RewriteReport, TargetTone, ToneRewriter};
