//! Dashboard aggregates over a scored [`Dataset`](crate::Dataset)
//!
//! Every function here is pure: it takes a slice of analyzed posts and
//! returns a serializable summary. Sorted outputs break ties
//! deterministically (by name, word or id) so repeated requests return
//! identical JSON.

pub mod engagement;
pub mod explorer;
pub mod overview;
pub mod sentiment;
pub mod temporal;
pub mod users;
pub mod words;

pub use engagement::{engagement_summary, EngagementSummary};
pub use explorer::{select, summarize, ExplorerFilter, ExplorerSort, SelectionSummary};
pub use overview::{overview, Overview};
pub use sentiment::{class_shares, sentiment_summary, ClassShare, SentimentSummary};
pub use temporal::{temporal_summary, TemporalSummary};
pub use users::{find_user, top_users, user_landscape, user_stats, UserSort, UserStats};
pub use words::{text_summary, TextSummary};

use serde::Serialize;

/// Descriptive statistics of one numeric column
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SummaryStats {
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation (n - 1); 0.0 below two values
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl SummaryStats {
    /// All zeros for an empty slice
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let n = values.len();
        let mean = values.iter().sum::<f64>() / n as f64;

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let median = if n % 2 == 1 {
            sorted[n / 2]
        } else {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        };

        let std_dev = if n > 1 {
            let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
            var.sqrt()
        } else {
            0.0
        };

        Self {
            mean,
            median,
            std_dev,
            min: sorted[0],
            max: sorted[n - 1],
        }
    }
}

/// Mean of `values`, 0.0 when empty
pub(crate) fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0;
    let mut n = 0usize;
    for v in values {
        sum += v;
        n += 1;
    }
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}

/// Round to two decimals
pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}


#[cfg(test)]
pub(crate) mod fixtures {
    //! Small scored dataset shared by the analytics tests

    use crate::dataset::{parse_timestamp, Post};
    use crate::{Dataset, LexiconOracle};

    pub fn post(id: u64, user: &str, text: &str, retweets: u64, likes: u64, ts: &str) -> Post {
        Post {
            tweet_id: id,
            username: user.to_string(),
            text: text.to_string(),
            retweets,
            likes,
            timestamp: parse_timestamp(ts).expect("fixture timestamp"),
        }
    }

    /// 2023-01-02 is a Monday
    pub fn dataset() -> Dataset {
        Dataset::analyze(
            vec![
                post(1, "alice", "What a wonderful day", 4, 40, "2023-01-02 09:00:00"),
                post(2, "bob", "This is terrible news", 1, 10, "2023-01-02 18:30:00"),
                post(3, "alice", "Meeting at noon today", 2, 20, "2023-01-03 12:00:00"),
                post(4, "carol", "I love this great team", 6, 60, "2023-02-10 09:45:00"),
                post(5, "bob", "Bad service, awful food", 0, 0, "2023-02-11 23:10:00"),
            ],
            &LexiconOracle::new(),
        )
    }
}
