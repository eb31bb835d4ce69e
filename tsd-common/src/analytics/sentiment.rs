//! Class distribution and score statistics

use serde::Serialize;

use super::SummaryStats;
use crate::{AnalyzedPost, SentimentClass};

/// Count and share of one class
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassShare {
    pub class: SentimentClass,
    pub count: usize,
    /// Percent of the input, 0.0 when the input is empty
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentSummary {
    pub total: usize,
    pub classes: Vec<ClassShare>,
    pub polarity: SummaryStats,
    pub subjectivity: SummaryStats,
}

/// One entry per class in [`SentimentClass::ALL`] order, zero counts included
pub fn class_shares<'a, I>(posts: I) -> Vec<ClassShare>
where
    I: IntoIterator<Item = &'a AnalyzedPost>,
{
    let mut counts = [0usize; 3];
    let mut total = 0usize;
    for post in posts {
        counts[class_slot(post.sentiment)] += 1;
        total += 1;
    }

    SentimentClass::ALL
        .iter()
        .map(|&class| {
            let count = counts[class_slot(class)];
            ClassShare {
                class,
                count,
                percent: if total == 0 {
                    0.0
                } else {
                    count as f64 * 100.0 / total as f64
                },
            }
        })
        .collect()
}

pub(crate) fn class_slot(class: SentimentClass) -> usize {
    match class {
        SentimentClass::Positive => 0,
        SentimentClass::Negative => 1,
        SentimentClass::Neutral => 2,
    }
}

pub fn sentiment_summary(posts: &[AnalyzedPost]) -> SentimentSummary {
    let polarity: Vec<f64> = posts.iter().map(|p| p.polarity).collect();
    let subjectivity: Vec<f64> = posts.iter().map(|p| p.subjectivity).collect();

    SentimentSummary {
        total: posts.len(),
        classes: class_shares(posts),
        polarity: SummaryStats::from_values(&polarity),
        subjectivity: SummaryStats::from_values(&subjectivity),
    }
}
