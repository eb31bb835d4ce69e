//! Filtered, sorted post selection for the data explorer

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::mean;
use super::sentiment::{class_shares, ClassShare};
use crate::{AnalyzedPost, Error, Result, SentimentClass};

/// Row filter; every criterion must hold
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExplorerFilter {
    /// Empty matches every user
    #[serde(default)]
    pub usernames: Vec<String>,
    /// Empty matches every class
    #[serde(default)]
    pub sentiments: Vec<SentimentClass>,
    #[serde(default)]
    pub min_likes: u64,
    #[serde(default)]
    pub min_retweets: u64,
}

impl ExplorerFilter {
    pub fn matches(&self, post: &AnalyzedPost) -> bool {
        (self.usernames.is_empty() || self.usernames.iter().any(|u| *u == post.post.username))
            && (self.sentiments.is_empty() || self.sentiments.contains(&post.sentiment))
            && post.post.likes >= self.min_likes
            && post.post.retweets >= self.min_retweets
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExplorerSort {
    #[default]
    LikesDesc,
    RetweetsDesc,
    Newest,
    Oldest,
}

impl ExplorerSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExplorerSort::LikesDesc => "likes",
            ExplorerSort::RetweetsDesc => "retweets",
            ExplorerSort::Newest => "newest",
            ExplorerSort::Oldest => "oldest",
        }
    }
}

impl fmt::Display for ExplorerSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExplorerSort {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "likes" => Ok(ExplorerSort::LikesDesc),
            "retweets" => Ok(ExplorerSort::RetweetsDesc),
            "newest" => Ok(ExplorerSort::Newest),
            "oldest" => Ok(ExplorerSort::Oldest),
            other => Err(Error::InvalidInput(format!("Unknown sort order: {}", other))),
        }
    }
}

/// Posts passing `filter`, ordered by `sort`; equal keys fall back to tweet id
pub fn select<'a>(
    posts: &'a [AnalyzedPost],
    filter: &ExplorerFilter,
    sort: ExplorerSort,
) -> Vec<&'a AnalyzedPost> {
    let mut rows: Vec<&AnalyzedPost> = posts.iter().filter(|p| filter.matches(p)).collect();
    rows.sort_by(|a, b| {
        let (a, b) = (&a.post, &b.post);
        let ord = match sort {
            ExplorerSort::LikesDesc => b.likes.cmp(&a.likes),
            ExplorerSort::RetweetsDesc => b.retweets.cmp(&a.retweets),
            ExplorerSort::Newest => b.timestamp.cmp(&a.timestamp),
            ExplorerSort::Oldest => a.timestamp.cmp(&b.timestamp),
        };
        ord.then_with(|| a.tweet_id.cmp(&b.tweet_id))
    });
    rows
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionSummary {
    pub count: usize,
    pub total_likes: u64,
    pub total_retweets: u64,
    pub avg_likes: f64,
    pub avg_retweets: f64,
    /// `avg_likes + avg_retweets`
    pub avg_engagement: f64,
    pub max_likes: u64,
    pub max_retweets: u64,
    pub classes: Vec<ClassShare>,
}

pub fn summarize(rows: &[&AnalyzedPost]) -> SelectionSummary {
    let avg_likes = mean(rows.iter().map(|p| p.post.likes as f64));
    let avg_retweets = mean(rows.iter().map(|p| p.post.retweets as f64));

    SelectionSummary {
        count: rows.len(),
        total_likes: rows.iter().map(|p| p.post.likes).sum(),
        total_retweets: rows.iter().map(|p| p.post.retweets).sum(),
        avg_likes,
        avg_retweets,
        avg_engagement: avg_likes + avg_retweets,
        max_likes: rows.iter().map(|p| p.post.likes).max().unwrap_or(0),
        max_retweets: rows.iter().map(|p| p.post.retweets).max().unwrap_or(0),
        classes: class_shares(rows.iter().copied()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::fixtures;

    fn ids(rows: &[&AnalyzedPost]) -> Vec<u64> {
        rows.iter().map(|p| p.post.tweet_id).collect()
    }

    #[test]
    fn test_default_filter_keeps_all_by_likes() {
        let ds = fixtures::dataset();
        let rows = select(ds.posts(), &ExplorerFilter::default(), ExplorerSort::default());
        assert_eq!(ids(&rows), vec![4, 1, 3, 2, 5]);
    }

    #[test]
    fn test_filters_combine() {
        let ds = fixtures::dataset();
        let filter = ExplorerFilter {
            usernames: vec!["alice".into(), "bob".into()],
            sentiments: vec![SentimentClass::Positive, SentimentClass::Negative],
            min_likes: 1,
            min_retweets: 0,
        };
        let rows = select(ds.posts(), &filter, ExplorerSort::Oldest);
        assert_eq!(ids(&rows), vec![1, 2]);
    }

    #[test]
    fn test_sort_orders() {
        let ds = fixtures::dataset();
        let all = ExplorerFilter::default();
        assert_eq!(ids(&select(ds.posts(), &all, ExplorerSort::Newest)), vec![5, 4, 3, 2, 1]);
        assert_eq!(ids(&select(ds.posts(), &all, ExplorerSort::RetweetsDesc)), vec![4, 1, 3, 2, 5]);
    }

    #[test]
    fn test_summary() {
        let ds = fixtures::dataset();
        let rows = select(ds.posts(), &ExplorerFilter::default(), ExplorerSort::default());
        let s = summarize(&rows);
        assert_eq!(s.count, 5);
        assert_eq!(s.avg_likes, 26.0);
        assert!((s.avg_engagement - 28.6).abs() < 1e-9);
        assert_eq!(s.max_likes, 60);
        assert_eq!(s.max_retweets, 6);
        assert_eq!(s.classes[0].count, 2);
    }

    #[test]
    fn test_empty_selection_summary() {
        let s = summarize(&[]);
        assert_eq!(s.count, 0);
        assert_eq!(s.max_likes, 0);
        assert_eq!(s.avg_engagement, 0.0);
    }

    #[test]
    fn test_sort_parse() {
        assert_eq!("Newest".parse::<ExplorerSort>().unwrap(), ExplorerSort::Newest);
        assert!("random".parse::<ExplorerSort>().is_err());
    }
}
