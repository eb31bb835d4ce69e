//! Dataset-wide headline numbers

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;

use super::mean;
use crate::AnalyzedPost;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub total_posts: usize,
    pub unique_users: usize,
    pub total_likes: u64,
    pub total_retweets: u64,
    pub avg_likes: f64,
    pub avg_retweets: f64,
    /// Earliest post date; `None` for an empty dataset
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

pub fn overview(posts: &[AnalyzedPost]) -> Overview {
    let users: HashSet<&str> = posts.iter().map(|p| p.post.username.as_str()).collect();
    let dates = posts.iter().map(|p| p.post.timestamp.date());

    Overview {
        total_posts: posts.len(),
        unique_users: users.len(),
        total_likes: posts.iter().map(|p| p.post.likes).sum(),
        total_retweets: posts.iter().map(|p| p.post.retweets).sum(),
        avg_likes: mean(posts.iter().map(|p| p.post.likes as f64)),
        avg_retweets: mean(posts.iter().map(|p| p.post.retweets as f64)),
        first_date: dates.clone().min(),
        last_date: dates.max(),
    }
}
