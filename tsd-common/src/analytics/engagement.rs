//! Likes and retweets, overall and per class

use serde::Serialize;

use super::mean;
use crate::{AnalyzedPost, SentimentClass};

/// Posts shown in the top-posts list unless a request says otherwise
pub const DEFAULT_TOP_POSTS: usize = 10;

/// Characters of post text kept in [`TopPost::text`]
pub const PREVIEW_CHARS: usize = 150;

/// Mean engagement of one class
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassEngagement {
    pub class: SentimentClass,
    pub posts: usize,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopPost {
    pub tweet_id: u64,
    pub username: String,
    /// First [`PREVIEW_CHARS`] characters, `...` appended when cut
    pub text: String,
    pub likes: u64,
    pub retweets: u64,
    pub sentiment: SentimentClass,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementSummary {
    pub total_likes: u64,
    pub total_retweets: u64,
    pub mean_likes: f64,
    pub mean_retweets: f64,
    /// Mean likes per class present in the data, highest first
    pub likes_by_class: Vec<ClassEngagement>,
    /// Mean retweets per class present in the data, highest first
    pub retweets_by_class: Vec<ClassEngagement>,
    /// Percent by which Positive mean likes exceed the lowest class mean.
    /// `None` without Positive posts or when the lowest mean is zero.
    pub positive_like_lift_pct: Option<f64>,
    pub top_posts: Vec<TopPost>,
}

pub fn engagement_summary(posts: &[AnalyzedPost], top: usize) -> EngagementSummary {
    let likes_by_class = by_class(posts, |p| p.post.likes as f64);
    let retweets_by_class = by_class(posts, |p| p.post.retweets as f64);

    let positive = likes_by_class
        .iter()
        .find(|c| c.class == SentimentClass::Positive)
        .map(|c| c.value);
    let lowest = likes_by_class.last().map(|c| c.value);
    let positive_like_lift_pct = match (positive, lowest) {
        (Some(p), Some(low)) if low > 0.0 => Some((p / low - 1.0) * 100.0),
        _ => None,
    };

    EngagementSummary {
        total_likes: posts.iter().map(|p| p.post.likes).sum(),
        total_retweets: posts.iter().map(|p| p.post.retweets).sum(),
        mean_likes: mean(posts.iter().map(|p| p.post.likes as f64)),
        mean_retweets: mean(posts.iter().map(|p| p.post.retweets as f64)),
        likes_by_class,
        retweets_by_class,
        positive_like_lift_pct,
        top_posts: top_posts(posts, top),
    }
}

/// Classes with at least one post, sorted by `value` descending
fn by_class<F>(posts: &[AnalyzedPost], value: F) -> Vec<ClassEngagement>
where
    F: Fn(&AnalyzedPost) -> f64,
{
    let mut out: Vec<ClassEngagement> = SentimentClass::ALL
        .iter()
        .filter_map(|&class| {
            let values: Vec<f64> = posts
                .iter()
                .filter(|p| p.sentiment == class)
                .map(&value)
                .collect();
            if values.is_empty() {
                return None;
            }
            Some(ClassEngagement {
                class,
                posts: values.len(),
                value: mean(values),
            })
        })
        .collect();
    out.sort_by(|a, b| b.value.total_cmp(&a.value).then_with(|| a.class.cmp(&b.class)));
    out
}

/// Most-liked posts; ties go to the lower tweet id
pub fn top_posts(posts: &[AnalyzedPost], n: usize) -> Vec<TopPost> {
    let mut ranked: Vec<&AnalyzedPost> = posts.iter().collect();
    ranked.sort_by(|a, b| {
        b.post
            .likes
            .cmp(&a.post.likes)
            .then_with(|| a.post.tweet_id.cmp(&b.post.tweet_id))
    });

    ranked
        .into_iter()
        .take(n)
        .map(|p| TopPost {
            tweet_id: p.post.tweet_id,
            username: p.post.username.clone(),
            text: preview(&p.post.text),
            likes: p.post.likes,
            retweets: p.post.retweets,
            sentiment: p.sentiment,
        })
        .collect()
}

fn preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
