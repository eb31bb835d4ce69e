//! Per-user aggregates

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::round2;
use crate::{AnalyzedPost, Error, Result, SentimentClass};

pub const DEFAULT_TOP_USERS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    pub username: String,
    pub total_posts: usize,
    pub total_likes: u64,
    /// Rounded to two decimals
    pub avg_likes: f64,
    pub total_retweets: u64,
    /// Rounded to two decimals
    pub avg_retweets: f64,
    pub positive_posts: usize,
}

/// Ranking key for [`top_users`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserSort {
    Posts,
    #[default]
    Likes,
    Retweets,
    AvgLikes,
    AvgRetweets,
}

impl UserSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserSort::Posts => "posts",
            UserSort::Likes => "likes",
            UserSort::Retweets => "retweets",
            UserSort::AvgLikes => "avg_likes",
            UserSort::AvgRetweets => "avg_retweets",
        }
    }
}

impl fmt::Display for UserSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserSort {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "posts" => Ok(UserSort::Posts),
            "likes" => Ok(UserSort::Likes),
            "retweets" => Ok(UserSort::Retweets),
            "avg_likes" => Ok(UserSort::AvgLikes),
            "avg_retweets" => Ok(UserSort::AvgRetweets),
            other => Err(Error::InvalidInput(format!("Unknown user sort: {}", other))),
        }
    }
}

/// Participation across all users
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserLandscape {
    pub total_users: usize,
    pub mean_posts_per_user: f64,
    /// Username with the most posts (alphabetically first on ties)
    pub most_active_user: Option<String>,
    pub most_active_posts: usize,
    /// Likes plus retweets over every user
    pub total_engagement: u64,
}

#[derive(Default)]
struct Accumulator {
    posts: usize,
    likes: u64,
    retweets: u64,
    positive: usize,
}

/// Stats for every user, by total likes descending then username
pub fn user_stats(posts: &[AnalyzedPost]) -> Vec<UserStats> {
    let mut per_user: BTreeMap<&str, Accumulator> = BTreeMap::new();
    for p in posts {
        let acc = per_user.entry(p.post.username.as_str()).or_default();
        acc.posts += 1;
        acc.likes += p.post.likes;
        acc.retweets += p.post.retweets;
        if p.sentiment == SentimentClass::Positive {
            acc.positive += 1;
        }
    }

    let mut stats: Vec<UserStats> = per_user
        .into_iter()
        .map(|(name, acc)| UserStats {
            username: name.to_string(),
            total_posts: acc.posts,
            total_likes: acc.likes,
            avg_likes: round2(acc.likes as f64 / acc.posts as f64),
            total_retweets: acc.retweets,
            avg_retweets: round2(acc.retweets as f64 / acc.posts as f64),
            positive_posts: acc.positive,
        })
        .collect();
    // BTreeMap order is alphabetical and the sort is stable
    stats.sort_by(|a, b| b.total_likes.cmp(&a.total_likes));
    stats
}

/// First `n` users ranked by `sort`, highest first, username breaking ties
pub fn top_users(stats: &[UserStats], sort: UserSort, n: usize) -> Vec<UserStats> {
    let mut ranked = stats.to_vec();
    ranked.sort_by(|a, b| {
        let ord = match sort {
            UserSort::Posts => b.total_posts.cmp(&a.total_posts),
            UserSort::Likes => b.total_likes.cmp(&a.total_likes),
            UserSort::Retweets => b.total_retweets.cmp(&a.total_retweets),
            UserSort::AvgLikes => b.avg_likes.total_cmp(&a.avg_likes),
            UserSort::AvgRetweets => b.avg_retweets.total_cmp(&a.avg_retweets),
        };
        ord.then_with(|| a.username.cmp(&b.username))
    });
    ranked.truncate(n);
    ranked
}

/// Stats for one user (exact, case-sensitive match)
pub fn find_user(posts: &[AnalyzedPost], username: &str) -> Result<UserStats> {
    let own: Vec<AnalyzedPost> = posts
        .iter()
        .filter(|p| p.post.username == username)
        .cloned()
        .collect();
    user_stats(&own)
        .into_iter()
        .next()
        .ok_or_else(|| Error::NotFound(format!("User not found: {}", username)))
}

pub fn user_landscape(stats: &[UserStats]) -> UserLandscape {
    let most_active = top_users(stats, UserSort::Posts, 1).into_iter().next();
    let total_posts: usize = stats.iter().map(|s| s.total_posts).sum();

    UserLandscape {
        total_users: stats.len(),
        mean_posts_per_user: if stats.is_empty() {
            0.0
        } else {
            total_posts as f64 / stats.len() as f64
        },
        most_active_posts: most_active.as_ref().map_or(0, |s| s.total_posts),
        most_active_user: most_active.map(|s| s.username),
        total_engagement: stats.iter().map(|s| s.total_likes + s.total_retweets).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::fixtures;

    #[test]
    fn test_user_stats_sorted_by_likes() {
        let ds = fixtures::dataset();
        let stats = user_stats(ds.posts());
        let names: Vec<&str> = stats.iter().map(|s| s.username.as_str()).collect();
        // carol 60, alice 60, bob 10: tie keeps alphabetical order
        assert_eq!(names, vec!["alice", "carol", "bob"]);

        let alice = &stats[0];
        assert_eq!(alice.total_posts, 2);
        assert_eq!(alice.avg_likes, 30.0);
        assert_eq!(alice.avg_retweets, 3.0);
        assert_eq!(alice.positive_posts, 1);
    }

    #[test]
    fn test_top_users_by_posts() {
        let ds = fixtures::dataset();
        let stats = user_stats(ds.posts());
        let top = top_users(&stats, UserSort::Posts, 2);
        assert_eq!(top[0].username, "alice");
        assert_eq!(top[1].username, "bob");
    }

    #[test]
    fn test_find_user() {
        let ds = fixtures::dataset();
        assert_eq!(find_user(ds.posts(), "bob").unwrap().total_posts, 2);
        assert!(matches!(find_user(ds.posts(), "Bob"), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_landscape() {
        let ds = fixtures::dataset();
        let land = user_landscape(&user_stats(ds.posts()));
        assert_eq!(land.total_users, 3);
        assert_eq!(land.most_active_user.as_deref(), Some("alice"));
        assert_eq!(land.most_active_posts, 2);
        assert_eq!(land.total_engagement, 143);
    }

    #[test]
    fn test_sort_parse() {
        assert_eq!("AVG_LIKES".parse::<UserSort>().unwrap(), UserSort::AvgLikes);
        assert!(matches!("followers".parse::<UserSort>(), Err(Error::InvalidInput(_))));
    }
}
