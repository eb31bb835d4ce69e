//! Engagement endpoint

use axum::{extract::State, Json};
use serde::Deserialize;

use tsd_common::analytics::engagement::DEFAULT_TOP_POSTS;
use tsd_common::analytics::{engagement_summary, EngagementSummary};

use super::ApiQuery;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct EngagementQuery {
    /// Number of top posts (default 10)
    #[serde(default = "default_top")]
    pub top: usize,
}

fn default_top() -> usize {
    DEFAULT_TOP_POSTS
}

/// GET /api/engagement?top=N
pub async fn get_engagement(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<EngagementQuery>,
) -> Json<EngagementSummary> {
    Json(engagement_summary(state.dataset.posts(), query.top))
}
