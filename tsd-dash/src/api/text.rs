//! Text statistics endpoint

use axum::{extract::State, Json};
use serde::Deserialize;

use tsd_common::analytics::words::DEFAULT_TOP_WORDS;
use tsd_common::analytics::{text_summary, TextSummary};

use super::ApiQuery;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct TextQuery {
    /// Words per frequency list, clamped to 5..=50
    #[serde(default = "default_top")]
    pub top: usize,
}

fn default_top() -> usize {
    DEFAULT_TOP_WORDS
}

/// GET /api/text?top=N
pub async fn get_text(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<TextQuery>,
) -> Json<TextSummary> {
    Json(text_summary(state.dataset.posts(), query.top))
}
