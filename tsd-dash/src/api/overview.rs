//! Overview and sentiment distribution endpoints

use axum::{extract::State, Json};

use tsd_common::analytics::{overview, sentiment_summary, Overview, SentimentSummary};

use crate::AppState;

/// GET /api/overview
pub async fn get_overview(State(state): State<AppState>) -> Json<Overview> {
    Json(overview(state.dataset.posts()))
}

/// GET /api/sentiment
pub async fn get_sentiment(State(state): State<AppState>) -> Json<SentimentSummary> {
    Json(sentiment_summary(state.dataset.posts()))
}
