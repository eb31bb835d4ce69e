//! Temporal activity endpoint

use axum::{extract::State, Json};

use tsd_common::analytics::{temporal_summary, TemporalSummary};

use crate::AppState;

/// GET /api/temporal
pub async fn get_temporal(State(state): State<AppState>) -> Json<TemporalSummary> {
    Json(temporal_summary(state.dataset.posts()))
}
