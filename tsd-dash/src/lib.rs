//! tsd-dash library - tweet sentiment dashboard service
//!
//! Serves the dashboard aggregates of one scored dataset as read-only JSON,
//! plus the live analyzer and tone rewriter.

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use tsd_common::{Dataset, SentimentOracle, ToneRewriter};

pub mod api;
pub mod pagination;

/// Application state shared across HTTP handlers
///
/// Everything inside is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Posts scored once at startup
    pub dataset: Arc<Dataset>,
    /// Scorer for analyzer and rewrite requests
    pub oracle: Arc<dyn SentimentOracle>,
    pub rewriter: Arc<ToneRewriter>,
}

impl AppState {
    pub fn new(dataset: Dataset, oracle: Arc<dyn SentimentOracle>, rewriter: ToneRewriter) -> Self {
        Self {
            dataset: Arc::new(dataset),
            oracle,
            rewriter: Arc::new(rewriter),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    let dashboard = Router::new()
        .route("/api/overview", get(api::get_overview))
        .route("/api/sentiment", get(api::get_sentiment))
        .route("/api/engagement", get(api::get_engagement))
        .route("/api/text", get(api::get_text))
        .route("/api/users", get(api::get_users))
        .route("/api/users/:username", get(api::get_user))
        .route("/api/temporal", get(api::get_temporal))
        .route("/api/explorer", get(api::get_explorer))
        .route("/api/explorer/export", get(api::export_explorer));

    let tools = Router::new()
        .route("/api/analyze", post(api::analyze))
        .route("/api/rewrite", post(api::rewrite));

    let meta = Router::new()
        .route("/api/buildinfo", get(api::get_build_info))
        .merge(api::health_routes());

    Router::new()
        .merge(dashboard)
        .merge(tools)
        .merge(meta)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
