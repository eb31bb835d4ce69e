//! Live post analyzer and tone rewriter

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use tsd_common::sentiment::{normalize_input, read, Reading};
use tsd_common::{RewriteReport, TargetTone};

use super::{ApiError, ApiJson};
use crate::AppState;

/// Post length limit shown next to the analyzer reading
pub const MAX_POST_CHARS: usize = 280;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Absent text is analyzed as the empty string
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub reading: Reading,
    pub char_count: usize,
    pub max_chars: usize,
    pub within_limit: bool,
}

/// POST /api/analyze
pub async fn analyze(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AnalyzeRequest>,
) -> Json<AnalyzeResponse> {
    let text = normalize_input(request.text.as_deref());
    let char_count = text.chars().count();

    Json(AnalyzeResponse {
        reading: read(state.oracle.as_ref(), Some(text)),
        char_count,
        max_chars: MAX_POST_CHARS,
        within_limit: char_count <= MAX_POST_CHARS,
    })
}

#[derive(Debug, Deserialize)]
pub struct RewriteRequest {
    #[serde(default)]
    pub text: Option<String>,

    /// KeepCurrent, MakePositive, MakeNegative or MakeNeutral
    pub tone: String,
}

/// POST /api/rewrite
///
/// An unrecognised tone is rejected before any text is touched.
pub async fn rewrite(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RewriteRequest>,
) -> Result<Json<RewriteReport>, ApiError> {
    let tone: TargetTone = request.tone.parse()?;
    let text = normalize_input(request.text.as_deref());
    debug!("Rewrite request toward {} ({} chars)", tone, text.len());

    Ok(Json(state.rewriter.report(state.oracle.as_ref(), text, tone)))
}
