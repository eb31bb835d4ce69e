//! Data explorer: filtered, sorted, paginated posts and downloads

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use tsd_common::analytics::{select, summarize, ExplorerFilter, ExplorerSort, SelectionSummary};
use tsd_common::export::{render, ExportFormat, ExportRow};
use tsd_common::{Error, Result, SentimentClass};

use super::{ApiError, ApiQuery};
use crate::pagination::{calculate_pagination, PAGE_SIZE};
use crate::AppState;

/// Query parameters shared by the explorer page and its export
#[derive(Debug, Default, Deserialize)]
pub struct ExplorerQuery {
    /// Comma-separated usernames (absent = all users)
    pub users: Option<String>,

    /// Comma-separated classes, e.g. `Positive,Neutral` (absent = all)
    pub sentiments: Option<String>,

    #[serde(default)]
    pub min_likes: u64,

    #[serde(default)]
    pub min_retweets: u64,

    /// likes, retweets, newest or oldest (default likes)
    pub sort: Option<String>,

    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: usize,

    /// Export format: csv or json (export only, default csv)
    pub format: Option<String>,
}

fn default_page() -> usize {
    1
}

fn split_list(raw: Option<&str>) -> impl Iterator<Item = &str> {
    raw.unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

impl ExplorerQuery {
    pub fn filter(&self) -> Result<ExplorerFilter> {
        let sentiments = split_list(self.sentiments.as_deref())
            .map(|s| {
                SentimentClass::parse(s)
                    .ok_or_else(|| Error::InvalidInput(format!("Unknown sentiment: {}", s)))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ExplorerFilter {
            usernames: split_list(self.users.as_deref()).map(str::to_string).collect(),
            sentiments,
            min_likes: self.min_likes,
            min_retweets: self.min_retweets,
        })
    }

    pub fn sort(&self) -> Result<ExplorerSort> {
        match self.sort.as_deref() {
            Some(s) => s.parse(),
            None => Ok(ExplorerSort::default()),
        }
    }

    pub fn format(&self) -> Result<ExportFormat> {
        match self.format.as_deref() {
            Some(s) => s.parse(),
            None => Ok(ExportFormat::default()),
        }
    }
}

/// Explorer page response
#[derive(Debug, Serialize)]
pub struct ExplorerResponse {
    pub total_rows: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub sort: String,
    /// Summary of the whole selection, not just this page
    pub summary: SelectionSummary,
    pub rows: Vec<ExportRow>,
}

/// GET /api/explorer
pub async fn get_explorer(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ExplorerQuery>,
) -> std::result::Result<Json<ExplorerResponse>, ApiError> {
    let filter = query.filter()?;
    let sort = query.sort()?;

    let selection = select(state.dataset.posts(), &filter, sort);
    let pagination = calculate_pagination(selection.len(), query.page);

    Ok(Json(ExplorerResponse {
        total_rows: selection.len(),
        page: pagination.page,
        page_size: PAGE_SIZE,
        total_pages: pagination.total_pages,
        sort: sort.to_string(),
        summary: summarize(&selection),
        rows: pagination
            .slice(&selection)
            .iter()
            .map(|p| ExportRow::from(*p))
            .collect(),
    }))
}

/// GET /api/explorer/export?format=csv|json
///
/// Exports the full selection (all pages) as a download.
pub async fn export_explorer(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ExplorerQuery>,
) -> std::result::Result<Response, ApiError> {
    let filter = query.filter()?;
    let sort = query.sort()?;
    let format = query.format()?;

    let selection = select(state.dataset.posts(), &filter, sort);
    let body = render(&selection, format)?;
    info!("Exported {} rows as {}", selection.len(), format);

    Ok((
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", format.file_name()),
            ),
        ],
        body,
    )
        .into_response())
}
