//! User ranking and lookup endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use tsd_common::analytics::users::{UserLandscape, DEFAULT_TOP_USERS};
use tsd_common::analytics::{find_user, top_users, user_landscape, user_stats, UserSort, UserStats};

use super::{ApiError, ApiQuery};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UsersQuery {
    #[serde(default = "default_top")]
    pub top: usize,

    /// posts, likes, retweets, avg_likes or avg_retweets (default likes)
    pub sort: Option<String>,
}

fn default_top() -> usize {
    DEFAULT_TOP_USERS
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub landscape: UserLandscape,
    pub sort: String,
    pub users: Vec<UserStats>,
}

/// GET /api/users?top=N&sort=KEY
pub async fn get_users(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<UsersQuery>,
) -> Result<Json<UsersResponse>, ApiError> {
    let sort = match query.sort.as_deref() {
        Some(s) => s.parse::<UserSort>()?,
        None => UserSort::default(),
    };

    let stats = user_stats(state.dataset.posts());
    debug!("Ranking {} users by {}", stats.len(), sort);

    Ok(Json(UsersResponse {
        landscape: user_landscape(&stats),
        sort: sort.to_string(),
        users: top_users(&stats, sort, query.top),
    }))
}

/// GET /api/users/:username
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserStats>, ApiError> {
    Ok(Json(find_user(state.dataset.posts(), &username)?))
}
