//! HTTP API handlers for tsd-dash

pub mod analyzer;
pub mod buildinfo;
pub mod engagement;
pub mod error;
pub mod explorer;
pub mod extract;
pub mod health;
pub mod overview;
pub mod temporal;
pub mod text;
pub mod users;

pub use analyzer::{analyze, rewrite};
pub use buildinfo::get_build_info;
pub use engagement::get_engagement;
pub use error::ApiError;
pub use explorer::{export_explorer, get_explorer};
pub use extract::{ApiJson, ApiQuery};
pub use health::health_routes;
pub use overview::{get_overview, get_sentiment};
pub use temporal::get_temporal;
pub use text::get_text;
pub use users::{get_user, get_users};
