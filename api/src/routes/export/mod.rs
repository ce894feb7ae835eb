//! # Data Export Routes Module
//!
//! The generic data-export screen: a catalog of exportable data types with
//! field choices, export runs producing CSV or JSON downloads, and the run
//! history.

use axum::{
    Router,
    routing::{get, post},
};
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;

/// Builds the `/export` route group.
///
/// - `GET /export/types` → `list_export_types`
/// - `POST /export` → `run_export`
/// - `GET /export/history` → `list_export_history`
pub fn export_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(post::run_export))
        .route("/types", get(get::list_export_types))
        .route("/history", get(get::list_export_history))
}
