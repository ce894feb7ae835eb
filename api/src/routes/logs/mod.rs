//! # System Log Routes Module
//!
//! Read-only views over the seeded system log entries: a filtered listing
//! and a CSV download of the same filtered set.

use axum::{Router, routing::get};
use util::state::AppState;

pub mod get;

/// Builds the `/logs` route group.
///
/// - `GET /logs` → `list_logs`
/// - `GET /logs/export` → `export_logs`
pub fn log_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get::list_logs))
        .route("/export", get(get::export_logs))
}
