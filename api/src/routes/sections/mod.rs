//! # Section Proxy Routes Module
//!
//! Sections live on the external backend; these handlers forward each
//! request once and relay the upstream JSON unchanged. Any upstream
//! non-success or transport failure collapses to a fixed-shape
//! `{ "error": "..." }` body with status 500. No retries, no timeouts, no
//! backoff.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use util::state::AppState;

pub mod delete;
pub mod get;
pub mod patch;
pub mod post;

/// The fixed proxy failure shape: `{ "error": message }` with status 500.
pub(crate) fn proxy_failure(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message })),
    )
        .into_response()
}

/// Builds the `/sections` route group.
///
/// - `GET /sections` → `list_sections`
/// - `POST /sections` → `create_section`
/// - `GET /sections/{section_id}` → `get_section`
/// - `PATCH /sections/{section_id}` → `update_section`
/// - `DELETE /sections/{section_id}` → `delete_section`
pub fn section_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get::list_sections).post(post::create_section))
        .route(
            "/{section_id}",
            get(get::get_section)
                .patch(patch::update_section)
                .delete(delete::delete_section),
        )
}
