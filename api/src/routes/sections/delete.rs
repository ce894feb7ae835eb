use crate::routes::sections::proxy_failure;
use axum::{
    Json,
    extract::{Path, State},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use serde_json::json;
use util::{config, state::AppState};

/// DELETE /api/sections/{section_id}
///
/// Forwards to `<backend_base_url>/sections/{id}`. The upstream body is
/// discarded; success answers with `{ "success": true }`.
///
/// ### Responses
/// - `200 OK` — `{ "success": true }`
/// - `500 Internal Server Error` — `{ "error": "Failed to delete section" }`
pub async fn delete_section(
    State(app_state): State<AppState>,
    Path(section_id): Path<String>,
) -> Response {
    let url = format!("{}/sections/{}", config::backend_base_url(), section_id);

    match app_state
        .client()
        .delete(&url)
        .header(CONTENT_TYPE, "application/json")
        .send()
        .await
    {
        Ok(resp) if resp.status().is_success() => Json(json!({ "success": true })).into_response(),
        Ok(resp) => {
            tracing::error!("Error deleting section: upstream status {}", resp.status());
            proxy_failure("Failed to delete section")
        }
        Err(e) => {
            tracing::error!("Error deleting section: {e}");
            proxy_failure("Failed to delete section")
        }
    }
}
