use crate::routes::sections::proxy_failure;
use axum::{
    Json,
    extract::{Path, State},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use util::{config, state::AppState};

/// PATCH /api/sections/{section_id}
///
/// Forwards the JSON body to `<backend_base_url>/sections/{id}` and relays
/// the upstream response verbatim.
///
/// ### Responses
/// - `200 OK` — the upstream body, unchanged
/// - `500 Internal Server Error` — `{ "error": "Failed to update section" }`
pub async fn update_section(
    State(app_state): State<AppState>,
    Path(section_id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let url = format!("{}/sections/{}", config::backend_base_url(), section_id);

    match app_state
        .client()
        .patch(&url)
        .header(CONTENT_TYPE, "application/json")
        .json(&body)
        .send()
        .await
    {
        Ok(resp) if resp.status().is_success() => match resp.json::<Value>().await {
            Ok(body) => Json(body).into_response(),
            Err(e) => {
                tracing::error!("Error updating section: {e}");
                proxy_failure("Failed to update section")
            }
        },
        Ok(resp) => {
            tracing::error!("Error updating section: upstream status {}", resp.status());
            proxy_failure("Failed to update section")
        }
        Err(e) => {
            tracing::error!("Error updating section: {e}");
            proxy_failure("Failed to update section")
        }
    }
}
