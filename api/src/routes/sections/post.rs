use crate::routes::sections::proxy_failure;
use axum::{
    Json,
    extract::State,
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use util::{config, state::AppState};

/// POST /api/sections
///
/// Forwards the JSON body to `<backend_base_url>/sections` and relays the
/// upstream response verbatim.
///
/// ### Responses
/// - `200 OK` — the upstream body, unchanged
/// - `500 Internal Server Error` — `{ "error": "Failed to create section" }`
pub async fn create_section(
    State(app_state): State<AppState>,
    Json(body): Json<Value>,
) -> Response {
    let url = format!("{}/sections", config::backend_base_url());

    match app_state
        .client()
        .post(&url)
        .header(CONTENT_TYPE, "application/json")
        .json(&body)
        .send()
        .await
    {
        Ok(resp) if resp.status().is_success() => match resp.json::<Value>().await {
            Ok(body) => Json(body).into_response(),
            Err(e) => {
                tracing::error!("Error creating section: {e}");
                proxy_failure("Failed to create section")
            }
        },
        Ok(resp) => {
            tracing::error!("Error creating section: upstream status {}", resp.status());
            proxy_failure("Failed to create section")
        }
        Err(e) => {
            tracing::error!("Error creating section: {e}");
            proxy_failure("Failed to create section")
        }
    }
}
