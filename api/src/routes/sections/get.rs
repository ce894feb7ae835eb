use crate::routes::sections::proxy_failure;
use axum::{
    Json,
    extract::{Path, State},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use util::{config, state::AppState};

/// GET /api/sections
///
/// Forwards to `<backend_base_url>/sections` and relays the upstream JSON
/// verbatim.
///
/// ### Responses
/// - `200 OK` — the upstream body, unchanged
/// - `500 Internal Server Error` — `{ "error": "Failed to fetch sections" }`
pub async fn list_sections(State(app_state): State<AppState>) -> Response {
    let url = format!("{}/sections", config::backend_base_url());

    match app_state
        .client()
        .get(&url)
        .header(CONTENT_TYPE, "application/json")
        .send()
        .await
    {
        Ok(resp) if resp.status().is_success() => match resp.json::<Value>().await {
            Ok(body) => Json(body).into_response(),
            Err(e) => {
                tracing::error!("Error fetching sections: {e}");
                proxy_failure("Failed to fetch sections")
            }
        },
        Ok(resp) => {
            tracing::error!("Error fetching sections: upstream status {}", resp.status());
            proxy_failure("Failed to fetch sections")
        }
        Err(e) => {
            tracing::error!("Error fetching sections: {e}");
            proxy_failure("Failed to fetch sections")
        }
    }
}

/// GET /api/sections/{section_id}
///
/// Forwards to `<backend_base_url>/sections/{id}` and relays the upstream
/// JSON verbatim.
pub async fn get_section(
    State(app_state): State<AppState>,
    Path(section_id): Path<String>,
) -> Response {
    let url = format!("{}/sections/{}", config::backend_base_url(), section_id);

    match app_state
        .client()
        .get(&url)
        .header(CONTENT_TYPE, "application/json")
        .send()
        .await
    {
        Ok(resp) if resp.status().is_success() => match resp.json::<Value>().await {
            Ok(body) => Json(body).into_response(),
            Err(e) => {
                tracing::error!("Error fetching section: {e}");
                proxy_failure("Failed to fetch section")
            }
        },
        Ok(resp) => {
            tracing::error!("Error fetching section: upstream status {}", resp.status());
            proxy_failure("Failed to fetch section")
        }
        Err(e) => {
            tracing::error!("Error fetching section: {e}");
            proxy_failure("Failed to fetch section")
        }
    }
}
