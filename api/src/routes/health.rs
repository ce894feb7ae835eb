use crate::response::ApiResponse;
use axum::{Json, Router, routing::get};
use util::{config, state::AppState};

/// GET /api/health
///
/// Liveness check; reports the project name so deployments are
/// distinguishable.
async fn health() -> Json<ApiResponse<()>> {
    Json(ApiResponse::success(
        (),
        format!("{} is healthy", config::project_name()),
    ))
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health))
}
