use crate::auth::session;
use crate::response::ApiResponse;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use util::state::AppState;

/// GET /api/auth/session
///
/// Restores the persisted session, the way the dashboard re-reads its
/// stored user on start. A stored user that no longer parses clears the
/// session and reports none.
///
/// ### Responses
/// - `200 OK` with `{ user, accessToken }`
/// - `401 Unauthorized` — No (or unreadable) stored session
pub async fn get_session(State(app_state): State<AppState>) -> impl IntoResponse {
    match session::load(app_state.sessions()) {
        Some(session) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                serde_json::json!({
                    "user": session.user,
                    "accessToken": session.access_token,
                }),
                "Session restored",
            )),
        )
            .into_response(),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<()>::error("No active session")),
        )
            .into_response(),
    }
}
