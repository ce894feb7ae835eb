use crate::response::ApiResponse;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use util::state::AppState;

/// DELETE /api/subjects/{subject_id}
///
/// Deletes a subject.
pub async fn delete_subject(
    State(app_state): State<AppState>,
    Path(subject_id): Path<i64>,
) -> impl IntoResponse {
    match app_state.store().delete_subject(subject_id) {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Subject deleted successfully")),
        )
            .into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Subject not found")),
        )
            .into_response(),
    }
}
