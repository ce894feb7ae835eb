use crate::response::ApiResponse;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use util::state::AppState;

/// DELETE /api/teachers/{teacher_id}
///
/// Deletes a teacher account.
pub async fn delete_teacher(
    State(app_state): State<AppState>,
    Path(teacher_id): Path<i64>,
) -> impl IntoResponse {
    match app_state.store().delete_teacher(teacher_id) {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Teacher deleted successfully")),
        )
            .into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Teacher not found")),
        )
            .into_response(),
    }
}
