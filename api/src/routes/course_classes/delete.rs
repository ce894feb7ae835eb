use crate::response::ApiResponse;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use util::state::AppState;

/// DELETE /api/course-classes/{class_id}
///
/// Deletes a course class.
///
/// ### Responses
/// - `200 OK` — Deleted
/// - `404 Not Found` — Unknown id
pub async fn delete_course_class(
    State(app_state): State<AppState>,
    Path(class_id): Path<i64>,
) -> impl IntoResponse {
    match app_state.store().delete_course_class(class_id) {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                (),
                "Course class deleted successfully",
            )),
        )
            .into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Course class not found")),
        )
            .into_response(),
    }
}
