use crate::response::ApiResponse;
use crate::routes::course_classes::common::{CourseClassRequest, CourseClassResponse};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use store::CourseClassInput;
use util::state::AppState;
use validator::Validate;

/// PUT /api/course-classes/{class_id}
///
/// Replaces a course class with the submitted form payload.
///
/// ### Responses
/// - `200 OK` with the updated record
/// - `400 Bad Request` — Validation failure
/// - `404 Not Found` — Unknown id
pub async fn update_course_class(
    State(app_state): State<AppState>,
    Path(class_id): Path<i64>,
    Json(req): Json<CourseClassRequest>,
) -> impl IntoResponse {
    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(common::format_validation_errors(
                &e,
            ))),
        )
            .into_response();
    }

    match app_state.store().update_course_class(
        class_id,
        CourseClassInput {
            name: req.name,
            description: req.description,
        },
    ) {
        Ok(record) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                CourseClassResponse::from(record),
                "Course class updated successfully",
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
