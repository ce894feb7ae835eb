use crate::response::ApiResponse;
use crate::routes::course_classes::common::{CourseClassRequest, CourseClassResponse};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use store::CourseClassInput;
use util::state::AppState;
use validator::Validate;

/// POST /api/course-classes
///
/// Creates a course class.
///
/// ### Request Body
/// ```json
/// {
///   "name": "Mathematics 101",
///   "description": "Introduction to basic mathematical concepts"
/// }
/// ```
///
/// ### Responses
/// - `201 Created` with the new record
/// - `400 Bad Request` — Validation failure
pub async fn create_course_class(
    State(app_state): State<AppState>,
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

    let record = app_state.store().create_course_class(CourseClassInput {
        name: req.name,
        description: req.description,
    });

    (
        StatusCode::CREATED,
        Json(ApiResponse::success(
            CourseClassResponse::from(record),
            "Course class created successfully",
        )),
    )
        .into_response()
}
