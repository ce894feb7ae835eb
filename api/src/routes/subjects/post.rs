use crate::response::ApiResponse;
use crate::routes::subjects::common::{SubjectRequest, SubjectResponse};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use store::SubjectInput;
use util::state::AppState;
use validator::Validate;

/// POST /api/subjects
///
/// Creates a subject.
///
/// ### Request Body
/// ```json
/// {
///   "name": "Mathematics",
///   "code": "MATH101",
///   "description": "Introduction to basic mathematical concepts"
/// }
/// ```
///
/// ### Responses
/// - `201 Created` with the new record
/// - `400 Bad Request` — Validation failure (including a malformed code)
pub async fn create_subject(
    State(app_state): State<AppState>,
    Json(req): Json<SubjectRequest>,
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

    let record = app_state.store().create_subject(SubjectInput {
        name: req.name,
        code: req.code,
        description: req.description,
    });

    (
        StatusCode::CREATED,
        Json(ApiResponse::success(
            SubjectResponse::from(record),
            "Subject created successfully",
        )),
    )
        .into_response()
}
