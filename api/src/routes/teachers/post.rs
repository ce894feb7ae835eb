use crate::response::ApiResponse;
use crate::routes::teachers::common::{TeacherRequest, TeacherResponse};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use store::TeacherInput;
use util::state::AppState;
use validator::Validate;

/// POST /api/teachers
///
/// Creates a teacher account.
///
/// ### Request Body
/// ```json
/// {
///   "username": "john.doe",
///   "email": "john.doe@school.edu",
///   "password": "password123"
/// }
/// ```
///
/// ### Responses
/// - `201 Created` with the new record (password omitted)
/// - `400 Bad Request` — Validation failure
pub async fn create_teacher(
    State(app_state): State<AppState>,
    Json(req): Json<TeacherRequest>,
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

    let record = app_state.store().create_teacher(TeacherInput {
        username: req.username,
        email: req.email,
        password: req.password,
    });

    (
        StatusCode::CREATED,
        Json(ApiResponse::success(
            TeacherResponse::from(record),
            "Teacher created successfully",
        )),
    )
        .into_response()
}
