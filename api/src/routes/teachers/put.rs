use crate::response::ApiResponse;
use crate::routes::teachers::common::{TeacherRequest, TeacherResponse};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use store::TeacherInput;
use util::state::AppState;
use validator::Validate;

/// PUT /api/teachers/{teacher_id}
///
/// Replaces a teacher account with the submitted form payload.
pub async fn update_teacher(
    State(app_state): State<AppState>,
    Path(teacher_id): Path<i64>,
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

    match app_state.store().update_teacher(
        teacher_id,
        TeacherInput {
            username: req.username,
            email: req.email,
            password: req.password,
        },
    ) {
        Ok(record) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                TeacherResponse::from(record),
                "Teacher updated successfully",
            )),
        )
            .into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Teacher not found")),
        )
            .into_response(),
    }
}
