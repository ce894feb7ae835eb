use crate::response::ApiResponse;
use crate::routes::subjects::common::{SubjectRequest, SubjectResponse};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use store::SubjectInput;
use util::state::AppState;
use validator::Validate;

/// PUT /api/subjects/{subject_id}
///
/// Replaces a subject with the submitted form payload.
pub async fn update_subject(
    State(app_state): State<AppState>,
    Path(subject_id): Path<i64>,
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

    match app_state.store().update_subject(
        subject_id,
        SubjectInput {
            name: req.name,
            code: req.code,
            description: req.description,
        },
    ) {
        Ok(record) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                SubjectResponse::from(record),
                "Subject updated successfully",
            )),
        )
            .into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Subject not found")),
        )
            .into_response(),
    }
}
