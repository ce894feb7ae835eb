use crate::response::ApiResponse;
use crate::routes::folders::common::{FolderRequest, FolderResponse};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use store::StoreError;
use util::state::AppState;
use validator::Validate;

/// PUT /api/folders/{folder_id}
///
/// Replaces a folder with the submitted form payload. The name is
/// normalized to uppercase; re-parenting onto a descendant (or onto the
/// folder itself) is rejected.
///
/// ### Responses
/// - `200 OK` with the updated record
/// - `400 Bad Request` — Validation failure, dangling reference, or a
///   re-parent that would close a loop
/// - `404 Not Found` — Unknown id
pub async fn update_folder(
    State(app_state): State<AppState>,
    Path(folder_id): Path<i64>,
    Json(req): Json<FolderRequest>,
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

    match app_state.store().update_folder(folder_id, req.into_input()) {
        Ok(record) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                FolderResponse::from(record),
                "Folder updated successfully",
            )),
        )
            .into_response(),
        Err(err @ StoreError::NotFound { .. }) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error(err.to_string())),
        )
            .into_response(),
        Err(err) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(err.to_string())),
        )
            .into_response(),
    }
}
