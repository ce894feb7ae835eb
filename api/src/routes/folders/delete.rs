use crate::response::ApiResponse;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use util::state::AppState;

#[derive(Debug, Default, Serialize)]
pub struct FolderRemovalResponse {
    pub files_removed: usize,
    pub children_reparented: usize,
}

/// DELETE /api/folders/{folder_id}
///
/// Deletes a folder. Exactly the files inside it are removed with it;
/// immediate child folders move to root rather than being orphaned or
/// cascaded.
///
/// ### Responses
/// - `200 OK` with `{ files_removed, children_reparented }`
/// - `404 Not Found` — Unknown id
pub async fn delete_folder(
    State(app_state): State<AppState>,
    Path(folder_id): Path<i64>,
) -> impl IntoResponse {
    match app_state.store().delete_folder(folder_id) {
        Ok(removal) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                FolderRemovalResponse {
                    files_removed: removal.files_removed,
                    children_reparented: removal.children_reparented,
                },
                "Folder deleted successfully",
            )),
        )
            .into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Folder not found")),
        )
            .into_response(),
    }
}

/// DELETE /api/files/{file_id}
///
/// Deletes a single file record.
///
/// ### Responses
/// - `200 OK` — Deleted
/// - `404 Not Found` — Unknown id
pub async fn delete_file(
    State(app_state): State<AppState>,
    Path(file_id): Path<i64>,
) -> impl IntoResponse {
    match app_state.store().delete_file(file_id) {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "File deleted successfully")),
        )
            .into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("File not found")),
        )
            .into_response(),
    }
}
