use crate::response::ApiResponse;
use crate::routes::folders::common::{FileResponse, FolderResponse, store_error_response};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use util::state::AppState;
use util::uploads::UploadEntry;

#[derive(Debug, Deserialize)]
pub struct FoldersQuery {
    /// Scope to children of this folder; omit for root folders.
    pub parent: Option<i64>,
    /// Case-insensitive substring over folder name and the associated
    /// class/section/subject names. Applied before parent scoping.
    pub query: Option<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct FolderListResponse {
    pub folders: Vec<FolderResponse>,
}

/// GET /api/folders
///
/// Folders for the current view: root folders, or the children of `parent`.
///
/// ### Query Parameters
/// - `parent` (optional): Folder id whose children to list
/// - `query` (optional): Search term, filtered before the parent scoping
///
/// ### Examples
/// ```http
/// GET /api/folders
/// GET /api/folders?parent=1
/// GET /api/folders?query=mathematics
/// ```
pub async fn list_folders(
    State(app_state): State<AppState>,
    Query(params): Query<FoldersQuery>,
) -> impl IntoResponse {
    let folders = app_state
        .store()
        .child_folders(params.parent, params.query.as_deref())
        .into_iter()
        .map(FolderResponse::from)
        .collect();

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            FolderListResponse { folders },
            "Folders retrieved successfully",
        )),
    )
}

/// GET /api/folders/{folder_id}/path
///
/// Breadcrumb path for a folder: root ancestor first, the folder itself
/// last. A parent chain that loops reports an error instead of hanging.
///
/// ### Responses
/// - `200 OK` with the ordered folder sequence
/// - `404 Not Found` — Unknown folder id
/// - `500 Internal Server Error` — Cycle detected in the parent chain
pub async fn get_folder_path(
    State(app_state): State<AppState>,
    Path(folder_id): Path<i64>,
) -> impl IntoResponse {
    match app_state.store().parent_path(folder_id) {
        Ok(path) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                path.into_iter()
                    .map(FolderResponse::from)
                    .collect::<Vec<_>>(),
                "Folder path retrieved successfully",
            )),
        )
            .into_response(),
        Err(err) => store_error_response(err),
    }
}

/// GET /api/folders/{folder_id}/files
///
/// Files belonging to the folder. Selecting no folder means not calling
/// this at all, so there is no root variant.
pub async fn list_folder_files(
    State(app_state): State<AppState>,
    Path(folder_id): Path<i64>,
) -> impl IntoResponse {
    if app_state.store().folder(folder_id).is_none() {
        return (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Folder not found")),
        )
            .into_response();
    }

    let files: Vec<FileResponse> = app_state
        .store()
        .files_in_folder(folder_id)
        .into_iter()
        .map(FileResponse::from)
        .collect();

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            files,
            "Files retrieved successfully",
        )),
    )
        .into_response()
}

/// GET /api/folders/uploads
///
/// Progress snapshot for simulated uploads, oldest first.
pub async fn list_uploads(State(app_state): State<AppState>) -> impl IntoResponse {
    let entries: Vec<UploadEntry> = app_state.uploads().snapshot();
    (
        StatusCode::OK,
        Json(ApiResponse::success(
            entries,
            "Upload progress retrieved successfully",
        )),
    )
}
