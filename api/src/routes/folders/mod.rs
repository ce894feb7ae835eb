//! # Folder Routes Module
//!
//! Defines and wires up routes for the `/api/folders` endpoint group: the
//! hierarchy browser (scoped listing + breadcrumb), folder CRUD, and the
//! simulated uploads.

use axum::{Router, routing::get};
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/folders` route group.
///
/// - `GET /folders` → `list_folders` (scoped by `parent`, filtered by `query`)
/// - `POST /folders` → `create_folder`
/// - `GET /folders/uploads` → `list_uploads`
/// - `GET /folders/{folder_id}/path` → `get_folder_path`
/// - `GET /folders/{folder_id}/files` → `list_folder_files`
/// - `POST /folders/{folder_id}/files` → `upload_files`
/// - `PUT /folders/{folder_id}` → `update_folder`
/// - `DELETE /folders/{folder_id}` → `delete_folder`
///
/// (`DELETE /files/{file_id}` is mounted by the parent router.)
pub fn folder_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get::list_folders).post(post::create_folder))
        .route("/uploads", get(get::list_uploads))
        .route("/{folder_id}/path", get(get::get_folder_path))
        .route(
            "/{folder_id}/files",
            get(get::list_folder_files).post(post::upload_files),
        )
        .route(
            "/{folder_id}",
            axum::routing::put(put::update_folder).delete(delete::delete_folder),
        )
}
