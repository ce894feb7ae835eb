use crate::auth::session;
use crate::response::ApiResponse;
use crate::routes::folders::common::{FolderRequest, FolderResponse, store_error_response};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use store::FileInput;
use store::models::FileOwner;
use util::{config, state::AppState};
use validator::Validate;

/// POST /api/folders
///
/// Creates a folder. The folder name is normalized to uppercase before it
/// is stored.
///
/// ### Request Body
/// ```json
/// {
///   "folder_name": "algebra",
///   "parent": 1,
///   "allowed_users": 2,
///   "course_class": { "id": 1, "name": "Class 10A" },
///   "section": { "id": 1, "name": "Section A" },
///   "subject": { "id": 1, "name": "Mathematics" }
/// }
/// ```
///
/// ### Responses
/// - `201 Created` with the new record (`folder_name` uppercased)
/// - `400 Bad Request` — Validation failure or dangling parent/teacher
pub async fn create_folder(
    State(app_state): State<AppState>,
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

    match app_state.store().create_folder(req.into_input()) {
        Ok(record) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                FolderResponse::from(record),
                "Folder created successfully",
            )),
        )
            .into_response(),
        Err(err) => store_error_response(err),
    }
}

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct UploadFileRequest {
    #[validate(length(min = 1, message = "Filename is required"))]
    pub filename: String,
    /// Guessed from the filename when absent.
    pub mimetype: Option<String>,
    pub size: u64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UploadRequest {
    #[validate(length(min = 1, message = "At least one file is required"), nested)]
    pub files: Vec<UploadFileRequest>,
}

#[derive(Debug, Default, Serialize)]
pub struct UploadStartedResponse {
    pub upload_ids: Vec<u64>,
}

/// POST /api/folders/{folder_id}/files
///
/// Starts a simulated upload for each named file. Progress advances from 0
/// to 100 in ten-point steps with a fixed delay between steps on a
/// background task; the file record lands in the store when its upload
/// completes. Once started, an upload cannot be cancelled.
///
/// `folder_id` 0 stands for "no folder selected" and falls back to the
/// default (first) folder.
///
/// ### Responses
/// - `202 Accepted` with the upload ids to watch via `GET /folders/uploads`
/// - `400 Bad Request` — Empty file list or missing filename
/// - `404 Not Found` — Unknown target folder
pub async fn upload_files(
    State(app_state): State<AppState>,
    Path(folder_id): Path<i64>,
    Json(req): Json<UploadRequest>,
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

    // Root sentinel falls back to the first folder, the browser's default
    // upload target.
    let target = if folder_id == 0 {
        app_state.store().folders().first().map(|f| f.id)
    } else {
        app_state.store().folder(folder_id).map(|f| f.id)
    };
    let Some(target) = target else {
        return (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Folder not found")),
        )
            .into_response();
    };

    let owner_name = session::load(app_state.sessions())
        .map(|s| s.user.username)
        .unwrap_or_else(|| "current.user".to_string());
    let step_ms = config::upload_step_ms();

    let mut upload_ids = Vec::with_capacity(req.files.len());
    for file in req.files {
        let upload_id = app_state.uploads().begin(&file.filename);
        upload_ids.push(upload_id);

        let uploads = app_state.uploads_clone();
        let store = app_state.store_clone();
        let owner_name = owner_name.clone();

        tokio::spawn(async move {
            for progress in (0..=100u8).step_by(10) {
                tokio::time::sleep(std::time::Duration::from_millis(step_ms)).await;
                uploads.advance(upload_id, progress);
            }

            let mimetype = file.mimetype.unwrap_or_else(|| {
                mime_guess::from_path(&file.filename)
                    .first_or_octet_stream()
                    .to_string()
            });

            let result = store.add_file(FileInput {
                path: format!("/uploads/{}", file.filename),
                filename: file.filename,
                mimetype,
                size: file.size,
                folder: target,
                owner: FileOwner {
                    id: 1,
                    username: owner_name,
                },
                allowed_users: Vec::new(),
            });

            match result {
                Ok(_) => uploads.complete(upload_id),
                Err(err) => {
                    tracing::warn!("Upload {upload_id} failed to register file: {err}");
                    uploads.fail(upload_id, err.to_string());
                }
            }
        });
    }

    (
        StatusCode::ACCEPTED,
        Json(ApiResponse::success(
            UploadStartedResponse { upload_ids },
            "Upload started",
        )),
    )
        .into_response()
}
