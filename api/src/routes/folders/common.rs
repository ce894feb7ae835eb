use crate::response::ApiResponse;
use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use serde::{Deserialize, Serialize};
use store::models::{EntityRef, File, FileOwner, Folder};
use store::{FolderInput, StoreError};
use validator::Validate;

/// Denormalized reference as the folder form submits it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EntityRefDto {
    pub id: i64,
    pub name: String,
}

impl From<EntityRefDto> for EntityRef {
    fn from(dto: EntityRefDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
        }
    }
}

/// Payload for creating or fully replacing a folder. The form submits all
/// fields every time; a teacher selection is mandatory.
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct FolderRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Folder name must be between 1 and 100 characters"
    ))]
    pub folder_name: String,

    pub parent: Option<i64>,
    pub allowed_users: i64,
    pub course_class: Option<EntityRefDto>,
    pub section: Option<EntityRefDto>,
    pub subject: Option<EntityRefDto>,
}

impl FolderRequest {
    /// Store input with the folder name normalized to uppercase, matching
    /// the form's pre-submission transform.
    pub fn into_input(self) -> FolderInput {
        FolderInput {
            folder_name: self.folder_name.to_uppercase(),
            parent: self.parent,
            allowed_users: self.allowed_users,
            course_class: self.course_class.map(EntityRef::from),
            section: self.section.map(EntityRef::from),
            subject: self.subject.map(EntityRef::from),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FolderResponse {
    pub id: i64,
    pub folder_name: String,
    pub parent: Option<i64>,
    pub files: Vec<i64>,
    pub allowed_users: i64,
    pub course_class: Option<EntityRef>,
    pub section: Option<EntityRef>,
    pub subject: Option<EntityRef>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Folder> for FolderResponse {
    fn from(record: Folder) -> Self {
        Self {
            id: record.id,
            folder_name: record.folder_name,
            parent: record.parent,
            files: record.files,
            allowed_users: record.allowed_users,
            course_class: record.course_class,
            section: record.section,
            subject: record.subject,
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FileResponse {
    pub id: i64,
    pub filename: String,
    pub path: String,
    pub mimetype: String,
    pub size: u64,
    pub folder: i64,
    pub owner: FileOwner,
    pub allowed_users: Vec<i64>,
    pub uploaded_at: String,
}

impl From<File> for FileResponse {
    fn from(record: File) -> Self {
        Self {
            id: record.id,
            filename: record.filename,
            path: record.path,
            mimetype: record.mimetype,
            size: record.size,
            folder: record.folder,
            owner: record.owner,
            allowed_users: record.allowed_users,
            uploaded_at: record.uploaded_at.to_rfc3339(),
        }
    }
}

/// Maps store failures onto HTTP statuses: missing records are 404, bad
/// references and rejected re-parenting are 400, a detected parent-chain
/// cycle is 500 (the data itself is corrupt).
pub fn store_error_response(err: StoreError) -> Response {
    let status = match &err {
        StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
        StoreError::InvalidReference { .. } | StoreError::SelfParent => StatusCode::BAD_REQUEST,
        StoreError::CycleDetected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ApiResponse::<()>::error(err.to_string()))).into_response()
}
