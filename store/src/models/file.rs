use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The uploading teacher, denormalized onto the file record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOwner {
    pub id: i64,
    pub username: String,
}

/// A file record inside one folder. Uploads are simulated, so `path` is a
/// synthetic location and no bytes exist behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct File {
    pub id: i64,
    pub filename: String,
    pub path: String,
    pub mimetype: String,
    pub size: u64,
    pub folder: i64,
    pub owner: FileOwner,
    pub allowed_users: Vec<i64>,
    pub uploaded_at: DateTime<Utc>,
}
