use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Denormalized reference to a related record, carried on folders so list
/// rows can render class/section/subject names without extra lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: i64,
    pub name: String,
}

/// A hierarchical container tying files to a class/section/subject and a
/// single permitted teacher.
///
/// `parent` is a nullable self-reference; `None` marks a root folder.
/// `files` is the display-level id list maintained alongside the file
/// records themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub id: i64,
    pub folder_name: String,
    pub parent: Option<i64>,
    pub files: Vec<i64>,
    pub allowed_users: i64,
    pub course_class: Option<EntityRef>,
    pub section: Option<EntityRef>,
    pub subject: Option<EntityRef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
