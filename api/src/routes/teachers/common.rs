use serde::{Deserialize, Serialize};
use store::models::Teacher;
use validator::Validate;

/// Payload for creating or fully replacing a teacher account.
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct TeacherRequest {
    #[validate(length(min = 1, max = 50, message = "Username must be between 1 and 50 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 6, max = 100, message = "Password must be between 6 and 100 characters"))]
    pub password: String,
}

/// Teacher record as exposed by the API. The password never leaves the
/// store.
#[derive(Debug, Serialize)]
pub struct TeacherResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Teacher> for TeacherResponse {
    fn from(record: Teacher) -> Self {
        Self {
            id: record.id,
            username: record.username,
            email: record.email,
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}
