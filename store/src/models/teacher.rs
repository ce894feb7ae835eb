use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a teacher account.
///
/// The password is carried as sample-data plaintext; API responses never
/// include it (the response DTO omits the field).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
