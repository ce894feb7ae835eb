use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a top-level school class/grade grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseClass {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
