use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a taught subject with its short code (e.g. "MATH101").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
