use serde::{Deserialize, Serialize};
use store::models::Subject;
use validator::Validate;

lazy_static::lazy_static! {
    static ref SUBJECT_CODE_REGEX: regex::Regex =
        regex::Regex::new("^[A-Z]{2,4}[0-9]{2,4}$").unwrap();
}

/// Payload for creating or fully replacing a subject.
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct SubjectRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(regex(
        path = *SUBJECT_CODE_REGEX,
        message = "Subject code must be uppercase letters followed by digits, e.g. MATH101"
    ))]
    pub code: String,

    #[validate(length(max = 500, message = "Description must be less than 500 characters"))]
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SubjectResponse {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Subject> for SubjectResponse {
    fn from(record: Subject) -> Self {
        Self {
            id: record.id,
            name: record.name,
            code: record.code,
            description: record.description,
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}
