use serde::{Deserialize, Serialize};
use store::models::CourseClass;
use validator::Validate;

/// Payload for creating or fully replacing a course class. The edit form
/// always submits every field, so create and update share the shape.
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CourseClassRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(length(max = 500, message = "Description must be less than 500 characters"))]
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CourseClassResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<CourseClass> for CourseClassResponse {
    fn from(record: CourseClass) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}
