use crate::response::ApiResponse;
use crate::routes::common::{ListQuery, project_columns};
use crate::routes::course_classes::common::CourseClassResponse;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use serde_json::Value;
use store::listing::{matches_query, paginate};
use util::state::AppState;
use validator::Validate;

#[derive(Debug, Default, Serialize)]
pub struct CourseClassListResponse {
    pub course_classes: Vec<Value>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

/// GET /api/course-classes
///
/// Retrieve a page of course classes with optional filtering and sorting.
///
/// ### Query Parameters
/// - `page` (optional): Page number (default: 1, min: 1)
/// - `per_page` (optional): Page size, one of 10/20/30/40/50 (default: 10)
/// - `query` (optional): Case-insensitive partial match against name OR description
/// - `sort` (optional): Column to sort by (`name`, `description`, `created_at`).
///   Prefix with `-` for descending; omit for insertion order.
/// - `columns` (optional): Comma-separated visible columns; `id` always kept
///
/// ### Examples
/// ```http
/// GET /api/course-classes?page=2&per_page=10
/// GET /api/course-classes?query=mathematics&sort=-name
/// GET /api/course-classes?columns=name
/// ```
///
/// ### Responses
/// - `200 OK` with `{ course_classes, page, per_page, total }`
/// - `400 Bad Request` - Invalid query parameters
pub async fn list_course_classes(
    State(app_state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    if let Err(e) = query.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<CourseClassListResponse>::error(
                common::format_validation_errors(&e),
            )),
        )
            .into_response();
    }
    if let Err(message) = query.check_per_page() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<CourseClassListResponse>::error(message)),
        )
            .into_response();
    }

    let mut records = app_state.store().course_classes();

    if let Some(q) = &query.query {
        records.retain(|record| {
            matches_query(
                &[
                    record.name.as_str(),
                    record.description.as_deref().unwrap_or(""),
                ],
                q,
            )
        });
    }

    if let Some(sort) = query.sort() {
        match sort.field.as_str() {
            "name" => records.sort_by(|a, b| a.name.cmp(&b.name)),
            "description" => records.sort_by(|a, b| a.description.cmp(&b.description)),
            "created_at" => records.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            _ => {}
        }
        if sort.descending {
            records.reverse();
        }
    }

    let page = paginate(records, query.page(), query.per_page());
    let rows: Vec<Value> = page
        .items
        .into_iter()
        .map(CourseClassResponse::from)
        .map(|row| serde_json::to_value(row).unwrap_or(Value::Null))
        .collect();
    let rows = match query.columns() {
        Some(columns) => project_columns(rows, &columns),
        None => rows,
    };

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            CourseClassListResponse {
                course_classes: rows,
                page: page.page,
                per_page: page.per_page,
                total: page.total,
            },
            "Course classes retrieved successfully",
        )),
    )
        .into_response()
}

/// GET /api/course-classes/{class_id}
///
/// Fetch a single course class by ID.
///
/// ### Responses
/// - `200 OK`: Course class found
/// - `404 Not Found`: Course class does not exist
pub async fn get_course_class(
    State(app_state): State<AppState>,
    Path(class_id): Path<i64>,
) -> impl IntoResponse {
    match app_state.store().course_class(class_id) {
        Some(record) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                CourseClassResponse::from(record),
                "Course class retrieved successfully",
            )),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Course class not found")),
        )
            .into_response(),
    }
}
