use crate::response::ApiResponse;
use crate::routes::common::{ListQuery, project_columns};
use crate::routes::teachers::common::TeacherResponse;
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
pub struct TeacherListResponse {
    pub teachers: Vec<Value>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

/// GET /api/teachers
///
/// Retrieve a page of teachers with optional filtering and sorting.
///
/// The global filter scans username and email; sortable columns are
/// `username`, `email`, `created_at`.
pub async fn list_teachers(
    State(app_state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    if let Err(e) = query.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<TeacherListResponse>::error(
                common::format_validation_errors(&e),
            )),
        )
            .into_response();
    }
    if let Err(message) = query.check_per_page() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<TeacherListResponse>::error(message)),
        )
            .into_response();
    }

    let mut records = app_state.store().teachers();

    if let Some(q) = &query.query {
        records
            .retain(|record| matches_query(&[record.username.as_str(), record.email.as_str()], q));
    }

    if let Some(sort) = query.sort() {
        match sort.field.as_str() {
            "username" => records.sort_by(|a, b| a.username.cmp(&b.username)),
            "email" => records.sort_by(|a, b| a.email.cmp(&b.email)),
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
        .map(TeacherResponse::from)
        .map(|row| serde_json::to_value(row).unwrap_or(Value::Null))
        .collect();
    let rows = match query.columns() {
        Some(columns) => project_columns(rows, &columns),
        None => rows,
    };

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            TeacherListResponse {
                teachers: rows,
                page: page.page,
                per_page: page.per_page,
                total: page.total,
            },
            "Teachers retrieved successfully",
        )),
    )
        .into_response()
}

/// GET /api/teachers/{teacher_id}
///
/// Fetch a single teacher by ID.
pub async fn get_teacher(
    State(app_state): State<AppState>,
    Path(teacher_id): Path<i64>,
) -> impl IntoResponse {
    match app_state.store().teacher(teacher_id) {
        Some(record) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                TeacherResponse::from(record),
                "Teacher retrieved successfully",
            )),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Teacher not found")),
        )
            .into_response(),
    }
}
