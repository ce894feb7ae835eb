use crate::response::ApiResponse;
use crate::routes::common::{ListQuery, project_columns};
use crate::routes::subjects::common::SubjectResponse;
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
pub struct SubjectListResponse {
    pub subjects: Vec<Value>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

/// GET /api/subjects
///
/// Retrieve a page of subjects with optional filtering and sorting.
///
/// ### Query Parameters
/// - `page`, `per_page`, `sort`, `query`, `columns` — as for the other list
///   endpoints. The global filter scans name, code, and description;
///   sortable columns are `name`, `code`, `description`, `created_at`.
///
/// ### Examples
/// ```http
/// GET /api/subjects?query=mathematics
/// GET /api/subjects?sort=code&per_page=20
/// ```
pub async fn list_subjects(
    State(app_state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    if let Err(e) = query.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<SubjectListResponse>::error(
                common::format_validation_errors(&e),
            )),
        )
            .into_response();
    }
    if let Err(message) = query.check_per_page() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<SubjectListResponse>::error(message)),
        )
            .into_response();
    }

    let mut records = app_state.store().subjects();

    if let Some(q) = &query.query {
        records.retain(|record| {
            matches_query(
                &[
                    record.name.as_str(),
                    record.code.as_str(),
                    record.description.as_deref().unwrap_or(""),
                ],
                q,
            )
        });
    }

    if let Some(sort) = query.sort() {
        match sort.field.as_str() {
            "name" => records.sort_by(|a, b| a.name.cmp(&b.name)),
            "code" => records.sort_by(|a, b| a.code.cmp(&b.code)),
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
        .map(SubjectResponse::from)
        .map(|row| serde_json::to_value(row).unwrap_or(Value::Null))
        .collect();
    let rows = match query.columns() {
        Some(columns) => project_columns(rows, &columns),
        None => rows,
    };

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            SubjectListResponse {
                subjects: rows,
                page: page.page,
                per_page: page.per_page,
                total: page.total,
            },
            "Subjects retrieved successfully",
        )),
    )
        .into_response()
}

/// GET /api/subjects/{subject_id}
///
/// Fetch a single subject by ID.
pub async fn get_subject(
    State(app_state): State<AppState>,
    Path(subject_id): Path<i64>,
) -> impl IntoResponse {
    match app_state.store().subject(subject_id) {
        Some(record) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                SubjectResponse::from(record),
                "Subject retrieved successfully",
            )),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Subject not found")),
        )
            .into_response(),
    }
}
