use crate::response::ApiResponse;
use crate::routes::export::common::EXPORT_TYPES;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use util::exports::ExportRecord;
use util::state::AppState;

#[derive(Debug, Serialize)]
pub struct ExportFieldInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub selected: bool,
}

#[derive(Debug, Serialize)]
pub struct ExportTypeInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub record_count: u64,
    pub fields: Vec<ExportFieldInfo>,
}

/// GET /api/export/types
///
/// The exportable data types with their field options and live record
/// counts. Sections are listed for completeness but hold no local records
/// (their data lives behind the proxy).
pub async fn list_export_types(State(app_state): State<AppState>) -> impl IntoResponse {
    let store = app_state.store();
    let types: Vec<ExportTypeInfo> = EXPORT_TYPES
        .iter()
        .map(|ty| {
            let record_count = match ty.id {
                "course-classes" => store.course_classes().len() as u64,
                "subjects" => store.subjects().len() as u64,
                "teachers" => store.teachers().len() as u64,
                _ => 0,
            };
            ExportTypeInfo {
                id: ty.id,
                name: ty.name,
                description: ty.description,
                record_count,
                fields: ty
                    .fields
                    .iter()
                    .map(|f| ExportFieldInfo {
                        id: f.id,
                        name: f.name,
                        description: f.description,
                        selected: f.selected,
                    })
                    .collect(),
            }
        })
        .collect();

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            types,
            "Export types retrieved successfully",
        )),
    )
}

/// GET /api/export/history
///
/// Export runs, newest first.
pub async fn list_export_history(State(app_state): State<AppState>) -> impl IntoResponse {
    let records: Vec<ExportRecord> = app_state.exports().list();
    (
        StatusCode::OK,
        Json(ApiResponse::success(
            records,
            "Export history retrieved successfully",
        )),
    )
}
