use crate::response::ApiResponse;
use crate::routes::export::common::export_type;
use axum::{
    Json,
    extract::State,
    http::{
        HeaderMap, HeaderValue, StatusCode,
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    },
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{Map, Value};
use util::exports::ExportStatus;
use util::{config, state::AppState};

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub data_type: String,
    pub format: String,
    /// Defaults to the data type's pre-selected fields.
    pub fields: Option<Vec<String>>,
}

fn bad_request(message: impl Into<String>) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error(message)),
    )
        .into_response()
}

/// Resolves one field of one record to its exported string value. Field
/// ids use the screen's camelCase names; timestamps map onto the stored
/// snake_case columns.
fn field_value(record: &Value, field: &str) -> String {
    let key = match field {
        "createdAt" => "created_at",
        "updatedAt" => "updated_at",
        other => other,
    };
    match record.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// POST /api/export
///
/// Runs a data export and answers with the generated file as a download.
/// A fixed synthetic delay precedes completion; the run is appended to the
/// export history either way.
///
/// ### Request Body
/// ```json
/// { "data_type": "subjects", "format": "csv", "fields": ["name", "code"] }
/// ```
///
/// ### Responses
/// - `200 OK` — the CSV or JSON file, as an attachment
/// - `400 Bad Request` — Unknown data type or field set, an unsupported
///   format (`xlsx`/`pdf` are declared but not generated), or `sections`
///   (proxied data is never exported from local state)
pub async fn run_export(
    State(app_state): State<AppState>,
    Json(req): Json<ExportRequest>,
) -> impl IntoResponse {
    let Some(export_type) = export_type(&req.data_type) else {
        return bad_request(format!("Unknown data type: {}", req.data_type));
    };

    if export_type.id == "sections" {
        return bad_request(
            "Sections are proxied to the external backend and cannot be exported",
        );
    }

    match req.format.as_str() {
        "csv" | "json" => {}
        "xlsx" | "pdf" => {
            return bad_request(format!("Export format '{}' is not supported", req.format));
        }
        other => {
            return bad_request(format!("Unknown export format: {other}"));
        }
    }

    let fields: Vec<String> = match req.fields {
        Some(requested) => {
            let known: Vec<String> = requested
                .into_iter()
                .filter(|f| export_type.has_field(f))
                .collect();
            if known.is_empty() {
                return bad_request("No valid fields selected");
            }
            known
        }
        None => export_type.default_fields(),
    };

    // Exports are simulated work: one fixed pause, not cancellable.
    tokio::time::sleep(std::time::Duration::from_millis(config::export_delay_ms())).await;

    let records: Vec<Value> = match export_type.id {
        "course-classes" => app_state
            .store()
            .course_classes()
            .iter()
            .map(|r| serde_json::to_value(r).unwrap_or(Value::Null))
            .collect(),
        "subjects" => app_state
            .store()
            .subjects()
            .iter()
            .map(|r| serde_json::to_value(r).unwrap_or(Value::Null))
            .collect(),
        "teachers" => app_state
            .store()
            .teachers()
            .iter()
            .map(|r| serde_json::to_value(r).unwrap_or(Value::Null))
            .collect(),
        _ => Vec::new(),
    };

    let content = match req.format.as_str() {
        "csv" => {
            let mut csv = common::csv::row(
                &fields.iter().map(|f| f.to_string()).collect::<Vec<_>>(),
            );
            csv.push('\n');
            for record in &records {
                let row: Vec<String> = fields
                    .iter()
                    .map(|f| common::csv::escape_field(&field_value(record, f)))
                    .collect();
                csv.push_str(&common::csv::row(&row));
                csv.push('\n');
            }
            csv
        }
        _ => {
            let rows: Vec<Value> = records
                .iter()
                .map(|record| {
                    let mut object = Map::new();
                    for field in &fields {
                        object.insert(
                            field.clone(),
                            Value::String(field_value(record, field)),
                        );
                    }
                    Value::Object(object)
                })
                .collect();
            serde_json::to_string_pretty(&rows).unwrap_or_else(|_| "[]".to_string())
        }
    };

    app_state.exports().record(
        export_type.id,
        req.format.clone(),
        ExportStatus::Success,
        content.len() as u64,
        fields,
    );

    let filename = format!(
        "{}-{}.{}",
        export_type.id,
        Utc::now().format("%Y-%m-%d"),
        req.format
    );
    let content_type = if req.format == "csv" {
        "text/csv"
    } else {
        "application/json"
    };

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    headers.insert(
        CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!("attachment; filename={filename}"))
            .unwrap_or_else(|_| HeaderValue::from_static("attachment")),
    );

    (headers, content).into_response()
}
