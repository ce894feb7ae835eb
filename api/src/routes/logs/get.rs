use crate::response::ApiResponse;
use axum::{
    Json,
    extract::{Query, State},
    http::{
        HeaderMap, HeaderValue, StatusCode,
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    },
    response::IntoResponse,
};
use chrono::{Duration, Utc};
use serde::Deserialize;
use std::str::FromStr;
use store::LogFilter;
use store::models::{LogCategory, LogEntry, LogLevel};
use util::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LogsQuery {
    /// Substring over message, user name, and details.
    pub query: Option<String>,
    /// `info`, `success`, `warning`, `error`, or `all`.
    pub level: Option<String>,
    /// `auth`, `database`, `file`, `system`, `user`, or `all`.
    pub category: Option<String>,
    /// Relative window: `1h`, `24h`, `7d`, `30d`, or `all`.
    pub range: Option<String>,
}

fn parse_filter(params: &LogsQuery) -> Result<LogFilter, String> {
    let mut filter = LogFilter::new();

    if let Some(q) = &params.query {
        filter = filter.with_query(q.clone());
    }

    match params.level.as_deref() {
        None | Some("all") => {}
        Some(raw) => match LogLevel::from_str(raw) {
            Ok(level) => filter = filter.with_level(level),
            Err(_) => return Err(format!("Invalid level filter: {raw}")),
        },
    }

    match params.category.as_deref() {
        None | Some("all") => {}
        Some(raw) => match LogCategory::from_str(raw) {
            Ok(category) => filter = filter.with_category(category),
            Err(_) => return Err(format!("Invalid category filter: {raw}")),
        },
    }

    match params.range.as_deref() {
        None | Some("all") => {}
        Some(raw) => {
            let window = match raw {
                "1h" => Duration::hours(1),
                "24h" => Duration::hours(24),
                "7d" => Duration::days(7),
                "30d" => Duration::days(30),
                _ => return Err(format!("Invalid range filter: {raw}")),
            };
            filter = filter.with_since(Utc::now() - window);
        }
    }

    Ok(filter)
}

/// GET /api/logs
///
/// Filtered view over the system log entries.
///
/// ### Query Parameters
/// - `query` (optional): Case-insensitive substring over message, user
///   name, and details
/// - `level` (optional): One of `info`/`success`/`warning`/`error`, or `all`
/// - `category` (optional): One of `auth`/`database`/`file`/`system`/`user`,
///   or `all`
/// - `range` (optional): `1h`, `24h`, `7d`, `30d`, or `all`
///
/// ### Responses
/// - `200 OK` with the matching entries
/// - `400 Bad Request` — Unknown level/category/range value
pub async fn list_logs(
    State(app_state): State<AppState>,
    Query(params): Query<LogsQuery>,
) -> impl IntoResponse {
    let filter = match parse_filter(&params) {
        Ok(filter) => filter,
        Err(message) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<Vec<LogEntry>>::error(message)),
            )
                .into_response();
        }
    };

    let entries = app_state.store().logs(&filter);
    (
        StatusCode::OK,
        Json(ApiResponse::success(
            entries,
            "Logs retrieved successfully",
        )),
    )
        .into_response()
}

/// GET /api/logs/export
///
/// CSV download of the filtered log set. Same filters as `GET /logs`.
///
/// The body carries the fixed header row
/// `Timestamp,Level,Category,Message,User,IP Address,Status,Duration` and
/// one row per entry; the download is named `logs-<ISO date>.csv`.
pub async fn export_logs(
    State(app_state): State<AppState>,
    Query(params): Query<LogsQuery>,
) -> impl IntoResponse {
    let filter = match parse_filter(&params) {
        Ok(filter) => filter,
        Err(message) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<()>::error(message)),
            )
                .into_response();
        }
    };

    let entries = app_state.store().logs(&filter);

    let mut csv = String::from("Timestamp,Level,Category,Message,User,IP Address,Status,Duration\n");
    for log in &entries {
        // The message is always quoted; the other optional columns fall
        // back to empty, matching the screen's export.
        csv.push_str(&format!(
            "{},{},{},\"{}\",{},{},{},{}\n",
            log.timestamp.to_rfc3339(),
            log.level,
            log.category,
            log.message.replace('"', "\"\""),
            log.user_name.as_deref().unwrap_or(""),
            log.ip_address.as_deref().unwrap_or(""),
            log.status.as_deref().unwrap_or(""),
            log.duration_ms.map(|d| d.to_string()).unwrap_or_default(),
        ));
    }

    let filename = format!("logs-{}.csv", Utc::now().format("%Y-%m-%d"));
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/csv"));
    headers.insert(
        CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!("attachment; filename={filename}"))
            .unwrap_or_else(|_| HeaderValue::from_static("attachment")),
    );

    (headers, csv).into_response()
}
