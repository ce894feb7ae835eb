use crate::auth::client::{self, LoginFailure, LoginPayload};
use crate::auth::session;
use crate::response::ApiResponse;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use util::state::AppState;
use validator::Validate;

/// Teacher login form payload. Field names follow the login endpoint
/// contract.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 7, message = "Password must be at least 7 characters long"))]
    pub password: String,

    #[validate(length(min = 1, message = "Please select a class"))]
    pub course_class_id: String,

    #[validate(length(min = 1, message = "Please select a section"))]
    pub section_id: String,

    #[validate(length(min = 1, message = "Please select a subject"))]
    pub subject_id: String,

    pub device_id: Option<String>,
}

#[derive(Debug, Serialize, Default)]
pub struct LoginError {
    pub title: String,
    pub message: String,
}

/// POST /api/auth/login
///
/// Validates the teacher login form and forwards it once to the external
/// auth service. Validation failures are rejected here, before any network
/// call. On success, the session user and access token are persisted under
/// the fixed session keys.
///
/// ### Request Body
/// ```json
/// {
///   "email": "john.doe@school.edu",
///   "password": "password123",
///   "courseClassId": "1",
///   "sectionId": "1",
///   "subjectId": "1"
/// }
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "user": { "username": "john.doe", "email": "john.doe@school.edu", "role": "teacher" },
///     "accessToken": "opaque-upstream-token"
///   },
///   "message": "Welcome back, john.doe!"
/// }
/// ```
///
/// - `400 Bad Request` — local validation failure, or an upstream
///   bad-request/validation failure
/// - `403 Forbidden` — upstream authorization failure ("Access Denied")
/// - `404 Not Found` — no teacher account for the email
/// - `502 Bad Gateway` — upstream server error, unknown error code, or
///   transport failure; `data` carries `{ title, message }`
pub async fn login(
    State(app_state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> impl IntoResponse {
    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(common::format_validation_errors(
                &e,
            ))),
        )
            .into_response();
    }

    let payload = LoginPayload {
        email: req.email,
        password: req.password,
        course_class_id: req.course_class_id,
        section_id: req.section_id,
        subject_id: req.subject_id,
        device_id: req.device_id,
    };

    match client::login(app_state.client(), &payload).await {
        Ok(success) => {
            session::save(app_state.sessions(), &success.user, &success.access_token);
            let username = success.user.username.clone();
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    serde_json::json!({
                        "user": success.user,
                        "accessToken": success.access_token,
                    }),
                    format!("Welcome back, {username}!"),
                )),
            )
                .into_response()
        }
        Err(failure) => {
            let status = match &failure {
                LoginFailure::Validation { .. } | LoginFailure::BadRequest { .. } => {
                    StatusCode::BAD_REQUEST
                }
                LoginFailure::NotFound => StatusCode::NOT_FOUND,
                LoginFailure::Authorization => StatusCode::FORBIDDEN,
                LoginFailure::Server { .. }
                | LoginFailure::Unknown { .. }
                | LoginFailure::Network { .. } => StatusCode::BAD_GATEWAY,
            };
            let title = failure.title().to_string();
            let body = LoginError {
                message: failure.message(),
                title: title.clone(),
            };
            (
                status,
                Json(ApiResponse {
                    success: false,
                    data: body,
                    message: title,
                }),
            )
                .into_response()
        }
    }
}

/// POST /api/auth/logout
///
/// Clears the persisted session keys.
pub async fn logout(State(app_state): State<AppState>) -> impl IntoResponse {
    session::clear(app_state.sessions());
    (
        StatusCode::OK,
        Json(ApiResponse::success((), "Logged out successfully")),
    )
}
