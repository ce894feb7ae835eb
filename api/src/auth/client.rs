//! Client for the external login endpoint.
//!
//! The service never authenticates anyone itself: credentials are forwarded
//! once to the upstream auth service, and whatever comes back is decoded
//! into a closed set of failure kinds. The set mirrors the upstream error
//! contract (`{ code, message, error, errors }`), replacing ad-hoc string
//! matching at the call sites with one exhaustive enum.

use serde::{Deserialize, Serialize};
use util::config;

/// The forwarded login request. Field names follow the upstream contract.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
    pub course_class_id: String,
    pub section_id: String,
    pub subject_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
}

/// The authenticated user as the upstream reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
    pub email: String,
    pub role: String,
}

/// Successful login response from the upstream service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginSuccess {
    pub user: SessionUser,
    pub access_token: String,
}

/// Error payload shape the upstream may answer with. All fields optional;
/// transport failures produce none of them.
#[derive(Debug, Default, Deserialize)]
struct UpstreamErrorBody {
    code: Option<String>,
    message: Option<String>,
    error: Option<String>,
    errors: Option<serde_json::Value>,
}

/// Every way a login attempt can fail, as one closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginFailure {
    /// Upstream field validation failed; carries the first field message.
    Validation { message: String },
    /// No teacher account matches the email.
    NotFound,
    /// The request was malformed or the class/section/subject selection
    /// did not resolve.
    BadRequest { message: String },
    /// The account is not permitted to log in as a teacher.
    Authorization,
    /// The upstream reported an internal failure.
    Server { message: Option<String> },
    /// The upstream answered with a code outside the known set.
    Unknown { message: Option<String> },
    /// No structured payload at all: transport-level failure.
    Network { message: String },
}

const GENERIC_MESSAGE: &str = "An unexpected error occurred during teacher login";

impl LoginFailure {
    fn from_error_body(body: UpstreamErrorBody) -> Self {
        let fallback = body.message.clone().or(body.error.clone());

        match body.code.as_deref() {
            Some("Validation Error") => {
                let message = body
                    .errors
                    .as_ref()
                    .and_then(|errors| errors.as_object())
                    .and_then(|fields| {
                        fields
                            .values()
                            .find_map(|entry| entry.get("msg").and_then(|m| m.as_str()))
                    })
                    .unwrap_or("Please check your input and try again")
                    .to_string();
                Self::Validation { message }
            }
            Some("Not Found") => Self::NotFound,
            Some("BadRequest") => Self::BadRequest {
                message: fallback.unwrap_or_else(|| GENERIC_MESSAGE.to_string()),
            },
            Some("Authorization Error") => Self::Authorization,
            Some("Server Error") => Self::Server { message: fallback },
            _ => Self::Unknown { message: fallback },
        }
    }

    /// Short failure title shown to the user.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "Validation Error",
            Self::NotFound => "Teacher Not Found",
            Self::BadRequest { .. } => "Invalid Request",
            Self::Authorization => "Access Denied",
            Self::Server { .. } => "Server Error",
            Self::Unknown { .. } | Self::Network { .. } => "Teacher Login Failed",
        }
    }

    /// Full user-facing failure description.
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message } => message.clone(),
            Self::NotFound => "No teacher account found with this email address".to_string(),
            Self::BadRequest { message } => {
                if message.contains("courseClassId, sectionId, and subjectId are required") {
                    "Please select a class, section, and subject for teacher login".to_string()
                } else if message.contains("Invalid courseClass, section, or subject selection") {
                    "Invalid class, section, or subject selection. Please try again.".to_string()
                } else {
                    message.clone()
                }
            }
            Self::Authorization => {
                "You do not have permission to login as a teacher".to_string()
            }
            Self::Server { message } | Self::Unknown { message } => message
                .clone()
                .unwrap_or_else(|| GENERIC_MESSAGE.to_string()),
            Self::Network { message } => message.clone(),
        }
    }
}

/// Forwards the login request once to `<auth_base_url>/login`.
///
/// No retries: any transport error or unparseable success body surfaces as
/// `LoginFailure::Network`.
pub async fn login(
    client: &reqwest::Client,
    payload: &LoginPayload,
) -> Result<LoginSuccess, LoginFailure> {
    let url = format!("{}/login", config::auth_base_url());

    let response = client
        .post(&url)
        .json(payload)
        .send()
        .await
        .map_err(|e| LoginFailure::Network {
            message: e.to_string(),
        })?;

    if response.status().is_success() {
        response
            .json::<LoginSuccess>()
            .await
            .map_err(|e| LoginFailure::Network {
                message: format!("Failed to parse login response: {e}"),
            })
    } else {
        let body = response
            .json::<UpstreamErrorBody>()
            .await
            .unwrap_or_default();
        Err(LoginFailure::from_error_body(body))
    }
}
