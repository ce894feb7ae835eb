//! # Auth Routes Module
//!
//! Teacher login (forwarded to the external auth service), session
//! restore, and logout.

use axum::{
    Router,
    routing::{get, post},
};
use util::state::AppState;

pub mod get;
pub mod post;

/// Builds the `/auth` route group.
///
/// - `POST /auth/login` → `login`
/// - `GET /auth/session` → `get_session`
/// - `POST /auth/logout` → `logout`
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(post::login))
        .route("/session", get(get::get_session))
        .route("/logout", post(post::logout))
}
