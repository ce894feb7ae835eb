//! # Subject Routes Module
//!
//! Defines and wires up routes for the `/api/subjects` endpoint group.
//! Same per-verb layout as the other entity groups.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use delete::delete_subject;
use get::{get_subject, list_subjects};
use post::create_subject;
use put::update_subject;
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/subjects` route group.
///
/// - `GET /subjects` → `list_subjects`
/// - `POST /subjects` → `create_subject`
/// - `GET /subjects/{subject_id}` → `get_subject`
/// - `PUT /subjects/{subject_id}` → `update_subject`
/// - `DELETE /subjects/{subject_id}` → `delete_subject`
pub fn subject_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_subjects))
        .route("/", post(create_subject))
        .route("/{subject_id}", get(get_subject))
        .route("/{subject_id}", put(update_subject))
        .route("/{subject_id}", delete(delete_subject))
}
