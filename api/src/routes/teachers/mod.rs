//! # Teacher Routes Module
//!
//! Defines and wires up routes for the `/api/teachers` endpoint group.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use delete::delete_teacher;
use get::{get_teacher, list_teachers};
use post::create_teacher;
use put::update_teacher;
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/teachers` route group.
///
/// - `GET /teachers` → `list_teachers`
/// - `POST /teachers` → `create_teacher`
/// - `GET /teachers/{teacher_id}` → `get_teacher`
/// - `PUT /teachers/{teacher_id}` → `update_teacher`
/// - `DELETE /teachers/{teacher_id}` → `delete_teacher`
pub fn teacher_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_teachers))
        .route("/", post(create_teacher))
        .route("/{teacher_id}", get(get_teacher))
        .route("/{teacher_id}", put(update_teacher))
        .route("/{teacher_id}", delete(delete_teacher))
}
