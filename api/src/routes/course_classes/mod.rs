//! # Course Class Routes Module
//!
//! Defines and wires up routes for the `/api/course-classes` endpoint group.
//!
//! ## Structure
//! - `get.rs` — GET handlers (list with sort/filter/pagination, fetch by id)
//! - `post.rs` — POST handlers (create)
//! - `put.rs` — PUT handlers (update)
//! - `delete.rs` — DELETE handlers (delete)
//! - `common.rs` — request/response DTOs shared by the verbs

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use delete::delete_course_class;
use get::{get_course_class, list_course_classes};
use post::create_course_class;
use put::update_course_class;
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/course-classes` route group.
///
/// - `GET /course-classes` → `list_course_classes`
/// - `POST /course-classes` → `create_course_class`
/// - `GET /course-classes/{class_id}` → `get_course_class`
/// - `PUT /course-classes/{class_id}` → `update_course_class`
/// - `DELETE /course-classes/{class_id}` → `delete_course_class`
pub fn course_class_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_course_classes))
        .route("/", post(create_course_class))
        .route("/{class_id}", get(get_course_class))
        .route("/{class_id}", put(update_course_class))
        .route("/{class_id}", delete(delete_course_class))
}
