//! HTTP route entry point for `/api/...`.
//!
//! Routes are organized by domain, one module per entity group:
//! - `/health` → liveness check
//! - `/auth` → teacher login, session restore, logout
//! - `/course-classes`, `/subjects`, `/teachers` → local entity CRUD
//! - `/sections` → pass-through proxy to the external backend
//! - `/folders` (+ `/files/{id}`) → folder hierarchy browser and uploads
//! - `/logs` → system log viewer and CSV export
//! - `/export` → data export screen

use crate::routes::{
    auth::auth_routes, course_classes::course_class_routes, export::export_routes,
    folders::folder_routes, health::health_routes, logs::log_routes, sections::section_routes,
    subjects::subject_routes, teachers::teacher_routes,
};
use axum::{Router, routing::delete};
use util::state::AppState;

pub mod auth;
pub mod common;
pub mod course_classes;
pub mod export;
pub mod folders;
pub mod health;
pub mod logs;
pub mod sections;
pub mod subjects;
pub mod teachers;

/// Builds the complete application router for all HTTP endpoints.
///
/// The returned router carries its `AppState` already applied, so callers
/// only nest it under the `/api` prefix.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/auth", auth_routes())
        .nest("/course-classes", course_class_routes())
        .nest("/sections", section_routes())
        .nest("/subjects", subject_routes())
        .nest("/teachers", teacher_routes())
        .nest("/folders", folder_routes())
        .route("/files/{file_id}", delete(folders::delete::delete_file))
        .nest("/logs", log_routes())
        .nest("/export", export_routes())
        .with_state(app_state)
}
