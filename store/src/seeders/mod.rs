//! Sample-data seeders.
//!
//! Each seeder reproduces the record set the dashboard screens shipped with,
//! fixed timestamps included, so list output is deterministic.

use crate::DataStore;
use chrono::{DateTime, Utc};

pub mod course_class_seeder;
pub mod file_seeder;
pub mod folder_seeder;
pub mod log_seeder;
pub mod subject_seeder;
pub mod teacher_seeder;

/// Populates every collection. Order matters: folders reference teachers,
/// files reference folders.
pub fn seed_all(store: &DataStore) {
    tracing::info!("Seeding sample data...");
    course_class_seeder::seed(store);
    subject_seeder::seed(store);
    teacher_seeder::seed(store);
    folder_seeder::seed(store);
    file_seeder::seed(store);
    log_seeder::seed(store);
}

/// Parses a fixed RFC 3339 seed timestamp.
pub(crate) fn ts(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .expect("seed timestamp must be valid RFC 3339")
        .with_timezone(&Utc)
}
