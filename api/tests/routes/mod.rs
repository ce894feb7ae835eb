pub mod auth_test;
pub mod course_classes_test;
pub mod export_test;
pub mod logs_test;
pub mod sections_test;
pub mod subjects_test;
pub mod teachers_test;
