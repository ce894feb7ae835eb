pub mod error;
pub mod filters;
pub mod listing;
pub mod models;
pub mod seeders;
mod store;

pub use error::StoreError;
pub use filters::LogFilter;
pub use store::{
    CourseClassInput, DataStore, FileInput, FolderInput, FolderRemoval, SubjectInput,
    TeacherInput,
};
