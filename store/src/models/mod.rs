pub mod course_class;
pub mod file;
pub mod folder;
pub mod log_entry;
pub mod subject;
pub mod teacher;

pub use course_class::CourseClass;
pub use file::{File, FileOwner};
pub use folder::{EntityRef, Folder};
pub use log_entry::{LogCategory, LogEntry, LogLevel};
pub use subject::Subject;
pub use teacher::Teacher;
