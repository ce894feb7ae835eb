//! Central in-memory data store.
//!
//! Every entity collection lives behind this one interface with explicit
//! create/update/delete operations, so all views read and mutate the same
//! records instead of holding per-screen copies. There is no persistence:
//! the store is seeded at startup and state lives for the process lifetime.
//!
//! Locking: a single `RwLock` around all collections. Critical sections are
//! short and never held across await points.

use crate::error::StoreError;
use crate::filters::LogFilter;
use crate::listing::matches_query;
use crate::models::{
    CourseClass, EntityRef, File, FileOwner, Folder, LogEntry, Subject, Teacher,
};
use chrono::Utc;
use std::collections::HashSet;
use std::sync::RwLock;

/// Input for creating or fully replacing a course class.
#[derive(Debug, Clone)]
pub struct CourseClassInput {
    pub name: String,
    pub description: Option<String>,
}

/// Input for creating or fully replacing a subject.
#[derive(Debug, Clone)]
pub struct SubjectInput {
    pub name: String,
    pub code: String,
    pub description: Option<String>,
}

/// Input for creating or fully replacing a teacher.
#[derive(Debug, Clone)]
pub struct TeacherInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Input for creating or fully replacing a folder.
///
/// The class/section/subject references arrive denormalized (id + name) and
/// are stored as given; only `parent` and `allowed_users` are checked
/// against live collections.
#[derive(Debug, Clone)]
pub struct FolderInput {
    pub folder_name: String,
    pub parent: Option<i64>,
    pub allowed_users: i64,
    pub course_class: Option<EntityRef>,
    pub section: Option<EntityRef>,
    pub subject: Option<EntityRef>,
}

/// Input for registering a completed (simulated) upload.
#[derive(Debug, Clone)]
pub struct FileInput {
    pub filename: String,
    pub path: String,
    pub mimetype: String,
    pub size: u64,
    pub folder: i64,
    pub owner: FileOwner,
    pub allowed_users: Vec<i64>,
}

/// What a folder deletion actually removed or moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FolderRemoval {
    pub files_removed: usize,
    pub children_reparented: usize,
}

#[derive(Default)]
struct Collections {
    course_classes: Vec<CourseClass>,
    subjects: Vec<Subject>,
    teachers: Vec<Teacher>,
    folders: Vec<Folder>,
    files: Vec<File>,
    logs: Vec<LogEntry>,
    next_course_class_id: i64,
    next_subject_id: i64,
    next_teacher_id: i64,
    next_folder_id: i64,
    next_file_id: i64,
}

/// The shared entity store. Cheap to share behind an `Arc`.
#[derive(Default)]
pub struct DataStore {
    inner: RwLock<Collections>,
}

impl DataStore {
    /// Creates an empty store with no seeded records.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store populated with the sample data set.
    pub fn seeded() -> Self {
        let store = Self::new();
        crate::seeders::seed_all(&store);
        store
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Collections> {
        self.inner.read().expect("data store lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Collections> {
        self.inner.write().expect("data store lock poisoned")
    }

    // --- Course classes ---

    pub fn course_classes(&self) -> Vec<CourseClass> {
        self.read().course_classes.clone()
    }

    pub fn course_class(&self, id: i64) -> Option<CourseClass> {
        self.read()
            .course_classes
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    pub fn create_course_class(&self, input: CourseClassInput) -> CourseClass {
        let mut guard = self.write();
        guard.next_course_class_id += 1;
        let now = Utc::now();
        let record = CourseClass {
            id: guard.next_course_class_id,
            name: input.name,
            description: input.description,
            created_at: now,
            updated_at: now,
        };
        guard.course_classes.push(record.clone());
        record
    }

    pub fn update_course_class(
        &self,
        id: i64,
        input: CourseClassInput,
    ) -> Result<CourseClass, StoreError> {
        let mut guard = self.write();
        let record = guard
            .course_classes
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(StoreError::not_found("course class", id))?;
        record.name = input.name;
        record.description = input.description;
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    pub fn delete_course_class(&self, id: i64) -> Result<(), StoreError> {
        let mut guard = self.write();
        let before = guard.course_classes.len();
        guard.course_classes.retain(|c| c.id != id);
        if guard.course_classes.len() == before {
            return Err(StoreError::not_found("course class", id));
        }
        Ok(())
    }

    // --- Subjects ---

    pub fn subjects(&self) -> Vec<Subject> {
        self.read().subjects.clone()
    }

    pub fn subject(&self, id: i64) -> Option<Subject> {
        self.read().subjects.iter().find(|s| s.id == id).cloned()
    }

    pub fn create_subject(&self, input: SubjectInput) -> Subject {
        let mut guard = self.write();
        guard.next_subject_id += 1;
        let now = Utc::now();
        let record = Subject {
            id: guard.next_subject_id,
            name: input.name,
            code: input.code,
            description: input.description,
            created_at: now,
            updated_at: now,
        };
        guard.subjects.push(record.clone());
        record
    }

    pub fn update_subject(&self, id: i64, input: SubjectInput) -> Result<Subject, StoreError> {
        let mut guard = self.write();
        let record = guard
            .subjects
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(StoreError::not_found("subject", id))?;
        record.name = input.name;
        record.code = input.code;
        record.description = input.description;
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    pub fn delete_subject(&self, id: i64) -> Result<(), StoreError> {
        let mut guard = self.write();
        let before = guard.subjects.len();
        guard.subjects.retain(|s| s.id != id);
        if guard.subjects.len() == before {
            return Err(StoreError::not_found("subject", id));
        }
        Ok(())
    }

    // --- Teachers ---

    pub fn teachers(&self) -> Vec<Teacher> {
        self.read().teachers.clone()
    }

    pub fn teacher(&self, id: i64) -> Option<Teacher> {
        self.read().teachers.iter().find(|t| t.id == id).cloned()
    }

    pub fn create_teacher(&self, input: TeacherInput) -> Teacher {
        let mut guard = self.write();
        guard.next_teacher_id += 1;
        let now = Utc::now();
        let record = Teacher {
            id: guard.next_teacher_id,
            username: input.username,
            email: input.email,
            password: input.password,
            created_at: now,
            updated_at: now,
        };
        guard.teachers.push(record.clone());
        record
    }

    pub fn update_teacher(&self, id: i64, input: TeacherInput) -> Result<Teacher, StoreError> {
        let mut guard = self.write();
        let record = guard
            .teachers
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::not_found("teacher", id))?;
        record.username = input.username;
        record.email = input.email;
        record.password = input.password;
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    pub fn delete_teacher(&self, id: i64) -> Result<(), StoreError> {
        let mut guard = self.write();
        let before = guard.teachers.len();
        guard.teachers.retain(|t| t.id != id);
        if guard.teachers.len() == before {
            return Err(StoreError::not_found("teacher", id));
        }
        Ok(())
    }

    // --- Folders ---

    pub fn folders(&self) -> Vec<Folder> {
        self.read().folders.clone()
    }

    pub fn folder(&self, id: i64) -> Option<Folder> {
        self.read().folders.iter().find(|f| f.id == id).cloned()
    }

    /// Folders visible in the browser for the given scope.
    ///
    /// The search term filters first (case-insensitive substring over folder
    /// name and the associated class/section/subject names), then the result
    /// is scoped to children of `parent` — root folders when `parent` is
    /// `None`. Matches the browse view's evaluation order.
    pub fn child_folders(&self, parent: Option<i64>, query: Option<&str>) -> Vec<Folder> {
        let guard = self.read();
        guard
            .folders
            .iter()
            .filter(|f| match query {
                Some(q) if !q.is_empty() => {
                    let mut haystacks = vec![f.folder_name.as_str()];
                    if let Some(r) = &f.course_class {
                        haystacks.push(r.name.as_str());
                    }
                    if let Some(r) = &f.section {
                        haystacks.push(r.name.as_str());
                    }
                    if let Some(r) = &f.subject {
                        haystacks.push(r.name.as_str());
                    }
                    matches_query(&haystacks, q)
                }
                _ => true,
            })
            .filter(|f| f.parent == parent)
            .cloned()
            .collect()
    }

    /// Breadcrumb path for a folder: root ancestor first, the folder itself
    /// last.
    ///
    /// The walk keeps a visited set, so a corrupted parent chain yields
    /// `StoreError::CycleDetected` instead of looping forever.
    pub fn parent_path(&self, folder_id: i64) -> Result<Vec<Folder>, StoreError> {
        let guard = self.read();
        let mut visited = HashSet::new();
        let mut path = Vec::new();
        let mut current = Some(folder_id);

        while let Some(id) = current {
            if !visited.insert(id) {
                return Err(StoreError::CycleDetected { id });
            }
            let folder = guard
                .folders
                .iter()
                .find(|f| f.id == id)
                .ok_or(StoreError::not_found("folder", id))?;
            path.push(folder.clone());
            current = folder.parent;
        }

        path.reverse();
        Ok(path)
    }

    pub fn create_folder(&self, input: FolderInput) -> Result<Folder, StoreError> {
        let mut guard = self.write();
        Self::check_folder_refs(&guard, &input)?;

        guard.next_folder_id += 1;
        let now = Utc::now();
        let record = Folder {
            id: guard.next_folder_id,
            folder_name: input.folder_name,
            parent: input.parent,
            files: Vec::new(),
            allowed_users: input.allowed_users,
            course_class: input.course_class,
            section: input.section,
            subject: input.subject,
            created_at: now,
            updated_at: now,
        };
        guard.folders.push(record.clone());
        Ok(record)
    }

    pub fn update_folder(&self, id: i64, input: FolderInput) -> Result<Folder, StoreError> {
        let mut guard = self.write();
        if !guard.folders.iter().any(|f| f.id == id) {
            return Err(StoreError::not_found("folder", id));
        }
        Self::check_folder_refs(&guard, &input)?;

        // Re-parenting must not close a loop through the folder itself.
        if let Some(parent_id) = input.parent {
            if parent_id == id {
                return Err(StoreError::SelfParent);
            }
            let mut visited = HashSet::new();
            let mut current = Some(parent_id);
            while let Some(pid) = current {
                if pid == id {
                    return Err(StoreError::CycleDetected { id });
                }
                if !visited.insert(pid) {
                    return Err(StoreError::CycleDetected { id: pid });
                }
                current = guard
                    .folders
                    .iter()
                    .find(|f| f.id == pid)
                    .and_then(|f| f.parent);
            }
        }

        let record = guard
            .folders
            .iter_mut()
            .find(|f| f.id == id)
            .expect("folder existence checked above");
        record.folder_name = input.folder_name;
        record.parent = input.parent;
        record.allowed_users = input.allowed_users;
        record.course_class = input.course_class;
        record.section = input.section;
        record.subject = input.subject;
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    /// Deletes a folder.
    ///
    /// Removes the folder and exactly the files whose `folder` equals its
    /// id; files elsewhere are untouched. Immediate child folders are
    /// re-parented to root so no record is left pointing at a missing
    /// parent (the browse view would otherwise never reach them again).
    pub fn delete_folder(&self, id: i64) -> Result<FolderRemoval, StoreError> {
        let mut guard = self.write();
        if !guard.folders.iter().any(|f| f.id == id) {
            return Err(StoreError::not_found("folder", id));
        }

        let before_files = guard.files.len();
        guard.files.retain(|f| f.folder != id);
        let files_removed = before_files - guard.files.len();

        let mut children_reparented = 0;
        for folder in guard.folders.iter_mut() {
            if folder.parent == Some(id) {
                folder.parent = None;
                children_reparented += 1;
            }
        }

        guard.folders.retain(|f| f.id != id);
        Ok(FolderRemoval {
            files_removed,
            children_reparented,
        })
    }

    fn check_folder_refs(guard: &Collections, input: &FolderInput) -> Result<(), StoreError> {
        if let Some(parent_id) = input.parent {
            if !guard.folders.iter().any(|f| f.id == parent_id) {
                return Err(StoreError::InvalidReference {
                    field: "parent",
                    entity: "folder",
                    id: parent_id,
                });
            }
        }
        if !guard.teachers.iter().any(|t| t.id == input.allowed_users) {
            return Err(StoreError::InvalidReference {
                field: "allowed_users",
                entity: "teacher",
                id: input.allowed_users,
            });
        }
        Ok(())
    }

    // --- Files ---

    pub fn files(&self) -> Vec<File> {
        self.read().files.clone()
    }

    pub fn file(&self, id: i64) -> Option<File> {
        self.read().files.iter().find(|f| f.id == id).cloned()
    }

    pub fn files_in_folder(&self, folder_id: i64) -> Vec<File> {
        self.read()
            .files
            .iter()
            .filter(|f| f.folder == folder_id)
            .cloned()
            .collect()
    }

    /// Appends a file record and registers its id on the owning folder.
    pub fn add_file(&self, input: FileInput) -> Result<File, StoreError> {
        let mut guard = self.write();
        if !guard.folders.iter().any(|f| f.id == input.folder) {
            return Err(StoreError::InvalidReference {
                field: "folder",
                entity: "folder",
                id: input.folder,
            });
        }

        guard.next_file_id += 1;
        let record = File {
            id: guard.next_file_id,
            filename: input.filename,
            path: input.path,
            mimetype: input.mimetype,
            size: input.size,
            folder: input.folder,
            owner: input.owner,
            allowed_users: input.allowed_users,
            uploaded_at: Utc::now(),
        };
        guard.files.push(record.clone());
        let file_id = record.id;
        let folder_id = record.folder;
        if let Some(folder) = guard.folders.iter_mut().find(|f| f.id == folder_id) {
            folder.files.push(file_id);
        }
        Ok(record)
    }

    pub fn delete_file(&self, id: i64) -> Result<(), StoreError> {
        let mut guard = self.write();
        let Some(position) = guard.files.iter().position(|f| f.id == id) else {
            return Err(StoreError::not_found("file", id));
        };
        let removed = guard.files.remove(position);
        if let Some(folder) = guard.folders.iter_mut().find(|f| f.id == removed.folder) {
            folder.files.retain(|fid| *fid != id);
        }
        Ok(())
    }

    // --- Logs ---

    /// Filtered view over the read-only log collection.
    pub fn logs(&self, filter: &LogFilter) -> Vec<LogEntry> {
        self.read()
            .logs
            .iter()
            .filter(|log| {
                if let Some(q) = &filter.query {
                    if !q.is_empty() {
                        let mut haystacks = vec![log.message.as_str()];
                        if let Some(name) = &log.user_name {
                            haystacks.push(name.as_str());
                        }
                        if let Some(details) = &log.details {
                            haystacks.push(details.as_str());
                        }
                        if !matches_query(&haystacks, q) {
                            return false;
                        }
                    }
                }
                if let Some(level) = filter.level {
                    if log.level != level {
                        return false;
                    }
                }
                if let Some(category) = filter.category {
                    if log.category != category {
                        return false;
                    }
                }
                if let Some(since) = filter.since {
                    if log.timestamp < since {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect()
    }

    /// Inserts a log record directly. Used by the seeders; log entries have
    /// no create/update/delete surface beyond this.
    pub fn push_log(&self, entry: LogEntry) {
        self.write().logs.push(entry);
    }

    // --- Seed plumbing ---

    /// Inserts a fully-formed folder with its given id, keeping the id
    /// sequence ahead of it. Seeders only.
    pub(crate) fn seed_folder(&self, folder: Folder) {
        let mut guard = self.write();
        guard.next_folder_id = guard.next_folder_id.max(folder.id);
        guard.folders.push(folder);
    }

    pub(crate) fn seed_course_class(&self, record: CourseClass) {
        let mut guard = self.write();
        guard.next_course_class_id = guard.next_course_class_id.max(record.id);
        guard.course_classes.push(record);
    }

    pub(crate) fn seed_subject(&self, record: Subject) {
        let mut guard = self.write();
        guard.next_subject_id = guard.next_subject_id.max(record.id);
        guard.subjects.push(record);
    }

    pub(crate) fn seed_teacher(&self, record: Teacher) {
        let mut guard = self.write();
        guard.next_teacher_id = guard.next_teacher_id.max(record.id);
        guard.teachers.push(record);
    }

    pub(crate) fn seed_file(&self, record: File) {
        let mut guard = self.write();
        guard.next_file_id = guard.next_file_id.max(record.id);
        guard.files.push(record);
    }
}
