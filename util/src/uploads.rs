//! Tracker for simulated file uploads.
//!
//! Uploads in this system never move real bytes; a background task steps a
//! progress counter from 0 to 100 and appends the file record on completion.
//! The manager holds one entry per in-flight or finished upload so the
//! progress endpoint can report a snapshot at any time.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Uploading,
    Completed,
    Error,
}

/// Progress snapshot for a single upload.
#[derive(Debug, Clone, Serialize)]
pub struct UploadEntry {
    pub id: u64,
    pub filename: String,
    pub progress: u8,
    pub status: UploadStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Default)]
struct Inner {
    next_id: u64,
    entries: HashMap<u64, UploadEntry>,
}

/// Thread-safe registry of upload progress entries.
#[derive(Clone, Default)]
pub struct UploadManager {
    inner: Arc<RwLock<Inner>>,
}

impl UploadManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new upload at 0% and returns its id.
    pub fn begin(&self, filename: impl Into<String>) -> u64 {
        let mut guard = self.inner.write().expect("upload tracker lock poisoned");
        guard.next_id += 1;
        let id = guard.next_id;
        guard.entries.insert(
            id,
            UploadEntry {
                id,
                filename: filename.into(),
                progress: 0,
                status: UploadStatus::Uploading,
                error: None,
            },
        );
        id
    }

    /// Advances the progress counter for an upload.
    pub fn advance(&self, id: u64, progress: u8) {
        let mut guard = self.inner.write().expect("upload tracker lock poisoned");
        if let Some(entry) = guard.entries.get_mut(&id) {
            entry.progress = progress.min(100);
        }
    }

    /// Marks an upload as completed at 100%.
    pub fn complete(&self, id: u64) {
        let mut guard = self.inner.write().expect("upload tracker lock poisoned");
        if let Some(entry) = guard.entries.get_mut(&id) {
            entry.progress = 100;
            entry.status = UploadStatus::Completed;
        }
    }

    /// Marks an upload as failed with a message.
    pub fn fail(&self, id: u64, error: impl Into<String>) {
        let mut guard = self.inner.write().expect("upload tracker lock poisoned");
        if let Some(entry) = guard.entries.get_mut(&id) {
            entry.status = UploadStatus::Error;
            entry.error = Some(error.into());
        }
    }

    /// Returns all tracked entries, oldest first.
    pub fn snapshot(&self) -> Vec<UploadEntry> {
        let guard = self.inner.read().expect("upload tracker lock poisoned");
        let mut entries: Vec<UploadEntry> = guard.entries.values().cloned().collect();
        entries.sort_by_key(|e| e.id);
        entries
    }

    /// Drops entries that are no longer uploading, mirroring the dashboard
    /// clearing its progress list once a batch finishes.
    pub fn clear_finished(&self) {
        let mut guard = self.inner.write().expect("upload tracker lock poisoned");
        guard
            .entries
            .retain(|_, e| e.status == UploadStatus::Uploading);
    }
}
