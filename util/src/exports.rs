//! History of data-export runs.
//!
//! Each completed (or failed) export appends one record; the export screen
//! lists them newest first. History is process-lifetime state like
//! everything else here.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportStatus {
    Success,
    Error,
}

/// One export run.
#[derive(Debug, Clone, Serialize)]
pub struct ExportRecord {
    pub id: u64,
    pub data_type: String,
    pub format: String,
    pub timestamp: DateTime<Utc>,
    pub status: ExportStatus,
    pub file_size: u64,
    pub fields: Vec<String>,
}

#[derive(Default)]
struct Inner {
    next_id: u64,
    records: Vec<ExportRecord>,
}

/// Append-only export history.
#[derive(Clone, Default)]
pub struct ExportHistory {
    inner: Arc<RwLock<Inner>>,
}

impl ExportHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a run and returns the stored record.
    pub fn record(
        &self,
        data_type: impl Into<String>,
        format: impl Into<String>,
        status: ExportStatus,
        file_size: u64,
        fields: Vec<String>,
    ) -> ExportRecord {
        let mut guard = self.inner.write().expect("export history lock poisoned");
        guard.next_id += 1;
        let record = ExportRecord {
            id: guard.next_id,
            data_type: data_type.into(),
            format: format.into(),
            timestamp: Utc::now(),
            status,
            file_size,
            fields,
        };
        guard.records.push(record.clone());
        record
    }

    /// All runs, newest first.
    pub fn list(&self) -> Vec<ExportRecord> {
        let guard = self.inner.read().expect("export history lock poisoned");
        let mut records = guard.records.clone();
        records.reverse();
        records
    }
}
