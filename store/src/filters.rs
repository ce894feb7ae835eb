use crate::models::{LogCategory, LogLevel};
use chrono::{DateTime, Utc};

/// Filter over the log collection. Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct LogFilter {
    pub query: Option<String>,
    pub level: Option<LogLevel>,
    pub category: Option<LogCategory>,
    pub since: Option<DateTime<Utc>>,
}

impl LogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: String) -> Self {
        self.query = Some(query);
        self
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_category(mut self, category: LogCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_since(mut self, since: DateTime<Utc>) -> Self {
        self.since = Some(since);
        self
    }
}
