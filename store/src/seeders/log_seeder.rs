use super::ts;
use crate::DataStore;
use crate::models::{LogCategory, LogEntry, LogLevel};

pub fn seed(store: &DataStore) {
    tracing::info!("Seeding system logs...");

    let entries = vec![
        LogEntry {
            id: 1,
            timestamp: ts("2024-01-15T14:30:25Z"),
            level: LogLevel::Success,
            category: LogCategory::Auth,
            message: "User login successful".to_string(),
            user_id: Some("user123".to_string()),
            user_name: Some("john.doe".to_string()),
            ip_address: Some("192.168.1.100".to_string()),
            user_agent: Some(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string(),
            ),
            details: None,
            duration_ms: Some(150),
            status: Some("200".to_string()),
        },
        LogEntry {
            id: 2,
            timestamp: ts("2024-01-15T14:28:10Z"),
            level: LogLevel::Error,
            category: LogCategory::Database,
            message: "Database connection timeout".to_string(),
            user_id: None,
            user_name: None,
            ip_address: Some("192.168.1.100".to_string()),
            user_agent: None,
            details: Some("Connection pool exhausted after 30 seconds".to_string()),
            duration_ms: None,
            status: Some("500".to_string()),
        },
        LogEntry {
            id: 3,
            timestamp: ts("2024-01-15T14:25:45Z"),
            level: LogLevel::Info,
            category: LogCategory::File,
            message: "File uploaded successfully".to_string(),
            user_id: Some("user456".to_string()),
            user_name: Some("jane.smith".to_string()),
            ip_address: Some("192.168.1.101".to_string()),
            user_agent: None,
            details: Some("course-materials.pdf (2.3 MB)".to_string()),
            duration_ms: Some(2300),
            status: Some("200".to_string()),
        },
        LogEntry {
            id: 4,
            timestamp: ts("2024-01-15T14:22:30Z"),
            level: LogLevel::Warning,
            category: LogCategory::System,
            message: "High memory usage detected".to_string(),
            user_id: None,
            user_name: None,
            ip_address: Some("192.168.1.100".to_string()),
            user_agent: None,
            details: Some("Memory usage: 85% (6.8GB/8GB)".to_string()),
            duration_ms: None,
            status: Some("200".to_string()),
        },
        LogEntry {
            id: 5,
            timestamp: ts("2024-01-15T14:20:15Z"),
            level: LogLevel::Success,
            category: LogCategory::User,
            message: "User profile updated".to_string(),
            user_id: Some("user789".to_string()),
            user_name: Some("mike.wilson".to_string()),
            ip_address: Some("192.168.1.102".to_string()),
            user_agent: None,
            details: None,
            duration_ms: Some(320),
            status: Some("200".to_string()),
        },
        LogEntry {
            id: 6,
            timestamp: ts("2024-01-15T14:18:00Z"),
            level: LogLevel::Error,
            category: LogCategory::Auth,
            message: "Invalid login attempt".to_string(),
            user_id: None,
            user_name: None,
            ip_address: Some("192.168.1.103".to_string()),
            user_agent: Some(
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36".to_string(),
            ),
            details: Some("Failed password for user: admin".to_string()),
            duration_ms: None,
            status: Some("401".to_string()),
        },
        LogEntry {
            id: 7,
            timestamp: ts("2024-01-15T14:15:30Z"),
            level: LogLevel::Info,
            category: LogCategory::Database,
            message: "Query executed successfully".to_string(),
            user_id: Some("user123".to_string()),
            user_name: Some("john.doe".to_string()),
            ip_address: Some("192.168.1.100".to_string()),
            user_agent: None,
            details: Some("SELECT * FROM course_classes LIMIT 50".to_string()),
            duration_ms: Some(45),
            status: Some("200".to_string()),
        },
        LogEntry {
            id: 8,
            timestamp: ts("2024-01-15T14:12:45Z"),
            level: LogLevel::Warning,
            category: LogCategory::File,
            message: "Large file upload detected".to_string(),
            user_id: Some("user456".to_string()),
            user_name: Some("jane.smith".to_string()),
            ip_address: Some("192.168.1.101".to_string()),
            user_agent: None,
            details: Some("video-lecture.mp4 (156 MB)".to_string()),
            duration_ms: Some(4500),
            status: Some("200".to_string()),
        },
        LogEntry {
            id: 9,
            timestamp: ts("2024-01-15T14:10:20Z"),
            level: LogLevel::Success,
            category: LogCategory::System,
            message: "Backup completed successfully".to_string(),
            user_id: None,
            user_name: None,
            ip_address: Some("192.168.1.100".to_string()),
            user_agent: None,
            details: Some("Database backup: 2.1GB compressed".to_string()),
            duration_ms: Some(180_000),
            status: Some("200".to_string()),
        },
        LogEntry {
            id: 10,
            timestamp: ts("2024-01-15T14:08:05Z"),
            level: LogLevel::Error,
            category: LogCategory::User,
            message: "Permission denied".to_string(),
            user_id: Some("user789".to_string()),
            user_name: Some("mike.wilson".to_string()),
            ip_address: Some("192.168.1.102".to_string()),
            user_agent: None,
            details: Some("Attempted to access admin panel".to_string()),
            duration_ms: None,
            status: Some("403".to_string()),
        },
    ];

    for entry in entries {
        store.push_log(entry);
    }
}
