use super::ts;
use crate::DataStore;
use crate::models::Teacher;

pub fn seed(store: &DataStore) {
    tracing::info!("Seeding teachers...");

    let rows = [
        (1, "john.doe", "2024-01-15T10:30:00Z"),
        (2, "jane.smith", "2024-01-20T09:15:00Z"),
        (3, "mike.wilson", "2024-01-25T11:00:00Z"),
        (4, "sarah.johnson", "2024-02-01T08:30:00Z"),
        (5, "david.brown", "2024-02-05T13:00:00Z"),
        (6, "lisa.garcia", "2024-02-10T10:00:00Z"),
    ];

    for (id, username, stamp) in rows {
        store.seed_teacher(Teacher {
            id,
            username: username.to_string(),
            email: format!("{username}@school.edu"),
            password: "password123".to_string(),
            created_at: ts(stamp),
            updated_at: ts(stamp),
        });
    }
}
