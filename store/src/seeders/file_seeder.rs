use super::ts;
use crate::DataStore;
use crate::models::{File, FileOwner};

pub fn seed(store: &DataStore) {
    tracing::info!("Seeding files...");

    let rows = [
        File {
            id: 1,
            filename: "algebra_basics.pdf".to_string(),
            path: "/uploads/mathematics/algebra_basics.pdf".to_string(),
            mimetype: "application/pdf".to_string(),
            size: 2_048_576,
            folder: 1,
            owner: FileOwner {
                id: 1,
                username: "john.doe".to_string(),
            },
            allowed_users: vec![1, 2],
            uploaded_at: ts("2024-01-15T10:30:00Z"),
        },
        File {
            id: 2,
            filename: "geometry_worksheet.docx".to_string(),
            path: "/uploads/mathematics/geometry_worksheet.docx".to_string(),
            mimetype:
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
                    .to_string(),
            size: 1_024_000,
            folder: 1,
            owner: FileOwner {
                id: 1,
                username: "john.doe".to_string(),
            },
            allowed_users: vec![1, 2],
            uploaded_at: ts("2024-01-15T09:15:00Z"),
        },
        File {
            id: 3,
            filename: "mechanics_lecture.mp4".to_string(),
            path: "/uploads/physics/mechanics_lecture.mp4".to_string(),
            mimetype: "video/mp4".to_string(),
            size: 52_428_800,
            folder: 2,
            owner: FileOwner {
                id: 2,
                username: "jane.smith".to_string(),
            },
            allowed_users: vec![2, 3],
            uploaded_at: ts("2024-01-14T14:20:00Z"),
        },
    ];

    for file in rows {
        store.seed_file(file);
    }
}
