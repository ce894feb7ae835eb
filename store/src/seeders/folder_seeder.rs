use super::ts;
use crate::DataStore;
use crate::models::{EntityRef, Folder};

fn entity_ref(id: i64, name: &str) -> Option<EntityRef> {
    Some(EntityRef {
        id,
        name: name.to_string(),
    })
}

pub fn seed(store: &DataStore) {
    tracing::info!("Seeding folders...");

    // The class/section/subject refs are denormalized snapshots, stored as
    // the screens shipped them.
    let rows = [
        Folder {
            id: 1,
            folder_name: "MATHEMATICS".to_string(),
            parent: None,
            files: vec![1, 2],
            allowed_users: 1,
            course_class: entity_ref(1, "Class 10A"),
            section: entity_ref(1, "Section A"),
            subject: entity_ref(1, "Mathematics"),
            created_at: ts("2024-01-15T10:30:00Z"),
            updated_at: ts("2024-01-15T10:30:00Z"),
        },
        Folder {
            id: 2,
            folder_name: "PHYSICS".to_string(),
            parent: None,
            files: vec![3, 4, 5],
            allowed_users: 2,
            course_class: entity_ref(2, "Class 10B"),
            section: entity_ref(2, "Section B"),
            subject: entity_ref(2, "Physics"),
            created_at: ts("2024-01-14T09:15:00Z"),
            updated_at: ts("2024-01-14T09:15:00Z"),
        },
        Folder {
            id: 3,
            folder_name: "ASSIGNMENTS".to_string(),
            parent: Some(1),
            files: vec![6],
            allowed_users: 1,
            course_class: entity_ref(1, "Class 10A"),
            section: entity_ref(1, "Section A"),
            subject: entity_ref(1, "Mathematics"),
            created_at: ts("2024-01-13T14:20:00Z"),
            updated_at: ts("2024-01-13T14:20:00Z"),
        },
        Folder {
            id: 4,
            folder_name: "LECTURE_NOTES".to_string(),
            parent: Some(2),
            files: vec![7, 8],
            allowed_users: 2,
            course_class: entity_ref(2, "Class 10B"),
            section: entity_ref(2, "Section B"),
            subject: entity_ref(2, "Physics"),
            created_at: ts("2024-01-12T11:45:00Z"),
            updated_at: ts("2024-01-12T11:45:00Z"),
        },
        Folder {
            id: 5,
            folder_name: "CHEMISTRY".to_string(),
            parent: None,
            files: Vec::new(),
            allowed_users: 4,
            course_class: entity_ref(3, "Class 11A"),
            section: entity_ref(3, "Section C"),
            subject: entity_ref(3, "Chemistry"),
            created_at: ts("2024-01-11T16:30:00Z"),
            updated_at: ts("2024-01-11T16:30:00Z"),
        },
        Folder {
            id: 6,
            folder_name: "EXAM_PAPERS".to_string(),
            parent: Some(1),
            files: vec![9, 10, 11],
            allowed_users: 1,
            course_class: entity_ref(1, "Class 10A"),
            section: entity_ref(1, "Section A"),
            subject: entity_ref(1, "Mathematics"),
            created_at: ts("2024-01-10T13:15:00Z"),
            updated_at: ts("2024-01-10T13:15:00Z"),
        },
    ];

    for folder in rows {
        store.seed_folder(folder);
    }
}
