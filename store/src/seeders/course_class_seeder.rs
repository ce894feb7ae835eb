use super::ts;
use crate::DataStore;
use crate::models::CourseClass;

pub fn seed(store: &DataStore) {
    tracing::info!("Seeding course classes...");

    let rows = [
        (
            1,
            "Mathematics 101",
            "Introduction to basic mathematical concepts including algebra, geometry, and trigonometry.",
            "2024-01-15T10:30:00Z",
        ),
        (
            2,
            "Computer Science Fundamentals",
            "Core concepts in computer science including programming, data structures, and algorithms.",
            "2024-01-20T14:15:00Z",
        ),
        (
            3,
            "English Literature",
            "Study of classic and contemporary English literature with focus on critical analysis.",
            "2024-01-25T09:45:00Z",
        ),
        (
            4,
            "Physics Lab",
            "Hands-on experiments and practical applications of physics principles.",
            "2024-02-01T11:20:00Z",
        ),
        (
            5,
            "History of Art",
            "Survey of art history from ancient times to modern era with emphasis on cultural context.",
            "2024-02-05T16:30:00Z",
        ),
        (
            6,
            "Chemistry Advanced",
            "Advanced topics in chemistry including organic chemistry, biochemistry, and analytical methods.",
            "2024-02-10T13:45:00Z",
        ),
    ];

    for (id, name, description, stamp) in rows {
        store.seed_course_class(CourseClass {
            id,
            name: name.to_string(),
            description: Some(description.to_string()),
            created_at: ts(stamp),
            updated_at: ts(stamp),
        });
    }
}
