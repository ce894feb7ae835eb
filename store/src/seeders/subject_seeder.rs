use super::ts;
use crate::DataStore;
use crate::models::Subject;

pub fn seed(store: &DataStore) {
    tracing::info!("Seeding subjects...");

    let rows = [
        (
            1,
            "Mathematics",
            "MATH101",
            "Introduction to basic mathematical concepts including algebra, geometry, and trigonometry.",
            "2024-01-15T10:30:00Z",
        ),
        (
            2,
            "Computer Science",
            "CS101",
            "Core concepts in computer science including programming, data structures, and algorithms.",
            "2024-01-20T14:15:00Z",
        ),
        (
            3,
            "English Literature",
            "ENG201",
            "Study of classic and contemporary English literature with focus on critical analysis.",
            "2024-01-25T09:45:00Z",
        ),
        (
            4,
            "Physics",
            "PHY101",
            "Hands-on experiments and practical applications of physics principles.",
            "2024-02-01T11:20:00Z",
        ),
        (
            5,
            "History of Art",
            "ART301",
            "Survey of art history from ancient times to modern era with emphasis on cultural context.",
            "2024-02-05T16:30:00Z",
        ),
        (
            6,
            "Chemistry",
            "CHEM201",
            "Advanced topics in chemistry including organic chemistry, biochemistry, and analytical methods.",
            "2024-02-10T13:45:00Z",
        ),
        (
            7,
            "Biology",
            "BIO101",
            "Introduction to biological sciences covering cell biology, genetics, and ecology.",
            "2024-02-12T08:15:00Z",
        ),
        (
            8,
            "Economics",
            "ECON201",
            "Principles of microeconomics and macroeconomics with real-world applications.",
            "2024-02-15T14:30:00Z",
        ),
    ];

    for (id, name, code, description, stamp) in rows {
        store.seed_subject(Subject {
            id,
            name: name.to_string(),
            code: code.to_string(),
            description: Some(description.to_string()),
            created_at: ts(stamp),
            updated_at: ts(stamp),
        });
    }
}
