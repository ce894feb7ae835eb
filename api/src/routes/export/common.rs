//! Catalog of exportable data types and their field options.

/// One selectable field of an exportable data type.
pub struct ExportField {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Part of the default selection when the caller names no fields.
    pub selected: bool,
}

/// One exportable data type.
pub struct ExportType {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub fields: &'static [ExportField],
}

pub const EXPORT_TYPES: &[ExportType] = &[
    ExportType {
        id: "course-classes",
        name: "Course Classes",
        description: "Export course class information",
        fields: &[
            ExportField {
                id: "name",
                name: "Name",
                description: "Course class name",
                selected: true,
            },
            ExportField {
                id: "description",
                name: "Description",
                description: "Course class description",
                selected: true,
            },
            ExportField {
                id: "createdAt",
                name: "Created Date",
                description: "When the class was created",
                selected: false,
            },
            ExportField {
                id: "updatedAt",
                name: "Updated Date",
                description: "When the class was last updated",
                selected: false,
            },
        ],
    },
    ExportType {
        id: "sections",
        name: "Sections",
        description: "Export section information with course class details",
        fields: &[
            ExportField {
                id: "name",
                name: "Section Name",
                description: "Name of the section",
                selected: true,
            },
            ExportField {
                id: "courseClassName",
                name: "Course Class",
                description: "Associated course class",
                selected: true,
            },
            ExportField {
                id: "createdAt",
                name: "Created Date",
                description: "When the section was created",
                selected: false,
            },
            ExportField {
                id: "updatedAt",
                name: "Updated Date",
                description: "When the section was last updated",
                selected: false,
            },
        ],
    },
    ExportType {
        id: "subjects",
        name: "Subjects",
        description: "Export subject information with codes and descriptions",
        fields: &[
            ExportField {
                id: "name",
                name: "Subject Name",
                description: "Name of the subject",
                selected: true,
            },
            ExportField {
                id: "code",
                name: "Subject Code",
                description: "Unique subject code",
                selected: true,
            },
            ExportField {
                id: "description",
                name: "Description",
                description: "Subject description",
                selected: true,
            },
            ExportField {
                id: "createdAt",
                name: "Created Date",
                description: "When the subject was created",
                selected: false,
            },
            ExportField {
                id: "updatedAt",
                name: "Updated Date",
                description: "When the subject was last updated",
                selected: false,
            },
        ],
    },
    ExportType {
        id: "teachers",
        name: "Teachers",
        description: "Export teacher information",
        fields: &[
            ExportField {
                id: "username",
                name: "Username",
                description: "Teacher username",
                selected: true,
            },
            ExportField {
                id: "email",
                name: "Email",
                description: "Teacher email address",
                selected: true,
            },
            ExportField {
                id: "createdAt",
                name: "Created Date",
                description: "When the teacher was created",
                selected: false,
            },
            ExportField {
                id: "updatedAt",
                name: "Updated Date",
                description: "When the teacher was last updated",
                selected: false,
            },
        ],
    },
];

/// Looks a data type up by id.
pub fn export_type(id: &str) -> Option<&'static ExportType> {
    EXPORT_TYPES.iter().find(|t| t.id == id)
}

impl ExportType {
    /// The default field selection.
    pub fn default_fields(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter(|f| f.selected)
            .map(|f| f.id.to_string())
            .collect()
    }

    pub fn has_field(&self, id: &str) -> bool {
        self.fields.iter().any(|f| f.id == id)
    }
}
