use validator::ValidationErrors;

pub mod csv;

/// Flattens validator errors into a single message string.
///
/// Each field contributes its first declared violation, so callers surface
/// one message per invalid field.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| {
            errs.iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        })
        .collect::<Vec<_>>()
        .join("; ")
}
