//! Minimal CSV assembly helpers for the export endpoints.

/// Quotes a field when it contains a comma, quote, or newline.
///
/// Embedded quotes are doubled per RFC 4180.
pub fn escape_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Joins already-escaped fields into one CSV row.
pub fn row(fields: &[String]) -> String {
    fields.join(",")
}
