//! Record → display strings
//!
//! Projection walks a record's field table in declaration order. The field
//! kinds are closed, so every field produces exactly one string.

use crate::data_fetcher::models::{FieldMeta, FieldValue, Record};

/// Formats one field value according to its metadata.
///
/// Floats use two decimals, percentage floats become whole percentages
/// rounded half away from zero (`0.525` → `53%`), integers and strings are
/// printed as is.
pub fn format_value(meta: &FieldMeta, value: FieldValue<'_>) -> String {
    match value {
        FieldValue::Float(v) if meta.percentage => format!("{}%", (v * 100.0).round() as i64),
        FieldValue::Float(v) => format!("{v:.2}"),
        FieldValue::Int(v) => v.to_string(),
        FieldValue::Text(s) => s.to_string(),
    }
}

/// Every field of `record` as a display string, in declaration order.
pub fn project<R: Record>(record: &R) -> Vec<String> {
    R::FIELDS
        .iter()
        .zip(record.values())
        .map(|(meta, value)| format_value(meta, value))
        .collect()
}

pub fn project_all<R: Record>(records: &[R]) -> Vec<Vec<String>> {
    records.iter().map(project).collect()
}

/// Upstream header of every field.
pub fn headers<R: Record>() -> Vec<&'static str> {
    R::FIELDS.iter().map(|f| f.header).collect()
}

/// Column titles of every field.
pub fn labels<R: Record>() -> Vec<&'static str> {
    R::FIELDS.iter().map(|f| f.label).collect()
}

/// Column titles of the fields marked visible.
pub fn visible_labels<R: Record>() -> Vec<&'static str> {
    R::FIELDS
        .iter()
        .filter(|f| f.visible)
        .map(|f| f.label)
        .collect()
}

/// Like [`project`] but only for visible fields, parallel to [`visible_labels`].
pub fn project_visible<R: Record>(record: &R) -> Vec<String> {
    R::FIELDS
        .iter()
        .zip(record.values())
        .filter(|(meta, _)| meta.visible)
        .map(|(meta, value)| format_value(meta, value))
        .collect()
}
