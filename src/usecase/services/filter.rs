use crate::domain::entities::filter::{FilterMode, FilterSpec};
use crate::domain::entities::record::Record;

fn target_field(record: &Record, mode: FilterMode) -> Option<&str> {
    match mode {
        FilterMode::Description => record.description.as_deref(),
        FilterMode::Code => record.code.as_deref(),
    }
}

/// Case-insensitive substring match on the field selected by `spec.mode`.
///
/// An empty field or an empty search text never matches.
pub fn matches(record: &Record, spec: &FilterSpec) -> bool {
    if spec.search_text.is_empty() {
        return false;
    }
    match target_field(record, spec.mode) {
        Some(value) if !value.is_empty() => value
            .to_uppercase()
            .contains(&spec.search_text.to_uppercase()),
        _ => false,
    }
}

/// Records matching `spec`, in their original order.
pub fn filter_records(records: &[Record], spec: &FilterSpec) -> Vec<Record> {
    records
        .iter()
        .filter(|record| matches(record, spec))
        .cloned()
        .collect()
}
