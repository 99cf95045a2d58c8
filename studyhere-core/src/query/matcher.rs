//! Free-text matching against a space record

use crate::catalog::SpaceRecord;

/// Text that a search query is matched against: name, building and noise
/// token joined by single spaces.
pub fn haystack(record: &SpaceRecord) -> String {
    format!(
        "{} {} {}",
        record.name,
        record.building,
        record.noise.as_str()
    )
}

/// Check whether a record matches a search query
///
/// An empty query matches everything. Otherwise the query must appear as a
/// contiguous, case-insensitive substring of the record's haystack.
/// Whitespace and punctuation are compared literally.
pub fn matches(record: &SpaceRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    haystack(record)
        .to_lowercase()
        .contains(&query.to_lowercase())
}
