//! Sort keys and the stable sorter

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::catalog::SpaceRecord;
use crate::error::ParseSortKeyError;

/// Ordering applied to a filtered result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum SortKey {
    /// Keep catalog order
    #[default]
    #[serde(rename = "default")]
    CatalogOrder,
    /// Name, A to Z
    NameAsc,
    /// Capacity, high to low
    CapacityDesc,
    /// Capacity, low to high
    CapacityAsc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::CatalogOrder,
        SortKey::NameAsc,
        SortKey::CapacityDesc,
        SortKey::CapacityAsc,
    ];

    /// Wire name of this key
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::CatalogOrder => "default",
            SortKey::NameAsc => "name-asc",
            SortKey::CapacityDesc => "capacity-desc",
            SortKey::CapacityAsc => "capacity-asc",
        }
    }

    /// Human-readable description
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::CatalogOrder => "Default (added order)",
            SortKey::NameAsc => "Name (A → Z)",
            SortKey::CapacityDesc => "Capacity (high → low)",
            SortKey::CapacityAsc => "Capacity (low → high)",
        }
    }

    /// Parse a key, falling back to catalog order for anything unrecognized
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_else(|err: ParseSortKeyError| {
            tracing::debug!("{}; using default order", err);
            SortKey::CatalogOrder
        })
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ParseSortKeyError(s.to_string()))
    }
}

impl From<String> for SortKey {
    fn from(value: String) -> Self {
        SortKey::parse_lenient(&value)
    }
}

/// Locale-aware name comparison
///
/// Compares in three passes, like a root-locale collator:
///
/// 1. base letters, ignoring accents and case, with whitespace before
///    punctuation before digits before letters
/// 2. accents, unaccented first
/// 3. case, lowercase first
///
/// Anything still tied falls back to codepoint order.
pub fn collate(a: &str, b: &str) -> Ordering {
    primary_weights(a)
        .cmp(primary_weights(b))
        .then_with(|| accent_weights(a).cmp(accent_weights(b)))
        .then_with(|| case_tiebreak(a, b))
        .then_with(|| a.cmp(b))
}

fn char_class(c: char) -> u8 {
    if c.is_whitespace() {
        0
    } else if c.is_alphabetic() {
        3
    } else if c.is_numeric() {
        2
    } else {
        1
    }
}

fn primary_weights(s: &str) -> impl Iterator<Item = (u8, char)> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .filter(|c| !is_combining_mark(*c))
        .map(|c| (char_class(c), c))
}

/// Combining marks in decomposed order, with 0 standing in for each base char
fn accent_weights(s: &str) -> impl Iterator<Item = u32> + '_ {
    s.nfd()
        .map(|c| if is_combining_mark(c) { u32::from(c) } else { 0 })
}

fn case_tiebreak(a: &str, b: &str) -> Ordering {
    let bases_a = a.nfd().filter(|c| !is_combining_mark(*c));
    let bases_b = b.nfd().filter(|c| !is_combining_mark(*c));

    for (ca, cb) in bases_a.zip(bases_b) {
        if ca == cb {
            continue;
        }
        match (ca.is_lowercase(), cb.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}

fn record<T: Borrow<SpaceRecord>>(item: &T) -> &SpaceRecord {
    item.borrow()
}

/// Return a reordered copy of `records`
///
/// The input slice is never touched. Ties keep their input order because
/// `sort_by` is stable, and `SortKey::CatalogOrder` is a plain copy.
pub fn sort<T>(records: &[T], key: SortKey) -> Vec<T>
where
    T: Borrow<SpaceRecord> + Clone,
{
    let mut sorted = records.to_vec();

    match key {
        SortKey::CatalogOrder => {}
        SortKey::NameAsc => {
            sorted.sort_by(|a, b| collate(&record(a).name, &record(b).name));
        }
        SortKey::CapacityDesc => {
            sorted.sort_by(|a, b| record(b).capacity.cmp(&record(a).capacity));
        }
        SortKey::CapacityAsc => {
            sorted.sort_by_key(|r| record(r).capacity);
        }
    }

    sorted
}
