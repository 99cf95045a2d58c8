//! Filter criteria and the filter composer

use serde::{Deserialize, Serialize};

use super::matcher::matches;
use crate::catalog::SpaceRecord;

/// User-selected filter parameters
///
/// The default value filters nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Free-text query matched against name, building and noise
    pub search_term: String,

    /// Inclusive lower bound on capacity
    pub min_capacity: u32,

    /// Only keep spaces that are open now
    pub only_open: bool,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_term(mut self, search_term: impl Into<String>) -> Self {
        self.search_term = search_term.into();
        self
    }

    pub fn with_min_capacity(mut self, min_capacity: u32) -> Self {
        self.min_capacity = min_capacity;
        self
    }

    pub fn with_only_open(mut self, only_open: bool) -> Self {
        self.only_open = only_open;
        self
    }

    /// True when these criteria let every record through
    pub fn is_identity(&self) -> bool {
        self.search_term.is_empty() && self.min_capacity == 0 && !self.only_open
    }

    /// Check a single record against all three predicates
    pub fn passes(&self, record: &SpaceRecord) -> bool {
        let text_ok = matches(record, &self.search_term);
        let capacity_ok = record.capacity >= self.min_capacity;
        let open_ok = !self.only_open || record.open_now;

        text_ok && capacity_ok && open_ok
    }
}

/// Keep the records that satisfy the criteria, in their original order
///
/// Stateless: every call recomputes from the full input.
pub fn filter<'a, I>(records: I, criteria: &FilterCriteria) -> Vec<&'a SpaceRecord>
where
    I: IntoIterator<Item = &'a SpaceRecord>,
{
    records
        .into_iter()
        .filter(|record| criteria.passes(record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use pretty_assertions::assert_eq;

    fn ids(records: &[&SpaceRecord]) -> Vec<u32> {
        records.iter().map(|r| r.id.0).collect()
    }

    #[test]
    fn test_identity_criteria_keep_everything() {
        let catalog = Catalog::sample();
        let criteria = FilterCriteria::default();

        assert!(criteria.is_identity());
        assert_eq!(ids(&filter(&catalog, &criteria)), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_min_capacity_is_inclusive() {
        let catalog = Catalog::sample();
        let criteria = FilterCriteria::new().with_min_capacity(30);

        assert_eq!(ids(&filter(&catalog, &criteria)), vec![1, 3, 4]);
    }

    #[test]
    fn test_only_open() {
        let catalog = Catalog::sample();
        let criteria = FilterCriteria::new().with_only_open(true);

        assert_eq!(ids(&filter(&catalog, &criteria)), vec![1, 4, 5, 6]);
    }

    #[test]
    fn test_predicates_combine_as_conjunction() {
        let catalog = Catalog::sample();
        let criteria = FilterCriteria::new()
            .with_search_term("campus medium")
            .with_min_capacity(10)
            .with_only_open(true);

        // McGauvran is medium but closed, University Crossings and Olney pass
        assert_eq!(ids(&filter(&catalog, &criteria)), vec![4, 6]);
    }

    #[test]
    fn test_no_matches() {
        let catalog = Catalog::sample();
        let criteria = FilterCriteria::new().with_min_capacity(1000);

        assert!(filter(&catalog, &criteria).is_empty());
        assert!(!criteria.is_identity());
    }

    #[test]
    fn test_criteria_serde_defaults() {
        let criteria: FilterCriteria = serde_yaml_ng::from_str("minCapacity: 12").unwrap();
        assert_eq!(
            criteria,
            FilterCriteria {
                search_term: String::new(),
                min_capacity: 12,
                only_open: false,
            }
        );
    }
}
