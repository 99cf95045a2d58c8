//! Derived view: filter, then sort

use super::filter::{filter, FilterCriteria};
use super::sort::{sort, SortKey};
use crate::catalog::{Catalog, SpaceRecord};

/// Compute the records a user sees for the given criteria and sort key
///
/// Nothing is cached between calls, so the result depends only on the
/// arguments.
pub fn derive_view<'a>(
    catalog: &'a Catalog,
    criteria: &FilterCriteria,
    key: SortKey,
) -> Vec<&'a SpaceRecord> {
    let filtered = filter(catalog, criteria);
    let view = sort(&filtered, key);

    tracing::trace!(
        total = catalog.len(),
        matched = view.len(),
        sort = %key,
        "Derived view"
    );

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_same_inputs_same_output() {
        let catalog = Catalog::sample();
        let criteria = FilterCriteria::new().with_search_term("campus");

        let first = derive_view(&catalog, &criteria, SortKey::NameAsc);
        let second = derive_view(&catalog, &criteria, SortKey::NameAsc);

        assert_eq!(first, second);
    }

    #[test]
    fn test_identity_view_is_catalog() {
        let catalog = Catalog::sample();
        let view = derive_view(&catalog, &FilterCriteria::default(), SortKey::CatalogOrder);

        let expected: Vec<&SpaceRecord> = catalog.iter().collect();
        assert_eq!(view, expected);
    }
}
