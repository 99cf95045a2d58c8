//! Session context
//!
//! A `Session` owns everything that changes while a user browses: the
//! filter criteria, the sort key and the reservation set. The catalog it
//! holds is read-only. Each input event maps to one method call, and the
//! visible list is derived fresh from the current state on every `view()`.

use serde::Serialize;
use tracing::debug;

use crate::catalog::{Catalog, SpaceId, SpaceRecord};
use crate::query::{derive_view, FilterCriteria, SortKey};
use crate::selection::ReservationSet;

/// Shown in place of the list when nothing passes the filters
pub const EMPTY_VIEW_MESSAGE: &str = "No spaces match your filters.";

/// Heading for a result list, e.g. "1 space found" or "4 spaces found"
pub fn result_summary(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} space{plural} found")
}

/// A visible record together with its reservation state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewEntry<'a> {
    #[serde(flatten)]
    pub space: &'a SpaceRecord,
    pub reserved: bool,
}

/// State of one browsing session
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    initial_criteria: FilterCriteria,
    initial_sort: SortKey,
    criteria: FilterCriteria,
    sort_key: SortKey,
    reservations: ReservationSet,
}

impl Session {
    /// Start a session with no filters and catalog order
    pub fn new(catalog: Catalog) -> Self {
        Self::with_defaults(catalog, FilterCriteria::default(), SortKey::default())
    }

    /// Start a session from configured defaults
    ///
    /// `reset_filters` returns to these values.
    pub fn with_defaults(catalog: Catalog, criteria: FilterCriteria, sort_key: SortKey) -> Self {
        debug!(
            "Starting session over {} spaces (criteria: {:?}, sort: {})",
            catalog.len(),
            criteria,
            sort_key
        );
        Self {
            catalog,
            initial_criteria: criteria.clone(),
            initial_sort: sort_key,
            criteria,
            sort_key,
            reservations: ReservationSet::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn reservations(&self) -> &ReservationSet {
        &self.reservations
    }

    pub fn set_search_term(&mut self, search_term: impl Into<String>) {
        self.criteria.search_term = search_term.into();
        debug!("Search term set to {:?}", self.criteria.search_term);
    }

    pub fn set_min_capacity(&mut self, min_capacity: u32) {
        self.criteria.min_capacity = min_capacity;
        debug!("Minimum capacity set to {}", min_capacity);
    }

    pub fn set_only_open(&mut self, only_open: bool) {
        self.criteria.only_open = only_open;
        debug!("Open-now filter {}", if only_open { "on" } else { "off" });
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.sort_key = sort_key;
        debug!("Sort key set to {}", sort_key);
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        debug!("Criteria replaced: {:?}", criteria);
        self.criteria = criteria;
    }

    /// Restore the criteria and sort key the session started with
    ///
    /// Reservations are kept.
    pub fn reset_filters(&mut self) {
        self.criteria = self.initial_criteria.clone();
        self.sort_key = self.initial_sort;
        debug!("Filters reset");
    }

    /// Flip the reservation flag of a space, returning the new state
    pub fn toggle_reservation(&mut self, id: SpaceId) -> bool {
        if !self.catalog.contains(id) {
            debug!("Toggling reservation for id {} which is not in the catalog", id);
        }
        let reserved = self.reservations.toggle(id);
        debug!(
            "Space {} {}",
            id,
            if reserved { "reserved" } else { "released" }
        );
        reserved
    }

    pub fn is_reserved(&self, id: SpaceId) -> bool {
        self.reservations.is_selected(id)
    }

    /// Records visible under the current criteria and sort key
    pub fn view(&self) -> Vec<&SpaceRecord> {
        derive_view(&self.catalog, &self.criteria, self.sort_key)
    }

    /// Visible records paired with their reservation state
    pub fn view_entries(&self) -> Vec<ViewEntry<'_>> {
        self.view()
            .into_iter()
            .map(|space| ViewEntry {
                space,
                reserved: self.reservations.is_selected(space.id),
            })
            .collect()
    }
}
