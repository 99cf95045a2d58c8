//! Reservation tracking
//!
//! The reservation set is an overlay on the catalog: it holds the ids the
//! user has marked as reserved in the current session. Ids are not checked
//! against the catalog, so toggling an unknown id simply adds or removes it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::catalog::SpaceId;

/// Set of reserved space ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationSet {
    ids: HashSet<SpaceId>,
}

impl ReservationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`, returning whether it is now reserved
    pub fn toggle(&mut self, id: SpaceId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Copy of this set with membership of `id` flipped
    pub fn toggled(&self, id: SpaceId) -> Self {
        let mut next = self.clone();
        next.toggle(id);
        next
    }

    pub fn is_selected(&self, id: SpaceId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Reserved ids in ascending order
    pub fn sorted_ids(&self) -> Vec<SpaceId> {
        let mut ids: Vec<SpaceId> = self.ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl FromIterator<SpaceId> for ReservationSet {
    fn from_iter<I: IntoIterator<Item = SpaceId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
