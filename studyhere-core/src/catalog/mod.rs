//! StudyHere Catalog - the fixed list of study spaces
//!
//! The catalog is created once at startup, either from the built-in sample
//! spaces or from a catalog file, and is never mutated afterwards. Only the
//! user's view of it (filtered and sorted) and the reservation overlay change
//! during a session.

mod index;
mod record;
mod sample;

pub use index::{Catalog, CatalogDocument};
pub use record::{NoiseLevel, SpaceId, SpaceRecord};
pub use sample::sample_spaces;
