//! StudyHere core library
//!
//! Browse a fixed catalog of study spaces: filter by text, capacity and
//! open-now status, sort the result, and mark spaces as reserved for the
//! current session.

pub mod catalog;
pub mod config;
pub mod error;
pub mod query;
pub mod selection;
pub mod session;

pub use catalog::{Catalog, NoiseLevel, SpaceId, SpaceRecord};
pub use config::{ConfigSource, LoadedConfig, StudyHereConfig, ViewDefaults};
pub use error::{CatalogError, ParseSortKeyError, ParseSpaceIdError};
pub use query::{derive_view, filter, matches, sort, FilterCriteria, SortKey};
pub use selection::ReservationSet;
pub use session::{result_summary, Session, ViewEntry, EMPTY_VIEW_MESSAGE};
