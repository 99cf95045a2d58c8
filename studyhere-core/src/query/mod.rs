//! Query engine
//!
//! Pure functions over catalog records:
//! - `matches` tests one record against a free-text query
//! - `filter` keeps the records passing a `FilterCriteria`
//! - `sort` reorders a list by a `SortKey`
//! - `derive_view` composes the two over a whole catalog
//!
//! None of them read or write shared state.

pub mod filter;
pub mod matcher;
pub mod pipeline;
pub mod sort;

pub use filter::{filter, FilterCriteria};
pub use matcher::matches;
pub use pipeline::derive_view;
pub use sort::{collate, sort, SortKey};
