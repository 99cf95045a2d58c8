//! Error types for catalog loading and value parsing
//!
//! Query and selection operations are total and never return these.

use std::path::PathBuf;
use thiserror::Error;

use crate::catalog::SpaceId;

/// Errors raised while building or loading a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Two records share the same identifier
    #[error("Duplicate space id {id} in catalog ('{first}' and '{second}')")]
    DuplicateId {
        id: SpaceId,
        first: String,
        second: String,
    },

    /// The catalog document declares a kind we do not understand
    #[error("Unsupported catalog kind '{0}' (expected 'SpaceCatalog')")]
    UnsupportedKind(String),

    /// Failed to read a catalog file
    #[error("Failed to read catalog from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a catalog document
    #[error("Failed to parse catalog YAML")]
    Parse {
        #[source]
        source: serde_yaml_ng::Error,
    },
}

/// A sort key string that is not one of the known orderings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown sort key '{0}' (expected one of: default, name-asc, capacity-desc, capacity-asc)")]
pub struct ParseSortKeyError(pub String);

/// A space id string that is not a non-negative integer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid space id '{0}'")]
pub struct ParseSpaceIdError(pub String);
