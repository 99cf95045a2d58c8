//! Catalog construction and loading
//!
//! A catalog file lists every study space in display order:
//!
//! ```yaml
//! apiVersion: studyhere.dev/v1
//! kind: SpaceCatalog
//! spaces:
//!   - id: 1
//!     name: O'Leary Library
//!     building: South Campus
//!     capacity: 30
//!     openNow: true
//!     outlets: true
//!     noise: quiet
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use super::{SpaceId, SpaceRecord};
use crate::error::CatalogError;

const CATALOG_API_VERSION: &str = "studyhere.dev/v1";
const CATALOG_KIND: &str = "SpaceCatalog";

/// On-disk catalog document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    /// API version
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Kind (SpaceCatalog)
    #[serde(default = "default_kind")]
    pub kind: String,

    /// Records in catalog order
    #[serde(default)]
    pub spaces: Vec<SpaceRecord>,
}

fn default_api_version() -> String {
    CATALOG_API_VERSION.to_string()
}

fn default_kind() -> String {
    CATALOG_KIND.to_string()
}

/// Immutable, ordered list of study spaces
///
/// Built once at startup. There is no API for adding, editing or removing
/// records afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    spaces: Vec<SpaceRecord>,
    positions: HashMap<SpaceId, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(spaces: Vec<SpaceRecord>) -> Result<Self, CatalogError> {
        let mut positions: HashMap<SpaceId, usize> = HashMap::with_capacity(spaces.len());

        for (idx, space) in spaces.iter().enumerate() {
            if let Some(&first) = positions.get(&space.id) {
                return Err(CatalogError::DuplicateId {
                    id: space.id,
                    first: spaces[first].name.clone(),
                    second: space.name.clone(),
                });
            }
            positions.insert(space.id, idx);
        }

        tracing::debug!("Built catalog with {} spaces", spaces.len());
        Ok(Self { spaces, positions })
    }

    /// Assemble a catalog whose ids are already known to be unique
    pub(super) fn from_parts(spaces: Vec<SpaceRecord>, positions: HashMap<SpaceId, usize>) -> Self {
        Self { spaces, positions }
    }

    /// Parse a catalog from a YAML document
    pub fn from_yaml(content: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument =
            serde_yaml_ng::from_str(content).map_err(|source| CatalogError::Parse { source })?;

        if document.kind != CATALOG_KIND {
            return Err(CatalogError::UnsupportedKind(document.kind));
        }
        if document.api_version != CATALOG_API_VERSION {
            tracing::warn!(
                "Catalog declares apiVersion '{}', expected '{}'",
                document.api_version,
                CATALOG_API_VERSION
            );
        }

        Self::new(document.spaces)
    }

    /// Load a catalog file
    pub fn load_from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("Loading catalog from {}", path.display());
        Self::from_yaml(&content)
    }

    /// Serialize to a catalog document
    pub fn to_yaml(&self) -> anyhow::Result<String> {
        let document = CatalogDocument {
            api_version: default_api_version(),
            kind: default_kind(),
            spaces: self.spaces.clone(),
        };
        Ok(serde_yaml_ng::to_string(&document)?)
    }

    /// All records in catalog order
    pub fn spaces(&self) -> &[SpaceRecord] {
        &self.spaces
    }

    /// Look up a record by id
    pub fn get(&self, id: SpaceId) -> Option<&SpaceRecord> {
        self.positions.get(&id).map(|&idx| &self.spaces[idx])
    }

    pub fn contains(&self, id: SpaceId) -> bool {
        self.positions.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SpaceRecord> {
        self.spaces.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a SpaceRecord;
    type IntoIter = std::slice::Iter<'a, SpaceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.spaces.iter()
    }
}
