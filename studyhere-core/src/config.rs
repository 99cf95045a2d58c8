//! StudyHere configuration
//!
//! ## Configuration Sources (in precedence order)
//!
//! 1. `--config <path>` - explicit override, must exist
//! 2. `.studyhere/config.yaml` - project-level config
//! 3. `<platform config dir>/studyhere/config.yaml` - user config
//! 4. Built-in defaults
//!
//! ## Example
//!
//! ```yaml
//! catalog: spaces.yaml      # relative to this file; built-in sample if omitted
//! defaults:
//!   searchTerm: ""
//!   minCapacity: 0
//!   onlyOpen: true
//!   sort: capacity-desc
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::catalog::Catalog;
use crate::query::{FilterCriteria, SortKey};
use crate::session::Session;

/// Project-level config location, relative to the working directory
pub const PROJECT_CONFIG_PATH: &str = ".studyhere/config.yaml";

/// File name of the user-level config inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyHereConfig {
    /// Catalog file to load at startup
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Initial criteria and sort key for new sessions
    #[serde(default)]
    pub defaults: ViewDefaults,
}

/// Starting point of a session's view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewDefaults {
    #[serde(flatten)]
    pub criteria: FilterCriteria,

    pub sort: SortKey,
}

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Override(PathBuf),
    Project(PathBuf),
    User(PathBuf),
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Override(path) => write!(f, "override {}", path.display()),
            ConfigSource::Project(path) => write!(f, "project {}", path.display()),
            ConfigSource::User(path) => write!(f, "user {}", path.display()),
            ConfigSource::Defaults => f.write_str("built-in defaults"),
        }
    }
}

/// A resolved configuration and its origin
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: StudyHereConfig,
    pub source: ConfigSource,
}

impl StudyHereConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml_ng::from_str(content).context("Failed to parse StudyHere config YAML")
    }

    /// Load a configuration file
    ///
    /// A relative `catalog` path is resolved against the file's directory.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let mut config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        if let (Some(catalog), Some(parent)) = (config.catalog.as_ref(), path.parent()) {
            if catalog.is_relative() {
                config.catalog = Some(parent.join(catalog));
            }
        }

        Ok(config)
    }

    /// Platform-specific user config file, if a home directory is known
    pub fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "studyhere", "studyhere")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Resolve configuration relative to the current working directory
    pub fn discover(override_path: Option<&Path>) -> Result<LoadedConfig> {
        let cwd = std::env::current_dir().context("Could not determine working directory")?;
        let user_path = Self::user_config_path();
        Self::discover_in(&cwd, override_path, user_path.as_deref())
    }

    /// Resolve configuration from explicit locations
    ///
    /// Resolution order:
    /// 1. `override_path` (an error if it does not exist)
    /// 2. `project_root/.studyhere/config.yaml`
    /// 3. `user_path`
    /// 4. Defaults
    pub fn discover_in(
        project_root: &Path,
        override_path: Option<&Path>,
        user_path: Option<&Path>,
    ) -> Result<LoadedConfig> {
        if let Some(path) = override_path {
            debug!("Using config override: {}", path.display());
            return Ok(LoadedConfig {
                config: Self::load_from_path(path)?,
                source: ConfigSource::Override(path.to_path_buf()),
            });
        }

        let project_path = project_root.join(PROJECT_CONFIG_PATH);
        if project_path.is_file() {
            debug!("Using project config: {}", project_path.display());
            return Ok(LoadedConfig {
                config: Self::load_from_path(&project_path)?,
                source: ConfigSource::Project(project_path),
            });
        }

        if let Some(path) = user_path.filter(|p| p.is_file()) {
            debug!("Using user config: {}", path.display());
            return Ok(LoadedConfig {
                config: Self::load_from_path(path)?,
                source: ConfigSource::User(path.to_path_buf()),
            });
        }

        debug!("No config file found, using defaults");
        Ok(LoadedConfig {
            config: Self::default(),
            source: ConfigSource::Defaults,
        })
    }

    /// Load the configured catalog, or the built-in sample when none is set
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(path) => Catalog::load_from_path(path)
                .with_context(|| format!("Failed to load catalog: {}", path.display())),
            None => {
                debug!("No catalog configured, using built-in sample");
                Ok(Catalog::sample())
            }
        }
    }

    /// Start a session over `catalog` using the configured defaults
    pub fn start_session(&self, catalog: Catalog) -> Session {
        Session::with_defaults(
            catalog,
            self.defaults.criteria.clone(),
            self.defaults.sort,
        )
    }
}
