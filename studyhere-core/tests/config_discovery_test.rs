//! Configuration discovery and catalog loading from disk

mod common;

use anyhow::Result;
use common::init_test_logging;
use pretty_assertions::assert_eq;
use std::fs;
use studyhere_core::{ConfigSource, SortKey, StudyHereConfig};
use tempfile::TempDir;

const CATALOG_YAML: &str = r#"
apiVersion: studyhere.dev/v1
kind: SpaceCatalog
spaces:
  - id: 100
    name: Healey Library
    building: West Campus
    capacity: 60
    openNow: true
    outlets: true
    noise: quiet
  - id: 101
    name: Campus Center Atrium
    building: West Campus
    capacity: 80
    openNow: false
    outlets: false
    noise: lively
"#;

#[test]
fn test_defaults_when_nothing_exists() -> Result<()> {
    init_test_logging();
    let project = TempDir::new()?;
    let missing_user = project.path().join("no-such-user-config.yaml");

    let loaded = StudyHereConfig::discover_in(project.path(), None, Some(missing_user.as_path()))?;

    assert_eq!(loaded.source, ConfigSource::Defaults);
    assert_eq!(loaded.config, StudyHereConfig::default());
    assert_eq!(loaded.config.load_catalog()?.len(), 6);
    Ok(())
}

#[test]
fn test_project_config_with_relative_catalog() -> Result<()> {
    init_test_logging();
    let project = TempDir::new()?;
    let config_dir = project.path().join(".studyhere");
    fs::create_dir_all(&config_dir)?;
    fs::write(config_dir.join("spaces.yaml"), CATALOG_YAML)?;
    fs::write(
        config_dir.join("config.yaml"),
        "catalog: spaces.yaml\ndefaults:\n  sort: capacity-desc\n",
    )?;

    let loaded = StudyHereConfig::discover_in(project.path(), None, None)?;

    assert_eq!(
        loaded.source,
        ConfigSource::Project(config_dir.join("config.yaml"))
    );
    assert_eq!(loaded.config.catalog, Some(config_dir.join("spaces.yaml")));

    let catalog = loaded.config.load_catalog()?;
    let session = loaded.config.start_session(catalog);
    let names: Vec<&str> = session.view().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Campus Center Atrium", "Healey Library"]);
    Ok(())
}

#[test]
fn test_project_config_beats_user_config() -> Result<()> {
    let project = TempDir::new()?;
    let user_dir = TempDir::new()?;

    let user_config = user_dir.path().join("config.yaml");
    fs::write(&user_config, "defaults:\n  sort: name-asc\n")?;

    let loaded = StudyHereConfig::discover_in(project.path(), None, Some(user_config.as_path()))?;
    assert_eq!(loaded.source, ConfigSource::User(user_config.clone()));
    assert_eq!(loaded.config.defaults.sort, SortKey::NameAsc);

    fs::create_dir_all(project.path().join(".studyhere"))?;
    fs::write(
        project.path().join(".studyhere/config.yaml"),
        "defaults:\n  sort: capacity-asc\n",
    )?;

    let loaded = StudyHereConfig::discover_in(project.path(), None, Some(user_config.as_path()))?;
    assert_eq!(loaded.config.defaults.sort, SortKey::CapacityAsc);
    Ok(())
}

#[test]
fn test_override_must_exist() -> Result<()> {
    let project = TempDir::new()?;
    let missing = project.path().join("missing.yaml");

    let err = StudyHereConfig::discover_in(project.path(), Some(missing.as_path()), None).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to read config"));
    Ok(())
}

#[test]
fn test_malformed_config_is_an_error() -> Result<()> {
    let project = TempDir::new()?;
    fs::create_dir_all(project.path().join(".studyhere"))?;
    fs::write(
        project.path().join(".studyhere/config.yaml"),
        "defaults: [not, a, map]\n",
    )?;

    assert!(StudyHereConfig::discover_in(project.path(), None, None).is_err());
    Ok(())
}

#[test]
fn test_missing_catalog_file_is_an_error() -> Result<()> {
    let project = TempDir::new()?;
    let config_path = project.path().join("config.yaml");
    fs::write(&config_path, "catalog: nowhere.yaml\n")?;

    let config = StudyHereConfig::load_from_path(&config_path)?;
    let err = config.load_catalog().unwrap_err();
    assert!(format!("{err:#}").contains("Failed to load catalog"));
    Ok(())
}
