//! Settings loading from local files.
//!
//! These tests assume no global config and no BINTREE_* variables in the environment.

use std::fs;

use tempfile::TempDir;

use bintree::{Settings, Strategy, TreeError};

#[test]
fn given_local_config_when_load_then_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bintree.toml");
    fs::write(
        &path,
        r#"
max_depth = 64
strategy = "iterative"
"#,
    )
    .unwrap();

    let settings = Settings::load(Some(path.as_path())).expect("load settings");

    assert_eq!(settings.max_depth, Some(64));
    assert_eq!(settings.strategy, Strategy::Iterative);
}

#[test]
fn given_partial_local_config_when_load_then_keeps_default_strategy() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bintree.toml");
    fs::write(&path, "max_depth = 3\n").unwrap();

    let settings = Settings::load(Some(path.as_path())).expect("load settings");

    assert_eq!(settings.max_depth, Some(3));
    assert_eq!(settings.strategy, Strategy::Recursive);
}

#[test]
fn given_missing_local_config_when_load_then_config_error_names_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let err = Settings::load(Some(path.as_path())).unwrap_err();

    assert!(matches!(err, TreeError::Config { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn given_unknown_strategy_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bintree.toml");
    fs::write(&path, "strategy = \"sideways\"\n").unwrap();

    let err = Settings::load(Some(path.as_path())).unwrap_err();

    assert!(matches!(err, TreeError::Config { .. }));
}

#[test]
fn given_settings_when_written_as_toml_then_loads_back_unchanged() {
    let settings = Settings {
        max_depth: Some(1024),
        strategy: Strategy::Iterative,
    };
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bintree.toml");
    fs::write(&path, settings.to_toml().unwrap()).unwrap();

    assert_eq!(Settings::load(Some(path.as_path())).unwrap(), settings);
}
