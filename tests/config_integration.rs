//! Integration tests for the dragboard-config crate.

use std::{fs, path::PathBuf, time::Duration};

use dragboard_config::{Config, ConfigError, DragConfig, LogConfig, UiConfig, persistence};
use tempfile::TempDir;

#[test]
fn config_load_from_json5_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("dragboard.json5");

    fs::write(
        &config_path,
        r#"
        {
            // Configuration for dragboard
            drag: {
                activation_distance: 3,
                keyboard_enabled: false,
            },
            ui: { poll_interval_ms: 50 },
            log: {
                file: "/tmp/dragboard.log",
                level: "debug",
            },
        }
        "#,
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();

    assert_eq!(config.drag.activation_distance, 3);
    assert!(!config.drag.keyboard_enabled);
    assert_eq!(config.ui.poll_interval(), Duration::from_millis(50));
    assert!(!config.ui.show_help_on_start);
    assert_eq!(config.log.file, Some(PathBuf::from("/tmp/dragboard.log")));
    assert_eq!(config.log.level, "debug");
}

#[test]
fn config_missing_sections_use_defaults() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("dragboard.json5");
    fs::write(&config_path, "{ ui: { show_help_on_start: true } }").unwrap();

    let config = Config::load_from(&config_path).unwrap();

    assert!(config.ui.show_help_on_start);
    assert_eq!(config.drag, DragConfig::default());
    assert_eq!(config.log, LogConfig::default());
}

#[test]
fn config_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.json");

    let original = Config {
        drag: DragConfig {
            activation_distance: 4,
            keyboard_enabled: true,
        },
        ui: UiConfig {
            poll_interval_ms: 250,
            show_help_on_start: true,
        },
        log: LogConfig {
            file: Some(dir.path().join("dragboard.log")),
            level: "dragboard_protocol=trace,info".to_string(),
        },
    };

    original.save_to(&config_path).unwrap();
    let reloaded = Config::load_from(&config_path).unwrap();

    assert_eq!(reloaded, original);

    // The written file is plain JSON.
    let raw = fs::read_to_string(&config_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["drag"]["activation_distance"], 4);
}

#[test]
fn config_load_rejects_invalid_values() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("dragboard.json5");
    fs::write(&config_path, "{ ui: { poll_interval_ms: 1 } }").unwrap();

    let err = Config::load_from(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPollInterval { .. }));
}

#[test]
fn config_load_rejects_malformed_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("dragboard.json5");
    fs::write(&config_path, "{ drag: ").unwrap();

    let err = Config::load_from(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseJson5(_)));
}

#[test]
fn config_load_nonexistent_file_fails() {
    let dir = TempDir::new().unwrap();
    let err = Config::load_from(dir.path().join("missing.json5")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFile { .. }));
}

#[test]
fn discovery_prefers_local_file() {
    let local = TempDir::new().unwrap();
    let user = TempDir::new().unwrap();
    fs::create_dir_all(user.path().join("dragboard")).unwrap();
    fs::write(user.path().join("dragboard/config.json5"), "{}").unwrap();

    let found = persistence::find_config_file_in(local.path(), Some(user.path()));
    assert_eq!(found, Some(user.path().join("dragboard/config.json5")));

    fs::write(local.path().join("dragboard.json"), "{}").unwrap();
    let found = persistence::find_config_file_in(local.path(), Some(user.path()));
    assert_eq!(found, Some(local.path().join("dragboard.json")));
}

#[test]
fn discovery_without_any_file() {
    let local = TempDir::new().unwrap();
    assert_eq!(persistence::find_config_file_in(local.path(), None), None);
}
