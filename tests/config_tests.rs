//! Integration tests for configuration management

use std::fs;
use std::path::PathBuf;
use studyhub::config::{Config, ConfigOverrides, DEFAULT_UPCOMING_DAYS};
use tempfile::TempDir;

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.storage.data_dir.is_empty(),
        "Default data_dir should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
    assert_eq!(config.planner.upcoming_days, 7);
    assert!(!config.planner.semester.is_empty());
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[storage]
data_dir = "/var/studyhub"

[paths]
reports_dir = "./reports"

[planner]
upcoming_days = 14
semester = "Spring 2025"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.storage.data_dir, "/var/studyhub");
    assert_eq!(config.paths.reports_dir, "./reports");
    assert_eq!(config.planner.upcoming_days, 14);
    assert_eq!(config.planner.semester, "Spring 2025");
}

#[test]
fn test_config_from_toml_partial() {
    // Missing sections and fields fall back to serde defaults
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.storage.data_dir, "");
    assert_eq!(config.planner.upcoming_days, 0);
    assert_eq!(config.upcoming_days(), DEFAULT_UPCOMING_DAYS);
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$STUDYHUB/test.log"

[storage]
data_dir = "$STUDYHUB/data"

[paths]
reports_dir = "$STUDYHUB/reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    for value in [
        &config.logging.file,
        &config.storage.data_dir,
        &config.paths.reports_dir,
    ] {
        assert!(value.contains("studyhub"), "{value} should be expanded");
        assert!(!value.contains("$STUDYHUB"));
    }
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config
        .set("verbose", "true")
        .expect("Failed to set verbose");
    assert!(config.logging.verbose);

    config
        .set("data-dir", "/tmp/data")
        .expect("Failed to set data dir");
    assert_eq!(config.get("data_dir").unwrap(), "/tmp/data");

    config
        .set("upcoming_days", "10")
        .expect("Failed to set upcoming days");
    assert_eq!(config.upcoming_days(), 10);

    config
        .set("semester", "Winter 2025")
        .expect("Failed to set semester");
    assert_eq!(config.get("semester").unwrap(), "Winter 2025");

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_set_rejects_bad_values() {
    let mut config = Config::from_defaults();

    assert!(config.set("verbose", "sometimes").is_err());
    assert!(config.set("upcoming_days", "0").is_err());
    assert!(config.set("upcoming_days", "a week").is_err());
    assert_eq!(config.planner.upcoming_days, 7);
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "debug").expect("Failed to set level");
    config
        .set("reports_dir", "/elsewhere")
        .expect("Failed to set reports dir");

    config
        .unset("level", &defaults)
        .expect("Failed to unset level");
    config
        .unset("reports-dir", &defaults)
        .expect("Failed to unset reports dir");

    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.paths.reports_dir, defaults.paths.reports_dir);
    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_config_save_and_load_roundtrip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config.set("upcoming_days", "3").expect("Failed to set days");

    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded.logging.level, "info");
    assert_eq!(loaded.planner.upcoming_days, 3);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        data_dir: Some("./custom_data".to_string()),
        reports_dir: Some("./custom_reports".to_string()),
        upcoming_days: Some(21),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.storage.data_dir, "./custom_data");
    assert_eq!(config.paths.reports_dir, "./custom_reports");
    assert_eq!(config.upcoming_days(), 21);
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        ..ConfigOverrides::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.storage.data_dir, defaults.storage.data_dir);
}

#[test]
fn test_config_display_format() {
    let display_str = Config::from_defaults().to_string();

    for section in ["[logging]", "[storage]", "[paths]", "[planner]"] {
        assert!(display_str.contains(section), "missing {section}");
    }
    for key in ["level", "data_dir", "reports_dir", "upcoming_days", "semester"] {
        assert!(display_str.contains(key), "missing {key}");
    }
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    let toml_str = r#"
[logging]
level = "error"
file = ""
verbose = false
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    let changed = config.merge_defaults(&defaults);

    assert!(
        changed,
        "merge_defaults should return true when fields are added"
    );
    assert_eq!(config.storage.data_dir, defaults.storage.data_dir);
    assert_eq!(config.planner.upcoming_days, defaults.planner.upcoming_days);
    assert_eq!(config.planner.semester, defaults.planner.semester);
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"
verbose = false

[planner]
upcoming_days = 30
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    let defaults = Config::from_defaults();

    config.merge_defaults(&defaults);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.planner.upcoming_days, 30);
}

#[test]
fn test_merge_defaults_is_idempotent() {
    let defaults = Config::from_defaults();
    let mut config = defaults.clone();

    assert!(!config.merge_defaults(&defaults));
}

#[test]
fn test_get_studyhub_dir() {
    let dir = Config::get_studyhub_dir();

    assert!(dir.to_string_lossy().contains("studyhub"));
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();

    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
