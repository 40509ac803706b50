//! Integration tests for configuration loading, validation and merging.

use mailflow::config::{
    generate_full_example_config, generate_json_schema, load_config_file, load_or_default,
    load_validated, AppConfig, ConfigFileError, Validatable,
};
use mailflow::{Language, MailFlowError};
use std::time::Duration;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(".mailflow.yaml");
    std::fs::write(&path, content).expect("write config");
    path
}

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_defaults_are_valid() {
    let config = AppConfig::default();
    assert!(config.is_valid());
    assert_eq!(config.tui.tick_rate(), Duration::from_millis(100));
    assert_eq!(config.workbench.success_delay(), Duration::from_millis(1500));
    assert!(config.workbench.seed_samples);
    assert_eq!(config.session.language, Language::Es);
    assert!(config.preferences().dark_mode);
}

#[test]
fn test_example_config_parses_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, &generate_full_example_config());
    let config = load_config_file(&path).expect("example config parses");
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_json_schema_lists_sections() {
    let schema: serde_json::Value =
        serde_json::from_str(&generate_json_schema()).expect("schema is JSON");
    let properties = &schema["properties"];
    assert!(properties.get("tui").is_some());
    assert!(properties.get("workbench").is_some());
    assert!(properties.get("session").is_some());
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "tui:\n  theme: light\nsession:\n  language: en\nworkbench:\n  seed_samples: false\n",
    );
    let config = load_config_file(&path).unwrap();

    assert_eq!(config.tui.theme, "light");
    assert_eq!(config.tui.tick_rate_ms, 100);
    assert_eq!(config.session.language, Language::En);
    assert!(!config.workbench.seed_samples);

    let prefs = config.preferences();
    assert!(!prefs.dark_mode);
    assert_eq!(prefs.language, Language::En);
}

#[test]
fn test_empty_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "  \n");
    assert_eq!(load_config_file(&path).unwrap(), AppConfig::default());
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = load_config_file(&dir.path().join("nope.yaml"));
    assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
}

#[test]
fn test_broken_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "tui: [1, 2");
    let (config, loaded_from) = load_or_default(Some(&path));
    assert_eq!(config, AppConfig::default());
    assert_eq!(loaded_from, None);
}

#[test]
fn test_unknown_language_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "session:\n  language: fr\n");
    assert!(matches!(load_config_file(&path), Err(ConfigFileError::Parse(_))));
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_out_of_range_values_reported() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "tui:\n  theme: neon\n  tick_rate_ms: 5000\nworkbench:\n  success_delay_ms: 50\n",
    );
    let config = load_config_file(&path).unwrap();
    let fields: Vec<_> = config.validate().into_iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        vec!["tui.theme", "tui.tick_rate_ms", "workbench.success_delay_ms"]
    );

    match load_validated(&path) {
        Err(MailFlowError::Validation(errors)) => assert_eq!(errors.len(), 3),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_load_validated_read_error_names_path() {
    let dir = TempDir::new().unwrap();
    // A directory exists but cannot be read as a file
    match load_validated(dir.path()) {
        Err(err @ MailFlowError::Io { .. }) => {
            let shown = err.to_string();
            assert!(shown.contains(&dir.path().display().to_string()), "{shown}");
        }
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn test_load_validated_accepts_good_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "workbench:\n  success_delay_ms: 200\n");
    let config = load_validated(&path).unwrap();
    assert_eq!(config.workbench.success_delay(), Duration::from_millis(200));
}

// ============================================================================
// Merging
// ============================================================================

#[test]
fn test_cli_overrides_win_over_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "tui:\n  tick_rate_ms: 50\n  theme: dark\n");

    let mut overrides = AppConfig::default();
    overrides.tui.theme = "light".to_string();
    overrides.workbench.seed_samples = false;

    let (config, loaded_from) = AppConfig::from_file_with_overrides(Some(&path), &overrides);
    assert_eq!(loaded_from.as_deref(), Some(path.as_path()));
    assert_eq!(config.tui.theme, "light");
    assert_eq!(config.tui.tick_rate_ms, 50);
    assert!(!config.workbench.seed_samples);
}

#[test]
fn test_default_overrides_keep_file_values() {
    let mut config = AppConfig::default();
    config.tui.tick_rate_ms = 250;
    config.session.language = Language::En;
    config.merge(&AppConfig::default());
    assert_eq!(config.tui.tick_rate_ms, 250);
    assert_eq!(config.session.language, Language::En);
}
