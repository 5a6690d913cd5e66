//! Integration tests for loading configuration files.

use airq_config::{ConfigError, ConfigLoader};
use std::io::Write;
use tempfile::NamedTempFile;

fn create_test_config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

#[test]
fn test_load_full_yaml_config() {
    airq_common::test_utils::init_test_logging();

    let yaml_content = "chart:\n  width: 1200\n  height: 900\n  font_family: \"DejaVu Sans\"\n  font_size: 14\n  background_color: \"#FAFAFA\"\n  working_day_color: \"#1E90FF\"\n  weekend_color: \"#00FFFF\"\n  reference_color: \"#EE82EE\"\n  band_opacity: 0.2\n  reference_line_width: 2.0\nwindow:\n  history_days: 365\n  default_days: 30\n  last_update_path: \"data/last_update.txt\"\nlogging:\n  level: \"debug\"\n  colored: false\n";

    let temp_file = create_test_config_file(yaml_content);
    let config = ConfigLoader::load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.chart.width, 1200);
    assert_eq!(config.chart.font_family, "DejaVu Sans");
    assert_eq!(config.chart.band_opacity, 0.2);
    assert_eq!(config.window.history_days, 365);
    assert_eq!(config.window.default_days, 30);
    assert_eq!(
        config.window.last_update_path.as_deref(),
        Some("data/last_update.txt")
    );
    assert_eq!(config.logging.level, "debug");
    assert!(!config.logging.colored);
}

#[test]
fn test_load_minimal_config() {
    let temp_file = create_test_config_file("window:\n  default_days: 60\n");
    let config = ConfigLoader::load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.window.default_days, 60);
    assert_eq!(config.window.history_days, 180);
    assert_eq!(config.chart.working_day_color, "#1E90FF");
}

#[test]
fn test_validation_error() {
    let temp_file = create_test_config_file("chart:\n  width: 10\n");
    let result = ConfigLoader::load_config(temp_file.path());

    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

#[test]
fn test_default_window_must_fit_history() {
    let temp_file = create_test_config_file("window:\n  history_days: 30\n  default_days: 90\n");
    let result = ConfigLoader::load_from_file(temp_file.path());

    let err = result.unwrap_err();
    assert!(err.to_string().contains("Configuration error"));
}
