//! Environment variable overrides.
//!
//! Kept in a single test so no other test in this binary observes the
//! modified process environment.

use airq_config::{ConfigError, ConfigLoader};
use std::env;
use std::io::Write;
use tempfile::NamedTempFile;

const VARS: [&str; 5] = [
    "AIRQ_CHART_WIDTH",
    "AIRQ_HISTORY_DAYS",
    "AIRQ_DEFAULT_DAYS",
    "AIRQ_LAST_UPDATE_PATH",
    "AIRQ_LOG_LEVEL",
];

fn clear_vars() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_environment_variable_overrides() {
    clear_vars();

    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(b"chart:\n  width: 1000\nwindow:\n  history_days: 180\n")
        .expect("Failed to write to temp file");

    env::set_var("AIRQ_CHART_WIDTH", "1500");
    env::set_var("AIRQ_HISTORY_DAYS", "365");
    env::set_var("AIRQ_DEFAULT_DAYS", "120");
    env::set_var("AIRQ_LAST_UPDATE_PATH", "data/last_update.txt");
    env::set_var("AIRQ_LOG_LEVEL", "warn");

    let config = ConfigLoader::load_config(file.path()).expect("Failed to load config");
    assert_eq!(config.chart.width, 1500);
    assert_eq!(config.window.history_days, 365);
    assert_eq!(config.window.default_days, 120);
    assert_eq!(
        config.window.last_update_path.as_deref(),
        Some("data/last_update.txt")
    );
    assert_eq!(config.logging.level, "warn");

    env::set_var("AIRQ_CHART_WIDTH", "wide");
    let result = ConfigLoader::load_config(file.path());
    assert!(matches!(result, Err(ConfigError::EnvParseError { .. })));

    clear_vars();
}
