//! Configuration loading utilities

use crate::Config;
use airq_common::Result as AirQualityResult;
use std::env;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Environment variable naming an explicit configuration file
pub const CONFIG_PATH_VAR: &str = "AIRQ_CONFIG_PATH";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        var: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for airq_common::AirQualityError {
    fn from(err: ConfigError) -> Self {
        let message = err.to_string();
        airq_common::AirQualityError::config_with_source(message, err)
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config = Self::parse(&content)?;

        Self::apply_env_overrides(&mut config)?;
        config.validate_all()?;

        debug!(path = %path.as_ref().display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse YAML content; missing sections and fields take their defaults
    pub fn parse(content: &str) -> Result<Config, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from the environment, a default file, or built-in defaults
    pub fn load() -> AirQualityResult<Config> {
        let config = if let Ok(config_path) = env::var(CONFIG_PATH_VAR) {
            Self::load_config(&config_path)?
        } else if Path::new("airq.yaml").exists() {
            Self::load_config("airq.yaml")?
        } else if Path::new("airq.yml").exists() {
            Self::load_config("airq.yml")?
        } else {
            let mut config = Config::default();
            Self::apply_env_overrides(&mut config)?;
            config.validate_all().map_err(ConfigError::ValidationError)?;
            config
        };

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> AirQualityResult<Config> {
        Ok(Self::load_config(path)?)
    }

    fn parse_var<T>(var: &str) -> Result<Option<T>, ConfigError>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        match env::var(var) {
            Ok(raw) => raw
                .trim()
                .parse()
                .map(Some)
                .map_err(|e| ConfigError::EnvParseError {
                    var: var.to_string(),
                    source: Box::new(e),
                }),
            Err(_) => Ok(None),
        }
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        if let Some(width) = Self::parse_var("AIRQ_CHART_WIDTH")? {
            config.chart.width = width;
        }

        if let Some(height) = Self::parse_var("AIRQ_CHART_HEIGHT")? {
            config.chart.height = height;
        }

        if let Ok(font_family) = env::var("AIRQ_FONT_FAMILY") {
            config.chart.font_family = font_family;
        }

        if let Some(history_days) = Self::parse_var("AIRQ_HISTORY_DAYS")? {
            config.window.history_days = history_days;
        }

        if let Some(default_days) = Self::parse_var("AIRQ_DEFAULT_DAYS")? {
            config.window.default_days = default_days;
        }

        if let Ok(path) = env::var("AIRQ_LAST_UPDATE_PATH") {
            config.window.last_update_path = Some(path);
        }

        if let Ok(level) = env::var("AIRQ_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(file) = env::var("AIRQ_LOG_FILE") {
            config.logging.file = Some(file);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_yaml_uses_defaults() {
        let config = ConfigLoader::parse("chart:\n  width: 1200\n").unwrap();
        assert_eq!(config.chart.width, 1200);
        assert_eq!(config.chart.height, 1400);
        assert_eq!(config.window.history_days, 180);
    }

    #[test]
    fn test_parse_empty_yaml() {
        let config = ConfigLoader::parse("   \n").unwrap();
        assert_eq!(config.window.default_days, 90);
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let result = ConfigLoader::parse("chart:\n  width: [unclosed");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_missing_config_file() {
        let result = ConfigLoader::load_config("/nonexistent/path/airq.yaml");
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_config_error_converts_to_config_variant() {
        let err: airq_common::AirQualityError =
            ConfigError::IoError(std::io::Error::other("boom")).into();
        assert!(matches!(err, airq_common::AirQualityError::Config { .. }));
        let source = std::error::Error::source(&err).expect("loader error kept as source");
        assert!(source.to_string().contains("boom"));
    }
}
