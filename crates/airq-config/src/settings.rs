//! Application configuration structures

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Config {
    /// Chart rendering settings
    #[validate]
    pub chart: ChartSettings,

    /// Analysis window settings
    #[validate]
    pub window: WindowSettings,

    /// Logging configuration
    #[validate]
    pub logging: LoggingSettings,
}

/// Chart rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ChartSettings {
    /// Figure width in pixels
    #[validate(range(min = 100, max = 4000, message = "Width must be between 100 and 4000 pixels"))]
    pub width: u32,

    /// Figure height in pixels
    #[validate(range(min = 100, max = 4000, message = "Height must be between 100 and 4000 pixels"))]
    pub height: u32,

    /// Font family for text rendering
    #[validate(length(min = 1, message = "Font family cannot be empty"))]
    pub font_family: String,

    /// Font size for labels
    #[validate(range(min = 8, max = 72, message = "Font size must be between 8 and 72"))]
    pub font_size: u32,

    /// Background color (hex format)
    #[validate(regex(path = "crate::validation::HEX_COLOR_REGEX", message = "Background color must be valid hex color"))]
    pub background_color: String,

    /// Working days series color (hex format)
    #[validate(regex(path = "crate::validation::HEX_COLOR_REGEX", message = "Working days color must be valid hex color"))]
    pub working_day_color: String,

    /// Weekend series color (hex format)
    #[validate(regex(path = "crate::validation::HEX_COLOR_REGEX", message = "Weekend color must be valid hex color"))]
    pub weekend_color: String,

    /// WHO reference line color (hex format)
    #[validate(regex(path = "crate::validation::HEX_COLOR_REGEX", message = "Reference color must be valid hex color"))]
    pub reference_color: String,

    /// Opacity of the threshold bands
    #[validate(range(min = 0.0, max = 1.0, message = "Band opacity must be between 0 and 1"))]
    pub band_opacity: f64,

    /// Stroke width of the WHO reference line
    #[validate(range(min = 0.1, max = 20.0, message = "Reference line width must be between 0.1 and 20"))]
    pub reference_line_width: f64,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            width: 1700,
            height: 1400,
            font_family: "sans-serif".to_string(),
            font_size: 18,
            background_color: "#FFFFFF".to_string(),
            working_day_color: "#1E90FF".to_string(),
            weekend_color: "#00FFFF".to_string(),
            reference_color: "#EE82EE".to_string(),
            band_opacity: 0.1,
            reference_line_width: 1.7,
        }
    }
}

/// Analysis window configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct WindowSettings {
    /// How many days before the latest available date the selectable range reaches
    #[validate(range(min = 1, max = 3660, message = "History must span between 1 and 3660 days"))]
    pub history_days: u32,

    /// Length of the window selected before the user picks one
    #[validate(range(min = 0, max = 3660, message = "Default window must span at most 3660 days"))]
    pub default_days: u32,

    /// File holding the ISO date of the last data update
    #[validate(custom(function = "crate::validation::validate_file_path", message = "Invalid last update path"))]
    pub last_update_path: Option<String>,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            history_days: 180,
            default_days: 90,
            last_update_path: None,
        }
    }
}

impl WindowSettings {
    /// Check that the default window fits inside the selectable history
    pub fn validate_window(&self) -> Result<(), ValidationErrors> {
        if self.default_days > self.history_days {
            let mut errors = ValidationErrors::new();
            let mut error = ValidationError::new("default_exceeds_history");
            error.message = Some("Default window cannot be longer than the history".into());
            errors.add("default_days", error);
            return Err(errors);
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    #[validate(custom(function = "crate::validation::validate_log_level", message = "Log level must be one of: trace, debug, info, warn, error"))]
    pub level: String,

    /// Optional log file path
    #[validate(custom(function = "crate::validation::validate_file_path", message = "Invalid log file path"))]
    pub file: Option<String>,

    /// Whether to use colored output (for console logging)
    pub colored: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            colored: true,
        }
    }
}

impl LoggingSettings {
    /// Convert into the logging initialiser's configuration
    pub fn to_logging_config(&self) -> airq_common::LoggingConfig {
        airq_common::LoggingConfig {
            level: self.level.clone(),
            pretty_format: self.colored,
            file_path: self.file.clone(),
            ..airq_common::LoggingConfig::default()
        }
    }
}

impl Config {
    /// Comprehensive validation of the entire configuration
    pub fn validate_all(&self) -> Result<(), ValidationErrors> {
        self.validate()?;
        self.window.validate_window()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate_all().is_ok());
        assert_eq!(config.chart.width, 1700);
        assert_eq!(config.chart.height, 1400);
        assert_eq!(config.window.history_days, 180);
        assert_eq!(config.window.default_days, 90);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_chart_color() {
        let mut config = Config::default();
        config.chart.weekend_color = "cyan".to_string();
        assert!(config.validate_all().is_err());
    }

    #[test]
    fn test_band_opacity_range() {
        let mut config = Config::default();
        config.chart.band_opacity = 1.5;
        assert!(config.validate_all().is_err());
    }

    #[test]
    fn test_default_window_longer_than_history() {
        let mut config = Config::default();
        config.window.default_days = 200;
        let errors = config.validate_all().unwrap_err();
        assert!(errors.field_errors().contains_key("default_days"));
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate_all().is_err());
    }

    #[test]
    fn test_logging_settings_conversion() {
        let settings = LoggingSettings {
            level: "debug".to_string(),
            file: Some("airq.log".to_string()),
            colored: false,
        };
        let logging = settings.to_logging_config();
        assert_eq!(logging.level, "debug");
        assert!(!logging.pretty_format);
        assert_eq!(logging.file_path.as_deref(), Some("airq.log"));
    }
}
