//! Error types and utilities for the air quality tools

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for air quality operations
pub type Result<T> = std::result::Result<T, AirQualityError>;

/// Main error type for air quality operations
#[derive(Error, Debug)]
pub enum AirQualityError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
        /// Underlying loader error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Graph construction and plotting errors
    #[error("Graph error: {message}")]
    Graph {
        /// What went wrong
        message: String,
        /// Underlying backend error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A pollutant key missing from the WHO recommendation table
    #[error("Lookup error: unknown pollutant '{pollutant}'")]
    UnknownPollutant {
        /// The key that was looked up
        pollutant: String,
    },

    /// A measurement row that violates the record invariants
    #[error("Invalid measurement: {message}")]
    InvalidMeasurement {
        /// Which check failed
        message: String,
    },

    /// A date window whose start lies after its end, or outside the allowed bounds
    #[error("Invalid date window: {start} to {end}")]
    InvalidWindow {
        /// Requested first day
        start: NaiveDate,
        /// Requested last day
        end: NaiveDate,
    },

    /// Date parsing errors
    #[error("Date parse error: {0}")]
    DateParse(#[from] chrono::ParseError),

    /// Validation errors for user input or data
    #[error("Validation error: {message}")]
    Validation {
        /// Which check failed
        message: String,
        /// Offending field name
        field: Option<String>,
    },

    /// Generic error with custom message
    #[error("{message}")]
    Generic {
        /// Error message
        message: String,
        /// Underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AirQualityError {
    /// Create a new generic error with a custom message
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new generic error with a custom message and source
    pub fn with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Generic {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new graph error
    pub fn graph(msg: impl Into<String>) -> Self {
        Self::Graph {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new graph error with source
    pub fn graph_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Graph {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an unknown pollutant lookup error
    pub fn unknown_pollutant(pollutant: impl Into<String>) -> Self {
        Self::UnknownPollutant {
            pollutant: pollutant.into(),
        }
    }

    /// Create a new invalid measurement error
    pub fn invalid_measurement(msg: impl Into<String>) -> Self {
        Self::InvalidMeasurement {
            message: msg.into(),
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Whether this error is the pollutant lookup failure
    pub fn is_lookup(&self) -> bool {
        matches!(self, Self::UnknownPollutant { .. })
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to AirQualityError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for AirQualityError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::graph_with_source("Graph rendering failed", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_creation() {
        let error = AirQualityError::new("test message");
        assert!(error.to_string().contains("test message"));

        let config_error = AirQualityError::config("config issue");
        assert!(config_error.to_string().contains("Configuration error"));
        assert!(config_error.to_string().contains("config issue"));

        let lookup_error = AirQualityError::unknown_pollutant("XYZ");
        assert_eq!(lookup_error.to_string(), "Lookup error: unknown pollutant 'XYZ'");
        assert!(lookup_error.is_lookup());

        let validation_error = AirQualityError::validation_field("Invalid input", "hour");
        assert!(validation_error.to_string().contains("Validation error"));
        assert!(!validation_error.is_lookup());
    }

    #[test]
    fn test_invalid_window_display() {
        let error = AirQualityError::InvalidWindow {
            start: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date window: 2024-03-10 to 2024-03-01"
        );
    }

    #[test]
    fn test_error_with_source() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let wrapped_error = AirQualityError::with_source("Failed to read marker", io_error);

        assert!(wrapped_error.to_string().contains("Failed to read marker"));
        assert!(wrapped_error.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: AirQualityError = io_error.into();

        assert!(error.to_string().contains("I/O error"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_date_parse_conversion() {
        let parse_error = "2024-13-45".parse::<NaiveDate>().unwrap_err();
        let error: AirQualityError = parse_error.into();
        assert!(error.to_string().starts_with("Date parse error"));
    }
}
