//! Utility functions used across the workspace

use crate::Result;
use chrono::NaiveDate;

/// Parse an ISO-8601 calendar date, ignoring surrounding whitespace
pub fn parse_iso_date(value: &str) -> Result<NaiveDate> {
    Ok(value.trim().parse::<NaiveDate>()?)
}

/// Strip the descriptive suffix from a pollutant label ("NO2 (nitrogen dioxide)" -> "NO2")
pub fn normalize_pollutant_label(label: &str) -> &str {
    label.split_whitespace().next().unwrap_or("")
}

/// Format an hour-of-day slot as an axis label ("7h00")
pub fn format_hour_label(hour: usize) -> String {
    format!("{hour}h00")
}

/// Validate that a string is not empty after trimming
pub fn validate_non_empty(value: &str, field_name: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(crate::AirQualityError::validation_field(
            format!("{field_name} cannot be empty"),
            field_name,
        ))
    } else {
        Ok(trimmed.to_string())
    }
}
