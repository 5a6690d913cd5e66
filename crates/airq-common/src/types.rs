//! Common measurement types shared across the workspace

use crate::{AirQualityError, Result};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of hour-of-day slots in a daily profile
pub const HOURS_PER_DAY: usize = 24;

/// Kind of day a measurement was taken on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday to Friday
    WorkingDay,
    /// Saturday and Sunday
    Weekend,
}

impl DayType {
    /// Both day types, in the order profiles and series are laid out
    pub const ALL: [DayType; 2] = [DayType::WorkingDay, DayType::Weekend];

    /// Position of this day type in [`DayType::ALL`]
    pub fn index(self) -> usize {
        match self {
            Self::WorkingDay => 0,
            Self::Weekend => 1,
        }
    }

    /// Classify a calendar date by weekday
    pub fn of(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Sat | Weekday::Sun => Self::Weekend,
            _ => Self::WorkingDay,
        }
    }

    /// Human readable series label
    pub fn label(self) -> &'static str {
        match self {
            Self::WorkingDay => "Working days",
            Self::Weekend => "Week-end",
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single hourly concentration reading supplied by the data loader.
///
/// Deserialization goes through [`MeasurementRecord::new`], so a loaded
/// record satisfies the same checks as a constructed one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMeasurementRecord")]
pub struct MeasurementRecord {
    date: NaiveDate,
    hour: u8,
    value: f64,
    day_type: DayType,
}

impl MeasurementRecord {
    /// Create a record, rejecting hours outside 0..=23 and negative or non-finite values
    pub fn new(date: NaiveDate, hour: u8, value: f64, day_type: DayType) -> Result<Self> {
        if usize::from(hour) >= HOURS_PER_DAY {
            return Err(AirQualityError::invalid_measurement(format!(
                "hour {hour} is outside 0..=23"
            )));
        }
        if !value.is_finite() || value < 0.0 {
            return Err(AirQualityError::invalid_measurement(format!(
                "value {value} at {date} {hour}h must be a non-negative number"
            )));
        }
        Ok(Self {
            date,
            hour,
            value,
            day_type,
        })
    }

    /// Create a record from a `{date, hour, value}` table row with an ISO-8601 date
    pub fn parse(date: &str, hour: i64, value: f64, day_type: DayType) -> Result<Self> {
        let date = crate::utils::parse_iso_date(date)?;
        let hour = u8::try_from(hour).map_err(|_| {
            AirQualityError::invalid_measurement(format!("hour {hour} is outside 0..=23"))
        })?;
        Self::new(date, hour, value, day_type)
    }

    /// Calendar date of the reading
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Hour of day, 0 to 23
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Non-negative concentration
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Day type the reading belongs to
    pub fn day_type(&self) -> DayType {
        self.day_type
    }
}

#[derive(Deserialize)]
struct RawMeasurementRecord {
    date: NaiveDate,
    hour: u8,
    value: f64,
    day_type: DayType,
}

impl TryFrom<RawMeasurementRecord> for MeasurementRecord {
    type Error = AirQualityError;

    fn try_from(raw: RawMeasurementRecord) -> Result<Self> {
        Self::new(raw.date, raw.hour, raw.value, raw.day_type)
    }
}
