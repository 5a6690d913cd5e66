//! Date windows and the selectable analysis period

use airq_common::{parse_iso_date, AirQualityError, Result};
use airq_config::WindowSettings;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Inclusive calendar date range `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateWindow")]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    /// Create a window, rejecting `start > end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(AirQualityError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Window covering `days` days before `end`, plus `end` itself
    pub fn trailing(end: NaiveDate, days: u32) -> Result<Self> {
        let start = end
            .checked_sub_days(Days::new(u64::from(days)))
            .ok_or_else(|| AirQualityError::validation_field("window start underflows", "days"))?;
        Self::new(start, end)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `date` falls within the window, both ends included
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Whether `other` lies entirely inside this window
    pub fn covers(&self, other: &DateWindow) -> bool {
        self.contains(other.start) && self.contains(other.end)
    }

    /// Number of calendar days in the window
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

#[derive(Deserialize)]
struct RawDateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawDateWindow> for DateWindow {
    type Error = AirQualityError;

    fn try_from(raw: RawDateWindow) -> Result<Self> {
        Self::new(raw.start, raw.end)
    }
}

/// Read the ISO date stored in the "last update" marker file
pub fn read_last_update<P: AsRef<Path>>(path: P) -> Result<NaiveDate> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let date = parse_iso_date(&content)?;
    debug!(path = %path.as_ref().display(), %date, "Read last update marker");
    Ok(date)
}

/// Range of dates a caller may pick a window from, and the initial window.
///
/// The latest usable date is the day before the last update, since the
/// update day itself may be incomplete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAnalysisPeriod")]
pub struct AnalysisPeriod {
    bounds: DateWindow,
    default_window: DateWindow,
}

impl AnalysisPeriod {
    /// Build the period from the last update date and window settings
    pub fn from_last_update(last_update: NaiveDate, settings: &WindowSettings) -> Result<Self> {
        let latest = last_update
            .pred_opt()
            .ok_or_else(|| AirQualityError::validation_field("no date precedes the last update", "last_update"))?;
        Self::ending_at(latest, settings.history_days, settings.default_days)
    }

    /// Read the marker named in the settings and build the period from it
    pub fn from_settings(settings: &WindowSettings) -> Result<Self> {
        let path = settings.last_update_path.as_deref().ok_or_else(|| {
            AirQualityError::validation_field("no last update marker configured", "last_update_path")
        })?;
        Self::from_last_update(read_last_update(path)?, settings)
    }

    /// Build the period from the latest usable date
    pub fn ending_at(latest: NaiveDate, history_days: u32, default_days: u32) -> Result<Self> {
        if default_days > history_days {
            return Err(AirQualityError::validation_field(
                format!("default window of {default_days} days exceeds history of {history_days} days"),
                "default_days",
            ));
        }
        Ok(Self {
            bounds: DateWindow::trailing(latest, history_days)?,
            default_window: DateWindow::trailing(latest, default_days)?,
        })
    }

    /// Earliest and latest selectable dates
    pub fn bounds(&self) -> DateWindow {
        self.bounds
    }

    /// Window used before any explicit selection
    pub fn default_window(&self) -> DateWindow {
        self.default_window
    }

    pub fn latest(&self) -> NaiveDate {
        self.bounds.end
    }

    /// Validate a user selection against the bounds
    pub fn select(&self, start: NaiveDate, end: NaiveDate) -> Result<DateWindow> {
        let window = DateWindow::new(start, end)?;
        if !self.bounds.covers(&window) {
            return Err(AirQualityError::InvalidWindow { start, end });
        }
        Ok(window)
    }
}

#[derive(Deserialize)]
struct RawAnalysisPeriod {
    bounds: DateWindow,
    default_window: DateWindow,
}

impl TryFrom<RawAnalysisPeriod> for AnalysisPeriod {
    type Error = AirQualityError;

    // the default window ends on the latest date and stays inside the bounds
    fn try_from(raw: RawAnalysisPeriod) -> Result<Self> {
        if raw.default_window.end != raw.bounds.end || !raw.bounds.covers(&raw.default_window) {
            return Err(AirQualityError::validation_field(
                format!(
                    "default window {} to {} does not end the period {} to {}",
                    raw.default_window.start, raw.default_window.end, raw.bounds.start, raw.bounds.end
                ),
                "default_window",
            ));
        }
        Ok(Self {
            bounds: raw.bounds,
            default_window: raw.default_window,
        })
    }
}
