//! Test utilities and shared fixtures.
//!
//! Available to this crate's unit tests and, through the `testing` feature,
//! to the tests of every other crate in the workspace.

use crate::{DayType, MeasurementRecord};
use chrono::NaiveDate;
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialize logging for tests. Safe to call multiple times.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Build a calendar date, panicking on invalid input
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("invalid test date")
}

/// Assert that two floating point numbers are approximately equal within a tolerance.
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "assertion failed: `{left}` is not approximately equal to `{right}` (tolerance: {tolerance}, diff: {diff})"
    );
}

/// Build a valid record, panicking on invalid input
pub fn record(date: NaiveDate, hour: u8, value: f64, day_type: DayType) -> MeasurementRecord {
    MeasurementRecord::new(date, hour, value, day_type).expect("invalid test record")
}

/// Measurement fixtures
pub mod fixtures {
    use super::*;

    /// One record per hour for every day in `[start, start + days)`, valued `base + hour`
    pub fn full_days(
        start: NaiveDate,
        days: u32,
        base: f64,
        day_type: DayType,
    ) -> Vec<MeasurementRecord> {
        start
            .iter_days()
            .take(days as usize)
            .flat_map(|day| {
                (0..24u8).map(move |hour| record(day, hour, base + f64::from(hour), day_type))
            })
            .collect()
    }

    /// Records for a single hour with the given values, one per consecutive day
    pub fn single_hour(
        start: NaiveDate,
        hour: u8,
        values: &[f64],
        day_type: DayType,
    ) -> Vec<MeasurementRecord> {
        start
            .iter_days()
            .zip(values.iter())
            .map(|(day, value)| record(day, hour, *value, day_type))
            .collect()
    }
}
