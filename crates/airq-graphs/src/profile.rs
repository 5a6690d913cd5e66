//! Average daily profile: one concentration per hour of day

use airq_common::{AirQualityError, Result, HOURS_PER_DAY};
use serde::{Deserialize, Serialize};

/// Mean concentration per hour of day, with per-hour provenance.
///
/// An hour without qualifying records holds `0.0` and `has_data == false`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDailyProfile")]
pub struct DailyProfile {
    values: [f64; HOURS_PER_DAY],
    has_data: [bool; HOURS_PER_DAY],
}

impl DailyProfile {
    /// A profile with no data in any hour
    pub fn empty() -> Self {
        Self {
            values: [0.0; HOURS_PER_DAY],
            has_data: [false; HOURS_PER_DAY],
        }
    }

    /// Build a profile from bare values, reading every exact zero as "no data"
    pub fn from_values(values: [f64; HOURS_PER_DAY]) -> Self {
        Self {
            values,
            has_data: values.map(|value| value != 0.0),
        }
    }

    /// Build a profile from values and explicit provenance flags
    pub fn with_provenance(values: [f64; HOURS_PER_DAY], has_data: [bool; HOURS_PER_DAY]) -> Self {
        Self { values, has_data }
    }

    pub(crate) fn set(&mut self, hour: usize, value: f64) {
        self.values[hour] = value;
        self.has_data[hour] = true;
    }

    pub fn values(&self) -> &[f64; HOURS_PER_DAY] {
        &self.values
    }

    pub fn has_data(&self) -> &[bool; HOURS_PER_DAY] {
        &self.has_data
    }

    pub fn value(&self, hour: usize) -> f64 {
        self.values[hour]
    }

    /// Whether at least one hour lacks data
    pub fn has_gaps(&self) -> bool {
        self.has_data.iter().any(|has| !has)
    }

    /// Whether no hour has data
    pub fn is_blank(&self) -> bool {
        self.has_data.iter().all(|has| !has)
    }

    /// Whether any slot holds a numeric zero, regardless of provenance
    pub fn contains_zero(&self) -> bool {
        self.values.iter().any(|value| *value == 0.0)
    }

    /// Largest value across all hours
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}

#[derive(Deserialize)]
struct RawDailyProfile {
    values: [f64; HOURS_PER_DAY],
    has_data: [bool; HOURS_PER_DAY],
}

impl TryFrom<RawDailyProfile> for DailyProfile {
    type Error = AirQualityError;

    fn try_from(raw: RawDailyProfile) -> Result<Self> {
        if let Some(hour) = raw.values.iter().position(|value| !value.is_finite() || *value < 0.0) {
            return Err(AirQualityError::invalid_measurement(format!(
                "profile value {} at {hour}h must be a non-negative number",
                raw.values[hour]
            )));
        }
        Ok(Self::with_provenance(raw.values, raw.has_data))
    }
}

impl Default for DailyProfile {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_profile() {
        let profile = DailyProfile::empty();
        assert_eq!(profile.values().len(), 24);
        assert!(profile.is_blank());
        assert!(profile.has_gaps());
        assert!(profile.contains_zero());
        assert_eq!(profile.max(), 0.0);
    }

    #[test]
    fn test_from_values_marks_zeros_as_gaps() {
        let mut values = [12.0; 24];
        values[4] = 0.0;
        let profile = DailyProfile::from_values(values);

        assert!(profile.has_gaps());
        assert!(!profile.has_data()[4]);
        assert!(profile.has_data()[5]);
        assert!(!profile.is_blank());
    }

    #[test]
    fn test_measured_zero_is_not_a_gap() {
        let has_data = [true; 24];
        let mut values = [3.0; 24];
        values[0] = 0.0;
        let profile = DailyProfile::with_provenance(values, has_data);

        assert!(profile.contains_zero());
        assert!(!profile.has_gaps());
    }

    #[test]
    fn test_deserialize_rejects_negative_values() {
        let profile = DailyProfile::from_values([4.0; 24]);
        let json = serde_json::to_string(&profile).unwrap();
        assert_eq!(serde_json::from_str::<DailyProfile>(&json).unwrap(), profile);

        let mut values = [4.0; 24];
        values[5] = -40.0;
        let has_data = [true; 24];
        let json = serde_json::json!({ "values": values, "has_data": has_data }).to_string();
        let err = serde_json::from_str::<DailyProfile>(&json).unwrap_err();
        assert!(err.to_string().contains("5h"));
    }

    #[test]
    fn test_set_marks_data() {
        let mut profile = DailyProfile::empty();
        profile.set(5, 20.0);
        assert_eq!(profile.value(5), 20.0);
        assert!(profile.has_data()[5]);
        assert_eq!(profile.max(), 20.0);
    }
}
