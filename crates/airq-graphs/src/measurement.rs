//! Hour-of-day grouping of measurement records

use airq_common::{AirQualityError, DayType, MeasurementRecord, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Records of one day type, keyed by hour of day.
///
/// Built once per (station, pollutant) selection and only read afterwards.
/// Within an hour, records keep their insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawHourlyGroup")]
pub struct HourlyGroup {
    day_type: DayType,
    hours: BTreeMap<u8, Vec<MeasurementRecord>>,
}

impl HourlyGroup {
    /// Create an empty group for the given day type
    pub fn new(day_type: DayType) -> Self {
        Self {
            day_type,
            hours: BTreeMap::new(),
        }
    }

    /// Build a group from records that all belong to `day_type`
    pub fn from_records<I>(day_type: DayType, records: I) -> Result<Self>
    where
        I: IntoIterator<Item = MeasurementRecord>,
    {
        let mut group = Self::new(day_type);
        for record in records {
            group.insert(record)?;
        }
        Ok(group)
    }

    /// Split a mixed table into `[working days, weekend]` groups
    pub fn partition<I>(records: I) -> [HourlyGroup; 2]
    where
        I: IntoIterator<Item = MeasurementRecord>,
    {
        let mut groups = DayType::ALL.map(Self::new);
        for record in records {
            groups[record.day_type().index()].push(record);
        }
        groups
    }

    /// Add a record, rejecting one of the other day type
    pub fn insert(&mut self, record: MeasurementRecord) -> Result<()> {
        if record.day_type() != self.day_type {
            return Err(AirQualityError::invalid_measurement(format!(
                "{} record dated {} cannot join the {} group",
                record.day_type(),
                record.date(),
                self.day_type
            )));
        }
        self.push(record);
        Ok(())
    }

    fn push(&mut self, record: MeasurementRecord) {
        self.hours.entry(record.hour()).or_default().push(record);
    }

    pub fn day_type(&self) -> DayType {
        self.day_type
    }

    /// Hours that have at least one record, ascending
    pub fn hours(&self) -> impl Iterator<Item = u8> + '_ {
        self.hours.keys().copied()
    }

    /// Records for one hour, empty if the hour has none
    pub fn records(&self, hour: u8) -> &[MeasurementRecord] {
        self.hours.get(&hour).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate over `(hour, records)` pairs, ascending by hour
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[MeasurementRecord])> + '_ {
        self.hours.iter().map(|(hour, records)| (*hour, records.as_slice()))
    }

    /// Total number of records across all hours
    pub fn len(&self) -> usize {
        self.hours.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }
}

#[derive(Deserialize)]
struct RawHourlyGroup {
    day_type: DayType,
    hours: BTreeMap<u8, Vec<MeasurementRecord>>,
}

impl TryFrom<RawHourlyGroup> for HourlyGroup {
    type Error = AirQualityError;

    fn try_from(raw: RawHourlyGroup) -> Result<Self> {
        let mut group = Self::new(raw.day_type);
        for (hour, records) in raw.hours {
            for record in records {
                if record.hour() != hour {
                    return Err(AirQualityError::invalid_measurement(format!(
                        "record at {}h dated {} listed under hour {hour}",
                        record.hour(),
                        record.date()
                    )));
                }
                group.insert(record)?;
            }
        }
        Ok(group)
    }
}
