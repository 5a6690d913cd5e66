//! WHO air quality guideline values
//!
//! Daily averages from the WHO air quality guidelines:
//! <https://www.who.int/news-room/feature-stories/detail/what-are-the-who-air-quality-guidelines>

use airq_common::{normalize_pollutant_label, AirQualityError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pollutants with a WHO daily recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pollutant {
    #[serde(rename = "NO2")]
    No2,
    #[serde(rename = "SO2")]
    So2,
    #[serde(rename = "PM2.5")]
    Pm25,
    #[serde(rename = "PM10")]
    Pm10,
    #[serde(rename = "CO")]
    Co,
}

impl Pollutant {
    pub const ALL: [Pollutant; 5] = [
        Pollutant::No2,
        Pollutant::So2,
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::Co,
    ];

    /// Identifier used by the measurement catalog
    pub fn key(self) -> &'static str {
        match self {
            Self::No2 => "NO2",
            Self::So2 => "SO2",
            Self::Pm25 => "PM2.5",
            Self::Pm10 => "PM10",
            Self::Co => "CO",
        }
    }

    /// Recommended daily average, in [`Pollutant::unit`]
    pub fn who_recommendation(self) -> f64 {
        match self {
            Self::No2 => 25.0,
            Self::So2 => 40.0,
            Self::Pm25 => 15.0,
            Self::Pm10 => 45.0,
            Self::Co => 4.0,
        }
    }

    /// Concentration unit; CO is measured in milligrams
    pub fn unit(self) -> &'static str {
        match self {
            Self::Co => "mg/m³",
            _ => "µg/m³",
        }
    }

    /// Parse a catalog label such as "NO2 (nitrogen dioxide)"
    pub fn from_label(label: &str) -> Result<Self, AirQualityError> {
        normalize_pollutant_label(label).parse()
    }
}

impl FromStr for Pollutant {
    type Err = AirQualityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|pollutant| pollutant.key() == s)
            .ok_or_else(|| AirQualityError::unknown_pollutant(s))
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_table() {
        let table: Vec<(&str, f64)> = Pollutant::ALL
            .iter()
            .map(|p| (p.key(), p.who_recommendation()))
            .collect();
        assert_eq!(
            table,
            vec![("NO2", 25.0), ("SO2", 40.0), ("PM2.5", 15.0), ("PM10", 45.0), ("CO", 4.0)]
        );
    }

    #[test]
    fn test_units() {
        assert_eq!(Pollutant::Co.unit(), "mg/m³");
        assert_eq!(Pollutant::Pm25.unit(), "µg/m³");
        assert_eq!(Pollutant::No2.unit(), "µg/m³");
    }

    #[test]
    fn test_parse_known_and_unknown() {
        assert_eq!("PM2.5".parse::<Pollutant>().unwrap(), Pollutant::Pm25);
        let err = "XYZ".parse::<Pollutant>().unwrap_err();
        assert!(err.is_lookup());
        assert!("no2".parse::<Pollutant>().is_err());
    }

    #[test]
    fn test_from_label_strips_suffix() {
        assert_eq!(Pollutant::from_label("SO2 (dioxyde de soufre)").unwrap(), Pollutant::So2);
        assert!(Pollutant::from_label("").unwrap_err().is_lookup());
    }
}
