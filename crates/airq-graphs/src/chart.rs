//! Construction of the average daily variation figure

use crate::{
    Band, DailyProfile, Figure, Marker, Pollutant, ReferenceStyle, Rgb, Series, SeriesMode,
    Severity, WhoReference,
};
use airq_common::{format_hour_label, DayType, Result, HOURS_PER_DAY};
use airq_config::ChartSettings;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Legend label of the dashed WHO line
pub const WHO_LEGEND: &str = "Recommended daily average (WHO)";

/// Multiples of the WHO value at which the background changes severity
pub const THRESHOLD_FACTORS: [f64; 3] = [2.0 / 3.0, 4.0 / 3.0, 2.0];

/// Visual settings carried by every figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    pub font_family: String,
    pub font_size: u32,
    pub background: Rgb,
    pub working_day_color: Rgb,
    pub weekend_color: Rgb,
    pub reference_color: Rgb,
    pub band_opacity: f64,
    pub reference_line_width: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::from(&ChartSettings::default())
    }
}

impl From<&ChartSettings> for ChartStyle {
    fn from(settings: &ChartSettings) -> Self {
        Self {
            width: settings.width,
            height: settings.height,
            font_family: settings.font_family.clone(),
            font_size: settings.font_size,
            background: Rgb::from_hex(&settings.background_color).unwrap_or(Rgb::WHITE),
            working_day_color: Rgb::from_hex(&settings.working_day_color)
                .unwrap_or(Rgb::DODGER_BLUE),
            weekend_color: Rgb::from_hex(&settings.weekend_color).unwrap_or(Rgb::CYAN),
            reference_color: Rgb::from_hex(&settings.reference_color).unwrap_or(Rgb::VIOLET),
            band_opacity: settings.band_opacity,
            reference_line_width: settings.reference_line_width,
        }
    }
}

impl ChartStyle {
    fn color_for(&self, day_type: DayType) -> Rgb {
        match day_type {
            DayType::WorkingDay => self.working_day_color,
            DayType::Weekend => self.weekend_color,
        }
    }
}

/// The three WHO-relative thresholds, ascending
pub fn threshold_levels(who_value: f64) -> [f64; 3] {
    THRESHOLD_FACTORS.map(|factor| factor * who_value)
}

/// Partition `[0, highest]` into bands at every threshold strictly below `highest`
pub fn threshold_bands(who_value: f64, highest: f64) -> Vec<Band> {
    let mut bands = Vec::with_capacity(Severity::ALL.len());
    let mut lower = 0.0;

    for (threshold, severity) in threshold_levels(who_value).into_iter().zip(Severity::ALL) {
        if threshold >= highest {
            break;
        }
        bands.push(Band {
            lower,
            upper: threshold,
            severity,
        });
        lower = threshold;
    }

    bands.push(Band {
        lower,
        upper: highest,
        severity: Severity::ALL[bands.len()],
    });
    bands
}

/// Choose line or point rendering for each profile.
///
/// A profile with any hour lacking data is drawn as points, so that no line
/// bridges a gap. When both are points the weekend uses square markers.
pub fn series_modes(profiles: &[DailyProfile; 2]) -> [SeriesMode; 2] {
    match profiles.each_ref().map(DailyProfile::has_gaps) {
        [false, false] => [SeriesMode::Line, SeriesMode::Line],
        [true, true] => [
            SeriesMode::Points(Marker::Circle),
            SeriesMode::Points(Marker::Square),
        ],
        gaps => gaps.map(|gap| {
            if gap {
                SeriesMode::Points(Marker::Circle)
            } else {
                SeriesMode::Line
            }
        }),
    }
}

/// Builds [`Figure`]s from a pair of daily profiles
#[derive(Debug, Clone, Default)]
pub struct ChartBuilder {
    style: ChartStyle,
}

impl ChartBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: ChartStyle) -> Self {
        Self { style }
    }

    pub fn from_settings(settings: &ChartSettings) -> Self {
        Self::with_style(ChartStyle::from(settings))
    }

    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    /// Build the figure for `pollutant` measured at `station`.
    ///
    /// Fails with a lookup error, building nothing, when the pollutant has
    /// no WHO recommendation.
    pub fn build(
        &self,
        profiles: &[DailyProfile; 2],
        pollutant: &str,
        station: &str,
    ) -> Result<Figure> {
        let pollutant: Pollutant = pollutant.parse()?;
        Ok(self.build_for(profiles, pollutant, station))
    }

    /// Build the figure for an already resolved pollutant
    #[instrument(skip(self, profiles))]
    pub fn build_for(
        &self,
        profiles: &[DailyProfile; 2],
        pollutant: Pollutant,
        station: &str,
    ) -> Figure {
        let highest_value = profiles
            .iter()
            .map(DailyProfile::max)
            .fold(0.0, f64::max);
        let who_value = pollutant.who_recommendation();
        let unit = pollutant.unit();

        let modes = series_modes(profiles);
        let series = DayType::ALL.map(|day_type| {
            let profile = &profiles[day_type.index()];
            Series {
                day_type,
                label: day_type.label().to_string(),
                color: self.style.color_for(day_type),
                mode: modes[day_type.index()],
                values: *profile.values(),
                has_data: *profile.has_data(),
            }
        });

        let style = if highest_value > who_value {
            ReferenceStyle::Line {
                legend: WHO_LEGEND.to_string(),
            }
        } else {
            ReferenceStyle::Annotation {
                text: format!("{WHO_LEGEND}: {who_value} {unit}"),
            }
        };

        let bands = threshold_bands(who_value, highest_value);
        debug!(highest_value, bands = bands.len(), ?modes, "Built daily variation figure");

        Figure {
            title: station.to_string(),
            x_labels: (0..HOURS_PER_DAY).map(format_hour_label).collect(),
            y_label: format!("Air concentration of {pollutant} ({unit})"),
            y_range: (0.0, highest_value),
            series,
            reference: WhoReference {
                value: who_value,
                unit: unit.to_string(),
                style,
            },
            bands,
            style: self.style.clone(),
        }
    }
}
