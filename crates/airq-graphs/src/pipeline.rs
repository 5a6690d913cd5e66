//! Recompute-on-change pipeline from measurement groups to a figure

use crate::{Aggregator, ChartBuilder, DateWindow, Figure, HourlyGroup, Pollutant};
use airq_common::{validate_non_empty, Result};
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Message shown when a window cannot be charted
pub const INSUFFICIENT_DATA_MESSAGE: &str = "No pollution data are available for the given period.";

/// Result of evaluating one date window
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum Outcome {
    /// Both day types have data; ready to render
    Figure(Box<Figure>),
    /// Rendering suppressed for this window
    InsufficientData { window: DateWindow, coverage: usize },
}

impl Outcome {
    /// User-facing message when rendering is suppressed
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Figure(_) => None,
            Self::InsufficientData { .. } => Some(INSUFFICIENT_DATA_MESSAGE),
        }
    }

    pub fn figure(&self) -> Option<&Figure> {
        match self {
            Self::Figure(figure) => Some(figure),
            Self::InsufficientData { .. } => None,
        }
    }

    pub fn into_figure(self) -> Option<Figure> {
        match self {
            Self::Figure(figure) => Some(*figure),
            Self::InsufficientData { .. } => None,
        }
    }
}

/// Average daily variation for one (station, pollutant) selection.
///
/// Holds the read-only group snapshot; each [`DailyVariation::evaluate`]
/// call runs a full aggregation followed by one chart build.
#[derive(Debug, Clone)]
pub struct DailyVariation {
    groups: [HourlyGroup; 2],
    pollutant: Pollutant,
    station: String,
    aggregator: Aggregator,
    builder: ChartBuilder,
}

impl DailyVariation {
    /// Fails with a lookup error when `pollutant` is not in the WHO table, and
    /// with a validation error when `station` is blank
    pub fn new(
        groups: [HourlyGroup; 2],
        pollutant: &str,
        station: &str,
        builder: ChartBuilder,
    ) -> Result<Self> {
        Ok(Self {
            groups,
            pollutant: pollutant.parse()?,
            station: validate_non_empty(station, "station")?,
            aggregator: Aggregator::new(),
            builder,
        })
    }

    pub fn pollutant(&self) -> Pollutant {
        self.pollutant
    }

    pub fn station(&self) -> &str {
        &self.station
    }

    pub fn groups(&self) -> &[HourlyGroup; 2] {
        &self.groups
    }

    /// Aggregate over `window` and build the figure, or report insufficient data.
    ///
    /// Every input check happens in [`DailyVariation::new`], so evaluation
    /// cannot fail.
    #[instrument(skip(self), fields(pollutant = %self.pollutant, station = %self.station))]
    pub fn evaluate(&self, window: &DateWindow) -> Outcome {
        let aggregation = self.aggregator.aggregate(&self.groups, window);

        // no hour of either profile has data
        let blank = aggregation.profiles.iter().all(|profile| profile.is_blank());
        if !aggregation.is_sufficient() || blank {
            warn!(
                coverage = aggregation.coverage,
                start = %window.start(),
                end = %window.end(),
                "Insufficient data for the selected period"
            );
            return Outcome::InsufficientData {
                window: *window,
                coverage: aggregation.coverage,
            };
        }

        let figure = self
            .builder
            .build_for(&aggregation.profiles, self.pollutant, &self.station);
        debug!(highest_value = figure.highest_value(), "Daily variation ready");
        Outcome::Figure(Box::new(figure))
    }
}
