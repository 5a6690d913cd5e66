//! Average daily pollution profiles and WHO threshold charts
//!
//! Measurement records are grouped per day type, averaged per hour of day
//! over a [`DateWindow`] by the [`Aggregator`], then turned into a [`Figure`]
//! by the [`ChartBuilder`]. [`DailyVariation`] chains both steps for one
//! station and pollutant.

pub mod aggregator;
pub mod chart;
pub mod figure;
pub mod measurement;
pub mod pipeline;
pub mod profile;
pub mod renderer;
pub mod who;
pub mod window;

pub use aggregator::{Aggregation, Aggregator};
pub use chart::{threshold_bands, threshold_levels, ChartBuilder, ChartStyle};
pub use figure::{Band, Figure, Marker, ReferenceStyle, Rgb, Series, SeriesMode, Severity, WhoReference};
pub use measurement::HourlyGroup;
pub use pipeline::{DailyVariation, Outcome, INSUFFICIENT_DATA_MESSAGE};
pub use profile::DailyProfile;
pub use renderer::{FigureRenderer, PlottersRenderer};
pub use who::Pollutant;
pub use window::{read_last_update, AnalysisPeriod, DateWindow};
