//! Renderable figure description produced by the chart builder

use crate::ChartStyle;
use airq_common::{DayType, Result, HOURS_PER_DAY};
use serde::{Deserialize, Serialize};

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const DODGER_BLUE: Rgb = Rgb(30, 144, 255);
    pub const CYAN: Rgb = Rgb(0, 255, 255);
    pub const VIOLET: Rgb = Rgb(238, 130, 238);
    pub const LIME_GREEN: Rgb = Rgb(50, 205, 50);
    pub const ORANGE: Rgb = Rgb(255, 165, 0);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const MAGENTA: Rgb = Rgb(255, 0, 255);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Parse a `#RRGGBB` hex string
    pub fn from_hex(color: &str) -> Option<Self> {
        let hex = color.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Self(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

/// Marker shape for point series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    Circle,
    Square,
}

/// How a series is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesMode {
    /// Continuous connected line
    Line,
    /// Discrete markers, used when some hours have no data
    Points(Marker),
}

impl SeriesMode {
    pub fn is_line(self) -> bool {
        matches!(self, Self::Line)
    }
}

/// One day-type curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub day_type: DayType,
    pub label: String,
    pub color: Rgb,
    pub mode: SeriesMode,
    pub values: [f64; HOURS_PER_DAY],
    pub has_data: [bool; HOURS_PER_DAY],
}

impl Series {
    /// `(hour, value)` pairs to plot; point series skip hours without data
    pub fn points(&self) -> Vec<(usize, f64)> {
        self.values
            .iter()
            .enumerate()
            .filter(|(hour, _)| self.mode.is_line() || self.has_data[*hour])
            .map(|(hour, value)| (hour, *value))
            .collect()
    }
}

/// Severity of a threshold band, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Moderate,
        Severity::High,
        Severity::VeryHigh,
    ];

    pub fn color(self) -> Rgb {
        match self {
            Self::Low => Rgb::LIME_GREEN,
            Self::Moderate => Rgb::ORANGE,
            Self::High => Rgb::RED,
            Self::VeryHigh => Rgb::MAGENTA,
        }
    }
}

/// Horizontal background zone `[lower, upper]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub lower: f64,
    pub upper: f64,
    pub severity: Severity,
}

/// How the WHO recommendation appears on the figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ReferenceStyle {
    /// Dashed horizontal line with a legend entry
    Line { legend: String },
    /// Inline text in the top right corner
    Annotation { text: String },
}

/// WHO recommended daily average for the charted pollutant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhoReference {
    pub value: f64,
    pub unit: String,
    pub style: ReferenceStyle,
}

/// Complete description of an average daily variation chart.
///
/// Building a figure performs no I/O; see [`crate::FigureRenderer`] to draw it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub title: String,
    pub x_labels: Vec<String>,
    pub y_label: String,
    /// Vertical axis range `(0, highest value)`
    pub y_range: (f64, f64),
    /// Series in `[working days, weekend]` order
    pub series: [Series; 2],
    pub reference: WhoReference,
    /// Contiguous zones from 0 to the top of the y range, by ascending severity
    pub bands: Vec<Band>,
    pub style: ChartStyle,
}

impl Figure {
    pub fn highest_value(&self) -> f64 {
        self.y_range.1
    }

    /// Serialize for a UI collaborator
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Whether the WHO reference is drawn as a line with a legend entry
    pub fn has_legend_reference(&self) -> bool {
        matches!(self.reference.style, ReferenceStyle::Line { .. })
    }
}
