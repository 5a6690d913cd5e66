//! Figure rendering trait and the plotters implementation

use crate::{Figure, Marker, ReferenceStyle, Rgb, SeriesMode};
use airq_common::{AirQualityError, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;
use tracing::{debug, info, instrument};

const X_MIN: f64 = 0.0;
const X_MAX: f64 = 23.0;
const DASH_LENGTH: f64 = 0.35;
const DASH_GAP: f64 = 0.2;
const MARKER_SIZE: i32 = 5;
const SERIES_STROKE: u32 = 2;

/// Draws a [`Figure`] to an image
pub trait FigureRenderer {
    /// Render a PNG image to `path`
    fn render_to_file(&self, figure: &Figure, path: &Path) -> Result<()>;

    /// Render an SVG document
    fn render_svg(&self, figure: &Figure) -> Result<String>;
}

/// Renderer backed by plotters' bitmap and SVG backends
#[derive(Debug, Clone, Copy, Default)]
pub struct PlottersRenderer;

impl PlottersRenderer {
    pub fn new() -> Self {
        Self
    }

    fn draw<DB>(&self, figure: &Figure, root: DrawingArea<DB, Shift>) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let style = &figure.style;
        let font = style.font_family.as_str();
        let font_size = style.font_size;

        root.fill(&rgb(style.background))?;

        let (y_min, y_max) = y_bounds(figure.y_range);
        let mut chart = ChartBuilder::on(&root)
            .caption(&figure.title, (font, font_size + 8))
            .margin(24)
            .x_label_area_size(font_size * 3)
            .y_label_area_size(font_size * 5)
            .build_cartesian_2d(X_MIN..X_MAX, y_min..y_max)?;

        chart.draw_series(figure.bands.iter().map(|band| {
            Rectangle::new(
                [(X_MIN, band.lower), (X_MAX, band.upper)],
                rgb(band.severity.color()).mix(style.band_opacity).filled(),
            )
        }))?;

        let labels = &figure.x_labels;
        let x_formatter = |x: &f64| hour_label(labels, *x);
        chart
            .configure_mesh()
            .x_labels(labels.len())
            .x_label_formatter(&x_formatter)
            .y_desc(figure.y_label.as_str())
            .label_style((font, font_size))
            .axis_desc_style((font, font_size))
            .draw()?;

        for series in &figure.series {
            let color = rgb(series.color);
            let points: Vec<(f64, f64)> = series
                .points()
                .into_iter()
                .map(|(hour, value)| (hour as f64, value))
                .collect();

            match series.mode {
                SeriesMode::Line => {
                    chart
                        .draw_series(LineSeries::new(points, color.stroke_width(SERIES_STROKE)))?
                        .label(series.label.clone())
                        .legend(move |(x, y)| {
                            PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(SERIES_STROKE))
                        });
                }
                SeriesMode::Points(Marker::Circle) => {
                    chart
                        .draw_series(
                            points
                                .iter()
                                .map(|point| Circle::new(*point, MARKER_SIZE, color.filled())),
                        )?
                        .label(series.label.clone())
                        .legend(move |point| Circle::new(point, MARKER_SIZE, color.filled()));
                }
                SeriesMode::Points(Marker::Square) => {
                    chart
                        .draw_series(points.iter().map(|point| {
                            EmptyElement::at(*point)
                                + Rectangle::new(
                                    [(-MARKER_SIZE, -MARKER_SIZE), (MARKER_SIZE, MARKER_SIZE)],
                                    color.filled(),
                                )
                        }))?
                        .label(series.label.clone())
                        .legend(move |(x, y)| {
                            Rectangle::new(
                                [(x - MARKER_SIZE, y - MARKER_SIZE), (x + MARKER_SIZE, y + MARKER_SIZE)],
                                color.filled(),
                            )
                        });
                }
            }
        }

        let reference_color = rgb(style.reference_color);
        match &figure.reference.style {
            ReferenceStyle::Line { legend } => {
                let line = reference_color.stroke_width(stroke_width(style.reference_line_width));
                let who = figure.reference.value;
                chart
                    .draw_series(
                        dash_segments(X_MIN, X_MAX, DASH_LENGTH, DASH_GAP)
                            .into_iter()
                            .map(|(from, to)| PathElement::new(vec![(from, who), (to, who)], line)),
                    )?
                    .label(legend.clone())
                    .legend(move |(x, y)| {
                        EmptyElement::at((x, y))
                            + PathElement::new(vec![(0, 0), (8, 0)], line)
                            + PathElement::new(vec![(12, 0), (20, 0)], line)
                    });
            }
            ReferenceStyle::Annotation { text } => {
                let text_style = TextStyle::from((font, font_size).into_font())
                    .color(&BLACK)
                    .pos(Pos::new(HPos::Right, VPos::Top));
                chart.draw_series(std::iter::once(Text::new(
                    text.clone(),
                    (X_MAX, y_max),
                    text_style,
                )))?;
            }
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font((font, font_size))
            .draw()?;

        root.present()?;
        Ok(())
    }
}

impl FigureRenderer for PlottersRenderer {
    #[instrument(skip(self, figure), fields(title = %figure.title))]
    fn render_to_file(&self, figure: &Figure, path: &Path) -> Result<()> {
        let (width, height) = dimensions(figure)?;
        let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
        self.draw(figure, root)?;

        info!("Successfully rendered daily variation chart to {}", path.display());
        Ok(())
    }

    #[instrument(skip(self, figure), fields(title = %figure.title))]
    fn render_svg(&self, figure: &Figure) -> Result<String> {
        let (width, height) = dimensions(figure)?;
        let mut buffer = String::new();
        {
            let root = SVGBackend::with_string(&mut buffer, (width, height)).into_drawing_area();
            self.draw(figure, root)?;
        }

        debug!(bytes = buffer.len(), "Rendered daily variation chart to SVG");
        Ok(buffer)
    }
}

fn rgb(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

fn dimensions(figure: &Figure) -> Result<(u32, u32)> {
    match (figure.style.width, figure.style.height) {
        (0, _) | (_, 0) => Err(AirQualityError::graph(format!(
            "Cannot render a {}x{} figure",
            figure.style.width, figure.style.height
        ))),
        size => Ok(size),
    }
}

/// Vertical coordinate range; an all-zero figure still gets a drawable axis
pub(crate) fn y_bounds((lower, upper): (f64, f64)) -> (f64, f64) {
    if upper > lower {
        (lower, upper)
    } else {
        (lower, lower + 1.0)
    }
}

/// Tick label for an hour coordinate, empty between whole hours
pub(crate) fn hour_label(labels: &[String], x: f64) -> String {
    let rounded = x.round();
    if (x - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}

/// Pixel stroke width for a fractional line width
pub(crate) fn stroke_width(width: f64) -> u32 {
    (width.round() as u32).max(1)
}

/// Dash intervals covering `[from, to]`
pub(crate) fn dash_segments(from: f64, to: f64, dash: f64, gap: f64) -> Vec<(f64, f64)> {
    let mut segments = Vec::new();
    let mut start = from;
    while start < to {
        segments.push((start, (start + dash).min(to)));
        start += dash + gap;
    }
    segments
}
