//! Comparison charts: actual samples, interpolated curve and query marker.
//!
//! Rendering goes through [`plotters`]. The backend is picked from the output
//! file extension so the same drawing code produces PNG and SVG images.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use thiserror::Error;

use crate::model::dataset::{Dataset, Marker, Range};

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("failed to create drawing area: {0}")]
    DrawingArea(String),
    #[error("failed to configure chart: {0}")]
    ChartConfig(String),
    #[error("failed to draw chart elements: {0}")]
    Drawing(String),
    #[error("no finite data to plot for {0}")]
    NoData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

const AXIS_PAD: f64 = 0.05;
const MARKER_SIZE: i32 = 10;
const POINT_SIZE: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartSize {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Png,
    Svg,
}

impl ChartKind {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => ChartKind::Svg,
            _ => ChartKind::Png,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Comparison<'a> {
    pub title: &'a str,
    pub actual: &'a Dataset,
    pub interpolated: &'a Dataset,
    pub marker: Option<Marker>,
}

/// Axis ranges covering every finite point drawn, padded on each side.
pub fn chart_bounds(cmp: &Comparison<'_>) -> Option<(Range, Range)> {
    let mut x = merge_opt(cmp.actual.x_range(), cmp.interpolated.x_range());
    let mut y = merge_opt(cmp.actual.y_range(), cmp.interpolated.y_range());
    if let Some(m) = drawable_marker(cmp) {
        x = x.map(|r| r.include(m.x));
        y = y.map(|r| r.include(m.y));
    }
    Some((x?.padded(AXIS_PAD), y?.padded(AXIS_PAD)))
}

/// The marker, unless either coordinate is non-finite.
pub fn drawable_marker(cmp: &Comparison<'_>) -> Option<Marker> {
    cmp.marker.filter(|m| m.x.is_finite() && m.y.is_finite())
}

/// Splits a dataset into maximal runs of finite points, in order, so the
/// curve breaks at `nan`/`inf` samples instead of bridging them.
pub fn finite_runs(data: &Dataset) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for (x, y) in data.points() {
        if x.is_finite() && y.is_finite() {
            current.push((x, y));
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

fn merge_opt(a: Option<Range>, b: Option<Range>) -> Option<Range> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.merge(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

pub fn render_comparison(cmp: &Comparison<'_>, output_path: &Path, size: ChartSize) -> Result<()> {
    let (x_range, y_range) =
        chart_bounds(cmp).ok_or_else(|| PlotError::NoData(cmp.title.to_string()))?;

    match ChartKind::from_path(output_path) {
        ChartKind::Png => {
            let root =
                BitMapBackend::new(output_path, (size.width, size.height)).into_drawing_area();
            draw_comparison(root, cmp, x_range, y_range)
        }
        ChartKind::Svg => {
            let root =
                SVGBackend::new(output_path, (size.width, size.height)).into_drawing_area();
            draw_comparison(root, cmp, x_range, y_range)
        }
    }
}

fn draw_comparison<DB>(
    root: DrawingArea<DB, Shift>,
    cmp: &Comparison<'_>,
    x_range: Range,
    y_range: Range,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(cmp.title, ("sans-serif", 32))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range.min..x_range.max, y_range.min..y_range.max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("y")
        .label_style(("sans-serif", 18))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(
            cmp.actual
                .points()
                .filter(|(x, y)| x.is_finite() && y.is_finite())
                .map(|p| Circle::new(p, POINT_SIZE, BLUE.filled())),
        )
        .map_err(|e| PlotError::Drawing(e.to_string()))?
        .label("Actual Data")
        .legend(|(x, y)| Circle::new((x + 10, y), POINT_SIZE, BLUE.filled()));

    let mut runs = finite_runs(cmp.interpolated).into_iter();
    chart
        .draw_series(LineSeries::new(runs.next().unwrap_or_default(), &BLACK))
        .map_err(|e| PlotError::Drawing(e.to_string()))?
        .label("Interpolated Curve")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK));
    for run in runs {
        chart
            .draw_series(LineSeries::new(run, &BLACK))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    // Query outside every interval, or a non-finite value: no marker, no legend entry.
    if let Some(marker) = drawable_marker(cmp) {
        chart
            .draw_series(std::iter::once(Cross::new(
                (marker.x, marker.y),
                MARKER_SIZE,
                RED.stroke_width(2),
            )))
            .map_err(|e| PlotError::Drawing(e.to_string()))?
            .label("Interpolated Value")
            .legend(|(x, y)| Cross::new((x + 10, y), MARKER_SIZE, RED.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present().map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/chart.rs"]
mod tests;
