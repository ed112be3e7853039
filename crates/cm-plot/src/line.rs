//! Hue-grouped line charts (accuracy / elongation vs. informed fraction).

use std::path::Path;

use plotters::prelude::*;

use crate::palette::series_color;
use crate::{PlotError, PlotResult};

/// One line series, e.g. all aggregates sharing a group size.
#[derive(Debug, Clone)]
pub struct Series {
    /// Legend label, e.g. `"N = 100"`.
    pub label:  String,
    pub points: Vec<(f64, f64)>,
}

/// Configuration for a single line chart.
///
/// Rendering skips NaN points (undefined elongations) rather than erroring;
/// a series that is entirely NaN simply contributes no line.
#[derive(Debug, Clone)]
pub struct LinePlot {
    pub x_label: String,
    pub y_label: String,
    pub size:    (u32, u32),
}

impl Default for LinePlot {
    fn default() -> Self {
        Self {
            x_label: String::new(),
            y_label: String::new(),
            size:    (900, 600),
        }
    }
}

impl LinePlot {
    /// Render `series` to a PNG at `path`.
    pub fn render(&self, path: &Path, series: &[Series]) -> PlotResult<()> {
        let finite: Vec<(f64, f64)> = series
            .iter()
            .flat_map(|s| s.points.iter().copied())
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .collect();
        if finite.is_empty() {
            return Err(PlotError::Empty);
        }

        let (x_range, y_range) = padded_ranges(&finite);

        let root = BitMapBackend::new(path, self.size).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(12)
            .x_label_area_size(48)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range, y_range)?;

        chart
            .configure_mesh()
            .x_desc(&self.x_label)
            .y_desc(&self.y_label)
            .axis_desc_style(("sans-serif", 20))
            .label_style(("sans-serif", 15))
            .light_line_style(BLACK.mix(0.08))
            .draw()?;

        for (i, s) in series.iter().enumerate() {
            let color = series_color(i);
            let points: Vec<(f64, f64)> = s
                .points
                .iter()
                .copied()
                .filter(|(x, y)| x.is_finite() && y.is_finite())
                .collect();
            if points.is_empty() {
                continue;
            }

            chart
                .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))?
                .label(&s.label)
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
            chart.draw_series(
                points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 4, color.filled())),
            )?;
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK.mix(0.4))
            .label_font(("sans-serif", 15))
            .draw()?;

        root.present()?;
        Ok(())
    }
}

/// Data ranges with 5 % padding, and a hair of width for degenerate spans.
fn padded_ranges(
    points: &[(f64, f64)],
) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for &(x, y) in points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    let x_pad = ((x_max - x_min) * 0.05).max(1e-3);
    let y_pad = ((y_max - y_min) * 0.05).max(1e-3);
    (
        (x_min - x_pad)..(x_max + x_pad),
        (y_min - y_pad)..(y_max + y_pad),
    )
}
