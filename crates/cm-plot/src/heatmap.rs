//! Panel-grid heatmap figures with a shared log color scale.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use cm_heatmap::ConditionalHistogram;

use crate::palette::{log_scaled, plasma};
use crate::{PlotError, PlotResult};

/// One heatmap panel: a binned conditional distribution plus its predicted
/// heading overlay and the two informed-group sizes for the annotation box.
#[derive(Debug, Clone, Copy)]
pub struct Panel<'a> {
    pub hist:      &'a ConditionalHistogram,
    pub predicted: &'a [(f64, f64)],
    pub n1:        u32,
    pub n2:        u32,
}

/// Figure-level configuration: grid shape, shared labels, color scale.
///
/// All panels share one color scale: `vmin` fixed, vmax = the largest
/// probability across every panel — the side-by-side feedback comparison is
/// only honest if equal colors mean equal probabilities.
#[derive(Debug, Clone)]
pub struct HeatmapFigure {
    pub columns:        usize,
    /// One title per panel column, drawn above the grid.
    pub column_titles:  Vec<String>,
    pub x_label:        String,
    pub y_label:        String,
    pub colorbar_label: String,
    /// Probabilities to mark on the colorbar.
    pub colorbar_ticks: Vec<f64>,
    /// Lower bound of the log color scale.
    pub vmin:           f64,
    pub size:           (u32, u32),
}

impl Default for HeatmapFigure {
    fn default() -> Self {
        Self {
            columns:        2,
            column_titles:  Vec::new(),
            x_label:        String::new(),
            y_label:        String::new(),
            colorbar_label: String::new(),
            colorbar_ticks: vec![0.01, 0.1, 0.35],
            vmin:           1e-2,
            size:           (1500, 900),
        }
    }
}

// Fixed display window: headings live in −90..270 but the interesting band
// is −30..210, with ticks every 30°.
const Y_VIEW_MIN: f64 = -30.0;
const Y_VIEW_MAX: f64 = 210.0;

// Figure chrome margins, pixels.
const TOP: i32 = 36;
const BOTTOM: i32 = 44;
const LEFT: i32 = 40;
const RIGHT: i32 = 120;

impl HeatmapFigure {
    /// Render the panel grid to a PNG at `path`.
    pub fn render(&self, path: &Path, panels: &[Panel<'_>]) -> PlotResult<()> {
        if panels.is_empty() || self.columns == 0 {
            return Err(PlotError::Empty);
        }
        let vmax = panels
            .iter()
            .map(|p| p.hist.max_prob())
            .fold(self.vmin, f64::max);

        let root = BitMapBackend::new(path, self.size).into_drawing_area();
        root.fill(&WHITE)?;

        let rows = panels.len().div_ceil(self.columns);
        let grid = root.margin(TOP, BOTTOM, LEFT, RIGHT);
        let areas = grid.split_evenly((rows, self.columns));
        for (area, panel) in areas.iter().zip(panels) {
            draw_panel(area, panel, self.vmin, vmax)?;
        }

        self.draw_chrome(&root, vmax)?;
        root.present()?;
        Ok(())
    }

    /// Column titles, shared axis labels, and the colorbar.
    fn draw_chrome(
        &self,
        root: &DrawingArea<BitMapBackend<'_>, Shift>,
        vmax: f64,
    ) -> PlotResult<()> {
        let (w, h) = (self.size.0 as i32, self.size.1 as i32);
        let grid_w = w - LEFT - RIGHT;
        let grid_h = h - TOP - BOTTOM;

        let centered = Pos::new(HPos::Center, VPos::Top);
        let title_style = TextStyle::from(("sans-serif", 24).into_font()).pos(centered);
        let col_width = grid_w / self.columns as i32;
        for (c, title) in self.column_titles.iter().enumerate() {
            let x = LEFT + col_width * c as i32 + col_width / 2;
            root.draw(&Text::new(title.clone(), (x, 6), title_style.clone()))?;
        }

        let label_style = TextStyle::from(("sans-serif", 22).into_font()).pos(centered);
        root.draw(&Text::new(
            self.x_label.clone(),
            (LEFT + grid_w / 2, h - 30),
            label_style,
        ))?;

        let rotated = TextStyle::from(
            ("sans-serif", 22)
                .into_font()
                .transform(FontTransform::Rotate270),
        )
        .pos(Pos::new(HPos::Center, VPos::Center));
        root.draw(&Text::new(
            self.y_label.clone(),
            (14, TOP + grid_h / 2),
            rotated.clone(),
        ))?;

        // ── Colorbar ──────────────────────────────────────────────────────
        let bar_x0 = w - RIGHT + 34;
        let bar_x1 = bar_x0 + 22;
        let bar_y0 = TOP + 24;
        let bar_y1 = h - BOTTOM - 24;
        for y in bar_y0..bar_y1 {
            let t = f64::from(bar_y1 - y) / f64::from(bar_y1 - bar_y0);
            root.draw(&Rectangle::new(
                [(bar_x0, y), (bar_x1, y + 1)],
                plasma(t).filled(),
            ))?;
        }
        root.draw(&Rectangle::new(
            [(bar_x0, bar_y0), (bar_x1, bar_y1)],
            BLACK.mix(0.6),
        ))?;

        let tick_style = TextStyle::from(("sans-serif", 16).into_font())
            .pos(Pos::new(HPos::Left, VPos::Center));
        for &p in &self.colorbar_ticks {
            let t = log_scaled(p, self.vmin, vmax);
            let y = bar_y1 - ((f64::from(bar_y1 - bar_y0)) * t).round() as i32;
            root.draw(&PathElement::new(
                vec![(bar_x1, y), (bar_x1 + 5, y)],
                BLACK,
            ))?;
            root.draw(&Text::new(format!("{p}"), (bar_x1 + 8, y), tick_style.clone()))?;
        }

        root.draw(&Text::new(
            self.colorbar_label.clone(),
            (w - 14, TOP + grid_h / 2),
            rotated,
        ))?;
        Ok(())
    }
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel<'_>,
    vmin: f64,
    vmax: f64,
) -> PlotResult<()> {
    let hist = panel.hist;
    let x0 = hist.x_edges[0];
    let x1 = hist.x_edges[hist.x_edges.len() - 1];

    let mut chart = ChartBuilder::on(area)
        .margin(8)
        .x_label_area_size(26)
        .y_label_area_size(40)
        .build_cartesian_2d(x0..x1, Y_VIEW_MIN..Y_VIEW_MAX)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(7)
        .y_labels(9)
        .y_label_formatter(&|v| {
            // Ticks above 180° belong to the wrapped branch; relabel them
            // back into the conventional ±180 range (210 reads as −150).
            if *v > 180.0 {
                format!("{:.0}", v - 360.0)
            } else {
                format!("{v:.0}")
            }
        })
        .label_style(("sans-serif", 14))
        .draw()?;

    // Probability cells.  Everything at or below vmin renders as the
    // colormap floor, which doubles as the panel background.
    for (ix, row) in hist.probs.iter().enumerate() {
        for (iy, &p) in row.iter().enumerate() {
            let color = plasma(log_scaled(p, vmin, vmax));
            chart.draw_series(std::iter::once(Rectangle::new(
                [
                    (hist.x_edges[ix], hist.y_edges[iy]),
                    (hist.x_edges[ix + 1], hist.y_edges[iy + 1]),
                ],
                color.filled(),
            )))?;
        }
    }

    // Guides: the first group's fixed 0° target and the swept second target.
    chart.draw_series(DashedLineSeries::new(
        [(x0, 0.0), (x1, 0.0)],
        8,
        6,
        WHITE.stroke_width(2),
    ))?;
    chart.draw_series(DashedLineSeries::new(
        [(x0.max(Y_VIEW_MIN), x0.max(Y_VIEW_MIN)), (x1.min(Y_VIEW_MAX), x1.min(Y_VIEW_MAX))],
        8,
        6,
        WHITE.stroke_width(2),
    ))?;

    // Predicted mean-preference heading.
    chart.draw_series(LineSeries::new(
        panel.predicted.iter().copied(),
        WHITE.stroke_width(2),
    ))?;

    // Annotation box with the two group sizes, upper left.
    let span = x1 - x0;
    let ax = x0 + span * 0.04;
    chart.draw_series(std::iter::once(Rectangle::new(
        [(ax, 202.0), (ax + span * 0.2, 156.0)],
        WHITE.mix(0.8).filled(),
    )))?;
    let note_style = TextStyle::from(("sans-serif", 16).into_font()).color(&BLACK);
    chart.draw_series(std::iter::once(Text::new(
        format!("n1 = {}", panel.n1),
        (ax + span * 0.02, 196.0),
        note_style.clone(),
    )))?;
    chart.draw_series(std::iter::once(Text::new(
        format!("n2 = {}", panel.n2),
        (ax + span * 0.02, 178.0),
        note_style,
    )))?;

    Ok(())
}
