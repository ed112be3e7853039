//! `cm-plot` — presentation layer over `plotters`.
//!
//! No statistics happen here: callers hand over finished aggregates
//! ([`Series`] point sets, [`cm_heatmap::ConditionalHistogram`]s) and this
//! crate renders PNGs via `BitMapBackend`.
//!
//! | Type            | Output                                              |
//! |-----------------|-----------------------------------------------------|
//! | [`LinePlot`]    | line chart, one colored series per group size       |
//! | [`HeatmapFigure`] | panel grid of log-scaled conditional histograms   |

pub mod error;
pub mod heatmap;
pub mod line;
pub mod palette;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{PlotError, PlotResult};
pub use heatmap::{HeatmapFigure, Panel};
pub use line::{LinePlot, Series};
