//! `cm-stats` — circular statistics over experiment trial tables.
//!
//! Two accuracy definitions coexist in the experiment corpus and are **not**
//! numerically equivalent; they must never be mixed within one analysis:
//!
//! | Function                                | Range   | Role                           |
//! |-----------------------------------------|---------|--------------------------------|
//! | [`couzin_accuracy`]                     | [0, 1]  | reference per-trial definition |
//! | [`couzin_accuracy_rescaled`]            | [.5, 1] | a_vs_p per-trial summaries     |
//!
//! Group-level accuracy is the mean resultant length `R`: average the
//! per-trial (cos θ, sin θ) projections onto the preferred direction and take
//! the magnitude of the mean vector.  Averaging angles (or per-trial
//! accuracies) instead would silently go wrong near the 0°/360° seam —
//! [`mean_resultant_length`] is the only correct aggregation.

pub mod accuracy;
pub mod aggregate;
pub mod error;
pub mod export;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use accuracy::{
    angular_deviation_rad, couzin_accuracy, couzin_accuracy_rescaled, mean_resultant_length,
};
pub use aggregate::{
    AccuracyPoint, AccuracySummary, DeviationExtremes, ElongationPoint, accuracy_by_group,
    append_direction_columns, deviation_extremes, elongation_by_group,
    rescaled_accuracy_summary,
};
pub use error::{StatsError, StatsResult};
pub use export::{write_accuracy_csv, write_elongation_csv, write_summary_csv};
