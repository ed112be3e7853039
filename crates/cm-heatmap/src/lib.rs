//! `cm-heatmap` — empirical conditional direction distributions.
//!
//! The two-informed-group experiments fix one target at 0° and sweep the
//! second target (the conflict angle) through 0..180°.  This crate turns a
//! table of trials into P(group heading | conflict angle): one independent
//! probability distribution over heading bins per observed conflict angle,
//! plus the closed-form heading the weighted vector sum of the two targets
//! predicts.

pub mod error;
pub mod histogram;
pub mod predicted;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{HeatmapError, HeatmapResult};
pub use histogram::{ConditionalHistogram, shifted_heading_deg};
pub use predicted::predicted_heading_curve;
