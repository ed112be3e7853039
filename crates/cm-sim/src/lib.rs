//! `cm-sim` — the Couzin-style flocking simulation that produces the
//! run-record CSVs the analysis crates consume.
//!
//! N agents move at unit speed on a toroidal arena.  Each step an agent
//! steers away from neighbors inside its repulsion zone, otherwise blends
//! attraction toward and alignment with neighbors in its social zone;
//! informed agents additionally mix in a weighted preferred direction,
//! optionally adapting that weight from how well they are leading (the
//! feedback conditions).  After a settling period the flock's direction is
//! read off the displacement of its toroidal centroid, and its shape from
//! the bounding box oriented along that direction.
//!
//! | Module     | Contents                                            |
//! |------------|-----------------------------------------------------|
//! | [`agent`]  | per-agent steering rule and model constants         |
//! | [`arena`]  | periodic boundary geometry, toroidal centroid       |
//! | [`flock`]  | spawn, sequential update sweep, shape measures      |
//! | [`trial`]  | one seeded trial: iterate and measure               |
//! | [`config`] | JSON sweep configs expanded into [`TrialSpec`]s     |
//! | [`writer`] | append-mode run-record CSV output                   |

pub mod agent;
pub mod arena;
pub mod config;
pub mod error;
pub mod flock;
pub mod trial;
pub mod writer;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use agent::Agent;
pub use arena::Arena;
pub use config::{SweepConfig, TrialSpec};
pub use error::{SimError, SimResult};
pub use flock::Flock;
pub use trial::{TrialOutcome, run_trial};
pub use writer::{RUN_RECORD_HEADER, RunRecordWriter};
