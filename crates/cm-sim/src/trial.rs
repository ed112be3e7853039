//! One complete trial: spawn, iterate, measure.

use cm_core::Vec2;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::arena::Arena;
use crate::config::TrialSpec;
use crate::flock::Flock;

// ── Arena constants ───────────────────────────────────────────────────────────

pub const ARENA_WIDTH: f64 = 1400.0;
pub const ARENA_HEIGHT: f64 = 1000.0;
/// Side of the central square agents spawn in.
const SPAWN_BOX: f64 = 50.0;
/// Steps between the two centroid snapshots that define the group direction.
const MEASURE_WINDOW: u32 = 250;

/// What one trial produces: the realized group direction (unit vector, or
/// zero if the flock went nowhere) and the flock's bounding-box extents
/// along and perpendicular to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialOutcome {
    pub direction: Vec2,
    pub bbox_x:    f64,
    pub bbox_y:    f64,
}

/// Run one trial to completion, deterministically from `seed`.
///
/// The group direction is the displacement between two toroidal centroid
/// snapshots: one [`MEASURE_WINDOW`] + 1 steps before the end, one before
/// the final step.  The bounding box is measured on the final flock state,
/// oriented by that direction.
pub fn run_trial(spec: &TrialSpec, run_time: u32, use_feedback: bool, seed: u64) -> TrialOutcome {
    let mut rng = SmallRng::seed_from_u64(seed);
    let arena = Arena::new(ARENA_WIDTH, ARENA_HEIGHT);
    let mut flock = Flock::spawn(spec, &arena, SPAWN_BOX, use_feedback, &mut rng);

    let measure_start = run_time.saturating_sub(MEASURE_WINDOW + 1);
    let mut start_centroid = flock.centroid(&arena);
    let mut end_centroid = start_centroid;

    for t in 0..run_time {
        if t == measure_start {
            start_centroid = flock.centroid(&arena);
        }
        if t == run_time - 1 {
            end_centroid = flock.centroid(&arena);
        }
        flock.step(&arena);
    }

    let direction = arena
        .displacement(start_centroid, end_centroid)
        .normalized()
        .unwrap_or(Vec2::new(0.0, 0.0));
    let (bbox_x, bbox_y) = flock.bounding_box(direction, end_centroid, &arena);
    TrialOutcome { direction, bbox_x, bbox_y }
}
