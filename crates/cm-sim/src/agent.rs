//! One flocking agent and its per-step steering rule.

use cm_core::{Vec2, clip_unit};

// ── Model constants ───────────────────────────────────────────────────────────

pub const SPEED: f64 = 1.0;
/// Maximum turn per step, radians.
pub const MAX_TURN: f64 = 0.3;
/// Zone of repulsion.
pub const REPULSION_RADIUS: f64 = 24.0;
/// Zone of orientation + attraction.
pub const SOCIAL_RADIUS: f64 = 230.0;

/// Fixed preference weight without feedback.
pub const PREF_WEIGHT: f64 = 0.35;
/// Initial preference weight when feedback is on; the feedback rule then
/// moves it between 0 and [`PREF_WEIGHT_MAX`].
pub const PREF_WEIGHT_FEEDBACK: f64 = 0.10;
pub const PREF_WEIGHT_MAX: f64 = 0.45;
pub const WEIGHT_GAIN: f64 = 0.008;
pub const WEIGHT_DECAY: f64 = 0.0006;
/// Alignment threshold for the feedback rule, radians (~10°).
pub const ALIGN_THRESHOLD: f64 = 0.17;

/// A single agent: position and unit-speed velocity on the torus, plus an
/// optional preferred direction (informed agents only) with its current
/// weight.
#[derive(Debug, Clone, Copy)]
pub struct Agent {
    pub pos:         Vec2,
    pub vel:         Vec2,
    /// Unit preference vector; `None` for naive agents.
    pub preference:  Option<Vec2>,
    pub pref_weight: f64,
    pub feedback:    bool,
}

impl Agent {
    pub fn new(pos: Vec2, heading_rad: f64, preference: Option<Vec2>, feedback: bool) -> Self {
        let pref_weight = if feedback { PREF_WEIGHT_FEEDBACK } else { PREF_WEIGHT };
        Self {
            pos,
            vel: Vec2::new(heading_rad.cos(), heading_rad.sin()),
            preference: preference.and_then(Vec2::normalized),
            pref_weight,
            feedback,
        }
    }
}

/// Unit-length copy, or the zero vector when the input has no direction.
/// Zero vectors flow through the steering sums unchanged, exactly like a
/// neighborless term contributing nothing.
#[inline]
pub(crate) fn unit_or_zero(v: Vec2) -> Vec2 {
    v.normalized().unwrap_or(Vec2::new(0.0, 0.0))
}

/// Unsigned angle between two directions, radians in [0, π].  Zero-length
/// inputs read as orthogonal (dot 0 → π/2) rather than faulting.
#[inline]
pub(crate) fn angle_between(a: Vec2, b: Vec2) -> f64 {
    clip_unit(unit_or_zero(a).dot(unit_or_zero(b))).acos()
}
