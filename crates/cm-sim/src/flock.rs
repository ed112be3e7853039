//! The flock: spawn, per-step update, centroid and shape measures.

use cm_core::Vec2;
use rand::Rng;
use rand::rngs::SmallRng;

use crate::agent::{
    ALIGN_THRESHOLD, Agent, MAX_TURN, PREF_WEIGHT_MAX, REPULSION_RADIUS, SOCIAL_RADIUS, SPEED,
    WEIGHT_DECAY, WEIGHT_GAIN, angle_between, unit_or_zero,
};
use crate::arena::Arena;
use crate::config::TrialSpec;

/// All agents of one trial.
#[derive(Debug, Clone)]
pub struct Flock {
    agents: Vec<Agent>,
}

impl Flock {
    /// Spawn `spec.n` agents in a square of side `spawn_box` centered in the
    /// arena, with random headings.  The first `n1` agents prefer
    /// `angle1_deg`, the next `n2` prefer `angle2_deg`, the rest are naive.
    pub fn spawn(
        spec: &TrialSpec,
        arena: &Arena,
        spawn_box: f64,
        use_feedback: bool,
        rng: &mut SmallRng,
    ) -> Self {
        let center = Vec2::new(arena.width / 2.0, arena.height / 2.0);
        let half = spawn_box / 2.0;

        let agents = (0..spec.n)
            .map(|i| {
                let preference = if i < spec.n1 {
                    Some(Vec2::unit_from_deg(spec.angle1_deg))
                } else if i < spec.n1 + spec.n2 {
                    Some(Vec2::unit_from_deg(spec.angle2_deg))
                } else {
                    None
                };
                let pos = Vec2::new(
                    center.x + rng.gen_range(-half..half),
                    center.y + rng.gen_range(-half..half),
                );
                let heading = rng.gen_range(0.0..std::f64::consts::TAU);
                Agent::new(pos, heading, preference, use_feedback)
            })
            .collect();
        Self { agents }
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Advance every agent one step, in index order and in place.  Each
    /// agent reacts to the already-updated state of lower-indexed neighbors
    /// within the same step, so update order is part of the model.
    pub fn step(&mut self, arena: &Arena) {
        for i in 0..self.agents.len() {
            let (vel, pref_weight) = self.decide(i, arena);
            let a = &mut self.agents[i];
            a.vel = vel;
            a.pref_weight = pref_weight;
            a.pos = arena.wrap(a.pos + a.vel);
        }
    }

    /// Steering decision for agent `i`: repulsion beats the social rule,
    /// the social rule blends attraction and orientation, informed agents
    /// then mix in their weighted preference, and the result is clamped to
    /// the maximum turn rate.
    fn decide(&self, i: usize, arena: &Arena) -> (Vec2, f64) {
        let me = &self.agents[i];

        let mut repulsion = Vec2::new(0.0, 0.0);
        let mut has_repulsion = false;
        let mut attraction = Vec2::new(0.0, 0.0);
        let mut orientation = Vec2::new(0.0, 0.0);
        let mut social_count = 0usize;

        for (j, other) in self.agents.iter().enumerate() {
            let disp = arena.displacement(me.pos, other.pos);
            let d = disp.norm();

            if j != i && d < REPULSION_RADIUS {
                repulsion = repulsion + unit_or_zero(disp.scaled(-1.0));
                has_repulsion = true;
            } else if d < SOCIAL_RADIUS {
                if j != i {
                    attraction = attraction + unit_or_zero(disp);
                }
                // Orientation includes the agent's own heading.
                orientation = orientation + unit_or_zero(other.vel);
                social_count += 1;
            }
        }

        let mut desired = if has_repulsion {
            unit_or_zero(repulsion)
        } else if social_count > 0 {
            unit_or_zero(unit_or_zero(attraction) + unit_or_zero(orientation))
        } else {
            unit_or_zero(me.vel)
        };

        let mut pref_weight = me.pref_weight;
        if let Some(pref) = me.preference {
            if me.feedback {
                let alignment = angle_between(me.vel, pref);
                if alignment < ALIGN_THRESHOLD && pref_weight < PREF_WEIGHT_MAX {
                    pref_weight += WEIGHT_GAIN;
                } else if pref_weight > 0.0 {
                    pref_weight -= WEIGHT_DECAY;
                }
            }
            desired = unit_or_zero(desired + pref.scaled(pref_weight));
        }

        let turn = angle_between(me.vel, desired);
        let vel = if turn > MAX_TURN {
            let sign = if me.vel.cross(desired) > 0.0 { 1.0 } else { -1.0 };
            me.vel.rotated(sign * MAX_TURN)
        } else {
            desired
        };
        (unit_or_zero(vel).scaled(SPEED), pref_weight)
    }

    /// Flock centroid on the torus.
    pub fn centroid(&self, arena: &Arena) -> Vec2 {
        arena.circular_centroid(self.agents.iter().map(|a| a.pos))
    }

    /// Bounding-box extents of the flock along and perpendicular to
    /// `direction`, measured from periodic displacements off `centroid`.
    /// Returns `(along, perpendicular)` — the run record's
    /// (`bbox_X`, `bbox_Y`).
    pub fn bounding_box(&self, direction: Vec2, centroid: Vec2, arena: &Arena) -> (f64, f64) {
        let mut min_along = f64::INFINITY;
        let mut max_along = f64::NEG_INFINITY;
        let mut min_perp = f64::INFINITY;
        let mut max_perp = f64::NEG_INFINITY;

        for a in &self.agents {
            let d = arena.displacement(centroid, a.pos);
            let along = d.x * direction.x + d.y * direction.y;
            let perp = d.x * -direction.y + d.y * direction.x;
            min_along = min_along.min(along);
            max_along = max_along.max(along);
            min_perp = min_perp.min(perp);
            max_perp = max_perp.max(perp);
        }
        (max_along - min_along, max_perp - min_perp)
    }
}
