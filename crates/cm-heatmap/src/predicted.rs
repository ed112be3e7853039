//! Closed-form predicted heading for two informed groups.

use cm_core::{Vec2, wrap_display_deg};

/// Heading predicted by the weighted vector sum of the two targets, for each
/// swept conflict angle 0..=180° in 1° steps.
///
/// Group 1 (`n1` agents) pulls toward 0°, group 2 (`n2` agents) toward the
/// swept angle θ; the predicted heading is the direction of
/// `n1·(1, 0) + n2·(cos θ, sin θ)`, with the same −90°..270° wraparound the
/// binned data uses so the overlay stays continuous.
///
/// Returns `(conflict_deg, predicted_heading_deg)` pairs.
pub fn predicted_heading_curve(n1: f64, n2: f64) -> Vec<(f64, f64)> {
    (0..=180)
        .map(|deg| {
            let theta = deg as f64;
            let pull = Vec2::unit_from_deg(theta);
            let resultant = Vec2::new(n1 + n2 * pull.x, n2 * pull.y);

            let mut heading = resultant.heading_deg();
            if heading > 180.0 {
                heading -= 360.0;
            }
            (theta, wrap_display_deg(heading))
        })
        .collect()
}
