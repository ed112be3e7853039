//! Per-trial circular accuracy and the group mean resultant length.

use cm_core::{CmError, Vec2, clip_unit};

use crate::StatsResult;

/// Angular deviation Δθ ∈ [0, π] between the preferred direction at
/// `preferred_deg` degrees and the (unnormalized) trial heading `heading`.
///
/// The dot product is clamped into [-1, 1] before `acos`, so floating-point
/// overshoot can never produce a domain error.  A zero-length heading is a
/// hard error — it means the trial recorded no direction at all.
pub fn angular_deviation_rad(preferred_deg: f64, heading: Vec2) -> StatsResult<f64> {
    let g = Vec2::unit_from_deg(preferred_deg);
    let h = heading.normalized().ok_or(CmError::ZeroLengthDirection)?;
    Ok(clip_unit(h.dot(g)).acos())
}

/// Couzin accuracy: `1 − Δθ/π`.
///
/// 1 when the group moved exactly along the preferred direction, 0 when
/// exactly opposite, 0.5 when orthogonal.
pub fn couzin_accuracy(preferred_deg: f64, heading: Vec2) -> StatsResult<f64> {
    Ok(1.0 - angular_deviation_rad(preferred_deg, heading)? / std::f64::consts::PI)
}

/// The `a_vs_p` variant: `(couzin_accuracy + 1) / 2`, range [0.5, 1].
///
/// Not equivalent to [`couzin_accuracy`] and never interchangeable with it;
/// the originating analysis applies this extra rescaling without stating
/// why, so it is kept as its own definition.
pub fn couzin_accuracy_rescaled(preferred_deg: f64, heading: Vec2) -> StatsResult<f64> {
    Ok((couzin_accuracy(preferred_deg, heading)? + 1.0) / 2.0)
}

/// Mean resultant length `R` of a set of trials against their per-trial
/// preferred directions.
///
/// Per trial: `cos θ = ĥ·ĝ`, `sin θ = ĥ×ĝ` (2D cross product for the sign).
/// The components are averaged separately and `R = √(C̄² + S̄²)`.
///
/// `R = 1` iff every trial shares one heading relative to its preference;
/// headings split across the 0°/360° seam cancel in the component means,
/// which naive angle averaging would miss.
pub fn mean_resultant_length(preferred_deg: &[f64], headings: &[Vec2]) -> StatsResult<f64> {
    if preferred_deg.is_empty() || preferred_deg.len() != headings.len() {
        return Err(crate::StatsError::EmptyGroup);
    }

    let mut cos_sum = 0.0;
    let mut sin_sum = 0.0;
    for (&deg, &heading) in preferred_deg.iter().zip(headings) {
        let g = Vec2::unit_from_deg(deg);
        let h = heading.normalized().ok_or(CmError::ZeroLengthDirection)?;
        cos_sum += h.dot(g);
        sin_sum += h.cross(g);
    }

    let n = preferred_deg.len() as f64;
    Ok((cos_sum / n).hypot(sin_sum / n))
}
