//! Degree-space helpers shared by the statistics and heatmap crates.

/// Clamp a cosine into `[-1, 1]` before `acos`.
///
/// Dot products of two unit vectors can overshoot the interval by a few ULPs;
/// without the clamp, `acos` returns NaN for those rows.
#[inline]
pub fn clip_unit(c: f64) -> f64 {
    c.clamp(-1.0, 1.0)
}

/// Shift headings below −90° up by one turn so the display range is a
/// continuous −90°..270° band (a group heading of −135° renders as 225°).
///
/// The two-group experiments sweep the second target angle through 0..180°;
/// without the shift the resulting headings straddle the ±180° seam and the
/// heatmap tears in half.
#[inline]
pub fn wrap_display_deg(deg: f64) -> f64 {
    if deg < -90.0 { deg + 360.0 } else { deg }
}
