//! Colors: the pastel series palette and a plasma-style colormap.

use plotters::style::RGBColor;

/// Soft categorical palette for hue-per-group-size line series.
pub const PASTEL: [RGBColor; 10] = [
    RGBColor(161, 201, 244),
    RGBColor(255, 180, 130),
    RGBColor(141, 229, 161),
    RGBColor(255, 159, 170),
    RGBColor(208, 187, 255),
    RGBColor(222, 187, 155),
    RGBColor(250, 176, 228),
    RGBColor(207, 207, 207),
    RGBColor(255, 254, 163),
    RGBColor(185, 225, 239),
];

/// Series color for index `i`, cycling through [`PASTEL`].
pub fn series_color(i: usize) -> RGBColor {
    PASTEL[i % PASTEL.len()]
}

/// Plasma anchor points sampled from the reference colormap; intermediate
/// values interpolate linearly between neighbors.
const PLASMA_ANCHORS: [(f64, (u8, u8, u8)); 8] = [
    (0.00, (13, 8, 135)),
    (0.14, (84, 2, 163)),
    (0.29, (139, 10, 165)),
    (0.43, (185, 50, 137)),
    (0.57, (219, 92, 104)),
    (0.71, (244, 136, 73)),
    (0.86, (254, 188, 43)),
    (1.00, (240, 249, 33)),
];

/// High-contrast perceptual colormap over `t ∈ [0, 1]` (clamped).
pub fn plasma(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    for pair in PLASMA_ANCHORS.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        if t <= t1 {
            let f = if t1 > t0 { (t - t0) / (t1 - t0) } else { 0.0 };
            return RGBColor(lerp(c0.0, c1.0, f), lerp(c0.1, c1.1, f), lerp(c0.2, c1.2, f));
        }
    }
    let (_, c) = PLASMA_ANCHORS[PLASMA_ANCHORS.len() - 1];
    RGBColor(c.0, c.1, c.2)
}

/// Map a probability onto [0, 1] logarithmically between `vmin` and `vmax`,
/// the shared color scale for all heatmap panels.  Probabilities at or below
/// `vmin` (including empty bins) land on 0.
pub fn log_scaled(p: f64, vmin: f64, vmax: f64) -> f64 {
    if !(p.is_finite() && vmin > 0.0 && vmax > vmin) {
        return 0.0;
    }
    let t = (p.max(vmin).log10() - vmin.log10()) / (vmax.log10() - vmin.log10());
    t.clamp(0.0, 1.0)
}

fn lerp(a: u8, b: u8, f: f64) -> u8 {
    (f64::from(a) + (f64::from(b) - f64::from(a)) * f).round() as u8
}
