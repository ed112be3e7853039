//! 2D conditional histogram over (conflict angle, group heading).

use cm_core::{Vec2, wrap_display_deg};

use crate::{HeatmapError, HeatmapResult};

/// Heading bins span the shifted display range −90°..270°.
pub const HEADING_MIN_DEG: f64 = -90.0;
pub const HEADING_MAX_DEG: f64 = 270.0;
/// 50 uniform heading bins (51 edges), 7.2° each.
pub const HEADING_BINS: usize = 50;

/// Guards the per-bin normalization against empty conditioning bins.
const NORM_EPS: f64 = 1e-12;

/// Recover a trial's group heading in degrees from its direction vector,
/// shifted into the continuous −90°..270° display range.
pub fn shifted_heading_deg(dir_x: f64, dir_y: f64) -> f64 {
    wrap_display_deg(Vec2::new(dir_x, dir_y).heading_deg())
}

/// P(heading | conflict angle), binned.
///
/// Conflict-angle bins sit on the unique observed values, with boundaries at
/// the midpoints between adjacent values and the outermost edges half a
/// degree beyond — each swept angle owns exactly one bin regardless of sweep
/// spacing.  Each conflict bin's heading histogram is normalized to a
/// probability distribution independently; bins with no trials stay ~0
/// everywhere rather than dividing by zero.
#[derive(Debug, Clone)]
pub struct ConditionalHistogram {
    /// Conflict-angle bin edges, length `n_conflict_bins + 1`.
    pub x_edges: Vec<f64>,
    /// Heading bin edges, length [`HEADING_BINS`] + 1.
    pub y_edges: Vec<f64>,
    /// Raw trial counts, `[conflict bin][heading bin]`.
    pub counts:  Vec<Vec<u32>>,
    /// Normalized probabilities, same shape as `counts`.
    pub probs:   Vec<Vec<f64>>,
}

impl ConditionalHistogram {
    /// Bin trials by `(conflict_deg, heading_deg)`.
    ///
    /// `heading_deg` values are expected already shifted (see
    /// [`shifted_heading_deg`]); headings outside −90°..270° fall out of
    /// range and are not counted, matching the display convention.
    pub fn from_trials(conflict_deg: &[f64], heading_deg: &[f64]) -> HeatmapResult<Self> {
        if conflict_deg.is_empty() {
            return Err(HeatmapError::Empty);
        }
        if conflict_deg.len() != heading_deg.len() {
            return Err(HeatmapError::LengthMismatch {
                conflict: conflict_deg.len(),
                heading:  heading_deg.len(),
            });
        }

        let x_edges = conflict_edges(conflict_deg);
        let y_edges = heading_edges();

        let nx = x_edges.len() - 1;
        let mut counts = vec![vec![0u32; HEADING_BINS]; nx];
        for (&cx, &hy) in conflict_deg.iter().zip(heading_deg) {
            let (Some(ix), Some(iy)) = (bin_index(&x_edges, cx), bin_index(&y_edges, hy))
            else {
                continue;
            };
            counts[ix][iy] += 1;
        }

        let probs = counts
            .iter()
            .map(|row| {
                let total: f64 = row.iter().map(|&c| f64::from(c)).sum();
                row.iter()
                    .map(|&c| f64::from(c) / (total + NORM_EPS))
                    .collect()
            })
            .collect();

        Ok(Self { x_edges, y_edges, counts, probs })
    }

    pub fn n_conflict_bins(&self) -> usize {
        self.counts.len()
    }

    /// Largest normalized probability anywhere in the histogram — the shared
    /// color-scale maximum when several panels render together.
    pub fn max_prob(&self) -> f64 {
        self.probs
            .iter()
            .flatten()
            .copied()
            .fold(0.0, f64::max)
    }
}

// ── Binning ───────────────────────────────────────────────────────────────────

/// Midpoint edges over the unique sorted conflict angles, ±0.5° at the ends.
fn conflict_edges(conflict_deg: &[f64]) -> Vec<f64> {
    let mut unique: Vec<f64> = conflict_deg.to_vec();
    unique.sort_by(f64::total_cmp);
    unique.dedup_by(|a, b| a.total_cmp(b).is_eq());

    let mut edges = Vec::with_capacity(unique.len() + 1);
    edges.push(unique[0] - 0.5);
    for pair in unique.windows(2) {
        edges.push((pair[0] + pair[1]) / 2.0);
    }
    edges.push(unique[unique.len() - 1] + 0.5);
    edges
}

fn heading_edges() -> Vec<f64> {
    let width = (HEADING_MAX_DEG - HEADING_MIN_DEG) / HEADING_BINS as f64;
    (0..=HEADING_BINS)
        .map(|i| HEADING_MIN_DEG + i as f64 * width)
        .collect()
}

/// Half-open bins `[e[i], e[i+1])`, last bin closed on the right —
/// `numpy.histogram2d` edge semantics.
fn bin_index(edges: &[f64], value: f64) -> Option<usize> {
    let n = edges.len() - 1;
    if value < edges[0] || value > edges[n] {
        return None;
    }
    if value == edges[n] {
        return Some(n - 1);
    }
    // Edges are few (dozens); a linear scan is clearer than partition_point.
    (0..n).find(|&i| value >= edges[i] && value < edges[i + 1])
}
