//! Derived columns and grouped aggregates over trial tables.
//!
//! Column conventions follow the runner output: `N` (group size), `n1`
//! (informed count), `angle1_deg` (preferred direction), `dirX`/`dirY`
//! (realized group direction), `bbox_X`/`bbox_Y` (bounding-box extents),
//! and `p` (nominal informed fraction, `a_vs_p` files only).

use cm_core::{CmError, Vec2};
use cm_table::{Table, group_by};

use crate::accuracy::couzin_accuracy_rescaled;
use crate::{StatsError, StatsResult};

// ── Aggregate records ─────────────────────────────────────────────────────────

/// Mean resultant length per (N, actual_p) configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccuracyPoint {
    pub group_size:        f64,
    pub informed_fraction: f64,
    pub accuracy:          f64,
}

/// Mean bounding-box aspect ratio per (N, actual_p) configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElongationPoint {
    pub group_size:        f64,
    pub informed_fraction: f64,
    /// `NaN` when the group's mean bounding-box height is exactly zero.
    pub elongation:        f64,
}

/// Per-(N, p) summary of the rescaled per-trial accuracy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccuracySummary {
    pub group_size:        f64,
    pub informed_fraction: f64,
    pub mean:              f64,
    /// Sample standard deviation (n − 1 denominator); `NaN` for singletons.
    pub std:               f64,
    pub count:             usize,
}

/// Extremes of the per-trial angular deviation across a whole table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviationExtremes {
    pub min_rad:  f64,
    pub max_rad:  f64,
    /// Nominal informed fraction of the worst trial.
    pub p_at_max: f64,
}

// ── Derived columns ───────────────────────────────────────────────────────────

/// Append the direction-analysis columns in place:
/// `g_x`, `g_y` (unit preferred direction), `h_x`, `h_y` (unit group
/// direction), `cos_theta`, `sin_theta` (projections onto the preference),
/// and `actual_p = n1 / N`.
///
/// Idempotent — re-running overwrites the derived columns.
pub fn append_direction_columns(table: &mut Table) -> StatsResult<()> {
    let angle = table.numeric("angle1_deg")?.to_vec();
    let dir_x = table.numeric("dirX")?.to_vec();
    let dir_y = table.numeric("dirY")?.to_vec();
    let n = table.numeric("N")?.to_vec();
    let n1 = table.numeric("n1")?.to_vec();

    let rows = angle.len();
    let mut g_x = Vec::with_capacity(rows);
    let mut g_y = Vec::with_capacity(rows);
    let mut h_x = Vec::with_capacity(rows);
    let mut h_y = Vec::with_capacity(rows);
    let mut cos_theta = Vec::with_capacity(rows);
    let mut sin_theta = Vec::with_capacity(rows);

    for i in 0..rows {
        let g = Vec2::unit_from_deg(angle[i]);
        let h = Vec2::new(dir_x[i], dir_y[i])
            .normalized()
            .ok_or(CmError::ZeroLengthDirection)?;
        g_x.push(g.x);
        g_y.push(g.y);
        h_x.push(h.x);
        h_y.push(h.y);
        cos_theta.push(h.dot(g));
        sin_theta.push(h.cross(g));
    }

    let actual_p: Vec<f64> = n1.iter().zip(&n).map(|(a, b)| a / b).collect();

    table.push_numeric("g_x", g_x)?;
    table.push_numeric("g_y", g_y)?;
    table.push_numeric("h_x", h_x)?;
    table.push_numeric("h_y", h_y)?;
    table.push_numeric("cos_theta", cos_theta)?;
    table.push_numeric("sin_theta", sin_theta)?;
    table.push_numeric("actual_p", actual_p)?;
    Ok(())
}

// ── Grouped aggregates ────────────────────────────────────────────────────────

/// Group accuracy `R` per (N, actual_p): magnitude of the mean
/// (cos θ, sin θ) vector over the group's trials.
///
/// Requires [`append_direction_columns`] to have run.
pub fn accuracy_by_group(table: &Table) -> StatsResult<Vec<AccuracyPoint>> {
    let cos_theta = table.numeric("cos_theta")?;
    let sin_theta = table.numeric("sin_theta")?;

    group_by(table, &["N", "actual_p"])?
        .into_iter()
        .map(|g| {
            let c_bar = mean(&g.rows, cos_theta)?;
            let s_bar = mean(&g.rows, sin_theta)?;
            Ok(AccuracyPoint {
                group_size:        g.key[0],
                informed_fraction: g.key[1],
                accuracy:          c_bar.hypot(s_bar),
            })
        })
        .collect()
}

/// Elongation per (N, actual_p): mean `bbox_X` over mean `bbox_Y`,
/// `NaN` (not an error) when the mean height is exactly zero.
pub fn elongation_by_group(table: &Table) -> StatsResult<Vec<ElongationPoint>> {
    let bbox_x = table.numeric("bbox_X")?;
    let bbox_y = table.numeric("bbox_Y")?;

    group_by(table, &["N", "actual_p"])?
        .into_iter()
        .map(|g| {
            let mean_x = mean(&g.rows, bbox_x)?;
            let mean_y = mean(&g.rows, bbox_y)?;
            let elongation = if mean_y == 0.0 { f64::NAN } else { mean_x / mean_y };
            Ok(ElongationPoint {
                group_size:        g.key[0],
                informed_fraction: g.key[1],
                elongation,
            })
        })
        .collect()
}

/// Per-trial **rescaled** accuracy summarized per (N, p): mean, sample
/// standard deviation, and trial count.
///
/// The preferred direction is the first row's `angle1_deg`, applied to every
/// trial in the file — `a_vs_p` sweeps hold the target fixed per file.
/// Appends the per-trial values as an `accuracy` column.
pub fn rescaled_accuracy_summary(table: &mut Table) -> StatsResult<Vec<AccuracySummary>> {
    let target_deg = table.numeric_first("angle1_deg")?;
    let dir_x = table.numeric("dirX")?.to_vec();
    let dir_y = table.numeric("dirY")?.to_vec();

    let accuracy: Vec<f64> = dir_x
        .iter()
        .zip(&dir_y)
        .map(|(&x, &y)| couzin_accuracy_rescaled(target_deg, Vec2::new(x, y)))
        .collect::<StatsResult<_>>()?;
    table.push_numeric("accuracy", accuracy)?;

    let values = table.numeric("accuracy")?;
    group_by(table, &["N", "p"])?
        .into_iter()
        .map(|g| {
            let m = mean(&g.rows, values)?;
            Ok(AccuracySummary {
                group_size:        g.key[0],
                informed_fraction: g.key[1],
                mean:              m,
                std:               sample_std(&g.rows, values, m),
                count:             g.rows.len(),
            })
        })
        .collect()
}

/// Min/max per-trial angular deviation across the whole table, plus the
/// nominal `p` of the worst trial.
pub fn deviation_extremes(table: &Table) -> StatsResult<DeviationExtremes> {
    let target_deg = table.numeric_first("angle1_deg")?;
    let dir_x = table.numeric("dirX")?;
    let dir_y = table.numeric("dirY")?;
    let p = table.numeric("p")?;

    let mut min_rad = f64::INFINITY;
    let mut max_rad = f64::NEG_INFINITY;
    let mut p_at_max = f64::NAN;
    for i in 0..dir_x.len() {
        let dev =
            crate::angular_deviation_rad(target_deg, Vec2::new(dir_x[i], dir_y[i]))?;
        min_rad = min_rad.min(dev);
        if dev > max_rad {
            max_rad = dev;
            p_at_max = p[i];
        }
    }

    if !max_rad.is_finite() {
        return Err(StatsError::EmptyGroup);
    }
    Ok(DeviationExtremes { min_rad, max_rad, p_at_max })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn mean(rows: &[usize], values: &[f64]) -> StatsResult<f64> {
    if rows.is_empty() {
        return Err(StatsError::EmptyGroup);
    }
    Ok(rows.iter().map(|&i| values[i]).sum::<f64>() / rows.len() as f64)
}

fn sample_std(rows: &[usize], values: &[f64], mean: f64) -> f64 {
    if rows.len() < 2 {
        return f64::NAN;
    }
    let ss: f64 = rows.iter().map(|&i| (values[i] - mean).powi(2)).sum();
    (ss / (rows.len() - 1) as f64).sqrt()
}
