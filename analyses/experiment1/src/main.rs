//! experiment1 — group accuracy and elongation across (N, p) sweeps.
//!
//! Reads the first informed-leadership sweep, derives unit directions and
//! the realized informed fraction per trial, then aggregates the mean
//! resultant length and bounding-box elongation per (N, actual_p)
//! configuration.  Aggregates go out as CSV plus two line charts with one
//! hue per group size.

use std::fs;
use std::path::Path;

use anyhow::Result;

use cm_plot::{LinePlot, Series};
use cm_stats::{
    AccuracyPoint, ElongationPoint, accuracy_by_group, append_direction_columns,
    elongation_by_group, write_accuracy_csv, write_elongation_csv,
};
use cm_table::Table;

// ── Constants ─────────────────────────────────────────────────────────────────

const INPUT_CSV:  &str = "data/experiment_1_retry.csv";
const OUTPUT_DIR: &str = "output/experiment1";
const PREVIEW_ROWS: usize = 5;

fn main() -> Result<()> {
    println!("=== experiment1 — accuracy & elongation vs. informed fraction ===");
    println!();

    // 1. Load and coerce the trial table.
    let mut table = Table::from_path(Path::new(INPUT_CSV))?;
    table.coerce_numeric();
    let (rows, cols) = table.shape();
    println!("Loaded {INPUT_CSV}: {rows} trials × {cols} columns");

    // 2. Derived columns: unit directions, projections, actual_p.
    append_direction_columns(&mut table)?;

    // 3. Aggregate per (N, actual_p).
    let accuracy = accuracy_by_group(&table)?;
    let elongation = elongation_by_group(&table)?;
    println!("Configurations: {}", accuracy.len());
    println!();
    println!("accuracy head:");
    for pt in accuracy.iter().take(PREVIEW_ROWS) {
        println!(
            "  N = {:>4}  actual_p = {:.4}  accuracy = {:.4}",
            pt.group_size, pt.informed_fraction, pt.accuracy
        );
    }
    println!("elongation head:");
    for pt in elongation.iter().take(PREVIEW_ROWS) {
        println!(
            "  N = {:>4}  actual_p = {:.4}  elongation = {:.4}",
            pt.group_size, pt.informed_fraction, pt.elongation
        );
    }
    println!();

    // 4. Export aggregates.
    let out = Path::new(OUTPUT_DIR);
    fs::create_dir_all(out)?;
    write_accuracy_csv(&out.join("accuracy_by_group.csv"), &accuracy)?;
    write_elongation_csv(&out.join("elongation_by_group.csv"), &elongation)?;

    // 5. Line charts, one series per group size.
    let accuracy_png = out.join("accuracy.png");
    LinePlot {
        x_label: "proportion informed".into(),
        y_label: "mean resultant length".into(),
        ..LinePlot::default()
    }
    .render(&accuracy_png, &accuracy_series(&accuracy))?;

    let elongation_png = out.join("elongation.png");
    LinePlot {
        x_label: "proportion informed".into(),
        y_label: "elongation (width / height)".into(),
        ..LinePlot::default()
    }
    .render(&elongation_png, &elongation_series(&elongation))?;

    println!("Wrote {}", accuracy_png.display());
    println!("Wrote {}", elongation_png.display());
    println!("Done.");
    Ok(())
}

/// Split accuracy points into one series per group size.  Input is already
/// sorted by (N, actual_p), so each size forms one contiguous run.
fn accuracy_series(points: &[AccuracyPoint]) -> Vec<Series> {
    let mut series: Vec<Series> = Vec::new();
    for pt in points {
        let label = format!("N = {}", pt.group_size);
        match series.last_mut() {
            Some(s) if s.label == label => s.points.push((pt.informed_fraction, pt.accuracy)),
            _ => series.push(Series {
                label,
                points: vec![(pt.informed_fraction, pt.accuracy)],
            }),
        }
    }
    series
}

fn elongation_series(points: &[ElongationPoint]) -> Vec<Series> {
    let mut series: Vec<Series> = Vec::new();
    for pt in points {
        let label = format!("N = {}", pt.group_size);
        match series.last_mut() {
            Some(s) if s.label == label => s.points.push((pt.informed_fraction, pt.elongation)),
            _ => series.push(Series {
                label,
                points: vec![(pt.informed_fraction, pt.elongation)],
            }),
        }
    }
    series
}
