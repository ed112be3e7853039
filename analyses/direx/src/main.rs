//! direx — conditional group-direction heatmaps for the feedback experiment.
//!
//! Four conditions, one file each: two informed groupsets (A/B sizes) ×
//! feedback off/on.  Groupset 1 prefers 0°; groupset 2's preference sweeps
//! the conflict angle.  Each panel shows P(group heading | conflict angle)
//! with the weighted-vector-sum prediction overlaid, arranged 2×2 with the
//! feedback conditions in the right column.

use std::fs;
use std::path::Path;

use anyhow::Result;

use cm_heatmap::{ConditionalHistogram, predicted_heading_curve, shifted_heading_deg};
use cm_plot::{HeatmapFigure, Panel};
use cm_table::Table;

// ── Constants ─────────────────────────────────────────────────────────────────

// Panel order: rows top-to-bottom, left column = no feedback.
const CONDITIONS: [&str; 4] = ["Ab", "Bb", "Aa", "Ba"];

const OUTPUT_DIR: &str = "output/direx";

struct Condition {
    hist:      ConditionalHistogram,
    predicted: Vec<(f64, f64)>,
    n1:        u32,
    n2:        u32,
}

fn main() -> Result<()> {
    println!("=== direx — feedback direction analysis ===");
    println!();

    // 1. Load all four condition tables and report their shapes.
    let mut conditions = Vec::with_capacity(CONDITIONS.len());
    println!("Data loaded:");
    for name in CONDITIONS {
        let path = format!("data/direx_{name}.csv");
        let table = Table::load_clean(Path::new(&path))?;
        let (rows, cols) = table.shape();
        println!("  {name}: ({rows}, {cols})");
        conditions.push(build_condition(&table)?);
    }
    println!();

    // 2. Render the 2×2 figure with a shared colorbar.
    let out = Path::new(OUTPUT_DIR);
    fs::create_dir_all(out)?;
    let png = out.join("direx_heatmap.png");

    let panels: Vec<Panel<'_>> = conditions
        .iter()
        .map(|c| Panel {
            hist:      &c.hist,
            predicted: &c.predicted,
            n1:        c.n1,
            n2:        c.n2,
        })
        .collect();

    HeatmapFigure {
        column_titles:  vec!["Without feedback".into(), "With feedback".into()],
        x_label:        "Preferred direction of groupset 2 (degrees)".into(),
        y_label:        "Group direction".into(),
        colorbar_label: "Probability of group direction".into(),
        size:           (1500, 900),
        ..HeatmapFigure::default()
    }
    .render(&png, &panels)?;

    println!("Wrote {}", png.display());
    println!("Done.");
    Ok(())
}

/// Histogram + predicted curve for one condition table.
fn build_condition(table: &Table) -> Result<Condition> {
    let n1 = table.numeric_first("n1")?;
    let n2 = table.numeric_first("n2")?;

    let conflict = table.numeric("angle2_deg")?;
    let dir_x = table.numeric("dirX")?;
    let dir_y = table.numeric("dirY")?;
    let headings: Vec<f64> = dir_x
        .iter()
        .zip(dir_y)
        .map(|(&x, &y)| shifted_heading_deg(x, y))
        .collect();

    let hist = ConditionalHistogram::from_trials(conflict, &headings)?;
    let predicted = predicted_heading_curve(n1, n2);
    Ok(Condition {
        hist,
        predicted,
        n1: n1 as u32,
        n2: n2 as u32,
    })
}
