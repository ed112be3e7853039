//! a-vs-p — rescaled accuracy versus nominal informed fraction.
//!
//! Reads the a_vs_p sweep, reports the extremes of the per-trial angular
//! deviation (and which `p` produced the worst trial), then summarizes the
//! rescaled accuracy per (N, p): mean, sample std, and trial count.

use std::fs;
use std::path::Path;

use anyhow::Result;

use cm_stats::{deviation_extremes, rescaled_accuracy_summary, write_summary_csv};
use cm_table::Table;

// ── Constants ─────────────────────────────────────────────────────────────────

const INPUT_CSV:  &str = "a_vs_p_test.csv";
const OUTPUT_DIR: &str = "output/a_vs_p";

fn main() -> Result<()> {
    println!("=== a-vs-p — accuracy vs. informed fraction ===");
    println!();

    // 1. Load and coerce.
    let mut table = Table::from_path(Path::new(INPUT_CSV))?;
    table.coerce_numeric();
    let (rows, cols) = table.shape();
    println!("Loaded {INPUT_CSV}: {rows} trials × {cols} columns");

    // 2. Angular-deviation extremes across all trials.
    let extremes = deviation_extremes(&table)?;
    println!("P value at max delta theta: {}", extremes.p_at_max);
    println!("Delta theta min: {:.2} degrees", extremes.min_rad.to_degrees());
    println!("Delta theta max: {:.2} degrees", extremes.max_rad.to_degrees());
    println!();

    // 3. Per-(N, p) summary of the rescaled accuracy.
    let summary = rescaled_accuracy_summary(&mut table)?;
    println!("Accuracy summary:");
    println!("{:>6} {:>8} {:>10} {:>10} {:>7}", "N", "p", "mean", "std", "count");
    for s in &summary {
        println!(
            "{:>6} {:>8} {:>10.4} {:>10.4} {:>7}",
            s.group_size, s.informed_fraction, s.mean, s.std, s.count
        );
    }

    // 4. Export.
    let out = Path::new(OUTPUT_DIR);
    fs::create_dir_all(out)?;
    let csv = out.join("accuracy_summary.csv");
    write_summary_csv(&csv, &summary)?;
    println!();
    println!("Wrote {}", csv.display());
    println!("Done.");
    Ok(())
}
