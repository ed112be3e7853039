//! runner — execute a flocking sweep and append its run records.
//!
//! Reads a JSON sweep config, expands it into trials, runs them in parallel,
//! and appends one record per trial to `data/<output_csv>`.  Usage:
//!
//! ```text
//! runner [config.json] [threads]
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;

use cm_sim::{RunRecordWriter, SweepConfig, run_trial};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_CONFIG: &str = "config/experiment1_retry.json";
const DATA_DIR: &str = "data";

fn main() -> Result<()> {
    println!("=== runner — flocking sweep ===");
    println!();

    // 1. Arguments: config path, optional thread count.
    let mut args = std::env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    if let Some(threads) = args.next() {
        let threads: usize = threads.parse().context("thread count must be an integer")?;
        rayon::ThreadPoolBuilder::new().num_threads(threads).build_global()?;
    }

    // 2. Load and expand the sweep.
    let config = SweepConfig::from_path(Path::new(&config_path))
        .with_context(|| format!("loading {config_path}"))?;
    let specs = config.expand();
    println!(
        "Loaded {config_path}: {} trials, run_time {}, feedback {}",
        specs.len(),
        config.run_time,
        config.use_feedback,
    );

    // 3. One seed per trial, drawn up front so the parallel schedule cannot
    //    change which trial gets which stream.
    let seeds = draw_seeds(specs.len());

    // 4. Run the trials across the thread pool.
    let outcomes: Vec<_> = specs
        .par_iter()
        .zip(seeds)
        .map(|(spec, seed)| {
            let outcome = run_trial(spec, config.run_time, config.use_feedback, seed);
            println!(
                "Run {} | N={} p={} n1={} n2={} angle1={} angle2={} dir=({:.3}, {:.3})",
                spec.run,
                spec.n,
                spec.p,
                spec.n1,
                spec.n2,
                spec.angle1_deg,
                spec.angle2_deg,
                outcome.direction.x,
                outcome.direction.y,
            );
            outcome
        })
        .collect();

    // 5. Append the records in spec order.
    let out: PathBuf = [DATA_DIR, &config.output_csv].iter().collect();
    let mut writer = RunRecordWriter::append(&out)?;
    for (spec, outcome) in specs.iter().zip(&outcomes) {
        writer.write(spec, outcome)?;
    }
    writer.finish()?;

    println!();
    println!("Appended {} records to {}", outcomes.len(), out.display());
    println!("Done.");
    Ok(())
}

/// Fresh unpredictable seeds, one per trial.
fn draw_seeds(count: usize) -> Vec<u64> {
    use rand::{RngCore, SeedableRng, rngs::SmallRng};

    let mut root = SmallRng::from_entropy();
    (0..count).map(|_| root.next_u64()).collect()
}
