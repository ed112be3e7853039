//! JSON sweep configuration and its expansion into trial specs.

use std::path::Path;

use serde::Deserialize;

use crate::SimResult;

/// A parameter sweep, loaded from a JSON file.
///
/// Two sweep modes share one schema.  When `p_values` holds more than one
/// entry, the sweep runs over informed *fractions*: `n1 = ⌊p · N⌋`, `n2 = 0`
/// (the single-group experiments).  Otherwise it runs over the explicit
/// `n1_values` × `n2_values` grid (the two-group experiments), with
/// `p = n1 / N` recorded for the log.
#[derive(Debug, Clone, Deserialize)]
pub struct SweepConfig {
    /// Output file name, created under the runner's data directory.
    pub output_csv:        String,
    /// Repetitions per parameter combination.
    pub num_runs:          u32,
    /// Simulation steps per trial.
    pub run_time:          u32,
    pub use_feedback:      bool,
    #[serde(rename = "N_values")]
    pub n_values:          Vec<u32>,
    pub n1_values:         Vec<u32>,
    pub n2_values:         Vec<u32>,
    pub p_values:          Vec<f64>,
    pub angle1_deg_values: Vec<f64>,
    pub angle2_deg_values: Vec<f64>,
}

/// One trial to run: a fully resolved parameter combination plus its
/// repetition index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialSpec {
    /// 1-based repetition index within the combination.
    pub run:        u32,
    pub n:          u32,
    /// Nominal informed fraction.
    pub p:          f64,
    pub n1:         u32,
    pub n2:         u32,
    pub angle1_deg: f64,
    pub angle2_deg: f64,
}

impl SweepConfig {
    pub fn from_path(path: &Path) -> SimResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Expand the sweep into the full list of trials, outermost loop first:
    /// N, then p (or n1 × n2), then both angles, then repetitions.
    pub fn expand(&self) -> Vec<TrialSpec> {
        let mut specs = Vec::new();
        for &n in &self.n_values {
            if self.p_values.len() > 1 {
                for &p in &self.p_values {
                    let n1 = (p * f64::from(n)) as u32;
                    self.push_combination(&mut specs, n, p, n1, 0);
                }
            } else {
                for &n1 in &self.n1_values {
                    for &n2 in &self.n2_values {
                        let p = f64::from(n1) / f64::from(n);
                        self.push_combination(&mut specs, n, p, n1, n2);
                    }
                }
            }
        }
        specs
    }

    fn push_combination(&self, specs: &mut Vec<TrialSpec>, n: u32, p: f64, n1: u32, n2: u32) {
        for &angle1_deg in &self.angle1_deg_values {
            for &angle2_deg in &self.angle2_deg_values {
                for run in 1..=self.num_runs {
                    specs.push(TrialSpec { run, n, p, n1, n2, angle1_deg, angle2_deg });
                }
            }
        }
    }
}
