//! CSV export of aggregate tables.
//!
//! One file per aggregate, header row first, values in full `f64` display
//! precision.  NaN elongations are written as empty fields so spreadsheet
//! tools treat them as missing rather than as text.

use std::path::Path;

use csv::Writer;

use crate::aggregate::{AccuracyPoint, AccuracySummary, ElongationPoint};
use crate::StatsResult;

pub fn write_accuracy_csv(path: &Path, points: &[AccuracyPoint]) -> StatsResult<()> {
    let mut w = Writer::from_path(path)?;
    w.write_record(["N", "actual_p", "accuracy"])?;
    for p in points {
        w.write_record(&[
            p.group_size.to_string(),
            p.informed_fraction.to_string(),
            p.accuracy.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_elongation_csv(path: &Path, points: &[ElongationPoint]) -> StatsResult<()> {
    let mut w = Writer::from_path(path)?;
    w.write_record(["N", "actual_p", "elongation"])?;
    for p in points {
        w.write_record(&[
            p.group_size.to_string(),
            p.informed_fraction.to_string(),
            finite_or_empty(p.elongation),
        ])?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_summary_csv(path: &Path, summaries: &[AccuracySummary]) -> StatsResult<()> {
    let mut w = Writer::from_path(path)?;
    w.write_record(["N", "p", "mean_accuracy", "std_accuracy", "count"])?;
    for s in summaries {
        w.write_record(&[
            s.group_size.to_string(),
            s.informed_fraction.to_string(),
            s.mean.to_string(),
            finite_or_empty(s.std),
            s.count.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

fn finite_or_empty(v: f64) -> String {
    if v.is_finite() { v.to_string() } else { String::new() }
}
