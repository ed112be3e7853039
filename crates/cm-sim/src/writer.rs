//! Append-mode run-record CSV output.

use std::fs::{File, OpenOptions};
use std::path::Path;

use csv::{Writer, WriterBuilder};

use crate::SimResult;
use crate::config::TrialSpec;
use crate::trial::TrialOutcome;

/// Column order of the run-record files the analysis side reads.
pub const RUN_RECORD_HEADER: [&str; 11] = [
    "run", "N", "p", "n1", "n2", "angle1_deg", "angle2_deg", "dirX", "dirY", "bbox_X", "bbox_Y",
];

/// Writes run records to a CSV file in append mode, so interrupted sweeps
/// can resume into the same file.  The header is written only when the file
/// starts out empty.
pub struct RunRecordWriter {
    inner: Writer<File>,
}

impl RunRecordWriter {
    pub fn append(path: &Path) -> SimResult<Self> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let fresh = file.metadata()?.len() == 0;

        let mut inner = WriterBuilder::new().has_headers(false).from_writer(file);
        if fresh {
            inner.write_record(RUN_RECORD_HEADER)?;
        }
        Ok(Self { inner })
    }

    pub fn write(&mut self, spec: &TrialSpec, outcome: &TrialOutcome) -> SimResult<()> {
        self.inner.write_record(&[
            spec.run.to_string(),
            spec.n.to_string(),
            spec.p.to_string(),
            spec.n1.to_string(),
            spec.n2.to_string(),
            spec.angle1_deg.to_string(),
            spec.angle2_deg.to_string(),
            outcome.direction.x.to_string(),
            outcome.direction.y.to_string(),
            outcome.bbox_x.to_string(),
            outcome.bbox_y.to_string(),
        ])?;
        Ok(())
    }

    pub fn finish(mut self) -> SimResult<()> {
        self.inner.flush()?;
        Ok(())
    }
}
