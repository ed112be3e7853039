//! Error types for cm-heatmap.

use thiserror::Error;

/// Errors from conditional-histogram construction.
#[derive(Debug, Error)]
pub enum HeatmapError {
    #[error("no trials to bin")]
    Empty,

    #[error("conflict angles and headings differ in length: {conflict} vs {heading}")]
    LengthMismatch { conflict: usize, heading: usize },
}

/// Alias for `Result<T, HeatmapError>`.
pub type HeatmapResult<T> = Result<T, HeatmapError>;
