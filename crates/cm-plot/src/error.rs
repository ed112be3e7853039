//! Error types for cm-plot.

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Errors raised while rendering a figure.
#[derive(Debug, Error)]
pub enum PlotError {
    /// A backend draw call failed.  plotters' error type is generic over the
    /// backend, so the message is captured as text at the boundary.
    #[error("draw error: {0}")]
    Draw(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("nothing to plot")]
    Empty,
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for PlotError {
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        PlotError::Draw(e.to_string())
    }
}

/// Alias for `Result<T, PlotError>`.
pub type PlotResult<T> = Result<T, PlotError>;
