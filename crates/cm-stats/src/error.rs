//! Error types for cm-stats.

use thiserror::Error;

use cm_core::CmError;
use cm_table::TableError;

/// Errors from statistic computation or aggregate export.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error(transparent)]
    Core(#[from] CmError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("empty group — nothing to aggregate")]
    EmptyGroup,

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, StatsError>`.
pub type StatsResult<T> = Result<T, StatsError>;
