//! Error types for cm-table.

use thiserror::Error;

/// Errors that can occur while loading or querying a table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("no column named {0:?}")]
    MissingColumn(String),

    #[error("column {0:?} is not numeric")]
    NotNumeric(String),

    #[error("column {column:?} has {got} rows, table has {expected}")]
    LengthMismatch {
        column:   String,
        got:      usize,
        expected: usize,
    },

    #[error("table is empty")]
    Empty,
}

/// Alias for `Result<T, TableError>`.
pub type TableResult<T> = Result<T, TableError>;
