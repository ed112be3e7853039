//! `cm-table` — tabular experiment output, loaded from CSV.
//!
//! The simulation runner appends to its CSV files across restarts, so a file
//! may contain the header row repeated in the middle of the data.  The
//! cleaning pipeline here is:
//!
//! 1. [`Table::from_path`] — read every record as text, one column per header.
//! 2. [`Table::drop_echoed_headers`] — remove rows that are literal header
//!    echoes (the `run` field equals the string `"run"`).
//! 3. [`Table::coerce_numeric`] — convert each column to `f64` if and only if
//!    every value in it parses; otherwise the column stays textual.
//!
//! Malformed files fail loudly — there are no partial loads.

pub mod error;
pub mod group;
pub mod table;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{TableError, TableResult};
pub use group::{Group, group_by};
pub use table::{Column, Table};
