//! Base error type.
//!
//! Sub-crates define their own error enums and either convert into `CmError`
//! via `From` impls or wrap it as one variant.  Both patterns are acceptable;
//! prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `cm-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CmError {
    #[error("zero-length direction vector")]
    ZeroLengthDirection,
}

/// Shorthand result type for all `cm-*` crates.
pub type CmResult<T> = Result<T, CmError>;
