//! `cm-core` — foundational types for the collective-motion analysis crates.
//!
//! This crate is a dependency of every other `cm-*` crate.  It intentionally
//! has no `cm-*` dependencies and minimal external ones (only `thiserror`).
//!
//! # What lives here
//!
//! | Module    | Contents                                              |
//! |-----------|-------------------------------------------------------|
//! | [`vec2`]  | `Vec2`, dot/cross products, heading recovery          |
//! | [`angle`] | degree helpers, acos clipping, display wraparound     |
//! | [`error`] | `CmError`, `CmResult`                                 |

pub mod angle;
pub mod error;
pub mod vec2;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use angle::{clip_unit, wrap_display_deg};
pub use error::{CmError, CmResult};
pub use vec2::Vec2;
