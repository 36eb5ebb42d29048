//! # ordo-core
//!
//! Error definitions and the configuration model shared by every crate in
//! the ordo workspace.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Calendar configuration and its layered resolution.
pub mod config;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use config::{CalendarType, ChristmastideEnds, Config, ConfigBuilder, ConfigOverrides};
pub use config::{MAX_YEAR, MIN_YEAR};
pub use errors::{Error, Result};
