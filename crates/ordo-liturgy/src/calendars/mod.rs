//! Bundled calendar sources.

/// The General Roman Calendar.
pub mod general;

/// The national calendar of Lithuania.
pub mod lithuania;

pub use general::GeneralRoman;
pub use lithuania::Lithuania;
