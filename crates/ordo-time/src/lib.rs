//! # ordo-time
//!
//! Calendar days, the Gregorian computus, and the table of movable feasts.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Easter Sunday for a Gregorian year.
pub mod computus;

/// `LiturgicalDate` type.
pub mod date;

/// `Month`: month of the year.
pub mod month;

/// Movable feasts derived from Easter and from the Christmas cycle.
pub mod movable;

/// `DateRange`: a closed span of days.
pub mod range;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use computus::easter_sunday;
pub use date::{days_in_month, days_in_year, is_leap_year, LiturgicalDate};
pub use month::Month;
pub use movable::{MovableDates, MovableFeast};
pub use range::{DateRange, DateRangeIter};
pub use weekday::Weekday;
