//! Error types for ordo.
//!
//! Every fallible operation in the workspace reports one `thiserror`-derived
//! enum.  The engine is deterministic, so none of these errors is retried
//! internally and no partial calendar is ever returned alongside one.
//! The `ensure!` and `fail!` macros defined here are the shorthand used at
//! precondition checks.

use thiserror::Error;

/// The top-level error type used throughout ordo.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested year lies outside the supported Gregorian range.
    #[error("invalid year {year}: supported range is [{min}, {max}]")]
    InvalidYear {
        /// The rejected year.
        year: i32,
        /// Smallest supported year.
        min: i32,
        /// Largest supported year.
        max: i32,
    },

    /// A (year, month, day) triple that does not name a calendar day.
    #[error("invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Year component.
        year: i32,
        /// Month component.
        month: u8,
        /// Day component.
        day: u8,
    },

    /// Mutually inconsistent or unrecognised configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A transferred solemnity found no free day within the search window.
    #[error("unresolved transfer of '{key}' from {from}: no free day within {window} days")]
    UnresolvedTransfer {
        /// Key of the celebration that could not be placed.
        key: String,
        /// Date the celebration was displaced from (`YYYY-MM-DD`).
        from: String,
        /// Number of days probed.
        window: u32,
    },

    /// A calendar record refers to a movable date that was not computed.
    #[error("missing source: '{key}' refers to movable date '{movable}' which has no computed date")]
    MissingSource {
        /// Key of the record that could not be placed.
        key: String,
        /// The movable-date reference that has no value.
        movable: String,
    },

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

/// Shorthand `Result` type used throughout ordo.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ordo_core::{ensure, errors::Error};
/// fn positive(x: i32) -> ordo_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::InvalidConfiguration(...))` immediately.
///
/// # Example
/// ```
/// use ordo_core::{fail, errors::Error};
/// fn always_err() -> ordo_core::errors::Result<()> {
///     fail!("unknown mode '{}'", "x");
/// }
/// assert!(matches!(always_err(), Err(Error::InvalidConfiguration(_))));
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::InvalidConfiguration(format!($($msg)*)))
    };
}
