//! # ordo
//!
//! A Western (Roman Rite) liturgical calendar engine.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `ordo-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! ordo = "0.1"
//! ```
//!
//! ```rust
//! use ordo::core::Config;
//! use ordo::liturgy::calendars::Lithuania;
//! use ordo::liturgy::{LiturgicalCalendar, Rank};
//! use ordo::time::LiturgicalDate;
//!
//! let calendar = LiturgicalCalendar::new().with_country(Lithuania);
//! let days = calendar.compute(&Config::defaults(2024)).unwrap();
//!
//! let easter = ordo::time::easter_sunday(2024).unwrap();
//! assert_eq!(easter, LiturgicalDate::from_ymd(2024, 3, 31).unwrap());
//!
//! let day = days.iter().find(|d| d.date == easter).unwrap();
//! assert_eq!(day.key(), "easter");
//! assert_eq!(day.rank(), Rank::Solemnity);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and the configuration model.
pub use ordo_core as core;

/// Calendar days, computus, and movable feasts.
pub use ordo_time as time;

/// Seasons, calendar sources, precedence resolution, bundled calendars.
pub use ordo_liturgy as liturgy;

/// The items most programs need.
pub mod prelude {
    pub use ordo_core::{CalendarType, ChristmastideEnds, Config, ConfigBuilder, ConfigOverrides, Error, Result};
    pub use ordo_liturgy::{
        CalendarSource, GroupBy, Grouped, LiturgicalCalendar, LiturgicalColor, Localize, Query, Rank, ResolvedDay,
        Season,
    };
    pub use ordo_time::{LiturgicalDate, Month, MovableFeast, Weekday};
}
