//! # ordo-liturgy
//!
//! Liturgical seasons, calendar sources, precedence resolution and the
//! bundled General Roman and Lithuanian calendars.
//!
//! A year is computed in four steps: the season skeleton and the proper of
//! time give every day its seasonal celebration; the calendar sources are
//! merged by key and placed on their dates; the resolver picks one observed
//! celebration per day, moving displaced solemnities forward; the assembler
//! attaches season, week, color and reading cycles.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `ResolvedDay` and the reading cycles.
pub mod assembler;

/// Bundled calendar sources.
pub mod calendars;

/// `CelebrationCandidate`: a celebration placed on a day.
pub mod candidate;

/// `LiturgicalColor`: vestment colors.
pub mod color;

/// `LiturgicalCalendar`: end-to-end computation of a year.
pub mod engine;

/// Display names for celebration keys.
pub mod localize;

/// Layered merge of calendar sources.
pub mod merge;

/// The table of liturgical days.
pub mod precedence;

/// Seasonal celebration of every day.
pub mod proper_of_time;

/// Filtering and grouping of a computed calendar.
pub mod query;

/// `Rank`: the rank of a celebration.
pub mod rank;

/// Per-day precedence resolution and transfers.
pub mod resolver;

/// Seasons and the season skeleton of a year.
pub mod season;

/// `CalendarSource` and its record types.
pub mod source;

/// `Title`: titles attached to celebrations.
pub mod title;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use assembler::{ResolvedDay, SundayCycle, WeekdayCycle};
pub use candidate::{CelebrationCandidate, Metadata, Source};
pub use color::LiturgicalColor;
pub use engine::LiturgicalCalendar;
pub use localize::{Catalog, KeyFallback, Localize};
pub use precedence::{Precedence, PrecedenceTable};
pub use proper_of_time::SeasonDay;
pub use query::{GroupBy, GroupKey, Grouped, Query};
pub use rank::Rank;
pub use resolver::MAX_TRANSFER_PROBES;
pub use season::{OrdinaryTimePart, Season, SeasonSkeleton};
pub use source::{CalendarRecord, CalendarSource, DateRule, RecordPatch, StaticCalendar};
pub use title::Title;
