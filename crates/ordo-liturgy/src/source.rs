//! `CalendarSource` trait and the record types calendars are written in.
//!
//! A source is a plain table of records: a key, a rank, a date rule and
//! optional metadata.  Country and proper sources may also carry
//! [`RecordPatch`]es that change part of an inherited record.

use std::fmt;

use ordo_core::errors::{Error, Result};
use ordo_core::{Config, ConfigOverrides};
use ordo_time::{is_leap_year, LiturgicalDate, Month, MovableDates, MovableFeast};

use crate::candidate::Metadata;
use crate::color::LiturgicalColor;
use crate::rank::Rank;
use crate::title::Title;

/// How a record finds its date in a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum DateRule {
    /// The same month and day every year.
    Fixed {
        /// Month (1–12).
        month: u8,
        /// Day of month.
        day: u8,
    },
    /// A movable date.
    Movable(MovableFeast),
    /// A signed number of days from a movable date.
    MovableOffset(MovableFeast, i32),
}

impl DateRule {
    /// A fixed month and day.
    pub fn fixed(month: Month, day: u8) -> Self {
        DateRule::Fixed {
            month: month.number(),
            day,
        }
    }

    /// The date of the rule in `year`, or `None` when a fixed February 29
    /// does not exist that year.
    ///
    /// # Errors
    /// * [`Error::MissingSource`] when the movable dates of `year` are not
    ///   available or do not include the referenced feast.
    /// * [`Error::InvalidDate`] for a fixed date no year has.
    pub fn date_in(
        &self,
        year: i32,
        movables: Option<&MovableDates>,
        key: &str,
    ) -> Result<Option<LiturgicalDate>> {
        let movable = |feast: MovableFeast| -> Result<LiturgicalDate> {
            movables
                .filter(|dates| dates.year() == year)
                .ok_or_else(|| Error::MissingSource {
                    key: key.to_owned(),
                    movable: format!("{feast} ({year})"),
                })?
                .require(feast, key)
        };
        match *self {
            DateRule::Fixed { month: 2, day: 29 } if !is_leap_year(year) => Ok(None),
            DateRule::Fixed { month, day } => LiturgicalDate::from_ymd(year, month, day).map(Some),
            DateRule::Movable(feast) => movable(feast).map(Some),
            DateRule::MovableOffset(feast, offset) => Ok(Some(movable(feast)?.add_days(offset)?)),
        }
    }
}

impl fmt::Display for DateRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateRule::Fixed { month, day } => write!(f, "--{month:02}-{day:02}"),
            DateRule::Movable(feast) => write!(f, "{feast}"),
            DateRule::MovableOffset(feast, offset) => write!(f, "{feast}{offset:+}"),
        }
    }
}

/// One celebration of a calendar source.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarRecord {
    /// Stable key.
    pub key: String,
    /// Rank.
    pub rank: Rank,
    /// Date rule.
    pub date: DateRule,
    /// Color and titles.
    #[cfg_attr(feature = "serde", serde(default))]
    pub metadata: Metadata,
}

impl CalendarRecord {
    /// A record with the given rule and no metadata.
    pub fn new(key: impl Into<String>, rank: Rank, date: DateRule) -> Self {
        Self {
            key: key.into(),
            rank,
            date,
            metadata: Metadata::default(),
        }
    }

    /// A record on a fixed month and day.
    pub fn fixed(key: impl Into<String>, rank: Rank, month: Month, day: u8) -> Self {
        Self::new(key, rank, DateRule::fixed(month, day))
    }

    /// A record on a movable date.
    pub fn movable(key: impl Into<String>, rank: Rank, feast: MovableFeast) -> Self {
        Self::new(key, rank, DateRule::Movable(feast))
    }

    /// Set the color.
    pub fn color(mut self, color: LiturgicalColor) -> Self {
        self.metadata.color = Some(color);
        self
    }

    /// Add titles.
    pub fn titles(mut self, titles: &[Title]) -> Self {
        self.metadata.titles.extend_from_slice(titles);
        self
    }
}

/// A partial override of an inherited record; `None` keeps the inherited
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RecordPatch {
    /// Key of the record to change.
    pub key: String,
    /// New rank.
    pub rank: Option<Rank>,
    /// New date rule.
    pub date: Option<DateRule>,
    /// New metadata.
    pub metadata: Option<Metadata>,
}

impl RecordPatch {
    /// An empty patch of `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Change the rank.
    pub fn rank(mut self, rank: Rank) -> Self {
        self.rank = Some(rank);
        self
    }

    /// Change the date rule.
    pub fn date(mut self, date: DateRule) -> Self {
        self.date = Some(date);
        self
    }

    /// Replace the metadata.
    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Apply the patch to `record`.
    pub fn apply_to(&self, record: &mut CalendarRecord) {
        if let Some(rank) = self.rank {
            record.rank = rank;
        }
        if let Some(date) = self.date {
            record.date = date;
        }
        if let Some(metadata) = &self.metadata {
            record.metadata = metadata.clone();
        }
    }

    /// A full record, if the patch carries both rank and date.
    pub fn to_record(&self) -> Option<CalendarRecord> {
        Some(CalendarRecord {
            key: self.key.clone(),
            rank: self.rank?,
            date: self.date?,
            metadata: self.metadata.clone().unwrap_or_default(),
        })
    }
}

/// A table of celebrations.
pub trait CalendarSource: fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Lithuania"`).
    fn name(&self) -> &str;

    /// Every record the source observes under `config`.
    fn records(&self, config: &Config) -> Vec<CalendarRecord>;

    /// Partial overrides of inherited records.
    fn patches(&self, _config: &Config) -> Vec<RecordPatch> {
        Vec::new()
    }

    /// Configuration defaults that apply with this source.
    fn default_config(&self) -> Option<ConfigOverrides> {
        None
    }
}

/// A calendar built at runtime from explicit records.
#[derive(Debug, Clone, Default)]
pub struct StaticCalendar {
    name: String,
    records: Vec<CalendarRecord>,
    patches: Vec<RecordPatch>,
    defaults: Option<ConfigOverrides>,
}

impl StaticCalendar {
    /// An empty calendar called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a record.
    pub fn with_record(mut self, record: CalendarRecord) -> Self {
        self.records.push(record);
        self
    }

    /// Add several records.
    pub fn with_records(mut self, records: impl IntoIterator<Item = CalendarRecord>) -> Self {
        self.records.extend(records);
        self
    }

    /// Add a patch.
    pub fn with_patch(mut self, patch: RecordPatch) -> Self {
        self.patches.push(patch);
        self
    }

    /// Set the configuration defaults.
    pub fn with_default_config(mut self, defaults: ConfigOverrides) -> Self {
        self.defaults = Some(defaults);
        self
    }
}

impl CalendarSource for StaticCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn records(&self, _config: &Config) -> Vec<CalendarRecord> {
        self.records.clone()
    }

    fn patches(&self, _config: &Config) -> Vec<RecordPatch> {
        self.patches.clone()
    }

    fn default_config(&self) -> Option<ConfigOverrides> {
        self.defaults.clone()
    }
}
