//! Filtering and grouping of a resolved calendar.
//!
//! A query never changes resolution: it selects days and arranges them.
//! Groups appear in the order of their first day, and the days inside a
//! group stay in date order.

use ordo_time::{Month, Weekday};

use crate::assembler::ResolvedDay;
use crate::color::LiturgicalColor;
use crate::rank::Rank;
use crate::season::Season;
use crate::title::Title;

/// How to group the days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum GroupBy {
    /// A flat list.
    #[default]
    None,
    /// By season.
    Season,
    /// By civil month.
    Month,
    /// By day of the week.
    Weekday,
    /// By rank of the observed celebration.
    Rank,
    /// By liturgical color.
    Color,
}

/// The value a group is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GroupKey {
    /// A season.
    Season(Season),
    /// A month.
    Month(Month),
    /// A day of the week.
    Weekday(Weekday),
    /// A rank.
    Rank(Rank),
    /// A color.
    Color(LiturgicalColor),
}

/// Result of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Grouped {
    /// Days in date order.
    List(Vec<ResolvedDay>),
    /// Groups in order of first appearance.
    Groups(Vec<(GroupKey, Vec<ResolvedDay>)>),
}

impl Grouped {
    /// Every day, in the order the groups hold them.
    pub fn days(&self) -> Vec<&ResolvedDay> {
        match self {
            Grouped::List(days) => days.iter().collect(),
            Grouped::Groups(groups) => groups.iter().flat_map(|(_, days)| days).collect(),
        }
    }

    /// The days of the group keyed `key`.
    pub fn group(&self, key: GroupKey) -> Option<&[ResolvedDay]> {
        match self {
            Grouped::List(_) => None,
            Grouped::Groups(groups) => groups
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, days)| days.as_slice()),
        }
    }
}

/// Filters and grouping applied to a computed calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Query {
    /// Keep only days of this month.
    pub month: Option<Month>,
    /// Keep only days falling on this weekday.
    pub weekday: Option<Weekday>,
    /// Keep only days whose observed celebration carries this title.
    pub title: Option<Title>,
    /// Grouping.
    pub group_by: GroupBy,
}

impl Query {
    /// A query that keeps everything, ungrouped.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to `month`.
    pub fn month(mut self, month: Month) -> Self {
        self.month = Some(month);
        self
    }

    /// Restrict to `weekday`.
    pub fn weekday(mut self, weekday: Weekday) -> Self {
        self.weekday = Some(weekday);
        self
    }

    /// Restrict to celebrations with `title`.
    pub fn title(mut self, title: Title) -> Self {
        self.title = Some(title);
        self
    }

    /// Group by `group_by`.
    pub fn group_by(mut self, group_by: GroupBy) -> Self {
        self.group_by = group_by;
        self
    }

    /// Whether `day` passes the filters.
    pub fn matches(&self, day: &ResolvedDay) -> bool {
        self.month.map_or(true, |m| day.date.month_enum() == m)
            && self.weekday.map_or(true, |w| day.date.weekday() == w)
            && self.title.map_or(true, |t| day.titles.contains(&t))
    }

    /// Filter and group `days`.
    pub fn apply(&self, days: &[ResolvedDay]) -> Grouped {
        let selected = days.iter().filter(|day| self.matches(day)).cloned();
        let key_of: fn(&ResolvedDay) -> GroupKey = match self.group_by {
            GroupBy::None => return Grouped::List(selected.collect()),
            GroupBy::Season => |d| GroupKey::Season(d.season),
            GroupBy::Month => |d| GroupKey::Month(d.date.month_enum()),
            GroupBy::Weekday => |d| GroupKey::Weekday(d.date.weekday()),
            GroupBy::Rank => |d| GroupKey::Rank(d.winner.rank),
            GroupBy::Color => |d| GroupKey::Color(d.liturgical_color),
        };
        let mut groups: Vec<(GroupKey, Vec<ResolvedDay>)> = Vec::new();
        for day in selected {
            let key = key_of(&day);
            match groups.iter_mut().find(|(k, _)| *k == key) {
                Some((_, members)) => members.push(day),
                None => groups.push((key, vec![day])),
            }
        }
        Grouped::Groups(groups)
    }
}
