//! Celebration candidates: what a source proposes for a given day.

use std::fmt;

use crate::color::LiturgicalColor;
use crate::rank::Rank;
use crate::title::Title;
use ordo_time::LiturgicalDate;

/// Where a candidate comes from.
///
/// Ordered by specificity: a proper calendar is more specific than a
/// country calendar, which is more specific than the general calendar.
/// The season itself is the least specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Source {
    /// Produced by the season (proper of time).
    Season,
    /// General (universal) calendar.
    General,
    /// National calendar.
    Country,
    /// Diocesan, religious-order or other local calendar.
    Proper,
}

impl Source {
    /// The layers of a merge, least specific first.
    pub const LAYERS: [Source; 3] = [Source::General, Source::Country, Source::Proper];
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Source::Season => "season",
            Source::General => "general",
            Source::Country => "country",
            Source::Proper => "proper",
        })
    }
}

/// Optional color and titles of a celebration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Metadata {
    /// Explicit liturgical color; derived from rank and season when absent.
    pub color: Option<LiturgicalColor>,
    /// Titles, e.g. martyr or doctor of the Church.
    pub titles: Vec<Title>,
}

impl Metadata {
    /// Metadata with an explicit color and no titles.
    pub fn colored(color: LiturgicalColor) -> Self {
        Self {
            color: Some(color),
            titles: Vec::new(),
        }
    }

    /// Metadata with the given titles.
    pub fn titled(titles: &[Title]) -> Self {
        Self {
            color: None,
            titles: titles.to_vec(),
        }
    }

    /// Set the color.
    pub fn with_color(mut self, color: LiturgicalColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Whether `title` is among the titles.
    pub fn has_title(&self, title: Title) -> bool {
        self.titles.contains(&title)
    }
}

/// A celebration proposed for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CelebrationCandidate {
    /// Stable identifier, unique within its source.
    pub key: String,
    /// Rank.
    pub rank: Rank,
    /// Originating source.
    pub source: Source,
    /// Day the candidate falls on.
    pub date: LiturgicalDate,
    /// Color and titles.
    pub metadata: Metadata,
    /// Original date when the candidate was moved by a transfer.
    pub transferred_from: Option<LiturgicalDate>,
    /// Declaration order within the merged sources.
    pub order: usize,
}

impl CelebrationCandidate {
    /// A candidate that has not been transferred.
    pub fn new(
        key: impl Into<String>,
        rank: Rank,
        source: Source,
        date: LiturgicalDate,
        metadata: Metadata,
    ) -> Self {
        Self {
            key: key.into(),
            rank,
            source,
            date,
            metadata,
            transferred_from: None,
            order: 0,
        }
    }

    /// Set the declaration order.
    pub fn with_order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    /// Move this candidate to `date`, remembering where it came from.
    pub fn transfer_to(&self, date: LiturgicalDate) -> Self {
        Self {
            date,
            transferred_from: Some(self.transferred_from.unwrap_or(self.date)),
            ..self.clone()
        }
    }

    /// Whether the candidate was produced by the season.
    pub fn is_seasonal(&self) -> bool {
        self.source == Source::Season
    }
}

impl fmt::Display for CelebrationCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({}, {})", self.date, self.key, self.rank, self.source)
    }
}
