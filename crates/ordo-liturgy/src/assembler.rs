//! Output assembly: resolved days with their season, color and cycles.

use std::fmt;

use ordo_core::errors::{Error, Result};
use ordo_time::{LiturgicalDate, MovableFeast};

use crate::candidate::CelebrationCandidate;
use crate::color::LiturgicalColor;
use crate::localize::Localize;
use crate::proper_of_time::SeasonDay;
use crate::rank::Rank;
use crate::resolver::DayResolution;
use crate::season::{Season, SeasonSkeleton};
use crate::title::Title;

/// Three-year cycle of Sunday readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SundayCycle {
    /// Year A (Matthew).
    A,
    /// Year B (Mark).
    B,
    /// Year C (Luke).
    C,
}

/// Two-year cycle of weekday readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeekdayCycle {
    /// Odd years.
    I,
    /// Even years.
    II,
}

impl SundayCycle {
    /// Cycle of the liturgical year ending in civil year `year`.
    pub fn of_year(year: i32) -> Self {
        match year.rem_euclid(3) {
            1 => SundayCycle::A,
            2 => SundayCycle::B,
            _ => SundayCycle::C,
        }
    }
}

impl WeekdayCycle {
    /// Cycle of the liturgical year ending in civil year `year`.
    pub fn of_year(year: i32) -> Self {
        if year.rem_euclid(2) == 1 {
            WeekdayCycle::I
        } else {
            WeekdayCycle::II
        }
    }
}

impl fmt::Display for SundayCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl fmt::Display for WeekdayCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// One day of the finished calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedDay {
    /// The day.
    pub date: LiturgicalDate,
    /// Observed celebration.
    pub winner: CelebrationCandidate,
    /// Season of the day.
    pub season: Season,
    /// Week of the season.
    pub week_of_season: u8,
    /// Color of the observed celebration.
    pub liturgical_color: LiturgicalColor,
    /// Titles of the observed celebration.
    pub titles: Vec<Title>,
    /// Commemorated celebrations.
    pub superseded: Vec<CelebrationCandidate>,
    /// Sunday cycle of the liturgical year the day belongs to.
    pub sunday_cycle: SundayCycle,
    /// Weekday cycle of the liturgical year the day belongs to.
    pub weekday_cycle: WeekdayCycle,
}

impl ResolvedDay {
    /// Key of the observed celebration.
    pub fn key(&self) -> &str {
        &self.winner.key
    }

    /// Rank of the observed celebration.
    pub fn rank(&self) -> Rank {
        self.winner.rank
    }

    /// Original date of a transferred celebration.
    pub fn transferred_from(&self) -> Option<LiturgicalDate> {
        self.winner.transferred_from
    }

    /// Display name of the observed celebration.
    pub fn name(&self, localizer: &dyn Localize, locale: &str) -> String {
        localizer.name(&self.winner.key, locale)
    }
}

impl fmt::Display for ResolvedDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}, {}, {}]",
            self.date, self.winner.key, self.winner.rank, self.season, self.liturgical_color
        )
    }
}

/// Color of `winner`: its own, else red for martyrs, else the season's
/// for seasonal celebrations and white otherwise.
pub fn color_of(winner: &CelebrationCandidate, season_day: &SeasonDay) -> LiturgicalColor {
    if let Some(color) = winner.metadata.color {
        color
    } else if winner.metadata.has_title(Title::Martyr) {
        LiturgicalColor::Red
    } else if winner.is_seasonal() {
        season_day.color
    } else {
        LiturgicalColor::White
    }
}

/// Civil year in which the liturgical year containing `date` ends.
pub fn liturgical_year_of(skeleton: &SeasonSkeleton, date: LiturgicalDate) -> Result<i32> {
    let year = date.year();
    let advent = skeleton
        .anchors_for(year)
        .ok_or_else(|| Error::MissingSource {
            key: date.to_string(),
            movable: format!("{} ({year})", MovableFeast::FirstSundayOfAdvent),
        })?
        .require(MovableFeast::FirstSundayOfAdvent, MovableFeast::FirstSundayOfAdvent.name())?;
    Ok(if date >= advent { year + 1 } else { year })
}

/// Build the resolved day from a season day and its resolution.
pub fn assemble_day(
    skeleton: &SeasonSkeleton,
    season_day: &SeasonDay,
    resolution: DayResolution,
) -> Result<ResolvedDay> {
    let liturgical_year = liturgical_year_of(skeleton, season_day.date)?;
    let DayResolution {
        winner, superseded, ..
    } = resolution;
    Ok(ResolvedDay {
        date: season_day.date,
        season: season_day.season,
        week_of_season: season_day.week,
        liturgical_color: color_of(&winner, season_day),
        titles: winner.metadata.titles.clone(),
        superseded,
        sunday_cycle: SundayCycle::of_year(liturgical_year),
        weekday_cycle: WeekdayCycle::of_year(liturgical_year),
        winner,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles() {
        assert_eq!(SundayCycle::of_year(2023), SundayCycle::A);
        assert_eq!(SundayCycle::of_year(2024), SundayCycle::B);
        assert_eq!(SundayCycle::of_year(2025), SundayCycle::C);
        assert_eq!(WeekdayCycle::of_year(2025), WeekdayCycle::I);
        assert_eq!(WeekdayCycle::of_year(2024), WeekdayCycle::II);
    }
}
