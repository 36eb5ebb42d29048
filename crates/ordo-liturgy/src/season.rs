//! Liturgical seasons and their boundaries.
//!
//! The free functions compute the ranges of a single season for a year
//! (with the general-calendar defaults for the switches they do not take).
//! [`SeasonSkeleton`] partitions a whole civil or liturgical year.

use std::fmt;

use ordo_core::errors::Result;
use ordo_core::{CalendarType, ChristmastideEnds, Config};
use ordo_time::movable::{baptism_of_the_lord, epiphany, first_sunday_of_advent};
use ordo_time::{DateRange, LiturgicalDate, MovableDates, MovableFeast};

/// Which of the two stretches of Ordinary Time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum OrdinaryTimePart {
    /// From the end of Christmastide to Ash Wednesday.
    Early,
    /// From Pentecost to Advent.
    Late,
}

/// A liturgical season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Season {
    /// Advent.
    Advent,
    /// Christmastide.
    Christmastide,
    /// Ordinary Time.
    OrdinaryTime(OrdinaryTimePart),
    /// Lent, up to the Wednesday of Holy Week.
    Lent,
    /// Holy Thursday, Good Friday and Holy Saturday.
    Triduum,
    /// Easter Sunday through Pentecost.
    Eastertide,
}

impl Season {
    /// Stable identifier, e.g. `"laterOrdinaryTime"`.
    pub fn key(&self) -> &'static str {
        match self {
            Season::Advent => "advent",
            Season::Christmastide => "christmastide",
            Season::OrdinaryTime(OrdinaryTimePart::Early) => "earlyOrdinaryTime",
            Season::OrdinaryTime(OrdinaryTimePart::Late) => "laterOrdinaryTime",
            Season::Lent => "lent",
            Season::Triduum => "paschalTriduum",
            Season::Eastertide => "eastertide",
        }
    }

    /// Whether this is either stretch of Ordinary Time.
    pub fn is_ordinary_time(&self) -> bool {
        matches!(self, Season::OrdinaryTime(_))
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ── Per-season ranges ─────────────────────────────────────────────────────────

fn anchors(year: i32) -> Result<MovableDates> {
    MovableDates::compute(year, false, false, false)
}

fn anchor(dates: &MovableDates, feast: MovableFeast) -> Result<LiturgicalDate> {
    dates.require(feast, feast.name())
}

/// The four Sundays of Advent of `year`.
pub fn sundays_of_advent(year: i32) -> Result<Vec<LiturgicalDate>> {
    let first = first_sunday_of_advent(year)?;
    Ok((0..4).map(|week| first + 7 * week).collect())
}

/// First Sunday of Advent through December 24.
pub fn days_of_advent(year: i32) -> Result<DateRange> {
    Ok(DateRange::new(
        first_sunday_of_advent(year)?,
        LiturgicalDate::from_ymd(year, 12, 24)?,
    ))
}

/// Christmas through January 1 of the following year.
pub fn octave_of_christmas(year: i32) -> Result<DateRange> {
    let christmas = LiturgicalDate::from_ymd(year, 12, 25)?;
    Ok(DateRange::new(christmas, christmas.add_days(7)?))
}

/// Last day of the Christmastide that ends in January or February of
/// `year`.
///
/// When the season of Epiphany is excluded the season ends on Epiphany
/// whatever `ends` says.
pub fn christmastide_end(
    year: i32,
    ends: ChristmastideEnds,
    epiphany_on_jan6: bool,
    includes_epiphany: bool,
) -> Result<LiturgicalDate> {
    let epiphany = epiphany(year, epiphany_on_jan6)?;
    if !includes_epiphany {
        return Ok(epiphany);
    }
    match ends {
        ChristmastideEnds::Traditional => Ok(epiphany),
        ChristmastideEnds::OrdinaryBaptism => Ok(baptism_of_the_lord(epiphany)),
        ChristmastideEnds::ExtraordinaryPresentation => LiturgicalDate::from_ymd(year, 2, 2),
    }
}

/// Christmastide beginning on December 25 of `year`.
pub fn christmastide(
    year: i32,
    ends: ChristmastideEnds,
    epiphany_on_jan6: bool,
) -> Result<DateRange> {
    Ok(DateRange::new(
        LiturgicalDate::from_ymd(year, 12, 25)?,
        christmastide_end(year + 1, ends, epiphany_on_jan6, true)?,
    ))
}

/// Ordinary Time between Christmastide and Ash Wednesday.
pub fn days_of_early_ordinary_time(
    year: i32,
    ends: ChristmastideEnds,
    epiphany_on_jan6: bool,
) -> Result<DateRange> {
    let dates = anchors(year)?;
    Ok(DateRange::new(
        christmastide_end(year, ends, epiphany_on_jan6, true)? + 1,
        anchor(&dates, MovableFeast::AshWednesday)? - 1,
    ))
}

/// The six Sundays of Lent; the last is Palm Sunday.
pub fn sundays_of_lent(year: i32) -> Result<Vec<LiturgicalDate>> {
    let ash = anchor(&anchors(year)?, MovableFeast::AshWednesday)?;
    Ok((0..6).map(|week| ash + 4 + 7 * week).collect())
}

/// Ash Wednesday through Holy Saturday.
pub fn days_of_lent(year: i32) -> Result<DateRange> {
    let dates = anchors(year)?;
    Ok(DateRange::new(
        anchor(&dates, MovableFeast::AshWednesday)?,
        anchor(&dates, MovableFeast::HolySaturday)?,
    ))
}

/// Palm Sunday through Holy Saturday.
pub fn days_of_holy_week(year: i32) -> Result<DateRange> {
    let dates = anchors(year)?;
    Ok(DateRange::new(
        anchor(&dates, MovableFeast::PalmSunday)?,
        anchor(&dates, MovableFeast::HolySaturday)?,
    ))
}

/// Holy Thursday, Good Friday and Holy Saturday.
pub fn triduum(year: i32) -> Result<DateRange> {
    let dates = anchors(year)?;
    Ok(DateRange::new(
        anchor(&dates, MovableFeast::HolyThursday)?,
        anchor(&dates, MovableFeast::HolySaturday)?,
    ))
}

/// Easter Sunday through Divine Mercy Sunday.
pub fn octave_of_easter(year: i32) -> Result<DateRange> {
    let dates = anchors(year)?;
    Ok(DateRange::new(
        anchor(&dates, MovableFeast::Easter)?,
        anchor(&dates, MovableFeast::DivineMercySunday)?,
    ))
}

/// Easter Sunday through Pentecost.
pub fn days_of_easter(year: i32) -> Result<DateRange> {
    let dates = anchors(year)?;
    Ok(DateRange::new(
        anchor(&dates, MovableFeast::Easter)?,
        anchor(&dates, MovableFeast::Pentecost)?,
    ))
}

/// The Sundays of Eastertide: Easter Sunday, the 2nd to 7th Sundays of
/// Easter, and Pentecost, eight dates in all.
pub fn sundays_of_easter(year: i32) -> Result<Vec<LiturgicalDate>> {
    Ok(days_of_easter(year)?.sundays().collect())
}

/// Ordinary Time between Pentecost and Advent.
pub fn days_of_later_ordinary_time(year: i32) -> Result<DateRange> {
    let dates = anchors(year)?;
    Ok(DateRange::new(
        anchor(&dates, MovableFeast::Pentecost)? + 1,
        anchor(&dates, MovableFeast::FirstSundayOfAdvent)? - 1,
    ))
}

// ── Skeleton ──────────────────────────────────────────────────────────────────

/// One contiguous stretch of a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeasonSpan {
    /// The season.
    pub season: Season,
    /// Its days inside the computed range.
    pub range: DateRange,
}

/// The seasons of a civil or liturgical year, in order, with the movable
/// dates of every civil year they touch.
#[derive(Debug, Clone)]
pub struct SeasonSkeleton {
    range: DateRange,
    spans: Vec<SeasonSpan>,
    anchors: Vec<MovableDates>,
}

impl SeasonSkeleton {
    /// Partition the year described by `config` into seasons.
    ///
    /// A civil year runs from January 1 to December 31.  A liturgical year
    /// `Y` runs from the first Sunday of Advent of `Y - 1` to the day before
    /// the first Sunday of Advent of `Y`.
    #[tracing::instrument(level = "debug", skip_all, fields(year = config.year, kind = ?config.calendar_type))]
    pub fn build(config: &Config) -> Result<Self> {
        config.validate()?;
        let year = config.year;
        let current = MovableDates::for_config(config)?;
        let end_of_christmastide = christmastide_end(
            year,
            config.christmastide_ends,
            config.epiphany_on_jan6,
            config.christmastide_includes_the_season_of_epiphany,
        )?;

        let mut spans = Vec::with_capacity(10);
        let mut anchors = Vec::with_capacity(2);
        let push = |spans: &mut Vec<SeasonSpan>, season, start, end| {
            spans.push(SeasonSpan {
                season,
                range: DateRange::new(start, end),
            });
        };

        let start = match config.calendar_type {
            CalendarType::Civil => {
                let jan1 = LiturgicalDate::from_ymd(year, 1, 1)?;
                push(&mut spans, Season::Christmastide, jan1, end_of_christmastide);
                jan1
            }
            CalendarType::Liturgical => {
                let previous = MovableDates::for_config(&Config {
                    year: year - 1,
                    ..config.clone()
                })?;
                let advent = anchor(&previous, MovableFeast::FirstSundayOfAdvent)?;
                let christmas = LiturgicalDate::from_ymd(year - 1, 12, 25)?;
                push(&mut spans, Season::Advent, advent, christmas - 1);
                push(&mut spans, Season::Christmastide, christmas, end_of_christmastide);
                anchors.push(previous);
                advent
            }
        };

        let ash = anchor(&current, MovableFeast::AshWednesday)?;
        let holy_thursday = anchor(&current, MovableFeast::HolyThursday)?;
        let easter = anchor(&current, MovableFeast::Easter)?;
        let pentecost = anchor(&current, MovableFeast::Pentecost)?;
        let advent = anchor(&current, MovableFeast::FirstSundayOfAdvent)?;

        push(
            &mut spans,
            Season::OrdinaryTime(OrdinaryTimePart::Early),
            end_of_christmastide + 1,
            ash - 1,
        );
        push(&mut spans, Season::Lent, ash, holy_thursday - 1);
        push(&mut spans, Season::Triduum, holy_thursday, easter - 1);
        push(&mut spans, Season::Eastertide, easter, pentecost);
        push(
            &mut spans,
            Season::OrdinaryTime(OrdinaryTimePart::Late),
            pentecost + 1,
            advent - 1,
        );

        let end = match config.calendar_type {
            CalendarType::Civil => {
                let christmas = LiturgicalDate::from_ymd(year, 12, 25)?;
                push(&mut spans, Season::Advent, advent, christmas - 1);
                let dec31 = LiturgicalDate::from_ymd(year, 12, 31)?;
                push(&mut spans, Season::Christmastide, christmas, dec31);
                dec31
            }
            CalendarType::Liturgical => advent - 1,
        };
        anchors.push(current);

        let skeleton = Self {
            range: DateRange::new(start, end),
            spans,
            anchors,
        };
        debug_assert!(skeleton.is_partition());
        tracing::debug!(start = %start, end = %end, spans = skeleton.spans.len(), "season skeleton built");
        Ok(skeleton)
    }

    /// Every day covered.
    pub fn range(&self) -> DateRange {
        self.range
    }

    /// The season spans, in chronological order.
    pub fn spans(&self) -> &[SeasonSpan] {
        &self.spans
    }

    /// The span containing `date`.
    pub fn span_of(&self, date: LiturgicalDate) -> Option<&SeasonSpan> {
        self.spans.iter().find(|span| span.range.contains(date))
    }

    /// The season of `date`.
    pub fn season_of(&self, date: LiturgicalDate) -> Option<Season> {
        self.span_of(date).map(|span| span.season)
    }

    /// Movable dates of every civil year the range touches.
    pub fn movable_dates(&self) -> &[MovableDates] {
        &self.anchors
    }

    /// Movable dates of civil year `year`, if it is covered.
    pub fn anchors_for(&self, year: i32) -> Option<&MovableDates> {
        self.anchors.iter().find(|dates| dates.year() == year)
    }

    /// Whether the spans are non-empty, contiguous, and cover the range.
    pub fn is_partition(&self) -> bool {
        let mut expected = self.range.start;
        for span in &self.spans {
            if span.range.is_empty() || span.range.start != expected {
                return false;
            }
            expected = span.range.end + 1;
        }
        expected - 1 == self.range.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordo_core::ConfigBuilder;

    fn date(y: i32, m: u8, d: u8) -> LiturgicalDate {
        LiturgicalDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn civil_2024_boundaries() {
        let config = ConfigBuilder::new(2024).build().unwrap();
        let skeleton = SeasonSkeleton::build(&config).unwrap();
        assert_eq!(skeleton.range(), DateRange::new(date(2024, 1, 1), date(2024, 12, 31)));
        assert!(skeleton.is_partition());
        assert_eq!(skeleton.season_of(date(2024, 1, 8)), Some(Season::Christmastide));
        assert_eq!(
            skeleton.season_of(date(2024, 1, 9)),
            Some(Season::OrdinaryTime(OrdinaryTimePart::Early))
        );
        assert_eq!(skeleton.season_of(date(2024, 2, 14)), Some(Season::Lent));
        assert_eq!(skeleton.season_of(date(2024, 3, 28)), Some(Season::Triduum));
        assert_eq!(skeleton.season_of(date(2024, 3, 31)), Some(Season::Eastertide));
        assert_eq!(skeleton.season_of(date(2024, 5, 19)), Some(Season::Eastertide));
        assert_eq!(
            skeleton.season_of(date(2024, 5, 20)),
            Some(Season::OrdinaryTime(OrdinaryTimePart::Late))
        );
        assert_eq!(skeleton.season_of(date(2024, 12, 1)), Some(Season::Advent));
        assert_eq!(skeleton.season_of(date(2024, 12, 25)), Some(Season::Christmastide));
    }

    #[test]
    fn liturgical_year_starts_with_advent() {
        let config = ConfigBuilder::new(2024)
            .calendar_type(CalendarType::Liturgical)
            .build()
            .unwrap();
        let skeleton = SeasonSkeleton::build(&config).unwrap();
        assert_eq!(skeleton.range(), DateRange::new(date(2023, 12, 3), date(2024, 11, 30)));
        assert!(skeleton.is_partition());
        assert_eq!(skeleton.spans()[0].season, Season::Advent);
        assert_eq!(skeleton.movable_dates().len(), 2);
        assert!(skeleton.anchors_for(2023).is_some());
    }

    #[test]
    fn excluding_epiphany_season_ends_christmastide_on_epiphany() {
        let end = christmastide_end(2024, ChristmastideEnds::OrdinaryBaptism, false, false).unwrap();
        assert_eq!(end, date(2024, 1, 7));
        let end = christmastide_end(2024, ChristmastideEnds::OrdinaryBaptism, false, true).unwrap();
        assert_eq!(end, date(2024, 1, 8));
    }

    #[test]
    fn advent_length_depends_on_christmas_weekday() {
        assert_eq!(days_of_advent(2005).unwrap().len(), 28);
        assert_eq!(days_of_advent(2000).unwrap().len(), 22);
        assert_eq!(days_of_advent(2003).unwrap().len(), 25);
    }
}
