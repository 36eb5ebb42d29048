//! The proper of time: the celebration every day carries from its season.
//!
//! Each day of the skeleton gets one [`SeasonDay`] with a stable key such
//! as `2ndSundayOfLent` or `fridayOfThe5thWeekOfOrdinaryTime`, the week of
//! its season, its rank and its default color.

use ordo_core::errors::{Error, Result};
use ordo_time::{LiturgicalDate, MovableDates, MovableFeast, Weekday};

use crate::candidate::{CelebrationCandidate, Metadata, Source};
use crate::color::LiturgicalColor;
use crate::rank::Rank;
use crate::season::{OrdinaryTimePart, Season, SeasonSkeleton};

/// Number of the Sunday of Christ the King in Ordinary Time.
pub const LAST_WEEK_OF_ORDINARY_TIME: i32 = 34;

/// What the season itself celebrates on one day.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeasonDay {
    /// The day.
    pub date: LiturgicalDate,
    /// Its season.
    pub season: Season,
    /// Week of the season; 0 for the days after Ash Wednesday.
    pub week: u8,
    /// Key of the seasonal celebration.
    pub key: String,
    /// Rank of the seasonal celebration.
    pub rank: Rank,
    /// Default color of the day.
    pub color: LiturgicalColor,
    /// Weekday of Lent, of December 17–24 or of the octave of Christmas.
    pub privileged: bool,
}

impl SeasonDay {
    /// The seasonal candidate for this day.
    pub fn candidate(&self) -> CelebrationCandidate {
        CelebrationCandidate::new(
            self.key.clone(),
            self.rank,
            Source::Season,
            self.date,
            Metadata::colored(self.color),
        )
    }
}

/// English ordinal suffix: `1st`, `2nd`, `3rd`, `4th`, `11th`, `22nd`.
pub fn ordinal(n: i32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

fn capitalized(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "Monday",
        Weekday::Tuesday => "Tuesday",
        Weekday::Wednesday => "Wednesday",
        Weekday::Thursday => "Thursday",
        Weekday::Friday => "Friday",
        Weekday::Saturday => "Saturday",
        Weekday::Sunday => "Sunday",
    }
}

/// `2ndSundayOfLent` or `fridayOfThe5thWeekOfLent`.
fn weekly_key(date: LiturgicalDate, week: i32, suffix: &str) -> String {
    if date.is_sunday() {
        format!("{}SundayOf{suffix}", ordinal(week))
    } else {
        format!("{}OfThe{}WeekOf{suffix}", date.weekday().key_name(), ordinal(week))
    }
}

fn anchor(dates: &MovableDates, feast: MovableFeast) -> Result<LiturgicalDate> {
    dates.require(feast, feast.name())
}

/// The seasonal celebration of `date`.
///
/// # Errors
/// [`Error::Precondition`] if `date` lies outside the skeleton.
pub fn season_day(skeleton: &SeasonSkeleton, date: LiturgicalDate) -> Result<SeasonDay> {
    let season = skeleton
        .season_of(date)
        .ok_or_else(|| Error::Precondition(format!("{date} is outside the computed range")))?;
    let dates = skeleton.anchors_for(date.year()).ok_or_else(|| Error::MissingSource {
        key: date.to_string(),
        movable: format!("movable dates of {}", date.year()),
    })?;
    let day = match season {
        Season::Advent => advent_day(dates, date)?,
        Season::Christmastide => christmastide_day(dates, date)?,
        Season::OrdinaryTime(part) => ordinary_day(dates, date, part)?,
        Season::Lent => lent_day(dates, date)?,
        Season::Triduum => triduum_day(date),
        Season::Eastertide => easter_day(dates, date)?,
    };
    let (key, week, rank, color, privileged) = day;
    Ok(SeasonDay {
        date,
        season,
        week: week as u8,
        key,
        rank,
        color,
        privileged,
    })
}

/// The seasonal celebration of every day of the skeleton, in order.
#[tracing::instrument(level = "debug", skip_all)]
pub fn proper_of_time(skeleton: &SeasonSkeleton) -> Result<Vec<SeasonDay>> {
    skeleton
        .range()
        .iter()
        .map(|date| season_day(skeleton, date))
        .collect()
}

type Day = (String, i32, Rank, LiturgicalColor, bool);

fn advent_day(dates: &MovableDates, date: LiturgicalDate) -> Result<Day> {
    let first = anchor(dates, MovableFeast::FirstSundayOfAdvent)?;
    let week = (date - first) / 7 + 1;
    if date.is_sunday() {
        let color = if week == 3 {
            LiturgicalColor::Rose
        } else {
            LiturgicalColor::Purple
        };
        return Ok((weekly_key(date, week, "Advent"), week, Rank::PrivilegedSunday, color, false));
    }
    let day = date.day_of_month();
    if date.month() == 12 && day >= 17 {
        return Ok((format!("december{day}"), week, Rank::Weekday, LiturgicalColor::Purple, true));
    }
    Ok((weekly_key(date, week, "Advent"), week, Rank::Weekday, LiturgicalColor::Purple, false))
}

fn christmastide_day(dates: &MovableDates, date: LiturgicalDate) -> Result<Day> {
    let white = LiturgicalColor::White;
    let sunday_or_weekday = if date.is_sunday() { Rank::Sunday } else { Rank::Weekday };
    if date.month() == 12 {
        let day = date.day_of_month();
        if day == 25 {
            return Ok(("christmas".to_owned(), 1, Rank::Solemnity, white, false));
        }
        let key = format!("{}DayInTheOctaveOfChristmas", ordinal(day as i32 - 24));
        return Ok((key, 1, sunday_or_weekday, white, true));
    }

    // January or February: weeks keep counting from December 25.
    let christmas = LiturgicalDate::from_ymd(date.year(), 1, 1)? - 7;
    let week = (date - christmas) / 7 + 1;
    if date.month() == 1 && date.day_of_month() == 1 {
        return Ok(("8thDayInTheOctaveOfChristmas".to_owned(), week, sunday_or_weekday, white, false));
    }
    let epiphany = anchor(dates, MovableFeast::Epiphany)?;
    let weekday = date.weekday().key_name();
    let key = if date < epiphany {
        if date.is_sunday() {
            "2ndSundayAfterChristmas".to_owned()
        } else {
            format!("{weekday}BeforeEpiphany")
        }
    } else if date == epiphany {
        format!("{weekday}OfEpiphany")
    } else {
        let sundays = epiphany.range_inclusive(date).sundays().filter(|&s| s > epiphany).count() as i32;
        match (sundays, date.is_sunday()) {
            (0, _) => format!("{weekday}AfterEpiphany"),
            (n, true) => format!("{}SundayAfterEpiphany", ordinal(n)),
            (n, false) => format!("{weekday}OfThe{}WeekAfterEpiphany", ordinal(n)),
        }
    };
    Ok((key, week, sunday_or_weekday, white, false))
}

fn ordinary_day(dates: &MovableDates, date: LiturgicalDate, part: OrdinaryTimePart) -> Result<Day> {
    let week = match part {
        OrdinaryTimePart::Early => {
            // The Sunday of the Baptism is the 1st Sunday; when the Baptism
            // falls on a Monday, week 1 is counted from Epiphany Sunday.
            let baptism = anchor(dates, MovableFeast::BaptismOfTheLord)?;
            let first = baptism.sunday_on_or_before();
            ((date - first).div_euclid(7) + 1).max(1)
        }
        OrdinaryTimePart::Late => {
            let christ_the_king = anchor(dates, MovableFeast::ChristTheKing)?;
            LAST_WEEK_OF_ORDINARY_TIME - (christ_the_king - date.sunday_on_or_before()) / 7
        }
    };
    let rank = if date.is_sunday() { Rank::Sunday } else { Rank::Weekday };
    Ok((weekly_key(date, week, "OrdinaryTime"), week, rank, LiturgicalColor::Green, false))
}

fn lent_day(dates: &MovableDates, date: LiturgicalDate) -> Result<Day> {
    let ash = anchor(dates, MovableFeast::AshWednesday)?;
    let palm = anchor(dates, MovableFeast::PalmSunday)?;
    let week = (date - (ash + 4)).div_euclid(7) + 1;
    let purple = LiturgicalColor::Purple;
    let weekday = date.weekday();
    let day = if date == ash {
        ("ashWednesday".to_owned(), week, Rank::Weekday, purple, true)
    } else if week == 0 {
        (format!("{}AfterAshWednesday", weekday.key_name()), week, Rank::Weekday, purple, true)
    } else if date == palm {
        ("palmSunday".to_owned(), week, Rank::PrivilegedSunday, LiturgicalColor::Red, false)
    } else if date > palm {
        (format!("{}OfHolyWeek", weekday.key_name()), week, Rank::Weekday, purple, true)
    } else if date.is_sunday() {
        let color = if week == 4 { LiturgicalColor::Rose } else { purple };
        (weekly_key(date, week, "Lent"), week, Rank::PrivilegedSunday, color, false)
    } else {
        (weekly_key(date, week, "Lent"), week, Rank::Weekday, purple, true)
    };
    Ok(day)
}

fn triduum_day(date: LiturgicalDate) -> Day {
    let (key, color) = match date.weekday() {
        Weekday::Thursday => ("holyThursday", LiturgicalColor::White),
        Weekday::Friday => ("goodFriday", LiturgicalColor::Red),
        _ => ("holySaturday", LiturgicalColor::White),
    };
    (key.to_owned(), 1, Rank::Solemnity, color, false)
}

fn easter_day(dates: &MovableDates, date: LiturgicalDate) -> Result<Day> {
    let easter = anchor(dates, MovableFeast::Easter)?;
    let pentecost = anchor(dates, MovableFeast::Pentecost)?;
    let week = (date - easter) / 7 + 1;
    let white = LiturgicalColor::White;
    let day = if date == easter {
        ("easter".to_owned(), week, Rank::Solemnity, white, false)
    } else if date == pentecost {
        ("pentecostSunday".to_owned(), week, Rank::Solemnity, LiturgicalColor::Red, false)
    } else if date.is_sunday() {
        (weekly_key(date, week, "Easter"), week, Rank::PrivilegedSunday, white, false)
    } else if week == 1 {
        let key = format!("{}OfTheOctaveOfEaster", date.weekday().key_name());
        (key, week, Rank::Solemnity, white, false)
    } else {
        (weekly_key(date, week, "Easter"), week, Rank::Weekday, white, false)
    };
    Ok(day)
}
