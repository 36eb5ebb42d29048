//! `LiturgicalDate`: a calendar day with no time component.
//!
//! Dates are stored as a serial number of days since 1970-01-01 in the
//! proleptic Gregorian calendar, so ordering, equality and day arithmetic
//! are integer operations.  The conversion routines are the classic
//! era-based civil-date algorithms (400-year eras of 146 097 days).
//!
//! # Valid range
//! Years 1 to 9999.  The engine itself only accepts the Gregorian range
//! (see [`ordo_core::MIN_YEAR`]), but a few anchors of 1583 need the
//! preceding December, so the representable range is wider.

use std::str::FromStr;

use crate::month::Month;
use crate::weekday::Weekday;
use ordo_core::errors::{Error, Result};

/// A calendar day, normalised to midnight UTC.
///
/// Compared and ordered by (year, month, day).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LiturgicalDate(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl LiturgicalDate {
    /// Minimum representable date: January 1, 0001.
    pub const MIN: LiturgicalDate = LiturgicalDate(-719_162);

    /// Maximum representable date: December 31, 9999.
    pub const MAX: LiturgicalDate = LiturgicalDate(2_932_896);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    ///
    /// # Errors
    /// [`Error::InvalidDate`] when the triple does not name a day in the
    /// representable range.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        let invalid = || Error::InvalidDate { year, month, day };
        if !(1..=9999).contains(&year) || !(1..=12).contains(&month) {
            return Err(invalid());
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(invalid());
        }
        Ok(LiturgicalDate(days_from_civil(year, month, day)))
    }

    /// Create a date from a year and a [`Month`].
    pub fn from_month(year: i32, month: Month, day: u8) -> Result<Self> {
        Self::from_ymd(year, month.number(), day)
    }

    /// Create a date from a serial number (days since 1970-01-01).
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = LiturgicalDate(serial);
        if d < Self::MIN || d > Self::MAX {
            let (year, month, day) = civil_from_days(serial);
            return Err(Error::InvalidDate { year, month, day });
        }
        Ok(d)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number (days since 1970-01-01).
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (i32, u8, u8) {
        civil_from_days(self.0)
    }

    /// Return the year.
    pub fn year(&self) -> i32 {
        self.ymd().0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.ymd().1
    }

    /// Return the month as a [`Month`].
    pub fn month_enum(&self) -> Month {
        Month::from_number(self.month()).unwrap_or(Month::January)
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.ymd().2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let (y, _, _) = self.ymd();
        (self.0 - days_from_civil(y, 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // 1970-01-01 was a Thursday (ordinal 4).
        let w = ((self.0 + 3).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).unwrap_or(Weekday::Monday)
    }

    /// Return `true` if this date is a Sunday.
    pub fn is_sunday(&self) -> bool {
        self.weekday() == Weekday::Sunday
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.
    ///
    /// # Errors
    /// [`Error::InvalidDate`] if the result leaves the representable range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        Self::from_serial(self.0 + n)
    }

    /// Number of days from `self` to `other`; positive if `other > self`.
    pub fn days_until(self, other: LiturgicalDate) -> i32 {
        other.0 - self.0
    }

    /// The nearest `weekday` strictly after this date.
    pub fn next_weekday(self, weekday: Weekday) -> Self {
        let skip = (weekday.ordinal() as i32 - self.weekday().ordinal() as i32).rem_euclid(7);
        self + if skip == 0 { 7 } else { skip }
    }

    /// The nearest Sunday strictly after this date.
    pub fn next_sunday(self) -> Self {
        self.next_weekday(Weekday::Sunday)
    }

    /// This date if it is a Sunday, otherwise the preceding Sunday.
    pub fn sunday_on_or_before(self) -> Self {
        self - (self.weekday().ordinal() as i32 % 7)
    }

    /// December 31 of this date's year.
    pub fn end_of_year(self) -> Self {
        LiturgicalDate(days_from_civil(self.year(), 12, 31))
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for LiturgicalDate {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for LiturgicalDate {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<LiturgicalDate> for LiturgicalDate {
    type Output = i32;
    fn sub(self, rhs: LiturgicalDate) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for LiturgicalDate {
    fn add_assign(&mut self, rhs: i32) {
        *self = *self + rhs;
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for LiturgicalDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for LiturgicalDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "LiturgicalDate({y:04}-{m:02}-{d:02})")
    }
}

impl FromStr for LiturgicalDate {
    type Err = Error;

    /// Parse an ISO 8601 calendar date (`YYYY-MM-DD`).
    fn from_str(s: &str) -> Result<Self> {
        let malformed = || Error::Precondition(format!("'{s}' is not a YYYY-MM-DD date"));
        let mut parts = s.trim().splitn(3, '-');
        let year: i32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(malformed)?;
        let month: u8 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(malformed)?;
        let day: u8 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(malformed)?;
        Self::from_ymd(year, month, day)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for LiturgicalDate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for LiturgicalDate {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "chrono")]
impl From<LiturgicalDate> for chrono::NaiveDate {
    fn from(date: LiturgicalDate) -> Self {
        let (y, m, d) = date.ymd();
        chrono::NaiveDate::from_ymd_opt(y, u32::from(m), u32::from(d))
            .expect("every LiturgicalDate is a valid NaiveDate")
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for LiturgicalDate {
    type Error = Error;

    fn try_from(date: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        Self::from_ymd(date.year(), date.month() as u8, date.day() as u8)
    }
}

#[cfg(feature = "chrono")]
impl LiturgicalDate {
    /// This day at midnight UTC.
    pub fn to_utc_midnight(self) -> chrono::DateTime<chrono::Utc> {
        chrono::NaiveDate::from(self)
            .and_hms_opt(0, 0, 0)
            .expect("midnight is a valid time")
            .and_utc()
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Number of days in a year.
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Serial (days since 1970-01-01) of a civil date.
fn days_from_civil(year: i32, month: u8, day: u8) -> i32 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (month as i32 + 9) % 12; // March = 0
    let doy = (153 * mp + 2) / 5 + day as i32 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Civil date of a serial number.
fn civil_from_days(serial: i32) -> (i32, u8, u8) {
    let z = serial + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let year = yoe + era * 400 + i32::from(month <= 2);
    (year, month, day)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> LiturgicalDate {
        LiturgicalDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_epoch() {
        assert_eq!(date(1970, 1, 1).serial(), 0);
        assert_eq!(date(1970, 1, 2).serial(), 1);
        assert_eq!(date(1969, 12, 31).serial(), -1);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(date(1, 1, 1), LiturgicalDate::MIN);
        assert_eq!(date(9999, 12, 31), LiturgicalDate::MAX);
        assert!(LiturgicalDate::MAX.add_days(1).is_err());
    }

    #[test]
    fn test_components() {
        let dates = [
            (1583, 1, 1),
            (1900, 2, 28),
            (2000, 2, 29), // leap
            (2100, 2, 28), // non-leap century
            (2023, 6, 15),
            (9999, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = date(y, m, d);
            assert_eq!(date.ymd(), (y, m, d), "mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_invalid_dates() {
        assert!(LiturgicalDate::from_ymd(2023, 2, 29).is_err());
        assert!(LiturgicalDate::from_ymd(2023, 13, 1).is_err());
        assert!(LiturgicalDate::from_ymd(2023, 4, 31).is_err());
        assert!(LiturgicalDate::from_ymd(0, 1, 1).is_err());
        assert_eq!(
            LiturgicalDate::from_ymd(1900, 2, 29),
            Err(Error::InvalidDate {
                year: 1900,
                month: 2,
                day: 29
            })
        );
    }

    #[test]
    fn test_weekday() {
        // 2024-01-01 is a Monday
        assert_eq!(date(2024, 1, 1).weekday(), Weekday::Monday);
        // 2024-01-06 is a Saturday
        assert_eq!(date(2024, 1, 6).weekday(), Weekday::Saturday);
        // 1583-01-01 was a Saturday
        assert_eq!(date(1583, 1, 1).weekday(), Weekday::Saturday);
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(date(2024, 1, 1).day_of_year(), 1);
        assert_eq!(date(2024, 12, 31).day_of_year(), 366);
        assert_eq!(date(2023, 12, 31).day_of_year(), 365);
        assert_eq!(date(2023, 3, 1).day_of_year(), 60);
    }

    #[test]
    fn test_arithmetic() {
        let d = date(2023, 1, 1);
        let d2 = d + 31;
        assert_eq!(d2, date(2023, 2, 1));
        assert_eq!(date(2023, 2, 1) - d, 31);
        assert_eq!(date(2024, 3, 1) - 1, date(2024, 2, 29));
        assert_eq!(d.days_until(date(2022, 12, 25)), -7);
    }

    #[test]
    fn test_sunday_helpers() {
        // 2023-12-24 is a Sunday
        let sunday = date(2023, 12, 24);
        assert!(sunday.is_sunday());
        assert_eq!(sunday.sunday_on_or_before(), sunday);
        assert_eq!(sunday.next_sunday(), date(2023, 12, 31));
        assert_eq!(date(2023, 12, 27).sunday_on_or_before(), sunday);
        assert_eq!(date(2023, 12, 27).next_sunday(), date(2023, 12, 31));
        assert_eq!(sunday.next_weekday(Weekday::Monday), date(2023, 12, 25));
    }

    #[test]
    fn test_display_and_parse() {
        let d = date(2017, 3, 1);
        assert_eq!(d.to_string(), "2017-03-01");
        assert_eq!(format!("{d:?}"), "LiturgicalDate(2017-03-01)");
        assert_eq!("2017-03-01".parse::<LiturgicalDate>().unwrap(), d);
        assert!("2017/03/01".parse::<LiturgicalDate>().is_err());
        assert!("2017-02-30".parse::<LiturgicalDate>().is_err());
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(2100), 365);
    }
}
