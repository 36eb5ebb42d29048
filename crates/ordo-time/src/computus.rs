//! Gregorian computus: the date of Easter Sunday.
//!
//! Every movable celebration of the year is an offset from this date, so it
//! must be exact for every supported year.

use crate::date::LiturgicalDate;
use ordo_core::errors::{Error, Result};
use ordo_core::{MAX_YEAR, MIN_YEAR};

/// Compute Easter Sunday of `year` in the Gregorian calendar.
///
/// Uses Oudin's algorithm (1940) with the century-based solar and lunar
/// corrections.
///
/// # Errors
/// [`Error::InvalidYear`] outside `[MIN_YEAR, MAX_YEAR]`.
pub fn easter_sunday(year: i32) -> Result<LiturgicalDate> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(Error::InvalidYear {
            year,
            min: MIN_YEAR,
            max: MAX_YEAR,
        });
    }
    let (month, day) = easter_month_day(year);
    LiturgicalDate::from_ymd(year, month, day)
}

/// (month, day) of Gregorian Easter Sunday.
fn easter_month_day(y: i32) -> (u8, u8) {
    let g = y % 19;
    let c = y / 100;
    let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));
    let j = (y + y / 4 + i + 2 - c + c / 4) % 7;
    let p = i - j;
    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;
    (month as u8, day as u8)
}
