//! Integration tests for the calendar-day type, computus and movable feasts.

use ordo_time::{easter_sunday, LiturgicalDate, MovableDates, MovableFeast, Weekday};
use proptest::prelude::*;

fn date(y: i32, m: u8, d: u8) -> LiturgicalDate {
    LiturgicalDate::from_ymd(y, m, d).unwrap()
}

// ─── Dates ────────────────────────────────────────────────────────────────────

#[test]
fn weekday_of_known_days() {
    assert_eq!(date(1970, 1, 1).weekday(), Weekday::Thursday);
    assert_eq!(date(2000, 1, 1).weekday(), Weekday::Saturday);
    assert_eq!(date(2024, 12, 25).weekday(), Weekday::Wednesday);
    assert_eq!(date(1583, 1, 1).weekday(), Weekday::Saturday);
}

#[test]
fn parse_and_display() {
    let d: LiturgicalDate = "2017-03-11".parse().unwrap();
    assert_eq!(d, date(2017, 3, 11));
    assert_eq!(d.to_string(), "2017-03-11");
    assert!("2017-02-29".parse::<LiturgicalDate>().is_err());
    assert!("not a date".parse::<LiturgicalDate>().is_err());
}

// ─── Movable feasts ──────────────────────────────────────────────────────────

#[test]
fn lent_2017() {
    let dates = MovableDates::compute(2017, false, false, false).unwrap();
    let ash = dates.get(MovableFeast::AshWednesday).unwrap();
    assert_eq!(ash, date(2017, 3, 1));
    assert_eq!(dates.get(MovableFeast::PalmSunday), Some(date(2017, 4, 9)));
    assert_eq!(dates.get(MovableFeast::GoodFriday), Some(date(2017, 4, 14)));
}

#[test]
fn every_feast_is_computed() {
    let dates = MovableDates::compute(2030, true, true, true).unwrap();
    for feast in MovableFeast::ALL {
        assert!(dates.get(feast).is_some(), "{feast} missing");
    }
    assert_eq!(dates.iter().count(), MovableFeast::ALL.len());
}

proptest! {
    #[test]
    fn easter_cycle_weekdays(year in 1583i32..=9999) {
        let dates = MovableDates::compute(year, false, false, false).unwrap();
        let easter = easter_sunday(year).unwrap();
        prop_assert_eq!(dates.get(MovableFeast::Easter), Some(easter));
        prop_assert_eq!(dates.get(MovableFeast::AshWednesday).unwrap().weekday(), Weekday::Wednesday);
        prop_assert!(dates.get(MovableFeast::Pentecost).unwrap().is_sunday());
        prop_assert!(dates.get(MovableFeast::TrinitySunday).unwrap().is_sunday());
        prop_assert!(dates.get(MovableFeast::CorpusChristi).unwrap().is_sunday());
        prop_assert_eq!(dates.get(MovableFeast::Ascension).unwrap().weekday(), Weekday::Thursday);
        prop_assert_eq!(dates.get(MovableFeast::SacredHeart).unwrap().weekday(), Weekday::Friday);
    }

    #[test]
    fn advent_and_christ_the_king(year in 1583i32..=9999) {
        let dates = MovableDates::compute(year, false, false, false).unwrap();
        let advent = dates.get(MovableFeast::FirstSundayOfAdvent).unwrap();
        prop_assert!(advent.is_sunday());
        prop_assert!(advent >= date(year, 11, 27) && advent <= date(year, 12, 3));
        prop_assert_eq!(dates.get(MovableFeast::ChristTheKing).unwrap(), advent - 7);
    }

    #[test]
    fn epiphany_window(year in 1583i32..=9999) {
        let dates = MovableDates::compute(year, false, false, false).unwrap();
        let epiphany = dates.get(MovableFeast::Epiphany).unwrap();
        prop_assert!(epiphany.is_sunday());
        prop_assert!(epiphany >= date(year, 1, 2) && epiphany <= date(year, 1, 8));
        let baptism = dates.get(MovableFeast::BaptismOfTheLord).unwrap();
        prop_assert!(baptism > epiphany && baptism - epiphany <= 7);
    }
}
