//! Season boundaries and the season skeleton.
//!
//! These integration tests exercise the per-season range functions, the
//! skeleton partition, and the seasonal celebration of each day.

use ordo_core::{CalendarType, ChristmastideEnds, Config, ConfigBuilder};
use ordo_liturgy::proper_of_time::{proper_of_time, season_day};
use ordo_liturgy::season::{self, SeasonSkeleton};
use ordo_liturgy::{LiturgicalColor, OrdinaryTimePart, Season};
use ordo_time::movable::{baptism_of_the_lord, epiphany};
use ordo_time::{LiturgicalDate, MovableDates, MovableFeast, Weekday};
use proptest::prelude::*;

fn date(y: i32, m: u8, d: u8) -> LiturgicalDate {
    LiturgicalDate::from_ymd(y, m, d).unwrap()
}

fn movable(year: i32, feast: MovableFeast) -> LiturgicalDate {
    MovableDates::compute(year, false, false, false)
        .unwrap()
        .get(feast)
        .unwrap()
}

// ─── Advent ───────────────────────────────────────────────────────────────────

#[test]
fn advent_has_four_sundays() {
    for year in 1900..=2200 {
        let sundays = season::sundays_of_advent(year).unwrap();
        assert_eq!(sundays.len(), 4, "{year}");
        assert!(sundays.iter().all(|d| d.is_sunday()));
    }
}

#[test]
fn first_sunday_of_advent_follows_christmas() {
    let first = |year| season::sundays_of_advent(year).unwrap()[0].day_of_month();
    assert_eq!(first(2005), 27);
    assert_eq!(first(2000), 3);
    assert_eq!(first(2001), 2);
    assert_eq!(first(2002), 1);
    assert_eq!(first(2003), 30);
    assert_eq!(first(1998), 29);
    assert_eq!(first(1999), 28);
}

#[test]
fn length_of_advent_depends_on_christmas() {
    // Christmas on Sunday gives the longest Advent, on Monday the shortest.
    let expected = [(2005, 28), (2000, 22), (2001, 23), (2002, 24), (2003, 25), (1998, 26), (1999, 27)];
    for (year, days) in expected {
        assert_eq!(season::days_of_advent(year).unwrap().len(), days, "{year}");
    }
}

// ─── Lent ─────────────────────────────────────────────────────────────────────

#[test]
fn lent_has_six_sundays_ending_on_palm_sunday() {
    for year in 1900..=2200 {
        let sundays = season::sundays_of_lent(year).unwrap();
        assert_eq!(sundays.len(), 6, "{year}");
        assert_eq!(sundays[0], movable(year, MovableFeast::AshWednesday) + 4);
        assert_eq!(sundays[5], movable(year, MovableFeast::PalmSunday));
    }
}

#[test]
fn lent_2017_counts_weeks_from_the_first_sunday() {
    let skeleton = SeasonSkeleton::build(&Config::defaults(2017)).unwrap();
    let lent = season::days_of_lent(2017).unwrap();
    let keys: Vec<String> = lent
        .iter()
        .map(|d| season_day(&skeleton, d).unwrap().key)
        .collect();
    assert_eq!(keys[0], "ashWednesday");
    assert_eq!(keys[1], "thursdayAfterAshWednesday");
    assert_eq!(keys[10], "saturdayOfThe1stWeekOfLent");
    assert_eq!(keys[11], "2ndSundayOfLent");
}

// ─── Easter ───────────────────────────────────────────────────────────────────

#[test]
fn octave_of_easter_runs_to_divine_mercy_sunday() {
    for year in 1900..=2100 {
        let octave = season::octave_of_easter(year).unwrap();
        assert_eq!(octave.len(), 8, "{year}");
        assert_eq!(octave.start, movable(year, MovableFeast::Easter));
        assert_eq!(octave.end, movable(year, MovableFeast::DivineMercySunday));
    }
}

#[test]
fn eastertide_is_fifty_days() {
    for year in 1900..=2100 {
        assert_eq!(season::days_of_easter(year).unwrap().len(), 50, "{year}");
        let sundays = season::sundays_of_easter(year).unwrap();
        assert_eq!(sundays.len(), 8, "{year}");
        assert_eq!(sundays.first().copied(), Some(movable(year, MovableFeast::Easter)));
        assert_eq!(sundays.last().copied(), Some(movable(year, MovableFeast::Pentecost)));
    }
}

// ─── Ordinary Time ────────────────────────────────────────────────────────────

#[test]
fn early_ordinary_time_follows_the_end_of_christmastide() {
    for year in 1900..=2200 {
        let ash = movable(year, MovableFeast::AshWednesday);
        let epiphany = epiphany(year, false).unwrap();

        let traditional = season::days_of_early_ordinary_time(year, ChristmastideEnds::Traditional, false).unwrap();
        assert_eq!(traditional.start - 1, epiphany);
        assert_eq!(traditional.end + 1, ash);

        let ordinary = season::days_of_early_ordinary_time(year, ChristmastideEnds::OrdinaryBaptism, false).unwrap();
        assert_eq!(ordinary.start - 1, baptism_of_the_lord(epiphany));
        assert_eq!(ordinary.end + 1, ash);
        let sundays = ordinary.sundays().count();
        assert!((3..=9).contains(&sundays), "{year}: {sundays} Sundays");
    }
    for year in 1900..=2100 {
        let range =
            season::days_of_early_ordinary_time(year, ChristmastideEnds::ExtraordinaryPresentation, false).unwrap();
        assert_eq!(range.start - 1, date(year, 2, 2));
        assert_eq!(range.end + 1, movable(year, MovableFeast::AshWednesday));
    }
}

#[test]
fn later_ordinary_time_runs_from_pentecost_to_advent() {
    for year in 1900..=2100 {
        let range = season::days_of_later_ordinary_time(year).unwrap();
        let sundays = range.sundays().count();
        assert!((23..=29).contains(&sundays), "{year}: {sundays} Sundays");
        assert_eq!(range.start - 1, movable(year, MovableFeast::Pentecost));
        assert_eq!(range.end + 1, season::sundays_of_advent(year).unwrap()[0]);
    }
}

// ─── Christmas ────────────────────────────────────────────────────────────────

#[test]
fn octave_of_christmas_is_eight_days() {
    for year in 1900..=2100 {
        assert_eq!(season::octave_of_christmas(year).unwrap().len(), 8);
    }
}

#[test]
fn christmastide_with_epiphany_on_january_6() {
    for year in 1900..=2100 {
        let traditional = season::christmastide(year, ChristmastideEnds::Traditional, true).unwrap();
        assert_eq!(traditional.end, date(year + 1, 1, 6));
        let ordinary = season::christmastide(year, ChristmastideEnds::OrdinaryBaptism, true).unwrap();
        assert_eq!(ordinary.end.weekday(), Weekday::Sunday, "{year}");
    }
}

#[test]
fn christmastide_with_epiphany_on_sunday() {
    for year in 1900..=2100 {
        let epiphany = epiphany(year + 1, false).unwrap();
        let end = |ends| season::christmastide(year, ends, false).unwrap().end;
        assert_eq!(end(ChristmastideEnds::Traditional), epiphany);
        assert_eq!(end(ChristmastideEnds::OrdinaryBaptism), baptism_of_the_lord(epiphany));
        assert_eq!(end(ChristmastideEnds::ExtraordinaryPresentation), date(year + 1, 2, 2));
        assert_eq!(
            season::christmastide(year, Config::defaults(year).christmastide_ends, false).unwrap().end,
            baptism_of_the_lord(epiphany)
        );
    }
}

// ─── Skeleton ─────────────────────────────────────────────────────────────────

#[test]
fn liturgical_year_starts_with_advent() {
    let config = ConfigBuilder::new(2018)
        .calendar_type(CalendarType::Liturgical)
        .build()
        .unwrap();
    let skeleton = SeasonSkeleton::build(&config).unwrap();
    assert_eq!(skeleton.range().start, date(2017, 12, 3));
    assert_eq!(skeleton.range().end, date(2018, 12, 1));
    assert_eq!(skeleton.spans()[0].season, Season::Advent);
    assert_eq!(
        skeleton.spans().last().map(|s| s.season),
        Some(Season::OrdinaryTime(OrdinaryTimePart::Late))
    );
}

#[test]
fn seasonal_colors() {
    let skeleton = SeasonSkeleton::build(&Config::defaults(2015)).unwrap();
    for day in proper_of_time(&skeleton).unwrap() {
        let expected = match (day.season, day.key.as_str()) {
            (_, "palmSunday" | "goodFriday" | "pentecostSunday") => LiturgicalColor::Red,
            (_, "4thSundayOfLent" | "3rdSundayOfAdvent") => LiturgicalColor::Rose,
            (Season::OrdinaryTime(_), _) => LiturgicalColor::Green,
            (Season::Lent | Season::Advent, _) => LiturgicalColor::Purple,
            (Season::Christmastide | Season::Eastertide | Season::Triduum, _) => LiturgicalColor::White,
        };
        assert_eq!(day.color, expected, "{} {}", day.date, day.key);
    }
}

fn christmastide_ends() -> impl Strategy<Value = ChristmastideEnds> {
    prop_oneof![
        Just(ChristmastideEnds::Traditional),
        Just(ChristmastideEnds::OrdinaryBaptism),
        Just(ChristmastideEnds::ExtraordinaryPresentation),
    ]
}

proptest! {
    #[test]
    fn seasons_partition_the_year(
        year in 1584i32..=9999,
        ends in christmastide_ends(),
        epiphany_on_jan6 in any::<bool>(),
        liturgical in any::<bool>(),
    ) {
        let config = ConfigBuilder::new(year)
            .christmastide_ends(ends)
            .epiphany_on_jan6(epiphany_on_jan6)
            .calendar_type(if liturgical { CalendarType::Liturgical } else { CalendarType::Civil })
            .build()
            .unwrap();
        let skeleton = SeasonSkeleton::build(&config).unwrap();
        prop_assert!(skeleton.is_partition());
        for span in skeleton.spans() {
            prop_assert_eq!(skeleton.season_of(span.range.start), Some(span.season));
            prop_assert_eq!(skeleton.season_of(span.range.end), Some(span.season));
        }
    }

    #[test]
    fn ordinary_time_weeks_stay_in_range(year in 1583i32..=9999) {
        let skeleton = SeasonSkeleton::build(&Config::defaults(year)).unwrap();
        for day in proper_of_time(&skeleton).unwrap() {
            if day.season.is_ordinary_time() {
                prop_assert!((1..=34).contains(&day.week), "{} week {}", day.date, day.week);
            }
        }
    }
}
