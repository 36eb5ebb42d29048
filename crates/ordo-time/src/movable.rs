//! Movable feasts and the anchors of the liturgical year.
//!
//! The Easter-relative dates are plain data (`EASTER_OFFSETS`); the two
//! configuration switches select between alternative offsets.  The
//! remaining anchors (Epiphany, Baptism of the Lord, Holy Family, Advent)
//! depend on the weekday of fixed dates rather than on Easter.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::computus::easter_sunday;
use crate::date::LiturgicalDate;
use crate::weekday::Weekday;
use ordo_core::errors::{Error, Result};
use ordo_core::Config;

/// A date that is recomputed every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum MovableFeast {
    /// Ash Wednesday (Easter − 46).
    AshWednesday,
    /// Palm Sunday (Easter − 7).
    PalmSunday,
    /// Holy Thursday (Easter − 3).
    HolyThursday,
    /// Good Friday (Easter − 2).
    GoodFriday,
    /// Holy Saturday (Easter − 1).
    HolySaturday,
    /// Easter Sunday.
    Easter,
    /// Second Sunday of Easter (Easter + 7).
    DivineMercySunday,
    /// Ascension (Easter + 39, or + 42 when moved to Sunday).
    Ascension,
    /// Pentecost Sunday (Easter + 49).
    Pentecost,
    /// Mary, Mother of the Church (Easter + 50).
    MaryMotherOfTheChurch,
    /// Trinity Sunday (Easter + 56).
    TrinitySunday,
    /// Corpus Christi (Easter + 60, or + 63 when moved to Sunday).
    CorpusChristi,
    /// Most Sacred Heart of Jesus (Easter + 68).
    SacredHeart,
    /// Immaculate Heart of Mary (Easter + 69).
    ImmaculateHeartOfMary,
    /// Epiphany (January 6, or the Sunday between January 2 and 8).
    Epiphany,
    /// Baptism of the Lord.
    BaptismOfTheLord,
    /// Holy Family (Sunday within the Octave of Christmas, else December 30).
    HolyFamily,
    /// First Sunday of Advent.
    FirstSundayOfAdvent,
    /// Christ the King (last Sunday before Advent).
    ChristTheKing,
}

/// Fixed signed day offsets from Easter Sunday.
pub const EASTER_OFFSETS: &[(MovableFeast, i32)] = &[
    (MovableFeast::AshWednesday, -46),
    (MovableFeast::PalmSunday, -7),
    (MovableFeast::HolyThursday, -3),
    (MovableFeast::GoodFriday, -2),
    (MovableFeast::HolySaturday, -1),
    (MovableFeast::Easter, 0),
    (MovableFeast::DivineMercySunday, 7),
    (MovableFeast::Pentecost, 49),
    (MovableFeast::MaryMotherOfTheChurch, 50),
    (MovableFeast::TrinitySunday, 56),
    (MovableFeast::SacredHeart, 68),
    (MovableFeast::ImmaculateHeartOfMary, 69),
];

/// Ascension offset: Thursday, or the 7th Sunday of Easter.
pub const ASCENSION_OFFSET: (i32, i32) = (39, 42);

/// Corpus Christi offset: Thursday after Trinity Sunday, or the Sunday after.
pub const CORPUS_CHRISTI_OFFSET: (i32, i32) = (60, 63);

impl MovableFeast {
    /// Every movable feast.
    pub const ALL: [MovableFeast; 19] = [
        MovableFeast::AshWednesday,
        MovableFeast::PalmSunday,
        MovableFeast::HolyThursday,
        MovableFeast::GoodFriday,
        MovableFeast::HolySaturday,
        MovableFeast::Easter,
        MovableFeast::DivineMercySunday,
        MovableFeast::Ascension,
        MovableFeast::Pentecost,
        MovableFeast::MaryMotherOfTheChurch,
        MovableFeast::TrinitySunday,
        MovableFeast::CorpusChristi,
        MovableFeast::SacredHeart,
        MovableFeast::ImmaculateHeartOfMary,
        MovableFeast::Epiphany,
        MovableFeast::BaptismOfTheLord,
        MovableFeast::HolyFamily,
        MovableFeast::FirstSundayOfAdvent,
        MovableFeast::ChristTheKing,
    ];

    /// Stable camelCase name.
    pub fn name(&self) -> &'static str {
        match self {
            MovableFeast::AshWednesday => "ashWednesday",
            MovableFeast::PalmSunday => "palmSunday",
            MovableFeast::HolyThursday => "holyThursday",
            MovableFeast::GoodFriday => "goodFriday",
            MovableFeast::HolySaturday => "holySaturday",
            MovableFeast::Easter => "easter",
            MovableFeast::DivineMercySunday => "divineMercySunday",
            MovableFeast::Ascension => "ascension",
            MovableFeast::Pentecost => "pentecostSunday",
            MovableFeast::MaryMotherOfTheChurch => "maryMotherOfTheChurch",
            MovableFeast::TrinitySunday => "trinitySunday",
            MovableFeast::CorpusChristi => "corpusChristi",
            MovableFeast::SacredHeart => "mostSacredHeartOfJesus",
            MovableFeast::ImmaculateHeartOfMary => "immaculateHeartOfMary",
            MovableFeast::Epiphany => "epiphany",
            MovableFeast::BaptismOfTheLord => "baptismOfTheLord",
            MovableFeast::HolyFamily => "holyFamily",
            MovableFeast::FirstSundayOfAdvent => "1stSundayOfAdvent",
            MovableFeast::ChristTheKing => "christTheKing",
        }
    }
}

impl std::fmt::Display for MovableFeast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MovableFeast {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        MovableFeast::ALL
            .iter()
            .copied()
            .find(|feast| feast.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::MissingSource {
                key: s.to_owned(),
                movable: s.to_owned(),
            })
    }
}

/// The movable dates of one civil year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovableDates {
    year: i32,
    dates: BTreeMap<MovableFeast, LiturgicalDate>,
}

impl MovableDates {
    /// Derive every movable date of `config.year`.
    pub fn for_config(config: &Config) -> Result<Self> {
        Self::compute(
            config.year,
            config.epiphany_on_jan6,
            config.ascension_on_sunday,
            config.corpus_christi_on_thursday,
        )
    }

    /// Derive every movable date of `year`.
    ///
    /// # Errors
    /// [`Error::InvalidYear`] outside the Gregorian range.
    pub fn compute(
        year: i32,
        epiphany_on_jan6: bool,
        ascension_on_sunday: bool,
        corpus_christi_on_thursday: bool,
    ) -> Result<Self> {
        let easter = easter_sunday(year)?;
        let mut dates: BTreeMap<MovableFeast, LiturgicalDate> = EASTER_OFFSETS
            .iter()
            .map(|&(feast, offset)| (feast, easter + offset))
            .collect();

        let ascension = if ascension_on_sunday {
            ASCENSION_OFFSET.1
        } else {
            ASCENSION_OFFSET.0
        };
        dates.insert(MovableFeast::Ascension, easter + ascension);

        let corpus_christi = if corpus_christi_on_thursday {
            CORPUS_CHRISTI_OFFSET.0
        } else {
            CORPUS_CHRISTI_OFFSET.1
        };
        dates.insert(MovableFeast::CorpusChristi, easter + corpus_christi);

        let epiphany = epiphany(year, epiphany_on_jan6)?;
        dates.insert(MovableFeast::Epiphany, epiphany);
        dates.insert(MovableFeast::BaptismOfTheLord, baptism_of_the_lord(epiphany));
        dates.insert(MovableFeast::HolyFamily, holy_family(year)?);

        let advent = first_sunday_of_advent(year)?;
        dates.insert(MovableFeast::FirstSundayOfAdvent, advent);
        dates.insert(MovableFeast::ChristTheKing, advent - 7);

        tracing::trace!(year, %easter, %advent, "derived movable dates");
        Ok(Self { year, dates })
    }

    /// Build a table from explicit entries.
    pub fn from_entries(
        year: i32,
        entries: impl IntoIterator<Item = (MovableFeast, LiturgicalDate)>,
    ) -> Self {
        Self {
            year,
            dates: entries.into_iter().collect(),
        }
    }

    /// The civil year these dates belong to.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The date of `feast`, if it was computed.
    pub fn get(&self, feast: MovableFeast) -> Option<LiturgicalDate> {
        self.dates.get(&feast).copied()
    }

    /// The date of `feast`, or [`Error::MissingSource`] on behalf of `key`.
    pub fn require(&self, feast: MovableFeast, key: &str) -> Result<LiturgicalDate> {
        self.get(feast).ok_or_else(|| Error::MissingSource {
            key: key.to_owned(),
            movable: feast.name().to_owned(),
        })
    }

    /// Iterate over `(feast, date)` in feast order.
    pub fn iter(&self) -> impl Iterator<Item = (MovableFeast, LiturgicalDate)> + '_ {
        self.dates.iter().map(|(&f, &d)| (f, d))
    }
}

// ── Anchor rules ──────────────────────────────────────────────────────────────

/// Epiphany: January 6, or the Sunday between January 2 and 8.
pub fn epiphany(year: i32, on_jan6: bool) -> Result<LiturgicalDate> {
    if on_jan6 {
        LiturgicalDate::from_ymd(year, 1, 6)
    } else {
        Ok(LiturgicalDate::from_ymd(year, 1, 1)?.next_sunday())
    }
}

/// Baptism of the Lord, given the date of Epiphany.
///
/// The Sunday after Epiphany, except when Epiphany is celebrated on Sunday
/// January 7 or 8: then the following Monday.
pub fn baptism_of_the_lord(epiphany: LiturgicalDate) -> LiturgicalDate {
    let day = epiphany.day_of_month();
    if epiphany.is_sunday() && (day == 7 || day == 8) {
        epiphany.next_weekday(Weekday::Monday)
    } else {
        epiphany.next_sunday()
    }
}

/// Holy Family: the Sunday within the Octave of Christmas, or December 30
/// when Christmas itself is a Sunday.
pub fn holy_family(year: i32) -> Result<LiturgicalDate> {
    let christmas = LiturgicalDate::from_ymd(year, 12, 25)?;
    if christmas.is_sunday() {
        LiturgicalDate::from_ymd(year, 12, 30)
    } else {
        Ok(christmas.next_sunday())
    }
}

/// First Sunday of Advent: three weeks before the Sunday on or before
/// December 24.
pub fn first_sunday_of_advent(year: i32) -> Result<LiturgicalDate> {
    Ok(LiturgicalDate::from_ymd(year, 12, 24)?.sunday_on_or_before() - 21)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> LiturgicalDate {
        LiturgicalDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn easter_offsets_2024() {
        let dates = MovableDates::compute(2024, false, false, false).unwrap();
        assert_eq!(dates.get(MovableFeast::Easter), Some(date(2024, 3, 31)));
        assert_eq!(dates.get(MovableFeast::AshWednesday), Some(date(2024, 2, 14)));
        assert_eq!(dates.get(MovableFeast::PalmSunday), Some(date(2024, 3, 24)));
        assert_eq!(dates.get(MovableFeast::Pentecost), Some(date(2024, 5, 19)));
        assert_eq!(dates.get(MovableFeast::TrinitySunday), Some(date(2024, 5, 26)));
        assert_eq!(dates.get(MovableFeast::Ascension), Some(date(2024, 5, 9)));
        assert_eq!(dates.get(MovableFeast::CorpusChristi), Some(date(2024, 6, 2)));
        assert_eq!(dates.get(MovableFeast::SacredHeart), Some(date(2024, 6, 7)));
    }

    #[test]
    fn switches_move_ascension_and_corpus_christi() {
        let dates = MovableDates::compute(2024, false, true, true).unwrap();
        let ascension = dates.get(MovableFeast::Ascension).unwrap();
        assert_eq!(ascension, date(2024, 5, 12));
        assert!(ascension.is_sunday());
        let corpus = dates.get(MovableFeast::CorpusChristi).unwrap();
        assert_eq!(corpus, date(2024, 5, 30));
        assert_eq!(corpus.weekday(), Weekday::Thursday);
    }

    #[test]
    fn first_sunday_of_advent_examples() {
        assert_eq!(first_sunday_of_advent(2005).unwrap().day_of_month(), 27);
        assert_eq!(first_sunday_of_advent(2000).unwrap().day_of_month(), 3);
        assert_eq!(first_sunday_of_advent(2001).unwrap(), date(2001, 12, 2));
        assert_eq!(first_sunday_of_advent(2002).unwrap(), date(2002, 12, 1));
        assert_eq!(first_sunday_of_advent(2003).unwrap(), date(2003, 11, 30));
        assert_eq!(first_sunday_of_advent(1998).unwrap(), date(1998, 11, 29));
        assert_eq!(first_sunday_of_advent(1999).unwrap(), date(1999, 11, 28));
    }

    #[test]
    fn epiphany_and_baptism() {
        // 2023-01-01 is a Sunday: Epiphany moves to January 8, Baptism to Monday the 9th.
        let epiphany_2023 = epiphany(2023, false).unwrap();
        assert_eq!(epiphany_2023, date(2023, 1, 8));
        assert_eq!(baptism_of_the_lord(epiphany_2023), date(2023, 1, 9));

        // 2024-01-01 is a Monday: Epiphany on Sunday the 7th, Baptism on Monday the 8th.
        let epiphany_2024 = epiphany(2024, false).unwrap();
        assert_eq!(epiphany_2024, date(2024, 1, 7));
        assert_eq!(baptism_of_the_lord(epiphany_2024), date(2024, 1, 8));

        // 2025-01-01 is a Wednesday: Epiphany on the 5th, Baptism on the 12th.
        let epiphany_2025 = epiphany(2025, false).unwrap();
        assert_eq!(epiphany_2025, date(2025, 1, 5));
        assert_eq!(baptism_of_the_lord(epiphany_2025), date(2025, 1, 12));

        // Fixed on January 6 the Baptism is always the following Sunday.
        let fixed = epiphany(2019, true).unwrap(); // a Sunday
        assert_eq!(baptism_of_the_lord(fixed), date(2019, 1, 13));
    }

    #[test]
    fn holy_family_dates() {
        assert_eq!(holy_family(2022).unwrap(), date(2022, 12, 30)); // Christmas on Sunday
        assert_eq!(holy_family(2023).unwrap(), date(2023, 12, 31));
        assert_eq!(holy_family(2024).unwrap(), date(2024, 12, 29));
    }

    #[test]
    fn christ_the_king_precedes_advent() {
        let dates = MovableDates::compute(2023, false, false, false).unwrap();
        assert_eq!(dates.get(MovableFeast::ChristTheKing), Some(date(2023, 11, 26)));
        assert_eq!(dates.get(MovableFeast::FirstSundayOfAdvent), Some(date(2023, 12, 3)));
    }

    #[test]
    fn missing_entries_are_reported() {
        let partial = MovableDates::from_entries(2024, [(MovableFeast::Easter, date(2024, 3, 31))]);
        assert_eq!(
            partial.require(MovableFeast::Pentecost, "pentecostVigil"),
            Err(Error::MissingSource {
                key: "pentecostVigil".into(),
                movable: "pentecostSunday".into(),
            })
        );
        assert!(partial.require(MovableFeast::Easter, "easter").is_ok());
    }

    #[test]
    fn names_parse_back() {
        for feast in MovableFeast::ALL {
            assert_eq!(feast.name().parse::<MovableFeast>().unwrap(), feast);
        }
        assert!(matches!(
            "whitMonday".parse::<MovableFeast>(),
            Err(Error::MissingSource { .. })
        ));
    }
}
