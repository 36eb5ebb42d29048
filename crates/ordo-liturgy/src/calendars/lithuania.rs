//! Lithuania national calendar.

use ordo_core::Config;
use ordo_time::Month::{self, April, August, February, January, July, March, May, November, September};

use crate::color::LiturgicalColor::{self, Red, White};
use crate::rank::Rank::{self, Feast, OptionalMemorial, Solemnity};
use crate::source::{CalendarRecord, CalendarSource};
use crate::title::Title::{self, DoctorOfTheChurch, Martyr, PatronOfEurope};

#[rustfmt::skip]
const RECORDS: &[(&str, Rank, Month, u8, Option<LiturgicalColor>, &[Title])] = &[
    ("blessedJerzyMatulewiczBishop", OptionalMemorial, January, 27, None, &[]),
    ("saintsCyrilMonkAndMethodiusBishop", Feast, February, 14, None, &[PatronOfEurope]),
    ("saintCasimir", Feast, March, 4, None, &[]),
    ("saintBrunoBonifaceOfQuerfurtBishopAndMartyr", OptionalMemorial, March, 9, None, &[Martyr]),
    ("saintAdalbertBishopAndMartyr", OptionalMemorial, April, 23, Some(Red), &[Martyr]),
    ("saintCatherineOfSienaVirginAndDoctorOfTheChurch", Feast, April, 29, None, &[PatronOfEurope, DoctorOfTheChurch]),
    ("saintAndrewBobolaPriestAndMartyr", OptionalMemorial, May, 16, None, &[Martyr]),
    ("ourLadyMotherOfMercy", Solemnity, November, 16, None, &[]),
    ("saintBenedictOfNursiaAbbot", Feast, July, 11, None, &[PatronOfEurope]),
    ("saintBridgetOfSwedenReligious", Feast, July, 23, Some(White), &[PatronOfEurope]),
    ("saintTeresaBenedictaOfTheCrossEdithSteinVirginAndMartyr", Feast, August, 9, Some(Red), &[Martyr, PatronOfEurope]),
    ("saintRocco", OptionalMemorial, August, 16, None, &[]),
    ("saintHyacinthPriest", OptionalMemorial, August, 17, None, &[]),
    ("birthOfTheBlessedVirginMary", Solemnity, September, 8, None, &[]),
];

/// Lithuania national calendar.
///
/// Adds or raises the following celebrations:
/// * Blessed Jerzy Matulewicz (Jan 27, optional memorial)
/// * Saints Cyril and Methodius (Feb 14, feast)
/// * Saint Casimir, patron of Lithuania (Mar 4, feast)
/// * Saint Bruno Boniface of Querfurt (Mar 9, optional memorial)
/// * Saint Adalbert (Apr 23, optional memorial)
/// * Saint Catherine of Siena (Apr 29, feast)
/// * Saint Andrew Bobola (May 16, optional memorial)
/// * Saint Benedict (Jul 11, feast)
/// * Saint Bridget of Sweden (Jul 23, feast)
/// * Saint Teresa Benedicta of the Cross (Aug 9, feast)
/// * Saint Rocco (Aug 16, optional memorial)
/// * Saint Hyacinth (Aug 17, optional memorial)
/// * Birth of the Blessed Virgin Mary (Sep 8, solemnity)
/// * Our Lady, Mother of Mercy (Nov 16, solemnity)
#[derive(Debug, Clone, Copy, Default)]
pub struct Lithuania;

impl CalendarSource for Lithuania {
    fn name(&self) -> &str {
        "Lithuania"
    }

    fn records(&self, _config: &Config) -> Vec<CalendarRecord> {
        RECORDS
            .iter()
            .map(|&(key, rank, month, day, color, titles)| {
                let mut record = CalendarRecord::fixed(key, rank, month, day).titles(titles);
                record.metadata.color = color;
                record
            })
            .collect()
    }
}
