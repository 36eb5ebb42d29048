//! The General Roman Calendar.
//!
//! Solemnities, feasts and memorials observed by the whole Latin Church.
//! The days of the seasons (Christmas, Easter, Pentecost, the Sundays and
//! weekdays) come from the proper of time, not from this table.

use ordo_core::Config;
use ordo_time::{Month, MovableFeast};

use crate::color::LiturgicalColor::{self, Purple, Red, White};
use crate::rank::Rank::{self, Feast, FeastOfTheLord, Memorial, OptionalMemorial, Solemnity};
use crate::source::{CalendarRecord, CalendarSource, DateRule};
use crate::title::Title::{self, Apostle, DoctorOfTheChurch, Evangelist, Martyr, PatronOfEurope};

type Entry = (&'static str, Rank, u8, u8, Option<LiturgicalColor>, &'static [Title]);

/// Celebrations on a fixed day, in calendar order.
#[rustfmt::skip]
const FIXED: &[Entry] = &[
    ("maryMotherOfGod", Solemnity, 1, 1, Some(White), &[]),
    ("saintsBasilTheGreatAndGregoryNazianzenBishopsAndDoctors", Memorial, 1, 2, None, &[DoctorOfTheChurch]),
    ("mostHolyNameOfJesus", OptionalMemorial, 1, 3, None, &[]),
    ("saintRaymondOfPenyafortPriest", OptionalMemorial, 1, 7, None, &[]),
    ("saintHilaryOfPoitiersBishopAndDoctor", OptionalMemorial, 1, 13, None, &[DoctorOfTheChurch]),
    ("saintAnthonyOfEgyptAbbot", Memorial, 1, 17, None, &[]),
    ("saintFabianPopeAndMartyr", OptionalMemorial, 1, 20, None, &[Martyr]),
    ("saintSebastianMartyr", OptionalMemorial, 1, 20, None, &[Martyr]),
    ("saintAgnesVirginAndMartyr", Memorial, 1, 21, None, &[Martyr]),
    ("saintVincentDeaconAndMartyr", OptionalMemorial, 1, 22, None, &[Martyr]),
    ("saintFrancisDeSalesBishopAndDoctor", Memorial, 1, 24, None, &[DoctorOfTheChurch]),
    ("conversionOfSaintPaulApostle", Feast, 1, 25, Some(White), &[Apostle]),
    ("saintsTimothyAndTitusBishops", Memorial, 1, 26, None, &[]),
    ("saintAngelaMericiVirgin", OptionalMemorial, 1, 27, None, &[]),
    ("saintThomasAquinasPriestAndDoctor", Memorial, 1, 28, None, &[DoctorOfTheChurch]),
    ("saintJohnBoscoPriest", Memorial, 1, 31, None, &[]),
    ("presentationOfTheLord", FeastOfTheLord, 2, 2, Some(White), &[Title::FeastOfTheLord]),
    ("saintBlaiseBishopAndMartyr", OptionalMemorial, 2, 3, None, &[Martyr]),
    ("saintAnsgarBishop", OptionalMemorial, 2, 3, None, &[]),
    ("saintAgathaVirginAndMartyr", Memorial, 2, 5, None, &[Martyr]),
    ("saintsPaulMikiAndCompanionsMartyrs", Memorial, 2, 6, None, &[Martyr]),
    ("saintJosephineBakhitaVirgin", OptionalMemorial, 2, 8, None, &[]),
    ("saintScholasticaVirgin", Memorial, 2, 10, None, &[]),
    ("ourLadyOfLourdes", OptionalMemorial, 2, 11, None, &[]),
    ("saintsCyrilMonkAndMethodiusBishop", Memorial, 2, 14, None, &[PatronOfEurope]),
    ("chairOfSaintPeterApostle", Feast, 2, 22, Some(White), &[Apostle]),
    ("saintPolycarpBishopAndMartyr", Memorial, 2, 23, None, &[Martyr]),
    ("saintCasimir", OptionalMemorial, 3, 4, None, &[]),
    ("saintsPerpetuaAndFelicityMartyrs", Memorial, 3, 7, None, &[Martyr]),
    ("saintJohnOfGodReligious", OptionalMemorial, 3, 8, None, &[]),
    ("saintFrancesOfRomeReligious", OptionalMemorial, 3, 9, None, &[]),
    ("saintPatrickBishop", OptionalMemorial, 3, 17, None, &[]),
    ("saintCyrilOfJerusalemBishopAndDoctor", OptionalMemorial, 3, 18, None, &[DoctorOfTheChurch]),
    ("saintJosephSpouseOfTheBlessedVirginMary", Solemnity, 3, 19, Some(White), &[]),
    ("annunciation", Solemnity, 3, 25, Some(White), &[]),
    ("saintFrancisOfPaolaHermit", OptionalMemorial, 4, 2, None, &[]),
    ("saintIsidoreBishopAndDoctor", OptionalMemorial, 4, 4, None, &[DoctorOfTheChurch]),
    ("saintVincentFerrerPriest", OptionalMemorial, 4, 5, None, &[]),
    ("saintJohnBaptistDeLaSallePriest", Memorial, 4, 7, None, &[]),
    ("saintStanislausBishopAndMartyr", Memorial, 4, 11, None, &[Martyr]),
    ("saintMartinIPopeAndMartyr", OptionalMemorial, 4, 13, None, &[Martyr]),
    ("saintAnselmOfCanterburyBishopAndDoctor", OptionalMemorial, 4, 21, None, &[DoctorOfTheChurch]),
    ("saintGeorgeMartyr", OptionalMemorial, 4, 23, None, &[Martyr]),
    ("saintAdalbertBishopAndMartyr", OptionalMemorial, 4, 23, None, &[Martyr]),
    ("saintFidelisOfSigmaringenPriestAndMartyr", OptionalMemorial, 4, 24, None, &[Martyr]),
    ("saintMarkEvangelist", Feast, 4, 25, Some(Red), &[Evangelist]),
    ("saintPeterChanelPriestAndMartyr", OptionalMemorial, 4, 28, None, &[Martyr]),
    ("saintLouisGrignonDeMontfortPriest", OptionalMemorial, 4, 28, None, &[]),
    ("saintCatherineOfSienaVirginAndDoctorOfTheChurch", Memorial, 4, 29, None, &[DoctorOfTheChurch, PatronOfEurope]),
    ("saintPiusVPope", OptionalMemorial, 4, 30, None, &[]),
    ("saintJosephTheWorker", OptionalMemorial, 5, 1, None, &[]),
    ("saintAthanasiusBishopAndDoctor", Memorial, 5, 2, None, &[DoctorOfTheChurch]),
    ("saintsPhilipAndJamesApostles", Feast, 5, 3, Some(Red), &[Apostle]),
    ("saintMatthiasApostle", Feast, 5, 14, Some(Red), &[Apostle]),
    ("saintJohnIPopeAndMartyr", OptionalMemorial, 5, 18, None, &[Martyr]),
    ("saintBernardineOfSienaPriest", OptionalMemorial, 5, 20, None, &[]),
    ("saintRitaOfCasciaReligious", OptionalMemorial, 5, 22, None, &[]),
    ("saintBedeTheVenerablePriestAndDoctor", OptionalMemorial, 5, 25, None, &[DoctorOfTheChurch]),
    ("saintPhilipNeriPriest", Memorial, 5, 26, None, &[]),
    ("saintAugustineOfCanterburyBishop", OptionalMemorial, 5, 27, None, &[]),
    ("visitationOfMary", Feast, 5, 31, Some(White), &[]),
    ("saintJustinMartyr", Memorial, 6, 1, None, &[Martyr]),
    ("saintsMarcellinusAndPeterMartyrs", OptionalMemorial, 6, 2, None, &[Martyr]),
    ("saintsCharlesLwangaAndCompanionsMartyrs", Memorial, 6, 3, None, &[Martyr]),
    ("saintBonifaceBishopAndMartyr", Memorial, 6, 5, None, &[Martyr]),
    ("saintNorbertBishop", OptionalMemorial, 6, 6, None, &[]),
    ("saintEphremDeaconAndDoctor", OptionalMemorial, 6, 9, None, &[DoctorOfTheChurch]),
    ("saintBarnabasApostle", Memorial, 6, 11, Some(Red), &[Apostle]),
    ("saintAnthonyOfPaduaPriestAndDoctor", Memorial, 6, 13, None, &[DoctorOfTheChurch]),
    ("saintAloysiusGonzagaReligious", Memorial, 6, 21, None, &[]),
    ("saintsJohnFisherBishopAndThomasMoreMartyrs", OptionalMemorial, 6, 22, None, &[Martyr]),
    ("nativityOfSaintJohnTheBaptist", Solemnity, 6, 24, Some(White), &[]),
    ("saintCyrilOfAlexandriaBishopAndDoctor", OptionalMemorial, 6, 27, None, &[DoctorOfTheChurch]),
    ("saintIrenaeusBishopAndMartyr", Memorial, 6, 28, None, &[Martyr, DoctorOfTheChurch]),
    ("peterAndPaulApostles", Solemnity, 6, 29, Some(Red), &[Apostle, Martyr]),
    ("firstMartyrsOfTheHolyRomanChurch", OptionalMemorial, 6, 30, None, &[Martyr]),
    ("saintThomasApostle", Feast, 7, 3, Some(Red), &[Apostle]),
    ("saintElizabethOfPortugal", OptionalMemorial, 7, 4, None, &[]),
    ("saintMariaGorettiVirginAndMartyr", OptionalMemorial, 7, 6, None, &[Martyr]),
    ("saintBenedictOfNursiaAbbot", Memorial, 7, 11, None, &[PatronOfEurope]),
    ("saintHenry", OptionalMemorial, 7, 13, None, &[]),
    ("saintBonaventureBishopAndDoctor", Memorial, 7, 15, None, &[DoctorOfTheChurch]),
    ("ourLadyOfMountCarmel", OptionalMemorial, 7, 16, None, &[]),
    ("saintLawrenceOfBrindisiPriestAndDoctor", OptionalMemorial, 7, 21, None, &[DoctorOfTheChurch]),
    ("saintBridgetOfSwedenReligious", OptionalMemorial, 7, 23, None, &[PatronOfEurope]),
    ("saintJamesApostle", Feast, 7, 25, Some(Red), &[Apostle]),
    ("saintsJoachimAndAnneParentsOfMary", Memorial, 7, 26, None, &[]),
    ("saintPeterChrysologusBishopAndDoctor", OptionalMemorial, 7, 30, None, &[DoctorOfTheChurch]),
    ("saintIgnatiusOfLoyolaPriest", Memorial, 7, 31, None, &[]),
    ("saintAlphonsusMariaDeLiguoriBishopAndDoctor", Memorial, 8, 1, None, &[DoctorOfTheChurch]),
    ("saintJohnMaryVianneyPriest", Memorial, 8, 4, None, &[]),
    ("dedicationOfTheBasilicaOfSaintMaryMajor", OptionalMemorial, 8, 5, None, &[]),
    ("transfiguration", FeastOfTheLord, 8, 6, Some(White), &[Title::FeastOfTheLord]),
    ("saintCajetanPriest", OptionalMemorial, 8, 7, None, &[]),
    ("saintDominicPriest", Memorial, 8, 8, None, &[]),
    ("saintTeresaBenedictaOfTheCrossEdithSteinVirginAndMartyr", OptionalMemorial, 8, 9, None, &[Martyr, PatronOfEurope]),
    ("saintLawrenceDeaconAndMartyr", Feast, 8, 10, Some(Red), &[Martyr]),
    ("saintClareVirgin", Memorial, 8, 11, None, &[]),
    ("saintMaximilianMaryKolbePriestAndMartyr", Memorial, 8, 14, None, &[Martyr]),
    ("assumption", Solemnity, 8, 15, Some(White), &[]),
    ("saintStephenOfHungary", OptionalMemorial, 8, 16, None, &[]),
    ("saintJohnEudesPriest", OptionalMemorial, 8, 19, None, &[]),
    ("saintBernardOfClairvauxAbbotAndDoctor", Memorial, 8, 20, None, &[DoctorOfTheChurch]),
    ("saintPiusXPope", Memorial, 8, 21, None, &[]),
    ("queenshipOfBlessedVirginMary", Memorial, 8, 22, None, &[]),
    ("saintRoseOfLimaVirgin", OptionalMemorial, 8, 23, None, &[]),
    ("saintBartholomewApostle", Feast, 8, 24, Some(Red), &[Apostle]),
    ("saintLouis", OptionalMemorial, 8, 25, None, &[]),
    ("saintMonica", Memorial, 8, 27, None, &[]),
    ("saintAugustineOfHippoBishopAndDoctor", Memorial, 8, 28, None, &[DoctorOfTheChurch]),
    ("passionOfSaintJohnTheBaptist", Memorial, 8, 29, Some(Red), &[Martyr]),
    ("saintGregoryTheGreatPopeAndDoctor", Memorial, 9, 3, None, &[DoctorOfTheChurch]),
    ("birthOfTheBlessedVirginMary", Feast, 9, 8, Some(White), &[]),
    ("saintPeterClaverPriest", OptionalMemorial, 9, 9, None, &[]),
    ("mostHolyNameOfMary", OptionalMemorial, 9, 12, None, &[]),
    ("saintJohnChrysostomBishopAndDoctor", Memorial, 9, 13, None, &[DoctorOfTheChurch]),
    ("exaltationOfTheHolyCross", FeastOfTheLord, 9, 14, Some(Red), &[Title::FeastOfTheLord]),
    ("ourLadyOfSorrows", Memorial, 9, 15, None, &[]),
    ("saintsCorneliusPopeAndCyprianBishopMartyrs", Memorial, 9, 16, None, &[Martyr]),
    ("saintRobertBellarmineBishopAndDoctor", OptionalMemorial, 9, 17, None, &[DoctorOfTheChurch]),
    ("saintJanuariusBishopAndMartyr", OptionalMemorial, 9, 19, None, &[Martyr]),
    ("saintsAndrewKimTaegonPriestPaulChongHasangAndCompanionsMartyrs", Memorial, 9, 20, None, &[Martyr]),
    ("saintMatthewApostleAndEvangelist", Feast, 9, 21, Some(Red), &[Apostle, Evangelist]),
    ("saintPioOfPietrelcinaPriest", Memorial, 9, 23, None, &[]),
    ("saintsCosmasAndDamianMartyrs", OptionalMemorial, 9, 26, None, &[Martyr]),
    ("saintVincentDePaulPriest", Memorial, 9, 27, None, &[]),
    ("saintWenceslausMartyr", OptionalMemorial, 9, 28, None, &[Martyr]),
    ("saintsMichaelGabrielAndRaphaelArchangels", Feast, 9, 29, Some(White), &[]),
    ("saintJeromePriestAndDoctor", Memorial, 9, 30, None, &[DoctorOfTheChurch]),
    ("saintThereseOfTheChildJesusVirginAndDoctor", Memorial, 10, 1, None, &[DoctorOfTheChurch]),
    ("guardianAngels", Memorial, 10, 2, None, &[]),
    ("saintFrancisOfAssisi", Memorial, 10, 4, None, &[]),
    ("saintBrunoPriest", OptionalMemorial, 10, 6, None, &[]),
    ("ourLadyOfTheRosary", Memorial, 10, 7, None, &[]),
    ("saintCallistusIPopeAndMartyr", OptionalMemorial, 10, 14, None, &[Martyr]),
    ("saintTeresaOfJesusVirginAndDoctor", Memorial, 10, 15, None, &[DoctorOfTheChurch]),
    ("saintIgnatiusOfAntiochBishopAndMartyr", Memorial, 10, 17, None, &[Martyr]),
    ("saintLukeEvangelist", Feast, 10, 18, Some(Red), &[Evangelist]),
    ("saintJohnOfCapistranoPriest", OptionalMemorial, 10, 23, None, &[]),
    ("saintAnthonyMaryClaretBishop", OptionalMemorial, 10, 24, None, &[]),
    ("saintsSimonAndJudeApostles", Feast, 10, 28, Some(Red), &[Apostle]),
    ("allSaints", Solemnity, 11, 1, Some(White), &[]),
    ("allSouls", Solemnity, 11, 2, Some(Purple), &[]),
    ("saintMartinDePorresReligious", OptionalMemorial, 11, 3, None, &[]),
    ("saintCharlesBorromeoBishop", Memorial, 11, 4, None, &[]),
    ("dedicationOfTheLateranBasilica", FeastOfTheLord, 11, 9, Some(White), &[]),
    ("saintLeoTheGreatPopeAndDoctor", Memorial, 11, 10, None, &[DoctorOfTheChurch]),
    ("saintMartinOfToursBishop", Memorial, 11, 11, None, &[]),
    ("saintJosaphatBishopAndMartyr", Memorial, 11, 12, None, &[Martyr]),
    ("saintAlbertTheGreatBishopAndDoctor", OptionalMemorial, 11, 15, None, &[DoctorOfTheChurch]),
    ("saintMargaretOfScotland", OptionalMemorial, 11, 16, None, &[]),
    ("saintGertrudeTheGreatVirgin", OptionalMemorial, 11, 16, None, &[]),
    ("saintElizabethOfHungaryReligious", Memorial, 11, 17, None, &[]),
    ("presentationOfTheBlessedVirginMary", Memorial, 11, 21, None, &[]),
    ("saintCeciliaVirginAndMartyr", Memorial, 11, 22, None, &[Martyr]),
    ("saintClementIPopeAndMartyr", OptionalMemorial, 11, 23, None, &[Martyr]),
    ("saintAndrewDungLacPriestAndCompanionsMartyrs", Memorial, 11, 24, None, &[Martyr]),
    ("saintAndrewApostle", Feast, 11, 30, Some(Red), &[Apostle]),
    ("saintFrancisXavierPriest", Memorial, 12, 3, None, &[]),
    ("saintJohnDamascenePriestAndDoctor", OptionalMemorial, 12, 4, None, &[DoctorOfTheChurch]),
    ("saintNicholasBishop", OptionalMemorial, 12, 6, None, &[]),
    ("saintAmbroseBishopAndDoctor", Memorial, 12, 7, None, &[DoctorOfTheChurch]),
    ("immaculateConceptionOfMary", Solemnity, 12, 8, Some(White), &[]),
    ("saintJuanDiegoCuauhtlatoatzin", OptionalMemorial, 12, 9, None, &[]),
    ("ourLadyOfGuadalupe", OptionalMemorial, 12, 12, None, &[]),
    ("saintLucyOfSyracuseVirginAndMartyr", Memorial, 12, 13, None, &[Martyr]),
    ("saintJohnOfTheCrossPriestAndDoctor", Memorial, 12, 14, None, &[DoctorOfTheChurch]),
    ("saintStephenTheFirstMartyr", Feast, 12, 26, Some(Red), &[Martyr]),
    ("saintJohnApostleAndEvangelist", Feast, 12, 27, Some(White), &[Apostle, Evangelist]),
    ("holyInnocentsMartyrs", Feast, 12, 28, Some(Red), &[Martyr]),
    ("saintThomasBecketBishopAndMartyr", OptionalMemorial, 12, 29, None, &[Martyr]),
    ("saintSylvesterIPope", OptionalMemorial, 12, 31, None, &[]),
];

/// Celebrations on a movable date.
#[rustfmt::skip]
const MOVABLE: &[(&str, Rank, MovableFeast, LiturgicalColor)] = &[
    ("epiphany", Solemnity, MovableFeast::Epiphany, White),
    ("baptismOfTheLord", FeastOfTheLord, MovableFeast::BaptismOfTheLord, White),
    ("ascension", Solemnity, MovableFeast::Ascension, White),
    ("trinitySunday", Solemnity, MovableFeast::TrinitySunday, White),
    ("corpusChristi", Solemnity, MovableFeast::CorpusChristi, White),
    ("mostSacredHeartOfJesus", Solemnity, MovableFeast::SacredHeart, White),
    ("immaculateHeartOfMary", Memorial, MovableFeast::ImmaculateHeartOfMary, White),
    ("christTheKing", Solemnity, MovableFeast::ChristTheKing, White),
    ("holyFamily", FeastOfTheLord, MovableFeast::HolyFamily, White),
];

/// First year Mary, Mother of the Church is kept.
pub const MARY_MOTHER_OF_THE_CHURCH_SINCE: i32 = 2018;

/// First year Saint John Paul II is kept.
pub const SAINT_JOHN_PAUL_II_SINCE: i32 = 2014;

/// First year Saint Mary Magdalene is a feast rather than a memorial.
pub const SAINT_MARY_MAGDALENE_FEAST_SINCE: i32 = 2016;

/// The General Roman Calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneralRoman;

impl CalendarSource for GeneralRoman {
    fn name(&self) -> &str {
        "General Roman Calendar"
    }

    fn records(&self, config: &Config) -> Vec<CalendarRecord> {
        let mut records: Vec<CalendarRecord> = FIXED
            .iter()
            .map(|&(key, rank, month, day, color, titles)| {
                let mut record = CalendarRecord::new(key, rank, DateRule::Fixed { month, day }).titles(titles);
                record.metadata.color = color;
                record
            })
            .collect();
        records.extend(
            MOVABLE
                .iter()
                .map(|&(key, rank, feast, color)| CalendarRecord::movable(key, rank, feast).color(color)),
        );

        // Celebrations added to the calendar in recent years.
        let year = config.year;
        if year >= MARY_MOTHER_OF_THE_CHURCH_SINCE {
            records.push(
                CalendarRecord::movable("maryMotherOfTheChurch", Memorial, MovableFeast::MaryMotherOfTheChurch)
                    .color(White),
            );
        }
        if year >= SAINT_JOHN_PAUL_II_SINCE {
            records.push(CalendarRecord::fixed(
                "saintJohnPaulIIPope",
                OptionalMemorial,
                Month::October,
                22,
            ));
        }
        let magdalene = if year >= SAINT_MARY_MAGDALENE_FEAST_SINCE {
            Feast
        } else {
            Memorial
        };
        records.push(
            CalendarRecord::fixed("saintMaryMagdalene", magdalene, Month::July, 22).color(White),
        );
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let config = Config::defaults(2024);
        let records = GeneralRoman.records(&config);
        let keys: HashSet<_> = records.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys.len(), records.len());
    }

    #[test]
    fn fixed_dates_exist() {
        for &(key, _, month, day, _, _) in FIXED {
            assert!(
                ordo_time::LiturgicalDate::from_ymd(2024, month, day).is_ok(),
                "{key} has an impossible date"
            );
        }
    }

    #[test]
    fn recent_additions_follow_the_year() {
        let has = |year: i32, key: &str| {
            GeneralRoman
                .records(&Config::defaults(year))
                .iter()
                .any(|r| r.key == key)
        };
        assert!(has(2018, "maryMotherOfTheChurch"));
        assert!(!has(2017, "maryMotherOfTheChurch"));
        assert!(has(2014, "saintJohnPaulIIPope"));
        assert!(!has(2013, "saintJohnPaulIIPope"));
    }
}
