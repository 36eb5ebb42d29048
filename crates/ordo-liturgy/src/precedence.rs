//! The table of liturgical days.
//!
//! [`Rank`] says what a celebration *is*; [`Precedence`] says which
//! celebration is observed when several fall on one day.  Most candidates
//! take their precedence from their rank and source; a few keys (the
//! Triduum, the primary days, the solemnities of the Lord) are listed
//! explicitly in a [`PrecedenceTable`], which callers may replace.

use std::collections::HashMap;

use crate::candidate::{CelebrationCandidate, Source};
use crate::rank::Rank;

/// Precedence level; a *smaller* level is observed first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Precedence {
    /// The Paschal Triduum and Easter Sunday.
    Triduum,
    /// Christmas, Epiphany, Ascension, Pentecost, the Sundays of Advent,
    /// Lent and Easter, Ash Wednesday, Holy Week and the Easter octave.
    Primary,
    /// Solemnities of the Lord that are not primary days.
    SolemnityOfTheLord,
    /// Solemnities of the general calendar.
    GeneralSolemnity,
    /// Solemnities of a country or proper calendar.
    ProperSolemnity,
    /// Feasts of the Lord.
    FeastOfTheLord,
    /// Feasts.
    Feast,
    /// Sundays of Christmastide and Ordinary Time.
    Sunday,
    /// Weekdays of Lent, of December 17–24 and of the octave of Christmas.
    PrivilegedWeekday,
    /// Obligatory memorials.
    Memorial,
    /// Optional memorials.
    OptionalMemorial,
    /// Other weekdays.
    Weekday,
}

impl Precedence {
    /// Whether a solemnity displaced to a day won by this level may be
    /// celebrated there.
    pub fn admits_transfer(&self) -> bool {
        *self >= Precedence::Feast
    }
}

/// Keys of the Triduum.
pub const TRIDUUM_KEYS: [&str; 4] = ["holyThursday", "goodFriday", "holySaturday", "easter"];

/// Keys of the primary days that do not follow from their rank.
pub const PRIMARY_KEYS: [&str; 15] = [
    "christmas",
    "epiphany",
    "ascension",
    "pentecostSunday",
    "ashWednesday",
    "mondayOfHolyWeek",
    "tuesdayOfHolyWeek",
    "wednesdayOfHolyWeek",
    "mondayOfTheOctaveOfEaster",
    "tuesdayOfTheOctaveOfEaster",
    "wednesdayOfTheOctaveOfEaster",
    "thursdayOfTheOctaveOfEaster",
    "fridayOfTheOctaveOfEaster",
    "saturdayOfTheOctaveOfEaster",
    "palmSunday",
];

/// Solemnities of the Lord of the general calendar.
pub const LORD_SOLEMNITY_KEYS: [&str; 5] = [
    "annunciation",
    "trinitySunday",
    "corpusChristi",
    "mostSacredHeartOfJesus",
    "christTheKing",
];

/// Explicit precedence of individual keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrecedenceTable {
    by_key: HashMap<String, Precedence>,
}

impl PrecedenceTable {
    /// A table with no explicit entry: precedence follows rank only.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The table of liturgical days of the Roman calendar.
    pub fn canonical() -> Self {
        let triduum = TRIDUUM_KEYS.iter().map(|k| (*k, Precedence::Triduum));
        let primary = PRIMARY_KEYS.iter().map(|k| (*k, Precedence::Primary));
        let lord = LORD_SOLEMNITY_KEYS.iter().map(|k| (*k, Precedence::SolemnityOfTheLord));
        Self {
            by_key: triduum
                .chain(primary)
                .chain(lord)
                .map(|(k, p)| (k.to_owned(), p))
                .collect(),
        }
    }

    /// Add or replace the entry of `key`.
    pub fn with(mut self, key: impl Into<String>, precedence: Precedence) -> Self {
        self.by_key.insert(key.into(), precedence);
        self
    }

    /// Explicit entry of `key`, if any.
    pub fn get(&self, key: &str) -> Option<Precedence> {
        self.by_key.get(key).copied()
    }

    /// Precedence of `candidate`; `privileged_weekday` is set for the
    /// seasonal weekday of Lent, of December 17–24 and of the octave of
    /// Christmas.
    pub fn precedence_of(&self, candidate: &CelebrationCandidate, privileged_weekday: bool) -> Precedence {
        if let Some(precedence) = self.get(&candidate.key) {
            return precedence;
        }
        match candidate.rank {
            Rank::Solemnity => match candidate.source {
                Source::Season | Source::General => Precedence::GeneralSolemnity,
                Source::Country | Source::Proper => Precedence::ProperSolemnity,
            },
            Rank::PrivilegedSunday => Precedence::Primary,
            Rank::FeastOfTheLord => Precedence::FeastOfTheLord,
            Rank::Feast => Precedence::Feast,
            Rank::Sunday => Precedence::Sunday,
            Rank::Memorial => Precedence::Memorial,
            Rank::OptionalMemorial => Precedence::OptionalMemorial,
            Rank::Weekday if privileged_weekday && candidate.is_seasonal() => {
                Precedence::PrivilegedWeekday
            }
            Rank::Weekday => Precedence::Weekday,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::Metadata;
    use ordo_time::LiturgicalDate;

    fn candidate(key: &str, rank: Rank, source: Source) -> CelebrationCandidate {
        let date = LiturgicalDate::from_ymd(2024, 3, 19).unwrap();
        CelebrationCandidate::new(key, rank, source, date, Metadata::default())
    }

    #[test]
    fn explicit_keys_win_over_rank() {
        let table = PrecedenceTable::canonical();
        let ash = candidate("ashWednesday", Rank::Weekday, Source::Season);
        assert_eq!(table.precedence_of(&ash, true), Precedence::Primary);
        let friday = candidate("goodFriday", Rank::Solemnity, Source::Season);
        assert_eq!(table.precedence_of(&friday, false), Precedence::Triduum);
    }

    #[test]
    fn solemnities_by_source() {
        let table = PrecedenceTable::canonical();
        let general = candidate("saintJoseph", Rank::Solemnity, Source::General);
        let country = candidate("ourLadyMotherOfMercy", Rank::Solemnity, Source::Country);
        assert_eq!(table.precedence_of(&general, false), Precedence::GeneralSolemnity);
        assert_eq!(table.precedence_of(&country, false), Precedence::ProperSolemnity);
    }

    #[test]
    fn solemnities_of_the_lord_come_before_other_solemnities() {
        let table = PrecedenceTable::canonical();
        let heart = candidate("mostSacredHeartOfJesus", Rank::Solemnity, Source::General);
        let baptist = candidate("nativityOfSaintJohnTheBaptist", Rank::Solemnity, Source::General);
        assert_eq!(table.precedence_of(&heart, false), Precedence::SolemnityOfTheLord);
        assert!(table.precedence_of(&heart, false) < table.precedence_of(&baptist, false));
        assert_eq!(
            PrecedenceTable::empty().precedence_of(&heart, false),
            Precedence::GeneralSolemnity
        );
    }

    #[test]
    fn only_seasonal_weekdays_are_privileged() {
        let table = PrecedenceTable::empty();
        let lent = candidate("tuesdayOfThe4thWeekOfLent", Rank::Weekday, Source::Season);
        let other = candidate("someWeekday", Rank::Weekday, Source::Proper);
        assert_eq!(table.precedence_of(&lent, true), Precedence::PrivilegedWeekday);
        assert_eq!(table.precedence_of(&other, true), Precedence::Weekday);
        assert!(Precedence::PrivilegedWeekday < Precedence::Memorial);
    }

    #[test]
    fn replaceable_entries() {
        let table = PrecedenceTable::canonical().with("saintPatrick", Precedence::ProperSolemnity);
        let patrick = candidate("saintPatrick", Rank::Memorial, Source::Proper);
        assert_eq!(table.precedence_of(&patrick, false), Precedence::ProperSolemnity);
        assert!(PrecedenceTable::empty().get("christmas").is_none());
    }
}
