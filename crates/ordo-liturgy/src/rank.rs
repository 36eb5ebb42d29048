//! `Rank`: the fixed ordering of liturgical days.

use std::fmt;
use std::str::FromStr;

use ordo_core::errors::{Error, Result};

/// Rank of a celebration.
///
/// Ordered so that a *greater* rank takes precedence:
/// `Solemnity > PrivilegedSunday > FeastOfTheLord > Feast > Sunday >
/// Memorial > OptionalMemorial > Weekday`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Rank {
    /// A ferial day.
    Weekday,
    /// Optional memorial.
    OptionalMemorial,
    /// Obligatory memorial.
    Memorial,
    /// Sunday of Christmastide or Ordinary Time.
    Sunday,
    /// Feast.
    Feast,
    /// Feast of the Lord.
    FeastOfTheLord,
    /// Sunday of Advent, Lent or Eastertide.
    PrivilegedSunday,
    /// Solemnity.
    Solemnity,
}

impl Rank {
    /// All ranks, highest first.
    pub const DESCENDING: [Rank; 8] = [
        Rank::Solemnity,
        Rank::PrivilegedSunday,
        Rank::FeastOfTheLord,
        Rank::Feast,
        Rank::Sunday,
        Rank::Memorial,
        Rank::OptionalMemorial,
        Rank::Weekday,
    ];

    /// Stable identifier, e.g. `"OPT_MEMORIAL"`.
    pub fn key(&self) -> &'static str {
        match self {
            Rank::Solemnity => "SOLEMNITY",
            Rank::PrivilegedSunday => "PRIVILEGED_SUNDAY",
            Rank::FeastOfTheLord => "FEAST_OF_THE_LORD",
            Rank::Feast => "FEAST",
            Rank::Sunday => "SUNDAY",
            Rank::Memorial => "MEMORIAL",
            Rank::OptionalMemorial => "OPT_MEMORIAL",
            Rank::Weekday => "WEEKDAY",
        }
    }

    /// Either kind of Sunday.
    pub fn is_sunday(&self) -> bool {
        matches!(self, Rank::Sunday | Rank::PrivilegedSunday)
    }

    /// Whether a losing candidate of this rank is moved to another day
    /// instead of being dropped.
    pub fn is_transferable(&self) -> bool {
        *self == Rank::Solemnity
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Rank {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        match wanted.as_str() {
            "OPTIONAL_MEMORIAL" => return Ok(Rank::OptionalMemorial),
            "FERIA" => return Ok(Rank::Weekday),
            _ => {}
        }
        Rank::DESCENDING
            .into_iter()
            .find(|rank| rank.key() == wanted)
            .ok_or_else(|| Error::Precondition(format!("unknown rank '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_order() {
        for pair in Rank::DESCENDING.windows(2) {
            assert!(pair[0] > pair[1], "{} should outrank {}", pair[0], pair[1]);
        }
        assert_eq!(Rank::DESCENDING.iter().max(), Some(&Rank::Solemnity));
    }

    #[test]
    fn parse() {
        assert_eq!("solemnity".parse::<Rank>().unwrap(), Rank::Solemnity);
        assert_eq!("OPT_MEMORIAL".parse::<Rank>().unwrap(), Rank::OptionalMemorial);
        assert_eq!("optional-memorial".parse::<Rank>().unwrap(), Rank::OptionalMemorial);
        assert_eq!("feria".parse::<Rank>().unwrap(), Rank::Weekday);
        assert!("vigil".parse::<Rank>().is_err());
    }
}
