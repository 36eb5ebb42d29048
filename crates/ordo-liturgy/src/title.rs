//! Titles attached to a celebration.

use std::fmt;

/// A title qualifying the person or mystery celebrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Title {
    /// Martyr; celebrated in red unless stated otherwise.
    Martyr,
    /// Apostle.
    Apostle,
    /// Evangelist.
    Evangelist,
    /// Doctor of the Church.
    DoctorOfTheChurch,
    /// Patron of Europe.
    PatronOfEurope,
    /// Feast of the Lord.
    FeastOfTheLord,
}

impl Title {
    /// Stable identifier.
    pub fn key(&self) -> &'static str {
        match self {
            Title::Martyr => "MARTYR",
            Title::Apostle => "APOSTLE",
            Title::Evangelist => "EVANGELIST",
            Title::DoctorOfTheChurch => "DOCTOR_OF_THE_CHURCH",
            Title::PatronOfEurope => "PATRON_OF_EUROPE",
            Title::FeastOfTheLord => "FEAST_OF_THE_LORD",
        }
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
