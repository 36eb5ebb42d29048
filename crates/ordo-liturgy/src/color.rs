//! Liturgical colors.

use std::fmt;

/// Vestment color of a liturgical day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum LiturgicalColor {
    /// Feasts of the Lord, Mary, and saints who were not martyrs.
    White,
    /// Passion, Pentecost, apostles and martyrs.
    Red,
    /// Ordinary Time.
    Green,
    /// Advent and Lent.
    Purple,
    /// Gaudete and Laetare Sundays.
    Rose,
}

impl LiturgicalColor {
    /// Stable identifier.
    pub fn key(&self) -> &'static str {
        match self {
            LiturgicalColor::White => "WHITE",
            LiturgicalColor::Red => "RED",
            LiturgicalColor::Green => "GREEN",
            LiturgicalColor::Purple => "PURPLE",
            LiturgicalColor::Rose => "ROSE",
        }
    }
}

impl fmt::Display for LiturgicalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
