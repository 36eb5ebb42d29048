//! Calendar configuration.
//!
//! A [`Config`] is fully resolved: every switch has a value.  It is produced
//! by layering [`ConfigOverrides`] (general defaults < country defaults <
//! user overrides) with [`Config::resolve`], or built directly with
//! [`ConfigBuilder`].

use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, Result};
use crate::fail;

/// Smallest year the engine accepts (first full Gregorian year).
pub const MIN_YEAR: i32 = 1583;

/// Largest year the engine accepts.
pub const MAX_YEAR: i32 = 9999;

/// How the end of Christmastide is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ChristmastideEnds {
    /// Christmastide ends on January 6.
    Traditional,
    /// Christmastide ends on the feast of the Baptism of the Lord.
    #[default]
    OrdinaryBaptism,
    /// Christmastide ends on the Presentation of the Lord (February 2).
    ExtraordinaryPresentation,
}

impl FromStr for ChristmastideEnds {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "t" | "traditional" => Ok(Self::Traditional),
            "o" | "ordinary-baptism" | "ordinary" => Ok(Self::OrdinaryBaptism),
            "e" | "extraordinary-presentation" | "extraordinary" => {
                Ok(Self::ExtraordinaryPresentation)
            }
            other => fail!("unrecognised christmastide end mode '{other}'"),
        }
    }
}

impl fmt::Display for ChristmastideEnds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Traditional => "traditional",
            Self::OrdinaryBaptism => "ordinary-baptism",
            Self::ExtraordinaryPresentation => "extraordinary-presentation",
        };
        f.write_str(s)
    }
}

/// Which span of days a calendar covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CalendarType {
    /// January 1 to December 31.
    #[default]
    Civil,
    /// First Sunday of Advent of the preceding year up to the Saturday
    /// before the first Sunday of Advent of the requested year.
    Liturgical,
}

impl FromStr for CalendarType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "civil" | "calendar" => Ok(Self::Civil),
            "liturgical" => Ok(Self::Liturgical),
            other => fail!("unrecognised calendar type '{other}'"),
        }
    }
}

/// A fully resolved calendar configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// The year to compute.
    pub year: i32,
    /// Locale passed to the localization collaborator.
    pub locale: String,
    /// End-of-Christmastide mode.
    pub christmastide_ends: ChristmastideEnds,
    /// Epiphany is fixed to January 6 instead of the Sunday between Jan 2 and 8.
    pub epiphany_on_jan6: bool,
    /// Whether the days after Epiphany belong to Christmastide.
    pub christmastide_includes_the_season_of_epiphany: bool,
    /// Corpus Christi on Thursday instead of the following Sunday.
    pub corpus_christi_on_thursday: bool,
    /// Ascension on the 7th Sunday of Easter instead of Thursday.
    pub ascension_on_sunday: bool,
    /// Civil or liturgical year.
    pub calendar_type: CalendarType,
}

impl Config {
    /// The general-calendar defaults for `year`.
    pub fn defaults(year: i32) -> Self {
        Self {
            year,
            locale: "en".to_owned(),
            christmastide_ends: ChristmastideEnds::OrdinaryBaptism,
            epiphany_on_jan6: false,
            christmastide_includes_the_season_of_epiphany: true,
            corpus_christi_on_thursday: false,
            ascension_on_sunday: false,
            calendar_type: CalendarType::Civil,
        }
    }

    /// Resolve a configuration from layered overrides.
    ///
    /// Layers are applied in order: `general` defaults, then `country`
    /// defaults (if any), then the `user` overrides.  Unset fields fall back
    /// to [`Config::defaults`]; a missing year falls back to `fallback_year`.
    pub fn resolve(
        general: &ConfigOverrides,
        country: Option<&ConfigOverrides>,
        user: &ConfigOverrides,
        fallback_year: i32,
    ) -> Result<Self> {
        let mut merged = general.clone();
        if let Some(country) = country {
            merged = merged.merged_with(country);
        } else {
            tracing::debug!("no country defaults, using the general calendar defaults");
        }
        merged = merged.merged_with(user);

        let base = Self::defaults(merged.year.unwrap_or(fallback_year));
        let config = Self {
            year: base.year,
            locale: merged.locale.unwrap_or(base.locale),
            christmastide_ends: merged.christmastide_ends.unwrap_or(base.christmastide_ends),
            epiphany_on_jan6: merged.epiphany_on_jan6.unwrap_or(base.epiphany_on_jan6),
            christmastide_includes_the_season_of_epiphany: merged
                .christmastide_includes_the_season_of_epiphany
                .unwrap_or(base.christmastide_includes_the_season_of_epiphany),
            corpus_christi_on_thursday: merged
                .corpus_christi_on_thursday
                .unwrap_or(base.corpus_christi_on_thursday),
            ascension_on_sunday: merged.ascension_on_sunday.unwrap_or(base.ascension_on_sunday),
            calendar_type: merged.calendar_type.unwrap_or(base.calendar_type),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration is usable.
    ///
    /// # Errors
    /// * [`Error::InvalidYear`] when the year (or, for a liturgical calendar,
    ///   the preceding year that holds its Advent) is out of range.
    /// * [`Error::InvalidConfiguration`] when the switches contradict each
    ///   other.
    pub fn validate(&self) -> Result<()> {
        let min = match self.calendar_type {
            CalendarType::Civil => MIN_YEAR,
            CalendarType::Liturgical => MIN_YEAR + 1,
        };
        if !(min..=MAX_YEAR).contains(&self.year) {
            return Err(Error::InvalidYear {
                year: self.year,
                min,
                max: MAX_YEAR,
            });
        }
        if self.christmastide_ends == ChristmastideEnds::ExtraordinaryPresentation
            && !self.christmastide_includes_the_season_of_epiphany
        {
            fail!(
                "christmastide cannot end on the Presentation while excluding the season of Epiphany"
            );
        }
        if self.locale.trim().is_empty() {
            fail!("locale must not be empty");
        }
        Ok(())
    }
}

/// A partial configuration layer; `None` means "inherit".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConfigOverrides {
    /// See [`Config::year`].
    pub year: Option<i32>,
    /// See [`Config::locale`].
    pub locale: Option<String>,
    /// See [`Config::christmastide_ends`].
    pub christmastide_ends: Option<ChristmastideEnds>,
    /// See [`Config::epiphany_on_jan6`].
    pub epiphany_on_jan6: Option<bool>,
    /// See [`Config::christmastide_includes_the_season_of_epiphany`].
    pub christmastide_includes_the_season_of_epiphany: Option<bool>,
    /// See [`Config::corpus_christi_on_thursday`].
    pub corpus_christi_on_thursday: Option<bool>,
    /// See [`Config::ascension_on_sunday`].
    pub ascension_on_sunday: Option<bool>,
    /// See [`Config::calendar_type`].
    pub calendar_type: Option<CalendarType>,
}

impl ConfigOverrides {
    /// Return `self` with every field that `other` sets replaced by `other`'s value.
    pub fn merged_with(self, other: &ConfigOverrides) -> Self {
        Self {
            year: other.year.or(self.year),
            locale: other.locale.clone().or(self.locale),
            christmastide_ends: other.christmastide_ends.or(self.christmastide_ends),
            epiphany_on_jan6: other.epiphany_on_jan6.or(self.epiphany_on_jan6),
            christmastide_includes_the_season_of_epiphany: other
                .christmastide_includes_the_season_of_epiphany
                .or(self.christmastide_includes_the_season_of_epiphany),
            corpus_christi_on_thursday: other
                .corpus_christi_on_thursday
                .or(self.corpus_christi_on_thursday),
            ascension_on_sunday: other.ascension_on_sunday.or(self.ascension_on_sunday),
            calendar_type: other.calendar_type.or(self.calendar_type),
        }
    }
}

/// Builder for [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Begin building a configuration for `year` from the general defaults.
    pub fn new(year: i32) -> Self {
        Self {
            config: Config::defaults(year),
        }
    }

    /// Set the locale.
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.config.locale = locale.into();
        self
    }

    /// Set the end-of-Christmastide mode.
    pub fn christmastide_ends(mut self, mode: ChristmastideEnds) -> Self {
        self.config.christmastide_ends = mode;
        self
    }

    /// Fix Epiphany to January 6.
    pub fn epiphany_on_jan6(mut self, flag: bool) -> Self {
        self.config.epiphany_on_jan6 = flag;
        self
    }

    /// Include the days after Epiphany in Christmastide.
    pub fn christmastide_includes_the_season_of_epiphany(mut self, flag: bool) -> Self {
        self.config.christmastide_includes_the_season_of_epiphany = flag;
        self
    }

    /// Celebrate Corpus Christi on Thursday.
    pub fn corpus_christi_on_thursday(mut self, flag: bool) -> Self {
        self.config.corpus_christi_on_thursday = flag;
        self
    }

    /// Celebrate the Ascension on the 7th Sunday of Easter.
    pub fn ascension_on_sunday(mut self, flag: bool) -> Self {
        self.config.ascension_on_sunday = flag;
        self
    }

    /// Select a civil or liturgical year.
    pub fn calendar_type(mut self, calendar_type: CalendarType) -> Self {
        self.config.calendar_type = calendar_type;
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
