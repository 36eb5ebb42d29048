//! `LiturgicalCalendar`: the end-to-end computation of a year.

use std::collections::BTreeMap;
use std::sync::Arc;

use ordo_core::errors::{Error, Result};
use ordo_core::{Config, ConfigOverrides};
use ordo_time::LiturgicalDate;

use crate::assembler::{assemble_day, ResolvedDay};
use crate::calendars::GeneralRoman;
use crate::candidate::Source;
use crate::merge::{merge_layers, place_records, Layer};
use crate::precedence::PrecedenceTable;
use crate::proper_of_time::proper_of_time;
use crate::query::{Grouped, Query};
use crate::resolver::{resolve_range, DaySlot};
use crate::season::SeasonSkeleton;
use crate::source::CalendarSource;

/// A calendar made of the general calendar, an optional country calendar
/// and an optional proper calendar.
///
/// # Example
/// ```
/// use ordo_core::Config;
/// use ordo_liturgy::calendars::Lithuania;
/// use ordo_liturgy::LiturgicalCalendar;
///
/// let calendar = LiturgicalCalendar::new().with_country(Lithuania);
/// let days = calendar.compute(&Config::defaults(2024)).unwrap();
/// assert_eq!(days.len(), 366);
/// let casimir = &days[63];
/// assert_eq!(casimir.key(), "saintCasimir");
/// ```
#[derive(Debug, Clone)]
pub struct LiturgicalCalendar {
    general: Arc<dyn CalendarSource>,
    country: Option<Arc<dyn CalendarSource>>,
    proper: Option<Arc<dyn CalendarSource>>,
    precedence: PrecedenceTable,
}

impl Default for LiturgicalCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl LiturgicalCalendar {
    /// The General Roman Calendar with the canonical precedence table.
    pub fn new() -> Self {
        Self::with_general(GeneralRoman)
    }

    /// Use `general` in place of the General Roman Calendar.
    pub fn with_general(general: impl CalendarSource + 'static) -> Self {
        Self {
            general: Arc::new(general),
            country: None,
            proper: None,
            precedence: PrecedenceTable::canonical(),
        }
    }

    /// Layer a country calendar over the general one.
    pub fn with_country(mut self, country: impl CalendarSource + 'static) -> Self {
        self.country = Some(Arc::new(country));
        self
    }

    /// Layer a proper (diocesan, religious) calendar over everything else.
    pub fn with_proper(mut self, proper: impl CalendarSource + 'static) -> Self {
        self.proper = Some(Arc::new(proper));
        self
    }

    /// Replace the precedence table.
    pub fn with_precedence_table(mut self, table: PrecedenceTable) -> Self {
        self.precedence = table;
        self
    }

    /// The precedence table in use.
    pub fn precedence_table(&self) -> &PrecedenceTable {
        &self.precedence
    }

    /// Resolve `user` against the defaults of the general and country
    /// calendars.
    ///
    /// # Errors
    /// See [`Config::resolve`].
    pub fn resolve_config(&self, user: &ConfigOverrides, fallback_year: i32) -> Result<Config> {
        let general = self.general.default_config().unwrap_or_default();
        let country = self.country.as_ref().and_then(|c| c.default_config());
        Config::resolve(&general, country.as_ref(), user, fallback_year)
    }

    fn layers(&self, config: &Config) -> Vec<Layer> {
        let calendars = [Some(&self.general), self.country.as_ref(), self.proper.as_ref()];
        Source::LAYERS
            .into_iter()
            .zip(calendars)
            .filter_map(|(source, calendar)| calendar.map(|c| Layer::from_source(source, c.as_ref(), config)))
            .collect()
    }

    /// Every day of the year described by `config`, in date order.
    ///
    /// # Errors
    /// * [`Error::InvalidYear`] / [`Error::InvalidConfiguration`] from
    ///   [`Config::validate`].
    /// * [`Error::MissingSource`] when a record refers to a movable date
    ///   that was not computed.
    /// * [`Error::UnresolvedTransfer`] when a displaced solemnity finds no
    ///   free day.
    #[tracing::instrument(level = "debug", skip_all, fields(year = config.year, calendar_type = ?config.calendar_type))]
    pub fn compute(&self, config: &Config) -> Result<Vec<ResolvedDay>> {
        let skeleton = SeasonSkeleton::build(config)?;
        let range = skeleton.range();
        let season_days = proper_of_time(&skeleton)?;

        let merged = merge_layers(&self.layers(config));
        let placed = place_records(&merged, skeleton.movable_dates(), range)?;

        let mut slots: BTreeMap<LiturgicalDate, DaySlot> = season_days
            .iter()
            .map(|day| {
                let slot = DaySlot {
                    date: day.date,
                    privileged: day.privileged,
                    candidates: vec![day.candidate()],
                };
                (day.date, slot)
            })
            .collect();
        for candidate in placed {
            let slot = slots
                .get_mut(&candidate.date)
                .ok_or_else(|| Error::Precondition(format!("{} is outside the computed range", candidate.date)))?;
            slot.candidates.push(candidate);
        }

        let resolved = resolve_range(&self.precedence, slots, range)?;
        let days = season_days
            .iter()
            .zip(resolved)
            .map(|(season_day, (_, resolution))| assemble_day(&skeleton, season_day, resolution))
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(days = days.len(), "calendar computed");
        Ok(days)
    }

    /// Compute the year of `config` and apply `query` to it.
    pub fn query(&self, config: &Config, query: &Query) -> Result<Grouped> {
        Ok(query.apply(&self.compute(config)?))
    }

    /// Compute every year of `years` with the settings of `config`, in
    /// parallel.
    ///
    /// Results are returned in the order of `years`; the first failing year
    /// aborts the whole computation.
    #[cfg(feature = "rayon")]
    pub fn compute_years(
        &self,
        config: &Config,
        years: std::ops::RangeInclusive<i32>,
    ) -> Result<Vec<(i32, Vec<ResolvedDay>)>> {
        use rayon::prelude::*;

        years
            .into_par_iter()
            .map(|year| {
                let config = Config {
                    year,
                    ..config.clone()
                };
                self.compute(&config).map(|days| (year, days))
            })
            .collect()
    }
}
