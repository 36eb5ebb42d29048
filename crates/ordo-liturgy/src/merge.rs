//! Layered merge of calendar sources.
//!
//! Layers are folded left to right by key: a record whose key is already
//! present replaces the earlier one (keeping its declaration position), a
//! patch changes only the fields it sets, and every other key accumulates.

use std::collections::HashMap;

use ordo_core::errors::Result;
use ordo_core::Config;
use ordo_time::{DateRange, MovableDates};

use crate::candidate::{CelebrationCandidate, Source};
use crate::source::{CalendarRecord, CalendarSource, RecordPatch};

/// The records and patches one source contributes.
#[derive(Debug, Clone)]
pub struct Layer {
    /// Where the layer comes from.
    pub source: Source,
    /// Name of the calendar.
    pub name: String,
    /// Full records.
    pub records: Vec<CalendarRecord>,
    /// Partial overrides.
    pub patches: Vec<RecordPatch>,
}

impl Layer {
    /// Read a layer out of `calendar`.
    pub fn from_source(source: Source, calendar: &dyn CalendarSource, config: &Config) -> Self {
        Self {
            source,
            name: calendar.name().to_owned(),
            records: calendar.records(config),
            patches: calendar.patches(config),
        }
    }
}

/// A record after merging, with the layer that last touched it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedRecord {
    /// The effective record.
    pub record: CalendarRecord,
    /// Most specific source that defined or changed it.
    pub source: Source,
    /// Position of the first declaration of the key.
    pub order: usize,
}

/// Fold `layers` by key.
#[tracing::instrument(level = "debug", skip_all, fields(layers = layers.len()))]
pub fn merge_layers(layers: &[Layer]) -> Vec<MergedRecord> {
    let mut merged: Vec<MergedRecord> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for layer in layers {
        for record in &layer.records {
            match index.get(&record.key) {
                Some(&i) => {
                    tracing::trace!(key = %record.key, layer = %layer.name, "record overridden");
                    merged[i].record = record.clone();
                    merged[i].source = layer.source;
                }
                None => {
                    let order = merged.len();
                    index.insert(record.key.clone(), order);
                    merged.push(MergedRecord {
                        record: record.clone(),
                        source: layer.source,
                        order,
                    });
                }
            }
        }
        for patch in &layer.patches {
            if let Some(&i) = index.get(&patch.key) {
                patch.apply_to(&mut merged[i].record);
                merged[i].source = layer.source;
            } else if let Some(record) = patch.to_record() {
                let order = merged.len();
                index.insert(record.key.clone(), order);
                merged.push(MergedRecord {
                    record,
                    source: layer.source,
                    order,
                });
            } else {
                tracing::debug!(key = %patch.key, layer = %layer.name, "patch of an unknown key ignored");
            }
        }
    }
    merged
}

/// Place every merged record on its date(s) inside `range`.
///
/// Each civil year the range touches is considered once; the movable dates
/// of that year must be among `movables`.
///
/// # Errors
/// [`ordo_core::Error::MissingSource`] when a movable rule has no computed
/// date, [`ordo_core::Error::InvalidDate`] for an impossible fixed date.
pub fn place_records(
    merged: &[MergedRecord],
    movables: &[MovableDates],
    range: DateRange,
) -> Result<Vec<CelebrationCandidate>> {
    let mut candidates = Vec::with_capacity(merged.len());
    for year in range.start.year()..=range.end.year() {
        let table = movables.iter().find(|dates| dates.year() == year);
        for entry in merged {
            let record = &entry.record;
            let Some(date) = record.date.date_in(year, table, &record.key)? else {
                tracing::trace!(key = %record.key, year, "no such day this year");
                continue;
            };
            if range.contains(date) {
                candidates.push(
                    CelebrationCandidate::new(
                        record.key.clone(),
                        record.rank,
                        entry.source,
                        date,
                        record.metadata.clone(),
                    )
                    .with_order(entry.order),
                );
            }
        }
    }
    candidates.sort_by_key(|c| (c.date, c.order));
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::Rank;
    use ordo_core::Error;
    use ordo_time::{LiturgicalDate, Month, MovableFeast};

    fn layer(source: Source, records: Vec<CalendarRecord>, patches: Vec<RecordPatch>) -> Layer {
        Layer {
            source,
            name: source.to_string(),
            records,
            patches,
        }
    }

    #[test]
    fn later_layers_override_by_key() {
        let general = layer(
            Source::General,
            vec![
                CalendarRecord::fixed("a", Rank::Memorial, Month::March, 1),
                CalendarRecord::fixed("b", Rank::OptionalMemorial, Month::March, 2),
            ],
            vec![],
        );
        let country = layer(
            Source::Country,
            vec![
                CalendarRecord::fixed("b", Rank::Feast, Month::March, 3),
                CalendarRecord::fixed("c", Rank::Memorial, Month::March, 4),
            ],
            vec![],
        );
        let proper = layer(
            Source::Proper,
            vec![],
            vec![RecordPatch::new("a").rank(Rank::Solemnity)],
        );
        let merged = merge_layers(&[general, country, proper]);
        let keys: Vec<_> = merged.iter().map(|m| m.record.key.as_str()).collect();
        assert_eq!(keys, ["a", "b", "c"]);
        assert_eq!(merged[0].record.rank, Rank::Solemnity);
        assert_eq!(merged[0].source, Source::Proper);
        assert_eq!(merged[1].record.rank, Rank::Feast);
        assert_eq!(merged[1].source, Source::Country);
        assert_eq!(merged[1].order, 1);
        assert_eq!(merged[2].source, Source::Country);
    }

    #[test]
    fn placement_spans_two_civil_years() {
        let merged = merge_layers(&[layer(
            Source::General,
            vec![CalendarRecord::fixed("andrew", Rank::Feast, Month::November, 30)],
            vec![],
        )]);
        let movables = [
            MovableDates::compute(2023, false, false, false).unwrap(),
            MovableDates::compute(2024, false, false, false).unwrap(),
        ];
        let range = DateRange::new(
            LiturgicalDate::from_ymd(2023, 11, 1).unwrap(),
            LiturgicalDate::from_ymd(2024, 12, 31).unwrap(),
        );
        let placed = place_records(&merged, &movables, range).unwrap();
        assert_eq!(placed.len(), 2);
        assert_eq!(placed[0].date.year(), 2023);
        assert_eq!(placed[1].date.year(), 2024);
    }

    #[test]
    fn movable_record_without_dates_is_missing() {
        let merged = merge_layers(&[layer(
            Source::General,
            vec![CalendarRecord::movable("ascension", Rank::Solemnity, MovableFeast::Ascension)],
            vec![],
        )]);
        let range = DateRange::new(
            LiturgicalDate::from_ymd(2024, 1, 1).unwrap(),
            LiturgicalDate::from_ymd(2024, 12, 31).unwrap(),
        );
        assert!(matches!(
            place_records(&merged, &[], range),
            Err(Error::MissingSource { .. })
        ));
    }
}
