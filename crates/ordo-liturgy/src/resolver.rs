//! Precedence resolution: one observed celebration per day.
//!
//! Candidates of a day are ordered by precedence, then rank, then source
//! specificity, then declaration order.  The first is observed.  Losing
//! solemnities are transferred to the next free day; other losers above
//! the ferial rank are kept as commemorations.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use ordo_core::ensure;
use ordo_core::errors::{Error, Result};
use ordo_time::{DateRange, LiturgicalDate};

use crate::candidate::CelebrationCandidate;
use crate::precedence::{Precedence, PrecedenceTable};
use crate::rank::Rank;

/// How many days after its date a displaced solemnity may be moved.
pub const MAX_TRANSFER_PROBES: u32 = 30;

/// The candidates of one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySlot {
    /// The day.
    pub date: LiturgicalDate,
    /// Whether the seasonal weekday is privileged.
    pub privileged: bool,
    /// Every candidate, seasonal one included.
    pub candidates: Vec<CelebrationCandidate>,
}

/// Outcome of resolving one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayResolution {
    /// Observed celebration.
    pub winner: CelebrationCandidate,
    /// Commemorated celebrations, strongest first.
    pub superseded: Vec<CelebrationCandidate>,
    /// Solemnities that must move to another day.
    pub transfers: Vec<CelebrationCandidate>,
}

/// Resolve a single day.
///
/// # Errors
/// [`Error::Precondition`] if the slot has no candidate.
pub fn resolve_day(table: &PrecedenceTable, slot: &DaySlot) -> Result<DayResolution> {
    ensure!(!slot.candidates.is_empty(), "no candidate on {}", slot.date);

    let mut ranked: Vec<(Precedence, &CelebrationCandidate)> = slot
        .candidates
        .iter()
        .map(|c| (table.precedence_of(c, slot.privileged), c))
        .collect();
    ranked.sort_by_key(|(precedence, c)| (*precedence, Reverse(c.rank), Reverse(c.source), c.order));

    let mut ranked = ranked.into_iter().map(|(_, c)| c);
    let winner = ranked
        .next()
        .cloned()
        .ok_or_else(|| Error::Precondition(format!("no candidate on {}", slot.date)))?;

    let mut superseded = Vec::new();
    let mut transfers = Vec::new();
    for loser in ranked {
        match loser.rank {
            Rank::Solemnity if !loser.is_seasonal() => transfers.push(loser.clone()),
            Rank::Weekday => {}
            _ => superseded.push(loser.clone()),
        }
    }
    Ok(DayResolution {
        winner,
        superseded,
        transfers,
    })
}

/// Whether a displaced solemnity may be celebrated on a day won by
/// `winner`.
///
/// Days won by anything above a feast are not free.  Sundays are never
/// free, not even those of Ordinary Time whose rank is below a feast: a
/// transferred solemnity does not take a Sunday away from its season.
pub fn is_free_day(table: &PrecedenceTable, slot: &DaySlot, winner: &CelebrationCandidate) -> bool {
    !slot.date.is_sunday()
        && winner.rank <= Rank::Feast
        && table.precedence_of(winner, slot.privileged).admits_transfer()
}

/// Resolve every day of `range`, moving displaced solemnities forward.
///
/// Days are processed in date order.  A transferred candidate is added to
/// the first free day after its date, so it is resolved again together
/// with the candidates already there.
///
/// # Errors
/// * [`Error::UnresolvedTransfer`] when no free day exists within
///   [`MAX_TRANSFER_PROBES`] days or before the end of `range`.
/// * [`Error::Precondition`] when a day of `range` has no slot.
#[tracing::instrument(level = "debug", skip_all, fields(start = %range.start, end = %range.end))]
pub fn resolve_range(
    table: &PrecedenceTable,
    mut slots: BTreeMap<LiturgicalDate, DaySlot>,
    range: DateRange,
) -> Result<Vec<(DaySlot, DayResolution)>> {
    let mut resolved = Vec::with_capacity(range.len());
    for date in range.iter() {
        let slot = slots
            .remove(&date)
            .ok_or_else(|| Error::Precondition(format!("no candidate on {date}")))?;
        let resolution = resolve_day(table, &slot)?;
        for displaced in &resolution.transfers {
            let target = find_free_day(table, &slots, date, range)
                .ok_or_else(|| Error::UnresolvedTransfer {
                    key: displaced.key.clone(),
                    from: date.to_string(),
                    window: transfer_window(date, range),
                })??;
            tracing::debug!(key = %displaced.key, from = %date, to = %target, "solemnity transferred");
            if let Some(slot) = slots.get_mut(&target) {
                slot.candidates.push(displaced.transfer_to(target));
            }
        }
        resolved.push((slot, resolution));
    }
    Ok(resolved)
}

fn transfer_window(date: LiturgicalDate, range: DateRange) -> u32 {
    let remaining = (range.end - date).max(0) as u32;
    remaining.min(MAX_TRANSFER_PROBES)
}

fn find_free_day(
    table: &PrecedenceTable,
    slots: &BTreeMap<LiturgicalDate, DaySlot>,
    from: LiturgicalDate,
    range: DateRange,
) -> Option<Result<LiturgicalDate>> {
    for step in 1..=transfer_window(from, range) as i32 {
        let date = match from.add_days(step) {
            Ok(date) => date,
            Err(e) => return Some(Err(e)),
        };
        let slot = slots.get(&date)?;
        match resolve_day(table, slot) {
            Ok(provisional) if is_free_day(table, slot, &provisional.winner) => return Some(Ok(date)),
            Ok(_) => {}
            Err(e) => return Some(Err(e)),
        }
    }
    None
}
