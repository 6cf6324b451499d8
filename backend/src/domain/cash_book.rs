//! Core cash-book logic: aggregation and position-addressed mutation.
//!
//! Everything here is a pure transform over an explicit entry sequence.
//! There is no hidden state; the storage layer decides when a transformed
//! sequence is persisted. Position (zero-based index) is the only form of
//! per-entry addressing, so `add` and `delete` shift the positions of
//! later entries and any stale position held by a caller becomes invalid.

use std::collections::BTreeMap;

use shared::{CashEntry, CashFlowTotals, Category, MonthFlow, MonthKey, MonthlyBreakdown};

use crate::errors::{LedgerError, Result};

/// Sum the sequence into total inflow, total outflow, and net balance.
///
/// Entries without a date still contribute; a date is only needed for the
/// monthly view. Negative amounts are not rejected anywhere in this design,
/// so they simply contribute with their sign.
pub fn totals(entries: &[CashEntry]) -> CashFlowTotals {
    let mut inflow = 0;
    let mut outflow = 0;
    for entry in entries {
        match entry.category {
            Category::Inflow => inflow += entry.amount,
            Category::Outflow => outflow += entry.amount,
        }
    }
    CashFlowTotals {
        inflow,
        outflow,
        balance: inflow - outflow,
    }
}

/// Group amounts by (calendar month, category), months in chronological
/// order, missing cells as 0.
///
/// Entries without a date are excluded from this view only; they cannot be
/// placed in a month but still count toward [`totals`].
pub fn monthly_breakdown(entries: &[CashEntry]) -> MonthlyBreakdown {
    let mut buckets: BTreeMap<MonthKey, (i64, i64)> = BTreeMap::new();
    for entry in entries {
        let Some(date) = entry.date else { continue };
        let cell = buckets.entry(MonthKey::from_date(date)).or_default();
        match entry.category {
            Category::Inflow => cell.0 += entry.amount,
            Category::Outflow => cell.1 += entry.amount,
        }
    }
    MonthlyBreakdown {
        months: buckets
            .into_iter()
            .map(|(month, (inflow, outflow))| MonthFlow {
                month,
                inflow,
                outflow,
            })
            .collect(),
    }
}

/// Append an entry at the end of the sequence. No deduplication.
pub fn add(mut entries: Vec<CashEntry>, entry: CashEntry) -> Vec<CashEntry> {
    entries.push(entry);
    entries
}

/// Replace the entry at `position` entirely. Not a field merge: the stored
/// entry becomes exactly `entry`.
pub fn update(mut entries: Vec<CashEntry>, position: usize, entry: CashEntry) -> Result<Vec<CashEntry>> {
    let len = entries.len();
    let slot = entries
        .get_mut(position)
        .ok_or(LedgerError::OutOfRange { position, len })?;
    *slot = entry;
    Ok(entries)
}

/// Remove the entry at `position` and close the gap, shifting every later
/// entry down by one.
pub fn delete(mut entries: Vec<CashEntry>, position: usize) -> Result<Vec<CashEntry>> {
    if position >= entries.len() {
        return Err(LedgerError::OutOfRange {
            position,
            len: entries.len(),
        });
    }
    entries.remove(position);
    Ok(entries)
}

/// Copy of the sequence ordered for display: newest date first, entries
/// without a date last. The stored sequence itself keeps insertion order
/// because position is identity.
pub fn sorted_for_display(entries: &[CashEntry]) -> Vec<CashEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| match (a.date, b.date) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    sorted
}
