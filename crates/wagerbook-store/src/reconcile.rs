//! The pure reconciliation fold.
//!
//! Every wager is counted exactly once: its `PENDING` open row is excluded
//! from the view as soon as a terminal row (`WON`, `LOST`, `CANCELLED`)
//! exists for the same [`WagerId`]. Matching is strictly by id — two
//! wagers sharing a label never affect each other.
//!
//! These functions take an immutable slice and have no knowledge of
//! persistence, so the exclusion rule is testable in isolation from any
//! backend.

use std::collections::HashSet;

use rust_decimal::Decimal;
use wagerbook_types::{LedgerEntry, PendingWager, WagerId};

/// Ids of all wagers that have a terminal row in `entries`.
#[must_use]
pub fn closed_ids(entries: &[LedgerEntry]) -> HashSet<WagerId> {
    entries
        .iter()
        .filter(|e| e.is_terminal_wager())
        .filter_map(|e| e.wager_id)
        .collect()
}

/// `entries` with every superseded open row dropped, order preserved.
#[must_use]
pub fn reconciled(entries: &[LedgerEntry]) -> Vec<LedgerEntry> {
    let closed = closed_ids(entries);
    entries
        .iter()
        .filter(|e| {
            !(e.is_open_wager() && e.wager_id.is_some_and(|id| closed.contains(&id)))
        })
        .cloned()
        .collect()
}

/// Current balance: the sum of `net_effect` over the reconciled view.
#[must_use]
pub fn balance_of(entries: &[LedgerEntry]) -> Decimal {
    let closed = closed_ids(entries);
    entries
        .iter()
        .filter(|e| {
            !(e.is_open_wager() && e.wager_id.is_some_and(|id| closed.contains(&id)))
        })
        .map(|e| e.net_effect)
        .sum()
}

/// The still-open wagers implied by the ledger alone: open rows with no
/// terminal row for the same id. Used to rebuild the pending register
/// when no snapshot survived.
#[must_use]
pub fn open_wagers(entries: &[LedgerEntry]) -> Vec<PendingWager> {
    let closed = closed_ids(entries);
    entries
        .iter()
        .filter(|e| e.is_open_wager())
        .filter_map(|e| {
            let id = e.wager_id?;
            if closed.contains(&id) {
                return None;
            }
            Some(PendingWager {
                id,
                label: e.label.clone(),
                stake: e.stake,
                odds: e.odds,
            })
        })
        .collect()
}
