//! Ledger entry and pending wager models.
//!
//! A [`LedgerEntry`] is immutable once appended. Resolving a wager never
//! touches its original `PENDING` row — a new terminal row is appended and
//! the reconciliation fold excludes the superseded row by [`WagerId`].
//! That keeps every stake counted exactly once while preserving the full
//! audit trail.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{WagerId, constants};

/// Whether an entry records a wager event or a deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    Wager,
    Deposit,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wager => write!(f, "WAGER"),
            Self::Deposit => write!(f, "DEPOSIT"),
        }
    }
}

/// Lifecycle status recorded on a ledger entry.
///
/// A wager produces a `Pending` row at open time and exactly one terminal
/// row (`Won`, `Lost`, or `Cancelled`) when resolved. Deposits carry the
/// dedicated `Deposit` status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryStatus {
    Pending,
    Won,
    Lost,
    Cancelled,
    Deposit,
}

impl EntryStatus {
    /// Whether this status closes a wager. Terminal statuses are absorbing.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost | Self::Cancelled)
    }
}

impl std::fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Won => write!(f, "WON"),
            Self::Lost => write!(f, "LOST"),
            Self::Cancelled => write!(f, "CANCELLED"),
            Self::Deposit => write!(f, "DEPOSIT"),
        }
    }
}

/// A wager that has been opened but not yet resolved.
///
/// Owned by the pending register; the ledger only shares its [`WagerId`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PendingWager {
    pub id: WagerId,
    pub label: String,
    pub stake: Decimal,
    pub odds: Decimal,
}

impl PendingWager {
    /// Create a pending wager with a freshly assigned id.
    #[must_use]
    pub fn new(label: impl Into<String>, stake: Decimal, odds: Decimal) -> Self {
        Self {
            id: WagerId::new(),
            label: label.into(),
            stake,
            odds,
        }
    }

    /// Full payout on a win: `stake * odds`.
    #[must_use]
    pub fn payout(&self) -> Decimal {
        self.stake * self.odds
    }
}

/// One immutable row of the append-only ledger.
///
/// `net_effect` is the signed contribution of this row to the reconciled
/// balance. A terminal row supersedes its wager's open row, so it must
/// restate the wager's whole outcome — stake included — in one figure:
///
/// | event     | net_effect             | balance delta when recorded |
/// |-----------|------------------------|-----------------------------|
/// | open      | `-stake`               | `-stake`                    |
/// | won       | `stake * odds - stake` | `+stake * odds`             |
/// | lost      | `-stake`               | `0` (loss realized at open) |
/// | cancelled | `0`                    | `+stake` (refund)           |
/// | deposit   | `+amount`              | `+amount`                   |
///
/// The two columns differ by exactly the superseded `-stake` row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LedgerEntry {
    pub recorded_at: DateTime<Utc>,
    pub label: String,
    pub stake: Decimal,
    pub odds: Decimal,
    pub status: EntryStatus,
    pub net_effect: Decimal,
    /// `Some` for every wager row, `None` for deposits.
    pub wager_id: Option<WagerId>,
    pub kind: EntryKind,
}

impl LedgerEntry {
    /// Row recorded when a wager is opened: the stake leaves the balance.
    #[must_use]
    pub fn opened(wager: &PendingWager) -> Self {
        Self::wager_row(wager, EntryStatus::Pending, -wager.stake)
    }

    /// Row recorded on a win: net profit, since the superseded open row
    /// already carried the stake out. The balance still rises by the full
    /// payout at resolution time because the `-stake` row drops out of
    /// the view in the same step.
    #[must_use]
    pub fn won(wager: &PendingWager) -> Self {
        Self::wager_row(wager, EntryStatus::Won, wager.payout() - wager.stake)
    }

    /// Row recorded on a loss: the stake, lost for good. Replaces the
    /// open row one-for-one, so the balance does not move at resolution.
    #[must_use]
    pub fn lost(wager: &PendingWager) -> Self {
        Self::wager_row(wager, EntryStatus::Lost, -wager.stake)
    }

    /// Row recorded on cancellation: a closed wager with no effect at
    /// all. Superseding the `-stake` open row is itself the refund.
    #[must_use]
    pub fn cancelled(wager: &PendingWager) -> Self {
        Self::wager_row(wager, EntryStatus::Cancelled, Decimal::ZERO)
    }

    /// Row recorded for a deposit.
    #[must_use]
    pub fn deposit(amount: Decimal) -> Self {
        Self {
            recorded_at: Utc::now(),
            label: constants::DEPOSIT_LABEL.to_string(),
            stake: Decimal::ZERO,
            odds: Decimal::ZERO,
            status: EntryStatus::Deposit,
            net_effect: amount,
            wager_id: None,
            kind: EntryKind::Deposit,
        }
    }

    fn wager_row(wager: &PendingWager, status: EntryStatus, net_effect: Decimal) -> Self {
        Self {
            recorded_at: Utc::now(),
            label: wager.label.clone(),
            stake: wager.stake,
            odds: wager.odds,
            status,
            net_effect,
            wager_id: Some(wager.id),
            kind: EntryKind::Wager,
        }
    }

    /// Whether this is a wager open row. Supersession is decided by the
    /// reconciliation fold, by id — not by this row alone.
    #[must_use]
    pub fn is_open_wager(&self) -> bool {
        self.kind == EntryKind::Wager && self.status == EntryStatus::Pending
    }

    /// Whether this row closes a wager.
    #[must_use]
    pub fn is_terminal_wager(&self) -> bool {
        self.kind == EntryKind::Wager && self.status.is_terminal()
    }
}
