//! The operation façade: deposits, wager lifecycle, balance, history.
//!
//! Ordering guarantee: the ledger append happens first, and the pending
//! register (plus its snapshot) is advanced only after the append
//! succeeded. A storage failure therefore never leaves the register
//! ahead of the ledger.

use rust_decimal::Decimal;
use wagerbook_store::{FileLedger, Ledger, MemoryLedger, PendingSnapshot, reconcile};
use wagerbook_types::{
    LedgerEntry, LedgerError, PendingWager, Result, StoreConfig, WagerId, constants,
};

use crate::register::PendingRegister;

/// Single-user wager ledger engine.
///
/// Generic over the [`Ledger`] backend: [`MemoryLedger`] for ephemeral
/// sessions and tests, [`FileLedger`] for a durable store.
#[derive(Debug)]
pub struct LedgerEngine<L: Ledger> {
    ledger: L,
    register: PendingRegister,
    snapshot: Option<PendingSnapshot>,
}

impl LedgerEngine<MemoryLedger> {
    /// Engine with no durability at all.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            ledger: MemoryLedger::new(),
            register: PendingRegister::new(),
            snapshot: None,
        }
    }
}

impl LedgerEngine<FileLedger> {
    /// Engine backed by the durable store at `config.data_dir`.
    ///
    /// The pending register is restored from the snapshot file when one
    /// exists; otherwise it is rebuilt from the ledger fold. The snapshot
    /// is only a cache: the ledger decides which wagers are still open,
    /// so a snapshot left stale by a crash between the ledger append and
    /// the snapshot rewrite can neither resurrect a resolved wager nor
    /// lose an open one.
    pub fn with_store(config: &StoreConfig) -> Result<Self> {
        let ledger = FileLedger::open(config.ledger_path())?;
        let snapshot = PendingSnapshot::new(config.pending_path());
        let entries = ledger.read_all()?;
        let wagers = if snapshot.exists() {
            Self::validated_snapshot(snapshot.load()?, &entries)
        } else {
            reconcile::open_wagers(&entries)
        };
        tracing::info!(
            data_dir = %config.data_dir.display(),
            entries = ledger.len(),
            pending = wagers.len(),
            "engine restored from store"
        );
        Ok(Self {
            ledger,
            register: PendingRegister::from_wagers(wagers),
            snapshot: Some(snapshot),
        })
    }

    /// Reconcile a loaded snapshot with the ledger: drop every wager the
    /// ledger already closed, and recover every wager the ledger still
    /// holds open but the snapshot missed.
    fn validated_snapshot(
        loaded: Vec<PendingWager>,
        entries: &[LedgerEntry],
    ) -> Vec<PendingWager> {
        let closed = reconcile::closed_ids(entries);
        let mut wagers: Vec<PendingWager> = loaded
            .into_iter()
            .filter(|w| {
                if closed.contains(&w.id) {
                    tracing::warn!(
                        id = %w.id,
                        label = %w.label,
                        "dropping stale snapshot wager already closed in ledger"
                    );
                    return false;
                }
                true
            })
            .collect();
        for wager in reconcile::open_wagers(entries) {
            if !wagers.iter().any(|w| w.id == wager.id) {
                tracing::warn!(
                    id = %wager.id,
                    label = %wager.label,
                    "recovering open wager missing from snapshot"
                );
                wagers.push(wager);
            }
        }
        wagers
    }
}

impl<L: Ledger> LedgerEngine<L> {
    /// Engine over an existing ledger backend, rebuilding the pending
    /// register from the ledger fold.
    pub fn new(ledger: L) -> Result<Self> {
        let wagers = reconcile::open_wagers(&ledger.read_all()?);
        Ok(Self {
            ledger,
            register: PendingRegister::from_wagers(wagers),
            snapshot: None,
        })
    }

    /// Record a deposit and return the new balance.
    ///
    /// # Errors
    /// `InvalidAmount` for a non-positive amount; state is unchanged.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount(amount));
        }
        self.ledger.append(LedgerEntry::deposit(amount))?;
        let balance = self.current_balance()?;
        tracing::info!(%amount, %balance, "deposit recorded");
        Ok(balance)
    }

    /// Open a wager: deduct the stake from the balance and add the wager
    /// to the pending register. Returns the generated [`WagerId`], the
    /// key for its later resolution.
    ///
    /// # Errors
    /// - `InvalidAmount` for a non-positive stake
    /// - `InvalidWager` for an empty/over-long label or odds below 1.0
    /// - `InsufficientBalance` if the stake exceeds the reconciled balance
    pub fn open(&mut self, label: &str, stake: Decimal, odds: Decimal) -> Result<WagerId> {
        let label = label.trim();
        if label.is_empty() {
            return Err(LedgerError::InvalidWager {
                reason: "label must not be empty".to_string(),
            });
        }
        if label.len() > constants::MAX_LABEL_LEN {
            return Err(LedgerError::InvalidWager {
                reason: format!("label exceeds {} bytes", constants::MAX_LABEL_LEN),
            });
        }
        if stake <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount(stake));
        }
        if odds < constants::MIN_ODDS {
            return Err(LedgerError::InvalidWager {
                reason: format!("odds {odds} below minimum {}", constants::MIN_ODDS),
            });
        }

        let available = self.current_balance()?;
        if stake > available {
            return Err(LedgerError::InsufficientBalance {
                needed: stake,
                available,
            });
        }

        let wager = PendingWager::new(label, stake, odds);
        let id = wager.id;
        self.ledger.append(LedgerEntry::opened(&wager))?;
        self.register.insert(wager);
        self.persist_pending()?;
        tracing::info!(%id, label, %stake, %odds, "wager opened");
        Ok(id)
    }

    /// Resolve a wager as won and return the new balance. The balance
    /// rises by exactly `stake * odds`.
    ///
    /// # Errors
    /// `WagerNotFound` if no open wager carries this id.
    pub fn resolve_won(&mut self, id: WagerId) -> Result<Decimal> {
        let balance = self.close_with(id, LedgerEntry::won)?;
        tracing::info!(%id, %balance, "wager resolved as won");
        Ok(balance)
    }

    /// Resolve a wager as lost and return the (unchanged) balance — the
    /// loss was realized when the stake left the balance at open time.
    ///
    /// # Errors
    /// `WagerNotFound` if no open wager carries this id.
    pub fn resolve_lost(&mut self, id: WagerId) -> Result<Decimal> {
        let balance = self.close_with(id, LedgerEntry::lost)?;
        tracing::info!(%id, %balance, "wager resolved as lost");
        Ok(balance)
    }

    /// Cancel a wager, refunding its stake, and return the new balance.
    ///
    /// # Errors
    /// `WagerNotFound` if no open wager carries this id.
    pub fn cancel(&mut self, id: WagerId) -> Result<Decimal> {
        let balance = self.close_with(id, LedgerEntry::cancelled)?;
        tracing::info!(%id, %balance, "wager cancelled");
        Ok(balance)
    }

    /// Funds currently available to wager: the reconciliation fold over
    /// the full ledger, recomputed on every call.
    pub fn current_balance(&self) -> Result<Decimal> {
        Ok(reconcile::balance_of(&self.ledger.read_all()?))
    }

    /// Reconciled ledger entries, newest first. Superseded open rows are
    /// excluded, so each wager appears exactly once.
    pub fn history(&self) -> Result<Vec<LedgerEntry>> {
        let mut view = self.ledger.reconciled_view()?;
        view.reverse();
        Ok(view)
    }

    /// The open wagers, in the order they were opened.
    #[must_use]
    pub fn pending(&self) -> &[PendingWager] {
        self.register.wagers()
    }

    fn close_with(
        &mut self,
        id: WagerId,
        entry_for: fn(&PendingWager) -> LedgerEntry,
    ) -> Result<Decimal> {
        let wager = self
            .register
            .get(id)
            .ok_or(LedgerError::WagerNotFound(id))?
            .clone();
        self.ledger.append(entry_for(&wager))?;
        // Durable; the register may now advance.
        self.register.take(id)?;
        self.persist_pending()?;
        self.current_balance()
    }

    fn persist_pending(&self) -> Result<()> {
        if let Some(snapshot) = &self.snapshot {
            snapshot.save(self.register.wagers())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(n: i64) -> Decimal {
        Decimal::new(n, 0)
    }

    fn odds(tenths: i64) -> Decimal {
        Decimal::new(tenths, 1)
    }

    #[test]
    fn deposit_returns_new_balance() {
        let mut engine = LedgerEngine::in_memory();
        assert_eq!(engine.deposit(dec(100)).unwrap(), dec(100));
        assert_eq!(engine.deposit(dec(50)).unwrap(), dec(150));
    }

    #[test]
    fn deposit_rejects_non_positive_amounts() {
        let mut engine = LedgerEngine::in_memory();
        engine.deposit(dec(10)).unwrap();

        for bad in [Decimal::ZERO, dec(-5)] {
            let err = engine.deposit(bad).unwrap_err();
            assert!(matches!(err, LedgerError::InvalidAmount(_)));
        }
        assert_eq!(engine.current_balance().unwrap(), dec(10));
    }

    #[test]
    fn won_scenario_from_the_dashboard() {
        // deposit 100 → open("MatchA", 20, 2.5) → 80 → won → 130
        let mut engine = LedgerEngine::in_memory();
        engine.deposit(dec(100)).unwrap();
        let id = engine.open("MatchA", dec(20), odds(25)).unwrap();
        assert_eq!(engine.current_balance().unwrap(), dec(80));
        assert_eq!(engine.resolve_won(id).unwrap(), dec(130));
    }

    #[test]
    fn lost_scenario_leaves_balance_unchanged() {
        // deposit 50 → open("MatchB", 10, 3.0) → 40 → lost → 40
        let mut engine = LedgerEngine::in_memory();
        engine.deposit(dec(50)).unwrap();
        let id = engine.open("MatchB", dec(10), odds(30)).unwrap();
        assert_eq!(engine.current_balance().unwrap(), dec(40));
        assert_eq!(engine.resolve_lost(id).unwrap(), dec(40));
    }

    #[test]
    fn open_beyond_balance_is_refused() {
        // open("MatchC", 15, 2.0) with balance 10 → InsufficientBalance
        let mut engine = LedgerEngine::in_memory();
        engine.deposit(dec(10)).unwrap();

        let err = engine.open("MatchC", dec(15), odds(20)).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::InsufficientBalance { needed, available }
                if needed == dec(15) && available == dec(10)
        ));
        assert_eq!(engine.current_balance().unwrap(), dec(10));
        assert!(engine.pending().is_empty());
    }

    #[test]
    fn open_may_stake_the_entire_balance() {
        let mut engine = LedgerEngine::in_memory();
        engine.deposit(dec(10)).unwrap();
        engine.open("AllIn", dec(10), odds(20)).unwrap();
        assert_eq!(engine.current_balance().unwrap(), Decimal::ZERO);
    }

    #[test]
    fn cancel_restores_the_pre_open_balance() {
        let mut engine = LedgerEngine::in_memory();
        engine.deposit(dec(75)).unwrap();
        let id = engine.open("MatchD", dec(25), odds(18)).unwrap();
        assert_eq!(engine.current_balance().unwrap(), dec(50));
        assert_eq!(engine.cancel(id).unwrap(), dec(75));
        assert!(engine.pending().is_empty());
    }

    #[test]
    fn second_resolution_fails_and_changes_nothing() {
        let mut engine = LedgerEngine::in_memory();
        engine.deposit(dec(100)).unwrap();
        let id = engine.open("MatchE", dec(20), odds(25)).unwrap();
        engine.resolve_won(id).unwrap();

        for result in [
            engine.resolve_won(id),
            engine.resolve_lost(id),
            engine.cancel(id),
        ] {
            assert!(matches!(
                result.unwrap_err(),
                LedgerError::WagerNotFound(missing) if missing == id
            ));
        }
        assert_eq!(engine.current_balance().unwrap(), dec(130));
    }

    #[test]
    fn open_validates_label_and_odds() {
        let mut engine = LedgerEngine::in_memory();
        engine.deposit(dec(100)).unwrap();

        assert!(matches!(
            engine.open("", dec(10), odds(20)).unwrap_err(),
            LedgerError::InvalidWager { .. }
        ));
        assert!(matches!(
            engine.open("   ", dec(10), odds(20)).unwrap_err(),
            LedgerError::InvalidWager { .. }
        ));
        assert!(matches!(
            engine.open(&"x".repeat(300), dec(10), odds(20)).unwrap_err(),
            LedgerError::InvalidWager { .. }
        ));
        assert!(matches!(
            engine.open("MatchF", dec(10), odds(9)).unwrap_err(),
            LedgerError::InvalidWager { .. }
        ));
        assert!(matches!(
            engine.open("MatchF", Decimal::ZERO, odds(20)).unwrap_err(),
            LedgerError::InvalidAmount(_)
        ));
        assert_eq!(engine.current_balance().unwrap(), dec(100));
    }

    #[test]
    fn identically_labeled_wagers_resolve_independently() {
        // Regression for the label-collision bug class: two "Derby"
        // wagers resolved oppositely must not cross-contaminate.
        let mut engine = LedgerEngine::in_memory();
        engine.deposit(dec(100)).unwrap();
        let first = engine.open("Derby", dec(20), odds(20)).unwrap();
        let second = engine.open("Derby", dec(30), odds(20)).unwrap();
        assert_eq!(engine.current_balance().unwrap(), dec(50));

        // First wins (+40 payout), second loses.
        assert_eq!(engine.resolve_won(first).unwrap(), dec(90));
        assert_eq!(engine.resolve_lost(second).unwrap(), dec(90));
        assert!(engine.pending().is_empty());
    }

    #[test]
    fn history_is_reconciled_and_newest_first() {
        let mut engine = LedgerEngine::in_memory();
        engine.deposit(dec(100)).unwrap();
        let id = engine.open("MatchG", dec(20), odds(25)).unwrap();
        engine.resolve_won(id).unwrap();

        let history = engine.history().unwrap();
        assert_eq!(history.len(), 2, "superseded open row must be excluded");
        assert_eq!(history[0].status, wagerbook_types::EntryStatus::Won);
        assert_eq!(history[1].status, wagerbook_types::EntryStatus::Deposit);
    }

    #[test]
    fn pending_lists_open_wagers_in_order() {
        let mut engine = LedgerEngine::in_memory();
        engine.deposit(dec(100)).unwrap();
        engine.open("First", dec(10), odds(20)).unwrap();
        engine.open("Second", dec(10), odds(20)).unwrap();

        let labels: Vec<&str> = engine.pending().iter().map(|w| w.label.as_str()).collect();
        assert_eq!(labels, vec!["First", "Second"]);
    }

    #[test]
    fn engine_rebuilds_register_from_a_seeded_ledger() {
        let open_wager = PendingWager::new("Carried", dec(10), odds(20));
        let closed_wager = PendingWager::new("Done", dec(5), odds(20));
        let ledger = MemoryLedger::with_entries(vec![
            LedgerEntry::deposit(dec(50)),
            LedgerEntry::opened(&open_wager),
            LedgerEntry::opened(&closed_wager),
            LedgerEntry::lost(&closed_wager),
        ]);

        let engine = LedgerEngine::new(ledger).unwrap();
        assert_eq!(engine.pending(), &[open_wager]);
        assert_eq!(engine.current_balance().unwrap(), dec(35));
    }
}
