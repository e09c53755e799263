//! The working set of wagers that have been opened but not yet resolved.
//!
//! Lookup and removal are keyed strictly by [`WagerId`]. Removal doubles
//! as the idempotency guard: a second resolve or cancel on the same id
//! finds nothing and fails with `WagerNotFound`, leaving state untouched.

use wagerbook_types::{LedgerError, PendingWager, Result, WagerId};

/// Insertion-ordered set of open wagers.
///
/// The set stays small (tens of rows), so a `Vec` scan beats a map and
/// keeps the display order the user opened wagers in.
#[derive(Debug, Default)]
pub struct PendingRegister {
    wagers: Vec<PendingWager>,
}

impl PendingRegister {
    /// Create an empty register.
    #[must_use]
    pub fn new() -> Self {
        Self { wagers: Vec::new() }
    }

    /// Rebuild a register from a known set of open wagers (snapshot load
    /// or ledger-fold rehydration).
    #[must_use]
    pub fn from_wagers(wagers: Vec<PendingWager>) -> Self {
        Self { wagers }
    }

    /// Add a freshly opened wager.
    pub fn insert(&mut self, wager: PendingWager) {
        debug_assert!(
            !self.contains(wager.id),
            "duplicate wager id in register: {}",
            wager.id
        );
        self.wagers.push(wager);
    }

    /// Look up an open wager without removing it.
    #[must_use]
    pub fn get(&self, id: WagerId) -> Option<&PendingWager> {
        self.wagers.iter().find(|w| w.id == id)
    }

    /// Remove and return an open wager.
    ///
    /// # Errors
    /// Returns `WagerNotFound` if no open wager carries this id. The
    /// register is unchanged in that case.
    pub fn take(&mut self, id: WagerId) -> Result<PendingWager> {
        let pos = self
            .wagers
            .iter()
            .position(|w| w.id == id)
            .ok_or(LedgerError::WagerNotFound(id))?;
        Ok(self.wagers.remove(pos))
    }

    /// Whether an open wager carries this id.
    #[must_use]
    pub fn contains(&self, id: WagerId) -> bool {
        self.get(id).is_some()
    }

    /// The open wagers, in the order they were opened.
    #[must_use]
    pub fn wagers(&self) -> &[PendingWager] {
        &self.wagers
    }

    /// Number of open wagers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.wagers.len()
    }

    /// Whether no wagers are open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wagers.is_empty()
    }
}
