//! The storage seam between the engine and any ledger backend.

use wagerbook_types::{LedgerEntry, Result};

use crate::reconcile;

/// Durable, append-only record of every financial event.
///
/// Entries are immutable once appended; there is no update or delete.
/// Resolution of a wager appends a new terminal entry — the reconciled
/// view excludes the superseded open entry by id.
pub trait Ledger {
    /// Append one entry. Never fails except on a storage-medium error,
    /// which is propagated, not retried.
    fn append(&mut self, entry: LedgerEntry) -> Result<()>;

    /// The full ordered sequence of entries, oldest first. An empty
    /// ledger yields an empty sequence, not an error.
    fn read_all(&self) -> Result<Vec<LedgerEntry>>;

    /// [`read_all`](Self::read_all) with superseded open entries dropped.
    ///
    /// Without this exclusion a resolved wager's stake would be
    /// subtracted at open and its payout added at resolution, while the
    /// original subtraction is never added back — silently corrupting
    /// the balance.
    fn reconciled_view(&self) -> Result<Vec<LedgerEntry>> {
        Ok(reconcile::reconciled(&self.read_all()?))
    }
}
