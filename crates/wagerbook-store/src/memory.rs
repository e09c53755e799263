//! In-memory ledger backend.
//!
//! Backs tests and ephemeral sessions where nothing should touch disk.
//! Same append-only contract as the file backend, minus the durability.

use wagerbook_types::{LedgerEntry, Result};

use crate::ledger::Ledger;

/// `Vec`-backed ledger. Appends cannot fail.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    entries: Vec<LedgerEntry>,
}

impl MemoryLedger {
    /// Create a new empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create a ledger pre-populated with entries (oldest first).
    #[must_use]
    pub fn with_entries(entries: Vec<LedgerEntry>) -> Self {
        Self { entries }
    }

    /// Number of entries recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Ledger for MemoryLedger {
    fn append(&mut self, entry: LedgerEntry) -> Result<()> {
        self.entries.push(entry);
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<LedgerEntry>> {
        Ok(self.entries.clone())
    }
}
