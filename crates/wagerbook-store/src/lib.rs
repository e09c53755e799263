//! # wagerbook-store
//!
//! **Ledger Store**: the durable, append-only record of every financial
//! event, and the pure reconciliation fold that derives balance from it.
//!
//! ## Architecture
//!
//! - [`Ledger`] — the storage seam: `append` + `read_all`, with
//!   `reconciled_view` provided on top of the fold.
//! - [`reconcile`] — pure functions over `&[LedgerEntry]`; the exclusion
//!   rule and the balance fold live here, isolated from persistence.
//! - [`MemoryLedger`] — `Vec`-backed, for tests and ephemeral sessions.
//! - [`FileLedger`] — one JSON entry per line, appended and flushed per
//!   write; an append either fully succeeds or is not recorded.
//! - [`PendingSnapshot`] — durable mirror of the pending register,
//!   rewritten atomically (write-temp-then-rename) on every change.

pub mod file;
pub mod ledger;
pub mod memory;
pub mod pending_file;
pub mod reconcile;

pub use file::FileLedger;
pub use ledger::Ledger;
pub use memory::MemoryLedger;
pub use pending_file::PendingSnapshot;
