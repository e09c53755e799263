//! # wagerbook-types
//!
//! Shared types, errors, and configuration for the **Wagerbook** ledger
//! reconciliation engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`WagerId`]
//! - **Ledger model**: [`LedgerEntry`], [`EntryKind`], [`EntryStatus`]
//! - **Pending model**: [`PendingWager`]
//! - **Configuration**: [`StoreConfig`]
//! - **Errors**: [`LedgerError`] with `WB_ERR_` prefix codes
//! - **Constants**: file names and validation limits

pub mod config;
pub mod constants;
pub mod entry;
pub mod error;
pub mod ids;

// Re-export all primary types at crate root for ergonomic imports:
//   use wagerbook_types::{LedgerEntry, EntryStatus, WagerId, ...};

pub use config::*;
pub use entry::*;
pub use error::*;
pub use ids::*;

// Constants are accessed via `wagerbook_types::constants::FOO`
// (not re-exported to avoid name collisions).
