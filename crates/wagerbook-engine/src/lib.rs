//! # wagerbook-engine
//!
//! The operation façade over the ledger store: deposits, wager lifecycle,
//! and the derived balance.
//!
//! ## Architecture
//!
//! Every user action flows one direction:
//! 1. Validate inputs against the current reconciled balance
//! 2. Append the entry to the [`Ledger`](wagerbook_store::Ledger)
//! 3. Only after the append succeeded, advance the [`PendingRegister`]
//!    and its durable snapshot
//! 4. Re-derive the balance from the full reconciled view
//!
//! There is no cached balance anywhere — the ledger is the sole source
//! of truth, and every read folds it afresh.

pub mod engine;
pub mod register;

pub use engine::LedgerEngine;
pub use register::PendingRegister;
