//! Error types for the Wagerbook ledger engine.
//!
//! All errors use the `WB_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Wager errors
//! - 2xx: Balance errors
//! - 3xx: Storage errors
//! - 9xx: General / internal errors

use rust_decimal::Decimal;
use thiserror::Error;

use crate::WagerId;

/// Central error enum for all Wagerbook operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    // =================================================================
    // Wager Errors (1xx)
    // =================================================================
    /// No open wager with this id. Also raised by a second resolve or
    /// cancel on an already-closed wager.
    #[error("WB_ERR_100: Wager not found: {0}")]
    WagerNotFound(WagerId),

    /// The wager failed validation (empty label, bad odds, etc.).
    #[error("WB_ERR_101: Invalid wager: {reason}")]
    InvalidWager { reason: String },

    // =================================================================
    // Balance Errors (2xx)
    // =================================================================
    /// The stake exceeds the currently reconciled balance.
    #[error("WB_ERR_200: Insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: Decimal, available: Decimal },

    /// A non-positive deposit or stake amount.
    #[error("WB_ERR_201: Invalid amount: {0}")]
    InvalidAmount(Decimal),

    // =================================================================
    // Storage Errors (3xx)
    // =================================================================
    /// Persistence read/write failure. The operation must not be
    /// considered applied.
    #[error("WB_ERR_300: Storage failure: {0}")]
    Storage(String),

    /// A ledger line on disk failed to parse.
    #[error("WB_ERR_301: Corrupt ledger entry at line {line}: {reason}")]
    CorruptEntry { line: usize, reason: String },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("WB_ERR_900: Internal error: {0}")]
    Internal(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, LedgerError>;

// Conversion from std::io::Error
impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}
