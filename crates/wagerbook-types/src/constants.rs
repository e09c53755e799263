//! System-wide constants: file names, labels, and validation limits.

use rust_decimal::Decimal;

/// File name of the append-only ledger (one JSON entry per line).
pub const LEDGER_FILE: &str = "ledger.jsonl";

/// File name of the pending-register snapshot (JSON array).
pub const PENDING_FILE: &str = "pending.json";

/// Fixed label recorded on deposit entries.
pub const DEPOSIT_LABEL: &str = "Deposit";

/// Minimum accepted odds. A wager at odds 1.0 returns exactly its stake.
pub const MIN_ODDS: Decimal = Decimal::ONE;

/// Maximum accepted length of a wager label, in bytes.
pub const MAX_LABEL_LEN: usize = 200;
