//! Store configuration: where the ledger and pending snapshot live on disk.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants;

/// Location of the durable store. Both files live under one data
/// directory so a backup or wipe is a single directory operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding the ledger and pending snapshot files.
    pub data_dir: PathBuf,
}

impl StoreConfig {
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path of the append-only ledger file.
    #[must_use]
    pub fn ledger_path(&self) -> PathBuf {
        self.data_dir.join(constants::LEDGER_FILE)
    }

    /// Path of the pending-register snapshot file.
    #[must_use]
    pub fn pending_path(&self) -> PathBuf {
        self.data_dir.join(constants::PENDING_FILE)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(Path::new("data"))
    }
}
