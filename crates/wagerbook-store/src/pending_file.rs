//! Durable mirror of the pending register.
//!
//! The snapshot is a cache, not a source of truth: if it is lost, the
//! register can be rebuilt from the ledger fold. It is rewritten in full
//! on every change via write-temp-then-rename, so a crash mid-write
//! leaves the previous snapshot intact.

use std::fs;
use std::path::{Path, PathBuf};

use wagerbook_types::{LedgerError, PendingWager, Result};

/// JSON-array snapshot of the open wagers.
#[derive(Debug, Clone)]
pub struct PendingSnapshot {
    path: PathBuf,
}

impl PendingSnapshot {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the snapshot file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a snapshot file exists on disk.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the snapshot. A missing file yields an empty set.
    pub fn load(&self) -> Result<Vec<PendingWager>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        serde_json::from_str(&text).map_err(|err| LedgerError::Storage(err.to_string()))
    }

    /// Replace the snapshot with the given set of open wagers.
    pub fn save(&self, wagers: &[PendingWager]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(wagers)
            .map_err(|err| LedgerError::Storage(err.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn wager(label: &str, stake: i64) -> PendingWager {
        PendingWager::new(label, Decimal::new(stake, 0), Decimal::new(20, 1))
    }

    #[test]
    fn missing_snapshot_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let snap = PendingSnapshot::new(dir.path().join("pending.json"));
        assert!(!snap.exists());
        assert!(snap.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let snap = PendingSnapshot::new(dir.path().join("pending.json"));
        let wagers = vec![wager("MatchA", 20), wager("MatchB", 30)];

        snap.save(&wagers).unwrap();
        assert!(snap.exists());
        assert_eq!(snap.load().unwrap(), wagers);
    }

    #[test]
    fn save_replaces_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let snap = PendingSnapshot::new(dir.path().join("pending.json"));

        snap.save(&[wager("MatchA", 20)]).unwrap();
        snap.save(&[]).unwrap();
        assert!(snap.load().unwrap().is_empty());
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let snap = PendingSnapshot::new(dir.path().join("pending.json"));
        snap.save(&[wager("MatchA", 20)]).unwrap();
        assert!(!dir.path().join("pending.json.tmp").exists());
    }

    #[test]
    fn creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let snap = PendingSnapshot::new(dir.path().join("nested").join("pending.json"));
        snap.save(&[]).unwrap();
        assert!(snap.exists());
    }
}
