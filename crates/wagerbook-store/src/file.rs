//! Durable ledger backend: one JSON entry per line.
//!
//! The file is loaded in full at open (the whole dataset is tens to low
//! hundreds of rows) and each append writes and flushes a single line.
//! The in-memory copy is advanced only after the write succeeded, so a
//! failed append leaves nothing half-recorded.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use wagerbook_types::{LedgerEntry, LedgerError, Result};

use crate::ledger::Ledger;

/// Append-only JSONL ledger file.
#[derive(Debug)]
pub struct FileLedger {
    path: PathBuf,
    entries: Vec<LedgerEntry>,
}

impl FileLedger {
    /// Open a ledger file, loading every entry. A missing file is an
    /// empty ledger, not an error.
    ///
    /// # Errors
    /// - `Storage` on an unreadable file
    /// - `CorruptEntry` on a line that fails to parse, with its 1-based
    ///   line number
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) => Self::parse(&text)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(err.into()),
        };
        tracing::debug!(
            path = %path.display(),
            entries = entries.len(),
            "ledger file opened"
        );
        Ok(Self { path, entries })
    }

    fn parse(text: &str) -> Result<Vec<LedgerEntry>> {
        let mut entries = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let entry: LedgerEntry =
                serde_json::from_str(line).map_err(|err| LedgerError::CorruptEntry {
                    line: idx + 1,
                    reason: err.to_string(),
                })?;
            entries.push(entry);
        }
        Ok(entries)
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
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

impl Ledger for FileLedger {
    fn append(&mut self, entry: LedgerEntry) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let line = serde_json::to_string(&entry)
            .map_err(|err| LedgerError::Storage(err.to_string()))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        file.write_all(b"\n")?;
        file.flush()?;

        // Durable now; the in-memory copy may advance.
        self.entries.push(entry);
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<LedgerEntry>> {
        Ok(self.entries.clone())
    }
}
