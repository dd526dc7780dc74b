//! File-backed sales ledger.
//!
//! Sales are kept as a flat JSON array in a single file (fields
//! `producto`, `cantidad`, `precio`). Appends rewrite the whole document,
//! but writers are serialized behind an async mutex and every rewrite
//! goes through a temporary file followed by an atomic rename, so
//! concurrent appends cannot lose records and readers never observe a
//! half-written document.

use std::io::ErrorKind;
use std::path::PathBuf;

use tokio::sync::Mutex;

use crate::models::SaleRecord;

/// Errors that can occur during ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// Reading or writing the ledger file failed.
    #[error("ledger I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The ledger file exists but does not hold a valid JSON array of
    /// sale records. Surfaced rather than treated as empty - an empty
    /// read here would silently discard evidence of corruption.
    #[error("corrupt ledger file {}: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Encoding the in-memory records failed.
    #[error("failed to encode ledger: {0}")]
    Encode(serde_json::Error),
}

/// Append-only ledger of sale records stored in a JSON file.
pub struct SalesLedger {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl SalesLedger {
    /// Create a ledger handle for the given file path.
    ///
    /// The file is created on first append; a missing file reads as an
    /// empty ledger.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Read all sale records, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Io` if the file cannot be read, or
    /// `LedgerError::Corrupt` if it is not a valid JSON array of records.
    pub async fn list(&self) -> Result<Vec<SaleRecord>, LedgerError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| LedgerError::Corrupt {
                path: self.path.clone(),
                source,
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Append one sale record to the ledger.
    ///
    /// Holds the write lock across the read-append-rewrite cycle and
    /// replaces the file atomically, so every prior record survives a
    /// pair of concurrent appends.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Corrupt` if the existing file is invalid
    /// (the record is not written in that case), or `LedgerError::Io`
    /// if the rewrite fails.
    pub async fn append(&self, record: SaleRecord) -> Result<(), LedgerError> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.list().await?;
        records.push(record);

        let bytes = serde_json::to_vec_pretty(&records).map_err(LedgerError::Encode)?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        Ok(())
    }
}
