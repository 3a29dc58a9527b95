//! File-backed log store.

use std::fs::{self, File};
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::observability::metrics;
use crate::store::records::ConnectionLogRecord;

/// Error raised while reading or writing the persisted collection.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Durable holder of completed-exchange records.
///
/// The collection lives behind a mutex; `append` and `clear` persist the
/// whole collection before returning, so the mutex order defines both
/// completion order and file order.
pub struct LogStore {
    path: PathBuf,
    records: Mutex<Vec<ConnectionLogRecord>>,
}

impl LogStore {
    /// Open the store at `path`, loading any previously persisted records.
    ///
    /// An absent file starts an empty collection. A malformed file is
    /// discarded (logged at error level) and the store starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = match Self::load(&path) {
            Ok(records) => {
                tracing::debug!(count = records.len(), path = %path.display(), "Loaded existing connection logs");
                records
            }
            Err(StoreError::Io(e)) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                tracing::error!(error = %e, path = %path.display(), "Failed to load connection logs, starting empty");
                Vec::new()
            }
        };
        metrics::record_log_count(records.len());
        Self {
            path,
            records: Mutex::new(records),
        }
    }

    fn load(path: &Path) -> Result<Vec<ConnectionLogRecord>, StoreError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Append a record and persist the collection.
    pub fn append(&self, record: ConnectionLogRecord) {
        let mut records = self.lock();
        records.push(record);
        self.persist(&records);
    }

    /// Snapshot copy of the current collection, in completion order.
    pub fn get_all(&self) -> Vec<ConnectionLogRecord> {
        self.lock().clone()
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Empty the collection and persist the empty collection.
    pub fn clear(&self) {
        let mut records = self.lock();
        records.clear();
        self.persist(&records);
    }

    /// Path of the persisted file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ConnectionLogRecord>> {
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Persist the collection; a failure leaves the previous file intact
    /// and the in-memory collection authoritative.
    fn persist(&self, records: &[ConnectionLogRecord]) {
        match self.write_atomic(records) {
            Ok(()) => {
                metrics::record_log_count(records.len());
                tracing::debug!(count = records.len(), path = %self.path.display(), "Saved connection logs");
            }
            Err(e) => {
                metrics::record_persist_failure();
                tracing::error!(error = %e, path = %self.path.display(), "Failed to persist connection logs; in-memory state retained");
            }
        }
    }

    fn write_atomic(&self, records: &[ConnectionLogRecord]) -> Result<(), StoreError> {
        let json = serde_json::to_vec(records)?;
        // Temp file must live in the same directory for the rename to be atomic.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
