//! Pairing of exchange start/finish events into records.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;

use crate::monitor::task::{PendingTask, TaskId, TaskKind};
use crate::observability::metrics;
use crate::store::{ConnectionLogRecord, LogStore};

/// Converts paired start/finish events into immutable records.
///
/// Owns the in-flight task table. Both events may arrive from any worker
/// thread; the table mutex linearizes them. The table lock is released
/// before the store append so record persistence serializes on the store's
/// own lock.
pub struct Correlator {
    in_flight: Mutex<HashMap<TaskId, PendingTask>>,
    store: Arc<LogStore>,
}

impl Correlator {
    /// Create a correlator forwarding completed records to `store`.
    pub fn new(store: Arc<LogStore>) -> Self {
        Self {
            in_flight: Mutex::new(HashMap::new()),
            store,
        }
    }

    /// Record that an exchange has started.
    ///
    /// A duplicate id is a protocol violation by the reporter; the previous
    /// entry is overwritten and a warning logged, the caller is never failed.
    pub fn on_start(&self, id: TaskId, initial_url: impl Into<String>, kind: TaskKind) {
        let task = PendingTask {
            initial_url: initial_url.into(),
            started_at: std::time::Instant::now(),
            kind,
        };
        tracing::debug!(task_id = %id, kind = %kind, url = %task.initial_url, "Task created");
        metrics::record_exchange_started(kind.as_str());

        let mut table = self.table();
        if table.insert(id, task).is_some() {
            tracing::warn!(task_id = %id, "Duplicate task id, overwriting previous in-flight entry");
        }
        metrics::record_in_flight(table.len());
    }

    /// Record that an exchange has finished, successfully or not.
    ///
    /// Idempotent per id: a finish with no matching in-flight entry (orphan
    /// finish, or a second finish for the same id) logs a warning and does
    /// nothing else.
    pub fn on_finish(
        &self,
        id: TaskId,
        final_url: Option<String>,
        error: Option<&dyn std::error::Error>,
    ) {
        let task = {
            let mut table = self.table();
            let task = table.remove(&id);
            metrics::record_in_flight(table.len());
            task
        };

        let Some(task) = task else {
            tracing::warn!(task_id = %id, "Missing task info for completion, ignoring");
            return;
        };

        let duration_ms = task.started_at.elapsed().as_millis() as u64;
        let is_successful = error.is_none();
        if let Some(e) = error {
            tracing::debug!(task_id = %id, error = %e, "Task finished with error");
        }

        let record = ConnectionLogRecord {
            initial_url: task.initial_url.clone(),
            duration_ms,
            final_url,
            is_successful,
            timestamp: Utc::now(),
            task_kind: task.kind.as_str().to_string(),
        };
        self.store.append(record);

        tracing::info!(
            task_id = %id,
            url = %task.initial_url,
            duration_ms,
            success = is_successful,
            "Logged task"
        );
    }

    /// Number of exchanges currently in flight.
    pub fn in_flight(&self) -> usize {
        self.table().len()
    }

    fn table(&self) -> MutexGuard<'_, HashMap<TaskId, PendingTask>> {
        self.in_flight.lock().unwrap_or_else(|e| e.into_inner())
    }
}
