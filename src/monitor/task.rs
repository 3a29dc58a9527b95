//! In-flight task identity and state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Global atomic counter for task IDs.
/// Relaxed ordering is sufficient since we only need uniqueness, not synchronization.
static TASK_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for an in-flight exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// Allocate the next unique task ID.
    pub fn next() -> Self {
        Self(TASK_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "task-{}", self.0)
    }
}

/// How an exchange was executed against the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Body supplied incrementally as a stream.
    StreamedUpload,
    /// Body-carrying method with the full body available up front.
    BufferedUpload,
    /// Plain fetch (no upload body).
    Download,
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::StreamedUpload => "streamed-upload",
            TaskKind::BufferedUpload => "buffered-upload",
            TaskKind::Download => "download",
        }
    }
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of an exchange that has started but not finished.
///
/// Owned exclusively by the correlator table while in flight.
#[derive(Debug)]
pub struct PendingTask {
    /// Request URL at creation time.
    pub initial_url: String,
    /// Monotonic start instant, duration is measured from here.
    pub started_at: Instant,
    /// Execution classification carried into the record.
    pub kind: TaskKind,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_task_ids_are_unique() {
        let ids: HashSet<u64> = (0..100).map(|_| TaskId::next().as_u64()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_task_kind_strings() {
        assert_eq!(TaskKind::StreamedUpload.as_str(), "streamed-upload");
        assert_eq!(TaskKind::BufferedUpload.as_str(), "buffered-upload");
        assert_eq!(TaskKind::Download.as_str(), "download");
    }
}
