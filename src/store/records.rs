//! Completed-exchange record model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed outbound exchange.
///
/// Immutable once constructed. Field names on the wire keep the persisted
/// format stable across releases (`initialURL`, `durationMs`, ...);
/// `finalURL` is omitted entirely when the transport reported no terminal
/// URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionLogRecord {
    /// Request URL at creation time.
    #[serde(rename = "initialURL")]
    pub initial_url: String,

    /// Elapsed wall-clock time for the exchange, in milliseconds.
    #[serde(rename = "durationMs")]
    pub duration_ms: u64,

    /// Terminal URL reported by the transport (differs from `initial_url`
    /// after a redirect).
    #[serde(rename = "finalURL", skip_serializing_if = "Option::is_none", default)]
    pub final_url: Option<String>,

    /// True iff the exchange completed without a transport-level error.
    #[serde(rename = "isSuccessful")]
    pub is_successful: bool,

    /// Completion time (RFC 3339, UTC).
    pub timestamp: DateTime<Utc>,

    /// How the exchange was executed ("streamed-upload", "buffered-upload",
    /// "download").
    #[serde(rename = "taskType")]
    pub task_kind: String,
}
