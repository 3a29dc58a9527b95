//! Metrics recording.
//!
//! Recording only: counters and gauges through the `metrics` facade. The
//! host decides whether to install a recorder; without one these are
//! no-ops.

use metrics::{counter, gauge};

/// Count an exchange start, labeled by execution kind.
pub fn record_exchange_started(kind: &'static str) {
    counter!("netwatch_exchanges_total", "kind" => kind).increment(1);
}

/// Current number of in-flight exchanges.
pub fn record_in_flight(count: usize) {
    gauge!("netwatch_in_flight_tasks").set(count as f64);
}

/// Current number of persisted records.
pub fn record_log_count(count: usize) {
    gauge!("netwatch_log_records").set(count as f64);
}

/// Count a failed persistence attempt.
pub fn record_persist_failure() {
    counter!("netwatch_persist_failures_total").increment(1);
}
