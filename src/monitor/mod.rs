//! Exchange correlation subsystem.
//!
//! # Data Flow
//! ```text
//! Interceptor reports:
//!     on_start(id, url, kind)  → in-flight table insert
//!     on_finish(id, final, err) → table remove
//!                               → build ConnectionLogRecord
//!                               → LogStore::append
//! ```
//!
//! # Design Decisions
//! - The in-flight table is the only shared mutable state between
//!   concurrent interceptions; every access goes through its mutex
//! - Duplicate starts overwrite and warn, orphan finishes warn and drop:
//!   monitoring never fails the caller
//! - Records are built at finish time only; nothing is fabricated for
//!   finishes with no matching start

pub mod correlator;
pub mod service;
pub mod task;

pub use correlator::Correlator;
pub use service::NetworkMonitor;
pub use task::{PendingTask, TaskId, TaskKind};
