//! Durable storage for completed-exchange records.
//!
//! # Data Flow
//! ```text
//! Correlator builds ConnectionLogRecord
//!     → LogStore::append (push + persist whole collection)
//!     → JSON file (temp write, atomic rename)
//!
//! Consumers (CLI, diagnostics):
//!     → LogStore::get_all (snapshot copy)
//!     → LogStore::clear (empty + persist)
//! ```
//!
//! # Design Decisions
//! - Whole-collection overwrite on every mutation; the persisted file is
//!   valid JSON after every successful call
//! - Write to a temp file and rename so a failed write never corrupts the
//!   previous file
//! - In-memory collection stays authoritative when a write fails; the next
//!   mutation retries persistence

pub mod file;
pub mod records;

pub use file::{LogStore, StoreError};
pub use records::ConnectionLogRecord;
