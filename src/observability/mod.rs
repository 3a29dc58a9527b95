//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, gauges)
//!
//! Consumers:
//!     → host-installed tracing subscriber (the CLI installs its own)
//!     → host-installed metrics recorder (none installed here)
//! ```
//!
//! # Design Decisions
//! - The library only emits; subscribers and recorders belong to the host
//! - Task ID flows through all log events for correlation
//! - Metrics are cheap (atomic recording, no exposition layer)

pub mod logging;
pub mod metrics;
