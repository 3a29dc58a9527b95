//! Request interception subsystem.
//!
//! # Data Flow
//! ```text
//! Request<RequestBody>
//!     → Interceptor::should_handle (marker + scheme check)
//!     → Interceptor::execute (tag, classify, report start)
//!     → exchange::drive (issue, follow redirects, relay events)
//!     → Correlator::on_finish (always, including cancellation)
//! ```
//!
//! # Design Decisions
//! - The anti-recursion guard is an explicit request-extension tag checked
//!   at the top of the entry point, never object-identity tricks
//! - The transport seam is a single round trip; redirect following lives in
//!   the exchange driver so monitored and direct paths behave identically
//! - A drop guard reports the finish when the exchange future is cancelled
//!   mid-flight, so the in-flight table never leaks an entry

pub mod body;
pub mod delegate;
pub mod exchange;
pub mod interceptor;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use body::RequestBody;
pub use delegate::{ExchangeDelegate, NoopDelegate};
pub use exchange::ResponseSummary;
pub use interceptor::{HandledMarker, InterceptError, Interceptor};
pub use transport::{HyperTransport, Transport, TransportError};
