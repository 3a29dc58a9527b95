//! Caller-visible relay surface for transport events.

use bytes::Bytes;
use http::response::Parts;
use http::StatusCode;
use url::Url;

/// Receives every transport event of an exchange, verbatim.
///
/// All methods default to no-ops so implementations override only what
/// they care about. Completion is the return value of the request call,
/// not a delegate event.
pub trait ExchangeDelegate: Send {
    /// Head (status + headers) of the terminal response.
    fn on_response(&mut self, _head: &Parts) {}

    /// One chunk of response body data.
    fn on_chunk(&mut self, _chunk: Bytes) {}

    /// The exchange is about to follow a redirect from `_from` to `_to`.
    fn on_redirect(&mut self, _from: &Url, _to: &Url, _status: StatusCode) {}
}

/// Delegate that discards every event.
pub struct NoopDelegate;

impl ExchangeDelegate for NoopDelegate {}
