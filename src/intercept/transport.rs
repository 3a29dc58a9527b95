//! Transport seam between the interceptor and the real HTTP client.

use bytes::Bytes;
use futures_util::future::BoxFuture;
use http::{Request, Response};
use http_body_util::combinators::{BoxBody, UnsyncBoxBody};
use http_body_util::BodyExt;
use hyper_util::client::legacy::connect::{Connect, HttpConnector};
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;

/// Outbound request body handed to the transport.
pub type OutboundBody = UnsyncBoxBody<Bytes, std::io::Error>;

/// Inbound response body returned by the transport.
pub type InboundBody = BoxBody<Bytes, TransportError>;

/// Error raised by the transport layer while executing an exchange.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The underlying client failed to complete the round trip.
    #[error("transport error: {0}")]
    Connect(#[from] hyper_util::client::legacy::Error),

    /// Reading the response body failed mid-stream.
    #[error("body read error: {0}")]
    Body(#[source] hyper::Error),

    #[error("redirect limit of {0} exceeded")]
    TooManyRedirects(usize),

    #[error("invalid redirect target: {0}")]
    BadRedirect(String),

    #[error("request timed out")]
    TimedOut,

    #[error("exchange cancelled before completion")]
    Cancelled,

    /// Failure reported by a non-default transport binding.
    #[error("{0}")]
    Other(String),
}

/// One HTTP round trip against the real network.
///
/// Redirects are not followed here; the exchange driver owns that policy.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        req: Request<OutboundBody>,
    ) -> BoxFuture<'_, Result<Response<InboundBody>, TransportError>>;
}

/// Default transport binding over the hyper legacy client.
///
/// Generic over the connector so a host can supply one that terminates TLS;
/// the plain constructor speaks cleartext HTTP.
pub struct HyperTransport<C = HttpConnector>
where
    C: Connect + Clone + Send + Sync + 'static,
{
    client: Client<C, OutboundBody>,
}

impl HyperTransport<HttpConnector> {
    /// Plain-HTTP transport on the Tokio executor.
    pub fn new() -> Self {
        Self::with_connector(HttpConnector::new())
    }
}

impl Default for HyperTransport<HttpConnector> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> HyperTransport<C>
where
    C: Connect + Clone + Send + Sync + 'static,
{
    /// Build on a custom connector.
    pub fn with_connector(connector: C) -> Self {
        Self {
            client: Client::builder(TokioExecutor::new()).build(connector),
        }
    }
}

impl<C> Transport for HyperTransport<C>
where
    C: Connect + Clone + Send + Sync + 'static,
{
    fn send(
        &self,
        req: Request<OutboundBody>,
    ) -> BoxFuture<'_, Result<Response<InboundBody>, TransportError>> {
        let fut = self.client.request(req);
        Box::pin(async move {
            let response = fut.await?;
            Ok(response.map(|body| body.map_err(TransportError::Body).boxed()))
        })
    }
}
