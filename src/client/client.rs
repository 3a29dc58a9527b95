//! Client dispatch through a transport configuration.

use std::sync::Arc;

use http::Request;
use url::Url;

use crate::client::config::TransportConfig;
use crate::intercept::body::RequestBody;
use crate::intercept::delegate::ExchangeDelegate;
use crate::intercept::exchange::{self, ResponseSummary};
use crate::intercept::interceptor::InterceptError;
use crate::intercept::transport::{Transport, TransportError};

/// Client that executes requests through its configuration's handlers.
///
/// The first handler that claims a request observes it; anything else goes
/// straight to the transport. Response semantics are identical either way.
pub struct MonitoredClient {
    config: TransportConfig,
    transport: Arc<dyn Transport>,
}

impl MonitoredClient {
    pub fn new(config: TransportConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Execute `req`, relaying transport events to `delegate`.
    pub async fn request(
        &self,
        req: Request<RequestBody>,
        delegate: &mut dyn ExchangeDelegate,
    ) -> Result<ResponseSummary, InterceptError> {
        let fut = self.dispatch(req, delegate);
        match self.config.request_timeout() {
            Some(timeout) => tokio::time::timeout(timeout, fut)
                .await
                .unwrap_or(Err(InterceptError::Transport(TransportError::TimedOut))),
            None => fut.await,
        }
    }

    async fn dispatch(
        &self,
        req: Request<RequestBody>,
        delegate: &mut dyn ExchangeDelegate,
    ) -> Result<ResponseSummary, InterceptError> {
        if let Some(handler) = self
            .config
            .handlers()
            .iter()
            .find(|h| h.should_handle(&req))
        {
            return handler
                .execute(&self.config, self.transport.clone(), req, delegate)
                .await;
        }
        self.direct(req, delegate).await
    }

    /// Unobserved path; same driver, no bookkeeping.
    async fn direct(
        &self,
        req: Request<RequestBody>,
        delegate: &mut dyn ExchangeDelegate,
    ) -> Result<ResponseSummary, InterceptError> {
        let (parts, body) = req.into_parts();
        let url = Url::parse(&parts.uri.to_string())
            .map_err(|e| InterceptError::Setup(format!("request URI is not an absolute URL: {e}")))?;
        exchange::drive(
            self.transport.as_ref(),
            parts.method,
            parts.headers,
            url,
            body,
            self.config.max_redirects(),
            delegate,
        )
        .await
        .map_err(InterceptError::from)
    }
}
