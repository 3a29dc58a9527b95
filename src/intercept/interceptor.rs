//! The request interceptor.

use std::sync::Arc;

use http::{Method, Request};
use url::Url;

use crate::client::TransportConfig;
use crate::intercept::body::RequestBody;
use crate::intercept::delegate::ExchangeDelegate;
use crate::intercept::exchange::{self, ResponseSummary};
use crate::intercept::transport::{Transport, TransportError};
use crate::monitor::{Correlator, TaskId, TaskKind};

/// Zero-sized request extension marking a request as already intercepted.
///
/// Lives in `http::Extensions` only; never serialized, never on the wire.
#[derive(Debug, Clone, Copy, Default)]
pub struct HandledMarker;

/// Error surfaced to the request caller by the interception layer.
#[derive(Debug, thiserror::Error)]
pub enum InterceptError {
    /// The request could not be tagged/rebuilt for loop prevention.
    /// Proceeding without the tag risks infinite self-interception, so the
    /// exchange fails instead of silently bypassing monitoring.
    #[error("cannot prepare request for interception: {0}")]
    Setup(String),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Transparently wraps an exchange to observe its lifecycle.
///
/// Sits in the request path, executes the call on a handler-free
/// configuration, relays every transport event verbatim to the caller's
/// delegate, and reports start/finish to the correlator. The caller sees
/// response semantics identical to an unintercepted call: no retry, no
/// body mutation, no added wire headers.
pub struct Interceptor {
    correlator: Arc<Correlator>,
    schemes: Vec<String>,
}

impl Interceptor {
    /// Interceptor claiming http and https requests.
    pub fn new(correlator: Arc<Correlator>) -> Self {
        Self::with_schemes(correlator, vec!["http".into(), "https".into()])
    }

    /// Interceptor claiming only the given URL schemes.
    pub fn with_schemes(correlator: Arc<Correlator>, schemes: Vec<String>) -> Self {
        Self { correlator, schemes }
    }

    /// Whether this interceptor should observe `req`.
    ///
    /// False when the request already carries the handled marker (the
    /// interception layer itself issued it) or its scheme is unsupported.
    pub fn should_handle<B>(&self, req: &Request<B>) -> bool {
        if req.extensions().get::<HandledMarker>().is_some() {
            return false;
        }
        match req.uri().scheme_str() {
            Some(scheme) => self.schemes.iter().any(|s| s == scheme),
            None => false,
        }
    }

    /// Execute `req`, observing its lifecycle.
    ///
    /// The exchange runs against a handler-free copy of `config` so the
    /// outgoing call is not re-intercepted. A finish event is reported
    /// exactly once per start, including when the returned future is
    /// dropped before completion.
    pub async fn execute(
        &self,
        config: &TransportConfig,
        transport: Arc<dyn Transport>,
        req: Request<RequestBody>,
        delegate: &mut dyn ExchangeDelegate,
    ) -> Result<ResponseSummary, InterceptError> {
        let clean = config.strip_handlers();

        let (parts, body) = req.into_parts();
        let initial_url = Url::parse(&parts.uri.to_string())
            .map_err(|e| InterceptError::Setup(format!("request URI is not an absolute URL: {e}")))?;

        let kind = classify(&parts.method, &body);
        let id = TaskId::next();
        self.correlator.on_start(id, initial_url.as_str(), kind);

        let guard = FinishGuard::new(self.correlator.clone(), id);

        let result = exchange::drive(
            transport.as_ref(),
            parts.method,
            parts.headers,
            initial_url,
            body,
            clean.max_redirects(),
            delegate,
        )
        .await;

        match result {
            Ok(summary) => {
                guard.finish(Some(summary.final_url.to_string()), None);
                Ok(summary)
            }
            Err(e) => {
                guard.finish(None, Some(&e));
                Err(e.into())
            }
        }
    }
}

/// Classify the execution mode from the request's body shape.
fn classify(method: &Method, body: &RequestBody) -> TaskKind {
    match body {
        RequestBody::Streamed(_) => TaskKind::StreamedUpload,
        RequestBody::Full(_)
            if *method == Method::POST || *method == Method::PUT || *method == Method::PATCH =>
        {
            TaskKind::BufferedUpload
        }
        _ => TaskKind::Download,
    }
}

/// Guarantees exactly one finish report per started task.
///
/// Dropping the guard without `finish` (the exchange future was cancelled)
/// reports a finish carrying a cancellation error, so the in-flight entry
/// is never leaked.
struct FinishGuard {
    correlator: Arc<Correlator>,
    id: TaskId,
    armed: bool,
}

impl FinishGuard {
    fn new(correlator: Arc<Correlator>, id: TaskId) -> Self {
        Self {
            correlator,
            id,
            armed: true,
        }
    }

    fn finish(mut self, final_url: Option<String>, error: Option<&dyn std::error::Error>) {
        self.armed = false;
        self.correlator.on_finish(self.id, final_url, error);
    }
}

impl Drop for FinishGuard {
    fn drop(&mut self) {
        if self.armed {
            let cancelled = TransportError::Cancelled;
            self.correlator.on_finish(self.id, None, Some(&cancelled));
        }
    }
}
