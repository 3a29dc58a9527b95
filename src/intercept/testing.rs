//! Test doubles shared by the interception unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use bytes::Bytes;
use futures_util::future::BoxFuture;
use http::response::Parts;
use http::{HeaderMap, Method, Request, Response, StatusCode, Uri};
use http_body_util::{BodyExt, Full};
use url::Url;

use crate::intercept::delegate::ExchangeDelegate;
use crate::intercept::interceptor::HandledMarker;
use crate::intercept::transport::{InboundBody, OutboundBody, Transport, TransportError};

/// What the driver actually handed to the transport.
#[derive(Debug, Clone)]
pub(crate) struct SentRequest {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub tagged: bool,
}

type QueuedResult = Result<(StatusCode, Vec<(String, String)>, Bytes), TransportError>;

/// Transport returning queued responses in order.
///
/// With an empty queue, `send` pends forever, which lets tests exercise
/// cancellation.
pub(crate) struct MockTransport {
    queue: Mutex<VecDeque<QueuedResult>>,
    sent: Mutex<Vec<SentRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn push_response(&self, status: u16, headers: &[(&str, &str)], body: Bytes) {
        let headers = headers
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.queue.lock().unwrap().push_back(Ok((
            StatusCode::from_u16(status).unwrap(),
            headers,
            body,
        )));
    }

    pub fn push_error(&self, err: TransportError) {
        self.queue.lock().unwrap().push_back(Err(err));
    }

    pub fn sent(&self) -> Vec<SentRequest> {
        self.sent.lock().unwrap().clone()
    }
}

impl Transport for MockTransport {
    fn send(
        &self,
        req: Request<OutboundBody>,
    ) -> BoxFuture<'_, Result<Response<InboundBody>, TransportError>> {
        self.sent.lock().unwrap().push(SentRequest {
            method: req.method().clone(),
            uri: req.uri().clone(),
            headers: req.headers().clone(),
            tagged: req.extensions().get::<HandledMarker>().is_some(),
        });
        let next = self.queue.lock().unwrap().pop_front();
        Box::pin(async move {
            match next {
                Some(Ok((status, headers, body))) => {
                    let mut builder = Response::builder().status(status);
                    for (k, v) in &headers {
                        builder = builder.header(k.as_str(), v.as_str());
                    }
                    let body: InboundBody = Full::new(body).map_err(|e| match e {}).boxed();
                    Ok(builder.body(body).unwrap())
                }
                Some(Err(e)) => Err(e),
                None => futures_util::future::pending().await,
            }
        })
    }
}

/// Delegate that records every relayed event.
#[derive(Default)]
pub(crate) struct CollectingDelegate {
    pub statuses: Vec<StatusCode>,
    pub chunks: Vec<Bytes>,
    pub redirects: Vec<(Url, Url, StatusCode)>,
}

impl CollectingDelegate {
    pub fn body(&self) -> Vec<u8> {
        self.chunks.iter().flat_map(|c| c.iter().copied()).collect()
    }
}

impl ExchangeDelegate for CollectingDelegate {
    fn on_response(&mut self, head: &Parts) {
        self.statuses.push(head.status);
    }

    fn on_chunk(&mut self, chunk: Bytes) {
        self.chunks.push(chunk);
    }

    fn on_redirect(&mut self, from: &Url, to: &Url, status: StatusCode) {
        self.redirects.push((from.clone(), to.clone(), status));
    }
}
