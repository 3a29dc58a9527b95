//! Exchange driver: issues a request and relays transport events.

use http::header::{CONTENT_LENGTH, CONTENT_TYPE, LOCATION, TRANSFER_ENCODING};
use http::{HeaderMap, Method, Request, StatusCode, Uri};
use http_body_util::BodyExt;
use url::Url;

use crate::intercept::body::RequestBody;
use crate::intercept::delegate::ExchangeDelegate;
use crate::intercept::interceptor::HandledMarker;
use crate::intercept::transport::{Transport, TransportError};

/// Terminal outcome of a driven exchange.
#[derive(Debug, Clone)]
pub struct ResponseSummary {
    /// Status of the terminal response.
    pub status: StatusCode,
    /// URL the exchange terminated at (differs from the request URL after
    /// a redirect).
    pub final_url: Url,
}

/// Drive one exchange to completion: issue the request, follow redirects up
/// to `max_redirects`, and relay every transport event to `delegate`.
///
/// Redirect targets are resolved against the current URL, so relative
/// `Location` values work. A 301/302/303 on a body-carrying method is
/// replayed as GET without the body; a 307/308 keeps the method, but the
/// original body has already been consumed and is replayed empty.
pub(crate) async fn drive(
    transport: &dyn Transport,
    mut method: Method,
    mut headers: HeaderMap,
    initial_url: Url,
    body: RequestBody,
    max_redirects: usize,
    delegate: &mut dyn ExchangeDelegate,
) -> Result<ResponseSummary, TransportError> {
    let mut current_url = initial_url;
    let mut body = Some(body);
    let mut hops = 0usize;

    loop {
        let uri: Uri = current_url
            .as_str()
            .parse()
            .map_err(|_| TransportError::BadRedirect(current_url.to_string()))?;
        let outbound = body.take().unwrap_or(RequestBody::Empty).into_outbound();

        let mut req = Request::builder()
            .method(method.clone())
            .uri(uri)
            .body(outbound)
            .map_err(|e| TransportError::Other(format!("failed to build request: {e}")))?;
        *req.headers_mut() = headers.clone();
        // Tag so a transport that loops back through a monitored stack
        // refuses to re-intercept.
        req.extensions_mut().insert(HandledMarker);

        let response = transport.send(req).await?;
        let (head, inbound) = response.into_parts();

        if head.status.is_redirection() {
            if let Some(location) = head.headers.get(LOCATION) {
                if hops >= max_redirects {
                    return Err(TransportError::TooManyRedirects(max_redirects));
                }
                let raw = location
                    .to_str()
                    .map_err(|_| TransportError::BadRedirect("non-ASCII Location header".into()))?;
                let target = current_url
                    .join(raw)
                    .map_err(|e| TransportError::BadRedirect(format!("{raw}: {e}")))?;
                delegate.on_redirect(&current_url, &target, head.status);
                tracing::debug!(from = %current_url, to = %target, status = %head.status, "Following redirect");

                if matches!(
                    head.status,
                    StatusCode::MOVED_PERMANENTLY | StatusCode::FOUND | StatusCode::SEE_OTHER
                ) && method != Method::GET
                    && method != Method::HEAD
                {
                    method = Method::GET;
                    headers.remove(CONTENT_LENGTH);
                    headers.remove(CONTENT_TYPE);
                    headers.remove(TRANSFER_ENCODING);
                }
                current_url = target;
                hops += 1;
                continue;
            }
        }

        delegate.on_response(&head);

        let mut inbound = inbound;
        while let Some(frame) = inbound.frame().await {
            let frame = frame?;
            if let Ok(data) = frame.into_data() {
                delegate.on_chunk(data);
            }
        }

        return Ok(ResponseSummary {
            status: head.status,
            final_url: current_url,
        });
    }
}
