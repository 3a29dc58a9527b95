//! Outbound request body shapes.

use bytes::Bytes;
use futures_util::stream::BoxStream;
use futures_util::TryStreamExt;
use http_body_util::{BodyExt, Empty, Full, StreamBody};
use hyper::body::Frame;

use crate::intercept::transport::OutboundBody;

/// Shape of an outbound request body.
///
/// The shape drives execution-mode selection: a streamed body is a
/// streamed upload, a full body on a body-carrying method is a buffered
/// upload, anything else is a plain fetch.
pub enum RequestBody {
    /// No body.
    Empty,
    /// Full body available up front.
    Full(Bytes),
    /// Body supplied incrementally. Cannot be replayed across redirects.
    Streamed(BoxStream<'static, Result<Bytes, std::io::Error>>),
}

impl RequestBody {
    /// Full body from anything convertible to `Bytes`.
    pub fn full(bytes: impl Into<Bytes>) -> Self {
        Self::Full(bytes.into())
    }

    pub fn is_streamed(&self) -> bool {
        matches!(self, Self::Streamed(_))
    }

    pub(crate) fn into_outbound(self) -> OutboundBody {
        match self {
            Self::Empty => Empty::<Bytes>::new().map_err(|e| match e {}).boxed_unsync(),
            Self::Full(bytes) => Full::new(bytes).map_err(|e| match e {}).boxed_unsync(),
            Self::Streamed(stream) => {
                StreamBody::new(stream.map_ok(Frame::data)).boxed_unsync()
            }
        }
    }
}

impl std::fmt::Debug for RequestBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty"),
            Self::Full(bytes) => write!(f, "Full({} bytes)", bytes.len()),
            Self::Streamed(_) => f.write_str("Streamed"),
        }
    }
}
