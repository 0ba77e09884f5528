//! Request handling: IDs and path decoding.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) for log correlation
//! - Decode the percent-encoded path into the candidate download URL
//! - Validate the candidate's URL syntax before anything leaves the process
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - Only the path is inspected; method, query, headers, and body are
//!   ignored by the relay contract
//! - The decoded URL is handed on verbatim, never re-encoded

use axum::http::{HeaderValue, Request};
use percent_encoding::percent_decode_str;
use tower_http::request_id::{MakeRequestId, RequestId};
use url::Url;
use uuid::Uuid;

use crate::http::response::RelayError;

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Request-ID generator backed by UUID v4.
#[derive(Clone, Copy, Default)]
pub struct MakeRelayRequestId;

impl MakeRequestId for MakeRelayRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Decode the request path into the candidate download URL.
///
/// The path, minus its leading slash, is percent-decoded and must parse as
/// an absolute URL. Validation order matters: an empty candidate is
/// reported as missing before any syntax check runs.
pub fn decode_target(path: &str) -> Result<String, RelayError> {
    let encoded = path.strip_prefix('/').unwrap_or(path);

    let decoded = percent_decode_str(encoded)
        .decode_utf8()
        .map_err(|_| RelayError::InvalidUrl)?;

    if decoded.is_empty() {
        return Err(RelayError::MissingUrl);
    }

    Url::parse(&decoded).map_err(|_| RelayError::InvalidUrl)?;

    Ok(decoded.into_owned())
}
