use crate::constants::header;
use http::{HeaderMap, Request};

/// Read-only view over the parts of a request that CORS negotiation reads.
///
/// An absent header is represented by the empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: &'a str,
    pub access_control_request_method: &'a str,
    pub access_control_request_headers: &'a str,
}

impl<'a> RequestContext<'a> {
    /// Borrow the relevant method and headers from an `http` request.
    ///
    /// Header values that are not visible ASCII are treated as absent. When a
    /// header repeats, only its first value is read.
    pub fn from_request<B>(request: &'a Request<B>) -> Self {
        let headers = request.headers();
        Self {
            method: request.method().as_str(),
            origin: header_str(headers, header::ORIGIN),
            access_control_request_method: header_str(
                headers,
                header::ACCESS_CONTROL_REQUEST_METHOD,
            ),
            access_control_request_headers: header_str(
                headers,
                header::ACCESS_CONTROL_REQUEST_HEADERS,
            ),
        }
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
