use crate::constants::method;
use crate::context::RequestContext;

/// Returns `true` when the request is a CORS preflight request.
///
/// All four conditions must hold: the method is exactly `OPTIONS`, and the
/// `Origin`, `Access-Control-Request-Method` and
/// `Access-Control-Request-Headers` headers are all non-empty. A plain
/// `OPTIONS` request missing any of them belongs to the application.
pub fn is_preflight(request: &RequestContext<'_>) -> bool {
    request.method == method::OPTIONS
        && !request.origin.is_empty()
        && !request.access_control_request_method.is_empty()
        && !request.access_control_request_headers.is_empty()
}

#[cfg(test)]
#[path = "preflight_test.rs"]
mod preflight_test;
