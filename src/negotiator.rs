use crate::context::RequestContext;
use crate::headers::{apply_headers, fill_headers};
use crate::policy::CorsPolicy;
use crate::result::CorsDecision;
use arc_swap::ArcSwap;
use http::{Request, Response, StatusCode};
use std::sync::Arc;
use tracing::{debug, info, trace};

/// The stage a non-preflight request is forwarded to.
pub trait Next<B> {
    type Body;

    fn call(&self, request: Request<B>) -> Response<Self::Body>;
}

impl<B, R, F> Next<B> for F
where
    F: Fn(Request<B>) -> Response<R>,
{
    type Body = R;

    fn call(&self, request: Request<B>) -> Response<R> {
        self(request)
    }
}

/// CORS middleware: decorates responses with the policy's headers and
/// answers preflight requests itself.
pub struct Negotiator<N> {
    policy: ArcSwap<CorsPolicy>,
    next: N,
}

impl<N> Negotiator<N> {
    pub fn new(policy: CorsPolicy, next: N) -> Self {
        Self {
            policy: ArcSwap::from_pointee(policy),
            next,
        }
    }

    /// Snapshot of the policy currently serving requests.
    pub fn policy(&self) -> Arc<CorsPolicy> {
        self.policy.load_full()
    }

    /// Publish a new policy. Requests already being handled finish with the
    /// snapshot they started with.
    pub fn reload(&self, policy: CorsPolicy) {
        info!(
            origins = policy.options().allow_origins.len(),
            "CORS policy reloaded"
        );
        self.policy.store(Arc::new(policy));
    }

    pub fn next(&self) -> &N {
        &self.next
    }

    /// Handle one request.
    ///
    /// Preflight requests get a `204 No Content` with an empty body and never
    /// reach the next stage. Anything else is forwarded exactly once and the
    /// CORS headers fill in whatever the next stage's response left unset;
    /// its status and body pass through untouched.
    pub fn handle<B>(&self, request: Request<B>) -> Response<N::Body>
    where
        N: Next<B>,
        N::Body: Default,
    {
        let policy = self.policy.load();
        let context = RequestContext::from_request(&request);

        match policy.evaluate(&context) {
            CorsDecision::Preflight(result) => {
                debug!(origin = context.origin, "answering CORS preflight");
                let mut response = Response::new(N::Body::default());
                *response.status_mut() = StatusCode::NO_CONTENT;
                apply_headers(response.headers_mut(), &result.headers);
                response
            }
            CorsDecision::Simple(result) => {
                trace!(method = %request.method(), "forwarding CORS request");
                let mut response = self.next.call(request);
                fill_headers(response.headers_mut(), &result.headers);
                response
            }
        }
    }
}

#[cfg(test)]
#[path = "negotiator_test.rs"]
mod negotiator_test;
