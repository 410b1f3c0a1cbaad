use cors_negotiator::constants::{header, method};
use cors_negotiator::{CorsDecision, CorsOptions, CorsPolicy, Negotiator, Next, RequestContext};
use http::{Request, Response, StatusCode};
use std::sync::atomic::{AtomicUsize, Ordering};

pub const BACKEND_BODY: &str = "backend body";

pub fn policy() -> CorsOptions {
    CorsOptions::new()
}

/// Next stage that records how often it ran and answers `200 OK`.
#[derive(Default)]
pub struct Backend {
    calls: AtomicUsize,
}

impl Backend {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Next<()> for Backend {
    type Body = String;

    fn call(&self, _request: Request<()>) -> Response<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut response = Response::new(BACKEND_BODY.to_string());
        *response.status_mut() = StatusCode::OK;
        response
    }
}

pub fn negotiator(policy: CorsPolicy) -> Negotiator<Backend> {
    Negotiator::new(policy, Backend::default())
}

pub struct RequestBuilder {
    method: String,
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
}

impl RequestBuilder {
    fn new(method: &str) -> Self {
        Self {
            method: method.into(),
            origin: None,
            request_method: None,
            request_headers: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn build(self) -> Request<()> {
        let mut builder = Request::builder()
            .method(self.method.as_str())
            .uri("https://cors.example.com/api/");
        if let Some(origin) = &self.origin {
            builder = builder.header(header::ORIGIN, origin.as_str());
        }
        if let Some(value) = &self.request_method {
            builder = builder.header(header::ACCESS_CONTROL_REQUEST_METHOD, value.as_str());
        }
        if let Some(value) = &self.request_headers {
            builder = builder.header(header::ACCESS_CONTROL_REQUEST_HEADERS, value.as_str());
        }
        builder.body(()).expect("valid test request")
    }

    pub fn evaluate(self, policy: &CorsPolicy) -> CorsDecision {
        let request = self.build();
        policy.evaluate(&RequestContext::from_request(&request))
    }

    pub fn send(self, negotiator: &Negotiator<Backend>) -> Response<String> {
        negotiator.handle(self.build())
    }
}

pub fn simple_request() -> RequestBuilder {
    RequestBuilder::new(method::GET)
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::new(method::OPTIONS)
}
