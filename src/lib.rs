//! CORS negotiation for reverse proxies and HTTP middleware chains.
//!
//! A [`CorsPolicy`] turns configured sharing rules into response headers,
//! and a [`Negotiator`] applies them per request, answering preflight
//! requests itself and forwarding everything else.
//!
//! A wildcard `*` returned while the client's credentials mode is "include"
//! makes the browser reject the response. That is the CORS protocol working
//! as intended; the policy reports the combination but does not rewrite it.

pub mod constants;
mod cache;
mod context;
mod headers;
mod negotiator;
mod options;
mod policy;
mod preflight;
mod result;

pub use cache::PrecomputedHeaders;
pub use context::RequestContext;
pub use headers::{Headers, apply_headers, fill_headers};
pub use negotiator::{Negotiator, Next};
pub use options::CorsOptions;
pub use policy::CorsPolicy;
pub use preflight::is_preflight;
pub use result::{ConfigError, CorsDecision, CorsResult};
