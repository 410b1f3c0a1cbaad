use crate::cache::PrecomputedHeaders;
use crate::constants::{CREDENTIALS_ALLOWED, LIST_SEPARATOR, PREFLIGHT_STATUS, WILDCARD, header};
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;
use crate::preflight::is_preflight;
use crate::result::{CorsDecision, CorsResult};
use tracing::{debug, warn};

/// Immutable CORS policy. Every rule is a pure function of the configured
/// options and, for `Access-Control-Allow-Origin`, the request's `Origin`.
///
/// A rule returning `None` means the header must be omitted; omission is how
/// CORS denies sharing, so no rule ever fails.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    options: CorsOptions,
    precomputed: PrecomputedHeaders,
}

impl CorsPolicy {
    pub fn new(options: CorsOptions) -> Self {
        if options.allow_credentials && options.allow_origins.iter().any(|o| o == WILDCARD) {
            // Browsers in credentialed mode reject a wildcard Allow-Origin.
            warn!("credentials are allowed together with a wildcard origin");
        }

        let mut policy = Self {
            options,
            precomputed: PrecomputedHeaders::default(),
        };
        policy.precomputed = PrecomputedHeaders::from_entries([
            (header::ACCESS_CONTROL_ALLOW_METHODS, policy.allow_methods()),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, policy.allow_headers()),
            (header::ACCESS_CONTROL_EXPOSE_HEADERS, policy.expose_headers()),
            (header::ACCESS_CONTROL_MAX_AGE, Some(policy.max_age())),
        ]);

        debug!(
            origins = policy.options.allow_origins.len(),
            credentials = policy.options.allow_credentials,
            max_age = policy.options.max_age,
            cached = policy.precomputed.len(),
            "CORS policy activated"
        );

        policy
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    pub fn precomputed(&self) -> &PrecomputedHeaders {
        &self.precomputed
    }

    /// Resolve `Access-Control-Allow-Origin`.
    ///
    /// A configured wildcard wins over any literal match, wherever it sits in
    /// the list. Otherwise the configured origin equal to the request's
    /// `Origin` is returned. Comparison is exact string equality.
    pub fn allow_origin(&self, request: &RequestContext<'_>) -> Option<&str> {
        let mut result = None;

        for allowed in &self.options.allow_origins {
            if allowed == WILDCARD {
                return Some(WILDCARD);
            }
            if allowed == request.origin {
                result = Some(allowed.as_str());
            }
        }

        result.filter(|value| !value.is_empty())
    }

    pub fn allow_credentials(&self) -> Option<&'static str> {
        self.options.allow_credentials.then_some(CREDENTIALS_ALLOWED)
    }

    pub fn allow_methods(&self) -> Option<String> {
        list_header_value(&self.options.allow_methods)
    }

    pub fn allow_headers(&self) -> Option<String> {
        list_header_value(&self.options.allow_headers)
    }

    pub fn expose_headers(&self) -> Option<String> {
        list_header_value(&self.options.expose_headers)
    }

    /// Always present, negative values included.
    pub fn max_age(&self) -> String {
        self.options.max_age.to_string()
    }

    /// `Vary: Origin` whenever more than one origin is configured.
    ///
    /// The rule counts configured entries rather than asking whether the
    /// chosen Allow-Origin depends on the request, so a list mixing the
    /// wildcard with literals still emits `Vary`.
    pub fn vary(&self) -> Option<&'static str> {
        (self.options.allow_origins.len() > 1).then_some(header::ORIGIN)
    }

    /// Compute the full header decision for one request.
    pub fn evaluate(&self, request: &RequestContext<'_>) -> CorsDecision {
        let mut headers = HeaderCollection::new();

        if let Some(value) = self.vary() {
            headers.add_vary(value);
        }
        if let Some(value) = self.allow_origin(request) {
            headers.set(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
        }
        if let Some(value) = self.allow_credentials() {
            headers.set(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, value);
        }

        if is_preflight(request) {
            for name in [
                header::ACCESS_CONTROL_ALLOW_METHODS,
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                header::ACCESS_CONTROL_MAX_AGE,
            ] {
                if let Some(value) = self.precomputed.get(name) {
                    headers.set(name, value);
                }
            }

            return CorsDecision::Preflight(CorsResult {
                headers: headers.into_headers(),
                status: Some(PREFLIGHT_STATUS),
                end_response: true,
            });
        }

        if let Some(value) = self.precomputed.get(header::ACCESS_CONTROL_EXPOSE_HEADERS) {
            headers.set(header::ACCESS_CONTROL_EXPOSE_HEADERS, value);
        }

        CorsDecision::Simple(CorsResult {
            headers: headers.into_headers(),
            status: None,
            end_response: false,
        })
    }
}

impl From<CorsOptions> for CorsPolicy {
    fn from(options: CorsOptions) -> Self {
        Self::new(options)
    }
}

fn list_header_value(values: &[String]) -> Option<String> {
    if values.iter().any(|value| value == WILDCARD) {
        return Some(WILDCARD.to_string());
    }

    let joined = values.join(LIST_SEPARATOR);
    if joined.is_empty() { None } else { Some(joined) }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
