use crate::headers::Headers;
use thiserror::Error;

/// Headers and response metadata emitted for either a preflight or simple request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsResult {
    pub headers: Headers,
    pub status: Option<u16>,
    pub end_response: bool,
}

/// Overall decision returned by the policy engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    /// Answer immediately; the next stage must not run.
    Preflight(CorsResult),
    /// Forward to the next stage and decorate its response.
    Simple(CorsResult),
}

impl CorsDecision {
    pub fn is_preflight(&self) -> bool {
        matches!(self, CorsDecision::Preflight(_))
    }

    pub fn result(&self) -> &CorsResult {
        match self {
            CorsDecision::Preflight(result) | CorsDecision::Simple(result) => result,
        }
    }

    pub fn into_result(self) -> CorsResult {
        match self {
            CorsDecision::Preflight(result) | CorsDecision::Simple(result) => result,
        }
    }
}

/// Errors raised while decoding a configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid CORS configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
