use crate::constants::{DEFAULT_MAX_AGE, WILDCARD, method};
use crate::policy::CorsPolicy;
use crate::result::ConfigError;
use serde::{Deserialize, Serialize};

/// Sharing rules a server advertises to cross-origin clients.
///
/// Decodes from the camelCase document a proxy plugin host hands over
/// (`allowCredentials`, `allowHeaders`, `allowMethods`, `allowOrigins`,
/// `exposeHeaders`, `maxAge`). Missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CorsOptions {
    pub allow_credentials: bool,
    pub allow_headers: Vec<String>,
    pub allow_methods: Vec<String>,
    pub allow_origins: Vec<String>,
    pub expose_headers: Vec<String>,
    /// Preflight cache lifetime in seconds. Negative values disable caching.
    pub max_age: i64,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            allow_credentials: false,
            allow_headers: Vec::new(),
            allow_methods: vec![method::HEAD.into(), method::GET.into(), method::POST.into()],
            allow_origins: vec![WILDCARD.into()],
            expose_headers: Vec::new(),
            max_age: DEFAULT_MAX_AGE,
        }
    }
}

impl CorsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(document)?)
    }

    pub fn allow_credentials(mut self, enabled: bool) -> Self {
        self.allow_credentials = enabled;
        self
    }

    pub fn allow_headers<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_headers = collect(values);
        self
    }

    pub fn allow_methods<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_methods = collect(values);
        self
    }

    pub fn allow_origins<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_origins = collect(values);
        self
    }

    pub fn expose_headers<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expose_headers = collect(values);
        self
    }

    pub fn max_age(mut self, seconds: i64) -> Self {
        self.max_age = seconds;
        self
    }

    /// Freeze the options into a ready-to-serve policy.
    pub fn build(self) -> CorsPolicy {
        CorsPolicy::new(self)
    }
}

fn collect<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Into::into).collect()
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
