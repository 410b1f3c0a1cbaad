pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
    pub const ACCESS_CONTROL_EXPOSE_HEADERS: &str = "Access-Control-Expose-Headers";
    pub const ACCESS_CONTROL_MAX_AGE: &str = "Access-Control-Max-Age";
    pub const ACCESS_CONTROL_REQUEST_HEADERS: &str = "Access-Control-Request-Headers";
    pub const ACCESS_CONTROL_REQUEST_METHOD: &str = "Access-Control-Request-Method";
    pub const ORIGIN: &str = "Origin";
    pub const VARY: &str = "Vary";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

/// Wildcard token accepted in every configured list. Browsers treat it as a
/// literal when the request's credentials mode is "include".
pub const WILDCARD: &str = "*";

/// Value of `Access-Control-Allow-Credentials` when credentials are allowed.
pub const CREDENTIALS_ALLOWED: &str = "true";

/// Separator used when joining configured lists into a header value.
pub const LIST_SEPARATOR: &str = ", ";

/// Default preflight cache lifetime, in seconds.
pub const DEFAULT_MAX_AGE: i64 = 5;

/// Status returned for a detected preflight request.
pub const PREFLIGHT_STATUS: u16 = 204;
