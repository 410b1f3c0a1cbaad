use crate::constants::header;
use http::HeaderMap;
use http::header::{HeaderName, HeaderValue};
use std::collections::HashMap;
use tracing::warn;

pub type Headers = HashMap<String, String>;

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::with_estimate(8)
    }

    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: HashMap::with_capacity(estimate),
        }
    }

    /// Set a header, replacing any earlier value.
    pub(crate) fn set<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.headers.insert(name.into(), value.into());
    }

    pub(crate) fn add_vary<S: Into<String>>(&mut self, value: S) {
        let incoming = value.into().trim().to_string();
        if incoming.is_empty() {
            return;
        }

        match self.headers.get_mut(header::VARY) {
            Some(existing) => {
                let present = existing
                    .split(',')
                    .map(str::trim)
                    .any(|entry| entry.eq_ignore_ascii_case(&incoming));
                if !present {
                    existing.push_str(", ");
                    existing.push_str(&incoming);
                }
            }
            None => {
                self.headers.insert(header::VARY.to_string(), incoming);
            }
        }
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

/// Write a decision's headers onto a response header map.
///
/// `Vary` is appended so values contributed by other layers survive; every
/// other header overwrites whatever the map already held.
pub fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    write_headers(map, headers, |map, name, value| {
        map.insert(name, value);
    });
}

/// Write a decision's headers onto a response produced by a later stage.
///
/// `Vary` is appended; every other header is only written where the map has
/// no value for it yet, so the later stage keeps the last word.
pub fn fill_headers(map: &mut HeaderMap, headers: &Headers) {
    write_headers(map, headers, |map, name, value| {
        map.entry(name).or_insert(value);
    });
}

fn write_headers<F>(map: &mut HeaderMap, headers: &Headers, mut write: F)
where
    F: FnMut(&mut HeaderMap, HeaderName, HeaderValue),
{
    for (name, value) in headers {
        let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) else {
            warn!(header = %name, "skipping CORS header that is not a valid HTTP header");
            continue;
        };

        if header_name == http::header::VARY {
            map.append(header_name, header_value);
        } else {
            write(map, header_name, header_value);
        }
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
