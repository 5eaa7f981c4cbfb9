//! Request snapshot handed to route handlers.

use tiny_http::{Method, Request};

/// The parts of a request the handlers look at.
///
/// Decoupled from `tiny_http::Request` so handlers can be exercised
/// without a socket.
#[derive(Debug, Clone)]
pub struct Incoming {
    pub method: Method,
    /// Raw request target, including the query string.
    pub url: String,
    pub range: Option<String>,
    pub if_modified_since: Option<String>,
}

impl Incoming {
    pub fn from_request(request: &Request) -> Self {
        let header = |name: &str| {
            request
                .headers()
                .iter()
                .find(|h| h.field.as_str().as_str().eq_ignore_ascii_case(name))
                .map(|h| h.value.to_string())
        };
        Self {
            method: request.method().clone(),
            url: request.url().to_string(),
            range: header("range"),
            if_modified_since: header("if-modified-since"),
        }
    }

    /// Path part of the target, without query string or fragment.
    pub fn path(&self) -> &str {
        self.url.split(['?', '#']).next().unwrap_or_default()
    }

    /// Raw query string (may be empty).
    pub fn query(&self) -> &str {
        let without_fragment = self.url.split('#').next().unwrap_or_default();
        without_fragment
            .split_once('?')
            .map_or("", |(_, query)| query)
    }
}

#[cfg(test)]
impl Incoming {
    /// A plain GET for `url`.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            range: None,
            if_modified_since: None,
        }
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range = Some(range.into());
        self
    }

    pub fn with_if_modified_since(mut self, date: impl Into<String>) -> Self {
        self.if_modified_since = Some(date.into());
        self
    }
}
