//! HTTP response types for the Mystore API client.
//!
//! This module provides the [`HttpResponse`] type for accessing status,
//! headers and the parsed body of API responses.

use std::collections::HashMap;

use serde_json::Value;

/// An HTTP response from the Mystore API.
///
/// The body is parsed as JSON when possible. Responses without a body (for
/// example `204 No Content` after a delete) carry [`Value::Null`]; the raw
/// text is always kept in `raw_body`.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lower-cased name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body, or `Null` if it was empty or not JSON.
    pub body: Value,
    /// The body exactly as received.
    pub raw_body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse` from already-parsed parts.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Value) -> Self {
        let raw_body = if body.is_null() {
            String::new()
        } else {
            body.to_string()
        };

        Self {
            code,
            headers,
            body,
            raw_body,
        }
    }

    /// Creates a response from the raw body text, parsing JSON if possible.
    #[must_use]
    pub fn from_raw(code: u16, headers: HashMap<String, Vec<String>>, raw_body: String) -> Self {
        let body = if raw_body.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&raw_body).unwrap_or(Value::Null)
        };

        Self {
            code,
            headers,
            body,
            raw_body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` if a non-empty body failed to parse as JSON.
    #[must_use]
    pub fn is_unparsed(&self) -> bool {
        self.body.is_null() && !self.raw_body.trim().is_empty()
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the JSON:API `data` member of the body, if present.
    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        self.body.get("data")
    }

    /// Returns the `links.next` reference of a paginated body.
    ///
    /// `None` when `links` is absent, has no `next`, or `next` is `null`.
    #[must_use]
    pub fn next_link(&self) -> Option<&str> {
        self.body
            .get("links")
            .and_then(|links| links.get("next"))
            .and_then(Value::as_str)
    }
}
