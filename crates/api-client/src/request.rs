//! Request descriptors and materialized requests
//!
//! A [`RequestOptions`] describes a logical call: method, optional JSON body,
//! extra headers, and whether the session token should be attached. The
//! client resolves it against the configured base URL and the current
//! session token into a [`PreparedRequest`], which is the exact request that
//! goes on the wire. The split keeps materialization inspectable: tests
//! assert on the prepared form without touching the network.

use reqwest::Method;
use reqwest::header::HeaderMap;
use serde::Serialize;
use serde_json::Value;

/// A request descriptor: everything about a call except the endpoint path
///
/// Defaults to an unauthenticated GET with no body and no extra headers.
/// Immutable once handed to the client; build a fresh one per call.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// HTTP method (GET when unspecified)
    pub method: Method,
    /// JSON body value; `None` sends no body at all
    pub body: Option<Value>,
    /// Extra headers overlaid on the defaults (caller wins on collision)
    pub headers: Vec<(String, String)>,
    /// Whether to attach the session token as a Bearer header
    pub authenticated: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            body: None,
            headers: Vec::new(),
            authenticated: false,
        }
    }
}

impl RequestOptions {
    /// An unauthenticated GET
    #[must_use]
    pub fn get() -> Self {
        Self::default()
    }

    /// A descriptor with an explicit method
    #[must_use]
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Set the HTTP method
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Attach a JSON body
    ///
    /// Serialization happens eagerly so a non-serializable value surfaces
    /// here rather than mid-dispatch.
    pub fn with_body<B: Serialize>(mut self, body: &B) -> Result<Self, serde_json::Error> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Attach an already-built JSON value as the body
    #[must_use]
    pub fn with_json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Add an extra header
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Mark the request as authenticated
    #[must_use]
    pub fn authenticated(mut self) -> Self {
        self.authenticated = true;
        self
    }
}

/// A fully materialized request, ready for dispatch
///
/// Derived deterministically from a [`RequestOptions`] plus the session
/// token current at build time; nothing mutates it afterwards, so a login
/// or logout racing an in-flight call never changes these headers.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    /// Absolute request URL
    pub url: String,
    /// HTTP method
    pub method: Method,
    /// Resolved header map, `Content-Type: application/json` always present
    pub headers: HeaderMap,
    /// Serialized JSON body text, when the descriptor carried a body
    pub body: Option<String>,
}

impl PreparedRequest {
    /// Whether an `Authorization` header is attached
    #[must_use]
    pub fn is_authorized(&self) -> bool {
        self.headers.contains_key(reqwest::header::AUTHORIZATION)
    }
}
