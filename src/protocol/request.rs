//! Request definitions
//!
//! A request lives only for the duration of one call.

use std::collections::BTreeMap;
use std::fmt;

use bytes::Bytes;

use crate::error::{Result, WebKvError};

/// HTTP methods used against the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Put => "PUT",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single HTTP request against the gateway
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,

    /// Escaped path, starting with `/`, appended to the base URL
    pub path: String,

    pub headers: BTreeMap<String, String>,

    pub body: Option<Bytes>,
}

impl Request {
    /// Build a request; a non-empty body always makes it a PUT
    pub fn new(
        method: Method,
        path: impl Into<String>,
        body: Option<Bytes>,
        headers: BTreeMap<String, String>,
    ) -> Self {
        let body = body.filter(|b| !b.is_empty());
        let method = if body.is_some() { Method::Put } else { method };
        Self {
            method,
            path: path.into(),
            headers,
            body,
        }
    }
}

/// Per-call extension points: extra headers or a raw request body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallOptions {
    pub headers: BTreeMap<String, String>,
    pub body: Option<Bytes>,
}

impl CallOptions {
    pub fn none() -> Self {
        Self::default()
    }

    /// Options carrying a single header
    pub fn header(name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(name.into(), value.into());
        Self { headers, body: None }
    }

    pub fn headers(headers: BTreeMap<String, String>) -> Self {
        Self { headers, body: None }
    }

    /// Options carrying a raw body, sent with PUT
    pub fn body(body: impl Into<Bytes>) -> Self {
        Self {
            headers: BTreeMap::new(),
            body: Some(body.into()),
        }
    }

    /// At most one extension point may be populated per call
    pub fn check(&self) -> Result<()> {
        if !self.headers.is_empty() && self.body.is_some() {
            return Err(WebKvError::Contract(
                "headers and body cannot be combined in one call".to_string(),
            ));
        }
        Ok(())
    }
}
