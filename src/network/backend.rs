//! HTTP Backend
//!
//! One HTTP exchange, no retries.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{Result, WebKvError};
use crate::protocol::{Method, RawResponse, Request};

/// Redirect hops followed before the exchange fails
const MAX_REDIRECTS: usize = 10;

/// Why a single exchange failed
#[derive(Debug)]
pub enum DispatchError {
    /// The request did not complete within the timeout (retryable)
    Timeout(String),

    /// Anything else: refused connection, DNS, malformed URL...
    Other(String),
}

/// Performs one HTTP exchange against `url`
pub trait HttpBackend {
    fn dispatch(
        &self,
        url: &str,
        request: &Request,
        timeout: Duration,
    ) -> std::result::Result<RawResponse, DispatchError>;
}

/// Production backend on top of `reqwest`'s blocking client
pub struct ReqwestBackend {
    client: Client,
}

impl ReqwestBackend {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| WebKvError::Config(format!("http client build failed: {e}")))?;
        Ok(Self { client })
    }
}

impl HttpBackend for ReqwestBackend {
    fn dispatch(
        &self,
        url: &str,
        request: &Request,
        timeout: Duration,
    ) -> std::result::Result<RawResponse, DispatchError> {
        let mut builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Put => self.client.put(url),
        };
        builder = builder.timeout(timeout);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.to_vec());
        }

        let response = builder.send().map_err(classify)?;
        let status = response.status().as_u16();
        let body = response.bytes().map_err(classify)?;
        Ok(RawResponse::new(status, body))
    }
}

fn classify(err: reqwest::Error) -> DispatchError {
    if err.is_timeout() {
        DispatchError::Timeout(err.to_string())
    } else {
        DispatchError::Other(err.to_string())
    }
}
