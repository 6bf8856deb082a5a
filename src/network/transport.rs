//! Request Transport
//!
//! Sends one request to the gateway, re-issuing it while it times out.

use std::collections::BTreeMap;
use std::time::Duration;

use bytes::Bytes;

use super::backend::{DispatchError, HttpBackend};
use crate::config::ClientConfig;
use crate::error::{Result, WebKvError};
use crate::protocol::{Method, RawResponse, Request};

/// Retrying request primitive underneath every command
pub struct Transport<B: HttpBackend> {
    /// HTTP engine performing single exchanges
    backend: B,

    /// `scheme://host:port`, no trailing slash
    base_url: String,

    /// Headers applied before the per-call ones
    default_headers: BTreeMap<String, String>,

    timeout: Duration,

    /// Total attempts allowed for a request that keeps timing out
    max_tries: u32,
}

impl<B: HttpBackend> Transport<B> {
    pub fn new(config: &ClientConfig, backend: B) -> Self {
        Self {
            backend,
            base_url: config.base_url.clone(),
            default_headers: config.default_headers.clone(),
            timeout: config.timeout(),
            max_tries: config.max_tries,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Send a request to `base_url + path`
    ///
    /// A non-empty `body` turns the request into a PUT whatever `method` says.
    /// Timeouts are retried up to `max_tries` total attempts with no delay;
    /// every other failure is returned straight away.
    pub fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Bytes>,
        headers: &BTreeMap<String, String>,
    ) -> Result<RawResponse> {
        let mut merged = self.default_headers.clone();
        merged.extend(headers.iter().map(|(k, v)| (k.clone(), v.clone())));
        let request = Request::new(method, path, body, merged);
        let url = format!("{}{}", self.base_url, request.path);

        let mut attempt = 1;
        loop {
            tracing::debug!(method = %request.method, path = %request.path, attempt, "sending request");
            match self.backend.dispatch(&url, &request, self.timeout) {
                Ok(response) => return Ok(response),
                Err(DispatchError::Timeout(reason)) => {
                    if attempt >= self.max_tries {
                        tracing::warn!(
                            method = %request.method,
                            path = %request.path,
                            attempts = attempt,
                            "giving up after repeated timeouts"
                        );
                        return Err(WebKvError::RetriesExhausted {
                            attempts: attempt,
                            path: request.path.clone(),
                        });
                    }
                    attempt += 1;
                    tracing::warn!(
                        method = %request.method,
                        path = %request.path,
                        attempt,
                        %reason,
                        "retrying due to timeout"
                    );
                }
                Err(DispatchError::Other(reason)) => {
                    return Err(WebKvError::Transport(reason));
                }
            }
        }
    }
}
