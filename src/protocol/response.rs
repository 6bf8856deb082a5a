//! Response definitions
//!
//! Raw HTTP responses and the typed status pair.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// What the transport hands back for one HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Bytes,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Anything below 400; redirects are followed before this is checked
    pub fn is_success(&self) -> bool {
        self.status < 400
    }
}

/// The `[true, "OK"]` style pair returned by SET and PING
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack(pub bool, pub String);

impl Ack {
    pub fn ok(&self) -> bool {
        self.0
    }

    pub fn message(&self) -> &str {
        &self.1
    }
}
