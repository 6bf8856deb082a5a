//! Network Module
//!
//! HTTP request transport with bounded retry on timeout.
//!
//! ## Architecture
//! - `HttpBackend` performs exactly one HTTP exchange
//! - `Transport` owns the base URL, timeout and retry budget
//! - Retries are synchronous re-issues with no backoff

mod backend;
mod transport;

pub use backend::{DispatchError, HttpBackend, ReqwestBackend};
pub use transport::Transport;
