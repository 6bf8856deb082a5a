//! # webkv
//!
//! A blocking client for a Redis store exposed through an HTTP/JSON
//! gateway (webdis style):
//! - Typed methods for a fixed command vocabulary
//! - Escaped `/COMMAND/arg/...` request paths
//! - Single-key JSON envelope decoding
//! - Store errors recognised inside HTTP 200 replies
//! - Bounded retry when requests time out
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Client (Command Adapter)                    │
//! │        get / set / ttl / lpush / ... / execute               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Protocol   │          │  Transport  │
//!   │ path/envel. │          │ retry loop  │
//!   └─────────────┘          └──────┬──────┘
//!                                   │
//!                                   ▼
//!                           ┌─────────────┐
//!                           │ HttpBackend │
//!                           │  (reqwest)  │
//!                           └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, StoreError, StoreErrorKind, WebKvError};
pub use config::ClientConfig;
pub use client::Client;
pub use protocol::{Ack, Arg, CallOptions, Command, CommandName};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of webkv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
