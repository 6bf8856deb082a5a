//! Error types for webkv
//!
//! Provides a unified error type for all operations.

use std::fmt;

use thiserror::Error;

/// Result type alias using WebKvError
pub type Result<T> = std::result::Result<T, WebKvError>;

/// Unified error type for webkv operations
#[derive(Debug, Error)]
pub enum WebKvError {
    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("Gave up on {path} after {attempts} timed out attempts")]
    RetriesExhausted { attempts: u32, path: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP status {status} for {path}")]
    HttpStatus { status: u16, path: String },

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Caller Errors
    // -------------------------------------------------------------------------
    #[error("Contract violation: {0}")]
    Contract(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl WebKvError {
    /// The store error carried by this error, if any
    pub fn as_store_error(&self) -> Option<&StoreError> {
        match self {
            WebKvError::Store(e) => Some(e),
            _ => None,
        }
    }
}

/// Kind of store-level failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    /// Anything the store reported through a `[false, message]` reply
    General,

    /// The key itself was unusable
    BadKey,
}

/// A logical error reported by the store, carrying its message text verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    kind: StoreErrorKind,
    message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            kind: StoreErrorKind::General,
            message: message.into(),
        }
    }

    pub fn bad_key(message: impl Into<String>) -> Self {
        Self {
            kind: StoreErrorKind::BadKey,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> StoreErrorKind {
        self.kind
    }

    pub fn is_bad_key(&self) -> bool {
        self.kind == StoreErrorKind::BadKey
    }

    /// The store's message (empty when the store gave none)
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            StoreErrorKind::General => write!(f, "{}", self.message),
            StoreErrorKind::BadKey => write!(f, "bad key: {}", self.message),
        }
    }
}

impl std::error::Error for StoreError {}
