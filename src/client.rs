//! Client Module
//!
//! The command adapter: one logical store operation becomes one HTTP
//! request/response cycle.
//!
//! ## Responsibilities
//! - Build the escaped request path for a command
//! - Send it through the retrying transport
//! - Decode the single-key JSON envelope
//! - Surface `[false, message]` replies as store errors
//!
//! A `Client` keeps no state between calls apart from its transport
//! configuration. Use one client per sequential caller.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{Result, StoreError, WebKvError};
use crate::network::{HttpBackend, ReqwestBackend, Transport};
use crate::protocol::{
    build_path, decode_envelope, interpret_result, Ack, Arg, CallOptions, Command, CommandName,
    Method,
};

/// Blocking client for a Redis store behind an HTTP/JSON gateway
///
/// ```no_run
/// use webkv::{Client, ClientConfig};
///
/// let client = Client::new(ClientConfig::builder().base_url("http://127.0.0.1:7379").build())?;
/// client.set("foo", "bar")?;
/// assert_eq!(client.get("foo")?, Some("bar".to_string()));
/// # Ok::<(), webkv::WebKvError>(())
/// ```
pub struct Client<B: HttpBackend = ReqwestBackend> {
    transport: Transport<B>,
}

impl Client<ReqwestBackend> {
    /// Create a client using the `reqwest` blocking backend
    pub fn new(config: ClientConfig) -> Result<Self> {
        let backend = ReqwestBackend::new()?;
        Client::with_backend(config, backend)
    }
}

impl<B: HttpBackend> Client<B> {
    /// Create a client on top of any HTTP backend
    pub fn with_backend(config: ClientConfig, backend: B) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            transport: Transport::new(&config, backend),
        })
    }

    pub fn transport(&self) -> &Transport<B> {
        &self.transport
    }

    // =========================================================================
    // Generic Entry Points
    // =========================================================================

    /// Run a command with positional arguments and no extra options
    pub fn execute<I, A>(&self, name: CommandName, args: I) -> Result<Value>
    where
        I: IntoIterator<Item = A>,
        A: Into<Arg>,
    {
        self.execute_with(&Command::new(name, args), &CallOptions::none())
    }

    /// Run a command given by name (case-insensitive)
    pub fn execute_named<I, A>(&self, name: &str, args: I) -> Result<Value>
    where
        I: IntoIterator<Item = A>,
        A: Into<Arg>,
    {
        let name: CommandName = name.parse()?;
        self.execute(name, args)
    }

    /// Run a command with extra headers or a request body
    ///
    /// Returns the value stored under the command's key in the reply
    /// envelope, after the store's error signalling has been checked.
    pub fn execute_with(&self, command: &Command, options: &CallOptions) -> Result<Value> {
        options.check()?;

        let name = command.name();
        let path = build_path(name, command.args());
        let response = self
            .transport
            .send(Method::Get, &path, options.body.clone(), &options.headers)?;

        if !response.is_success() {
            return Err(WebKvError::HttpStatus {
                status: response.status,
                path,
            });
        }

        let result = decode_envelope(name, &response.body)?;
        tracing::trace!(command = %name, %result, "decoded envelope");
        interpret_result(name, result)
    }

    /// `execute_with`, with the result converted to `T`
    ///
    /// A reply that does not fit `T` is a protocol error.
    pub fn execute_as<T>(&self, command: &Command, options: &CallOptions) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let value = self.execute_with(command, options)?;
        serde_json::from_value(value).map_err(|e| {
            WebKvError::Protocol(format!("unexpected {} reply: {}", command.name(), e))
        })
    }

    fn typed<T, I, A>(&self, name: CommandName, args: I) -> Result<T>
    where
        T: DeserializeOwned,
        I: IntoIterator<Item = A>,
        A: Into<Arg>,
    {
        self.execute_as(&Command::new(name, args), &CallOptions::none())
    }

    // =========================================================================
    // Strings and Keys
    // =========================================================================

    /// Value of `key`, `None` when it does not exist
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        require_key(key)?;
        self.typed(CommandName::Get, [key])
    }

    /// GET with extra headers (or a body) on the request
    pub fn get_with(&self, key: &str, options: &CallOptions) -> Result<Option<String>> {
        require_key(key)?;
        self.execute_as(&Command::new(CommandName::Get, [key]), options)
    }

    pub fn set(&self, key: &str, value: impl Into<Arg>) -> Result<Ack> {
        require_key(key)?;
        self.typed(CommandName::Set, [Arg::from(key), value.into()])
    }

    /// SET with the value sent as the request body (PUT)
    pub fn set_body(&self, key: &str, body: impl Into<Bytes>) -> Result<Ack> {
        require_key(key)?;
        self.execute_as(
            &Command::new(CommandName::Set, [key]),
            &CallOptions::body(body),
        )
    }

    /// Number of keys removed
    pub fn del(&self, key: &str) -> Result<i64> {
        require_key(key)?;
        self.typed(CommandName::Del, [key])
    }

    /// Seconds to live; -1 without expiry, -2 when the key is missing
    pub fn ttl(&self, key: &str) -> Result<i64> {
        require_key(key)?;
        self.typed(CommandName::Ttl, [key])
    }

    /// 1 if the timeout was set, 0 if the key does not exist
    pub fn expire(&self, key: &str, seconds: i64) -> Result<i64> {
        require_key(key)?;
        self.typed(CommandName::Expire, [Arg::from(key), Arg::from(seconds)])
    }

    pub fn keys(&self, pattern: &str) -> Result<Vec<String>> {
        self.typed(CommandName::Keys, [pattern])
    }

    /// Type name of the value at `key` (`string`, `list`, `set`, `none`...)
    pub fn key_type(&self, key: &str) -> Result<String> {
        require_key(key)?;
        self.typed(CommandName::Type, [key])
    }

    pub fn ping(&self) -> Result<Ack> {
        self.typed(CommandName::Ping, std::iter::empty::<Arg>())
    }

    pub fn incr(&self, key: &str) -> Result<i64> {
        require_key(key)?;
        self.typed(CommandName::Incr, [key])
    }

    pub fn decr(&self, key: &str) -> Result<i64> {
        require_key(key)?;
        self.typed(CommandName::Decr, [key])
    }

    // =========================================================================
    // Sets
    // =========================================================================

    pub fn scard(&self, key: &str) -> Result<i64> {
        require_key(key)?;
        self.typed(CommandName::Scard, [key])
    }

    pub fn smembers(&self, key: &str) -> Result<Vec<String>> {
        require_key(key)?;
        self.typed(CommandName::Smembers, [key])
    }

    /// Number of members actually added
    pub fn sadd(&self, key: &str, member: impl Into<Arg>) -> Result<i64> {
        require_key(key)?;
        self.typed(CommandName::Sadd, [Arg::from(key), member.into()])
    }

    pub fn zcard(&self, key: &str) -> Result<i64> {
        require_key(key)?;
        self.typed(CommandName::Zcard, [key])
    }

    // =========================================================================
    // Lists
    // =========================================================================

    pub fn llen(&self, key: &str) -> Result<i64> {
        require_key(key)?;
        self.typed(CommandName::Llen, [key])
    }

    pub fn lrange(&self, key: &str, start: i64, stop: i64) -> Result<Vec<String>> {
        require_key(key)?;
        self.typed(
            CommandName::Lrange,
            [Arg::from(key), Arg::from(start), Arg::from(stop)],
        )
    }

    pub fn lindex(&self, key: &str, index: i64) -> Result<Option<String>> {
        require_key(key)?;
        self.typed(CommandName::Lindex, [Arg::from(key), Arg::from(index)])
    }

    /// Prepend `value`; returns the new list length
    pub fn lpush(&self, key: &str, value: impl Into<Arg>) -> Result<i64> {
        require_key(key)?;
        self.typed(CommandName::Lpush, [Arg::from(key), value.into()])
    }
}

fn require_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(StoreError::bad_key("key must not be empty").into());
    }
    Ok(())
}
