//! Protocol Module
//!
//! Defines the HTTP/JSON gateway protocol spoken to the store.
//!
//! ## Request Format
//! ```text
//! GET /<COMMAND>/<arg1>/<arg2>/...        (read style)
//! PUT /<COMMAND>/<arg1>/...  + raw body   (body stands in for the last arg)
//! ```
//! A `/` inside an argument is sent as `%2F`; nothing else is escaped.
//!
//! ## Response Format
//! ```text
//! {"<COMMAND>": <result>}
//! ```
//! `<result>` is a scalar, a list, `null`, or a `[success, payload]` pair.
//! `[false, "message"]` is how the store reports a failed command inside
//! an HTTP 200 reply.

mod codec;
mod command;
mod request;
mod response;

pub use codec::{build_path, decode_envelope, escape_segment, interpret_result};
pub use command::{Arg, Arity, Command, CommandName};
pub use request::{CallOptions, Method, Request};
pub use response::{Ack, RawResponse};
