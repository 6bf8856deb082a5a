//! Protocol codec
//!
//! Path encoding and envelope decoding for the gateway protocol.
//!
//! ## Path
//! ```text
//! /<COMMAND>/<arg1>/<arg2>/...
//! ```
//!
//! ## Envelope
//! ```text
//! {"<COMMAND>": <result>}         exactly one key
//! ```

use std::borrow::Cow;

use serde_json::Value;

use super::{Arg, CommandName};
use crate::error::{Result, StoreError, WebKvError};

/// Escape for a literal `/` inside a path segment
const SLASH_ESCAPE: &str = "%2F";

// =============================================================================
// Path Encoding
// =============================================================================

/// Escape one path segment: every `/` becomes `%2F`, nothing else changes
///
/// `?` and `#` go out as-is, so the URL parser reads them as the start of a
/// query or fragment and the store sees the argument cut short there.
pub fn escape_segment(segment: &str) -> Cow<'_, str> {
    if segment.contains('/') {
        Cow::Owned(segment.replace('/', SLASH_ESCAPE))
    } else {
        Cow::Borrowed(segment)
    }
}

/// Build `/<COMMAND>/<arg>/...` with each argument escaped
pub fn build_path(command: CommandName, args: &[Arg]) -> String {
    let mut path = String::with_capacity(16 + args.len() * 8);
    path.push('/');
    path.push_str(command.as_str());
    for arg in args {
        path.push('/');
        let text = arg.to_string();
        path.push_str(&escape_segment(&text));
    }
    path
}

// =============================================================================
// Envelope Decoding
// =============================================================================

/// Parse a response body and pull out the value under the command's key
pub fn decode_envelope(command: CommandName, body: &[u8]) -> Result<Value> {
    let parsed: Value = serde_json::from_slice(body)?;
    let Value::Object(mut envelope) = parsed else {
        return Err(WebKvError::Protocol(format!(
            "{} reply is not a JSON object",
            command
        )));
    };

    if envelope.len() != 1 {
        let keys: Vec<&String> = envelope.keys().collect();
        return Err(WebKvError::Protocol(format!(
            "{} reply must have exactly one key, got {:?}",
            command, keys
        )));
    }

    envelope.remove(command.as_str()).ok_or_else(|| {
        WebKvError::Protocol(format!("{} reply is missing its {} key", command, command))
    })
}

// =============================================================================
// Result Interpretation
// =============================================================================

/// Apply the store's error signalling rules to an extracted result
///
/// - `[false, payload]` from any command is a store error carrying `payload`
/// - TYPE replies `[true, name]` on success and yields `name`
/// - everything else is returned untouched
pub fn interpret_result(command: CommandName, result: Value) -> Result<Value> {
    if let Some(message) = failure_payload(&result) {
        return Err(StoreError::new(message).into());
    }

    if command.replies_with_status_pair() {
        return match result {
            Value::Array(pair) if pair.len() == 2 => {
                let mut pair = pair.into_iter();
                match (pair.next(), pair.next()) {
                    (Some(Value::Bool(true)), Some(value)) => Ok(value),
                    _ => Err(StoreError::new("").into()),
                }
            }
            other => Err(WebKvError::Protocol(format!(
                "{} reply is not a [success, value] pair: {}",
                command, other
            ))),
        };
    }

    Ok(result)
}

/// Message of a `[false, payload]` pair, if the result is one
fn failure_payload(result: &Value) -> Option<String> {
    match result.as_array()?.as_slice() {
        [Value::Bool(false), Value::String(message)] => Some(message.clone()),
        [Value::Bool(false), payload] => Some(payload.to_string()),
        _ => None,
    }
}
