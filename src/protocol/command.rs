//! Command definitions
//!
//! The fixed command vocabulary, its descriptors, and command arguments.

use std::fmt;
use std::str::FromStr;

use crate::error::WebKvError;

/// Command names understood by the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandName {
    Get,
    Set,
    Del,
    Ttl,
    Expire,
    Keys,
    Type,
    Ping,
    Incr,
    Decr,
    Scard,
    Smembers,
    Sadd,
    Zcard,
    Llen,
    Lrange,
    Lindex,
    Lpush,
}

/// How many positional arguments a command takes.
///
/// A request body counts as one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arity {
    pub min: usize,
    /// `None` means variadic
    pub max: Option<usize>,
}

impl Arity {
    const fn exact(n: usize) -> Self {
        Self { min: n, max: Some(n) }
    }

    const fn at_least(n: usize) -> Self {
        Self { min: n, max: None }
    }

    pub fn accepts(&self, count: usize) -> bool {
        count >= self.min && self.max.map_or(true, |max| count <= max)
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) if max == self.min => write!(f, "{}", self.min),
            Some(max) => write!(f, "{}..={}", self.min, max),
            None => write!(f, "{}+", self.min),
        }
    }
}

impl CommandName {
    /// Every command, in wire-name order of the original vocabulary
    pub const ALL: [CommandName; 18] = [
        CommandName::Get,
        CommandName::Set,
        CommandName::Del,
        CommandName::Ttl,
        CommandName::Expire,
        CommandName::Keys,
        CommandName::Type,
        CommandName::Ping,
        CommandName::Incr,
        CommandName::Decr,
        CommandName::Scard,
        CommandName::Smembers,
        CommandName::Sadd,
        CommandName::Zcard,
        CommandName::Llen,
        CommandName::Lrange,
        CommandName::Lindex,
        CommandName::Lpush,
    ];

    /// Upper-case name used as the first path segment and envelope key
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandName::Get => "GET",
            CommandName::Set => "SET",
            CommandName::Del => "DEL",
            CommandName::Ttl => "TTL",
            CommandName::Expire => "EXPIRE",
            CommandName::Keys => "KEYS",
            CommandName::Type => "TYPE",
            CommandName::Ping => "PING",
            CommandName::Incr => "INCR",
            CommandName::Decr => "DECR",
            CommandName::Scard => "SCARD",
            CommandName::Smembers => "SMEMBERS",
            CommandName::Sadd => "SADD",
            CommandName::Zcard => "ZCARD",
            CommandName::Llen => "LLEN",
            CommandName::Lrange => "LRANGE",
            CommandName::Lindex => "LINDEX",
            CommandName::Lpush => "LPUSH",
        }
    }

    pub fn arity(&self) -> Arity {
        match self {
            CommandName::Ping => Arity { min: 0, max: Some(1) },
            CommandName::Get
            | CommandName::Ttl
            | CommandName::Keys
            | CommandName::Type
            | CommandName::Incr
            | CommandName::Decr
            | CommandName::Scard
            | CommandName::Smembers
            | CommandName::Zcard
            | CommandName::Llen => Arity::exact(1),
            CommandName::Set
            | CommandName::Expire
            | CommandName::Lindex => Arity::exact(2),
            CommandName::Lrange => Arity::exact(3),
            CommandName::Del => Arity::at_least(1),
            CommandName::Sadd | CommandName::Lpush => Arity::at_least(2),
        }
    }

    /// Whether the result always arrives as a `[success, value]` pair
    pub fn replies_with_status_pair(&self) -> bool {
        matches!(self, CommandName::Type)
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandName {
    type Err = WebKvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        CommandName::ALL
            .into_iter()
            .find(|name| name.as_str() == upper)
            .ok_or_else(|| WebKvError::UnknownCommand(s.to_string()))
    }
}

/// A positional command argument
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Text(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Text(s) => f.write_str(s),
            Arg::Int(n) => write!(f, "{n}"),
            Arg::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Text(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Text(s)
    }
}

impl From<&String> for Arg {
    fn from(s: &String) -> Self {
        Arg::Text(s.clone())
    }
}

impl From<f64> for Arg {
    fn from(x: f64) -> Self {
        Arg::Float(x)
    }
}

macro_rules! arg_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Arg {
                fn from(n: $t) -> Self {
                    Arg::Int(n as i64)
                }
            }
        )*
    };
}

arg_from_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! arg_from_wide_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Arg {
                fn from(n: $t) -> Self {
                    match i64::try_from(n) {
                        Ok(n) => Arg::Int(n),
                        Err(_) => Arg::Text(n.to_string()),
                    }
                }
            }
        )*
    };
}

arg_from_wide_int!(u64, usize);

/// A command ready to be turned into a request path
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    name: CommandName,
    args: Vec<Arg>,
}

impl Command {
    pub fn new<I, A>(name: CommandName, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Arg>,
    {
        Self {
            name,
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> CommandName {
        self.name
    }

    pub fn args(&self) -> &[Arg] {
        &self.args
    }
}
