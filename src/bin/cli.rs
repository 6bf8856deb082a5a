//! webkv CLI Client
//!
//! Command-line interface for a Redis store behind an HTTP/JSON gateway.

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};
use webkv::{CallOptions, Client, ClientConfig, Command, CommandName, WebKvError};

/// webkv CLI
#[derive(Parser, Debug)]
#[command(name = "webkv-cli")]
#[command(about = "CLI for Redis stores behind an HTTP/JSON gateway")]
#[command(version)]
struct Args {
    /// Gateway base URL
    #[arg(short, long, default_value = webkv::config::DEFAULT_BASE_URL)]
    url: String,

    /// Per-request timeout in milliseconds
    #[arg(short, long, default_value_t = webkv::config::DEFAULT_TIMEOUT_MS)]
    timeout_ms: u64,

    /// Attempts allowed when requests time out
    #[arg(long, default_value_t = webkv::config::MAX_TRIES)]
    max_tries: u32,

    /// Extra request header, NAME:VALUE (repeatable)
    #[arg(short = 'H', long = "header", value_parser = parse_header)]
    headers: Vec<(String, String)>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Get a value by key
    Get { key: String },

    /// Set a key, from VALUE or from --data sent as the request body
    Set {
        key: String,
        value: Option<String>,
        #[arg(short, long, conflicts_with = "value")]
        data: Option<String>,
    },

    /// Delete a key
    Del { key: String },

    /// Seconds to live for a key
    Ttl { key: String },

    /// Set a timeout on a key
    Expire { key: String, seconds: i64 },

    /// Keys matching a glob pattern
    Keys { pattern: String },

    /// Type of the value stored at a key
    Type { key: String },

    /// Ping the store
    Ping,

    /// Increment an integer key
    Incr { key: String },

    /// Decrement an integer key
    Decr { key: String },

    /// Prepend a value to a list
    Lpush { key: String, value: String },

    /// Length of a list
    Llen { key: String },

    /// Range of list elements
    Lrange {
        key: String,
        #[arg(allow_hyphen_values = true)]
        start: i64,
        #[arg(allow_hyphen_values = true)]
        stop: i64,
    },

    /// List element at an index
    Lindex {
        key: String,
        #[arg(allow_hyphen_values = true)]
        index: i64,
    },

    /// Add a member to a set
    Sadd { key: String, member: String },

    /// Cardinality of a set
    Scard { key: String },

    /// Members of a set
    Smembers { key: String },

    /// Cardinality of a sorted set
    Zcard { key: String },

    /// Any supported command with raw arguments
    Call {
        command: String,
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
        /// Raw request body (forces PUT)
        #[arg(short, long)]
        data: Option<String>,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,webkv=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> webkv::Result<()> {
    let mut builder = ClientConfig::builder()
        .base_url(&args.url)
        .timeout_ms(args.timeout_ms)
        .max_tries(args.max_tries);
    for (name, value) in args.headers {
        builder = builder.default_header(name, value);
    }
    let client = Client::new(builder.build())?;
    tracing::debug!("webkv-cli v{} against {}", webkv::VERSION, args.url);

    match args.command {
        Commands::Get { key } => emit(&client.get(&key)?),
        Commands::Set { key, value, data } => match (value, data) {
            (_, Some(data)) => emit(&client.set_body(&key, data)?),
            (Some(value), None) => emit(&client.set(&key, value)?),
            (None, None) => Err(WebKvError::Contract(
                "set needs a VALUE or --data".to_string(),
            )),
        },
        Commands::Del { key } => emit(&client.del(&key)?),
        Commands::Ttl { key } => emit(&client.ttl(&key)?),
        Commands::Expire { key, seconds } => emit(&client.expire(&key, seconds)?),
        Commands::Keys { pattern } => emit(&client.keys(&pattern)?),
        Commands::Type { key } => emit(&client.key_type(&key)?),
        Commands::Ping => emit(&client.ping()?),
        Commands::Incr { key } => emit(&client.incr(&key)?),
        Commands::Decr { key } => emit(&client.decr(&key)?),
        Commands::Lpush { key, value } => emit(&client.lpush(&key, value)?),
        Commands::Llen { key } => emit(&client.llen(&key)?),
        Commands::Lrange { key, start, stop } => emit(&client.lrange(&key, start, stop)?),
        Commands::Lindex { key, index } => emit(&client.lindex(&key, index)?),
        Commands::Sadd { key, member } => emit(&client.sadd(&key, member)?),
        Commands::Scard { key } => emit(&client.scard(&key)?),
        Commands::Smembers { key } => emit(&client.smembers(&key)?),
        Commands::Zcard { key } => emit(&client.zcard(&key)?),
        Commands::Call { command, args, data } => {
            let name: CommandName = command.parse()?;
            let given = args.len() + usize::from(data.is_some());
            if !name.arity().accepts(given) {
                return Err(WebKvError::Contract(format!(
                    "{} takes {} argument(s), got {}",
                    name,
                    name.arity(),
                    given
                )));
            }
            let options = match data {
                Some(data) => CallOptions::body(data),
                None => CallOptions::none(),
            };
            emit(&client.execute_with(&Command::new(name, args), &options)?)
        }
    }
}

fn emit<T: Serialize>(value: &T) -> webkv::Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

fn parse_header(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected NAME:VALUE, got {raw:?}"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("empty header name in {raw:?}"));
    }
    Ok((name.to_string(), value.trim().to_string()))
}
