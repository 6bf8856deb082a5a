//! Scenario Tests
//!
//! End-to-end runs through the reqwest backend against the gateway emulator.

use webkv::{CallOptions, Client, ClientConfig, Command, CommandName, WebKvError};

use crate::emulator::Gateway;

fn connect() -> (Gateway, Client) {
    let gateway = Gateway::start();
    let config = ClientConfig::builder()
        .base_url(gateway.url())
        .timeout_ms(5_000)
        .build();
    let client = Client::new(config).unwrap();
    (gateway, client)
}

// =============================================================================
// Strings and Keys
// =============================================================================

#[test]
fn test_basics_ttl_lifecycle() {
    let (_gateway, client) = connect();
    assert!(matches!(client.del("foo").unwrap(), 0 | 1));
    assert_eq!(client.get("foo").unwrap(), None);
    assert_eq!(client.ttl("foo").unwrap(), -2);
    let ack = client.set("foo", 1).unwrap();
    assert!(ack.ok());
    assert_eq!(ack.message(), "OK");
    assert_eq!(client.ttl("foo").unwrap(), -1);
    assert_eq!(client.expire("foo", 111).unwrap(), 1);
    assert_eq!(client.ttl("foo").unwrap(), 111);
    assert_eq!(client.del("foo").unwrap(), 1);
}

#[test]
fn test_incr_decr_sequence() {
    let (_gateway, client) = connect();
    client.del("foo").unwrap();
    assert!(!client.keys("seq*").unwrap().iter().any(|k| k == "foo"));
    let ack = client.ping().unwrap();
    assert!(ack.ok());
    assert_eq!(ack.message(), "PONG");

    for i in 1..=10 {
        assert_eq!(client.incr("foo").unwrap(), i);
    }
    for i in 0..7 {
        assert_eq!(client.decr("foo").unwrap(), 9 - i);
    }
    assert_eq!(client.get("foo").unwrap().unwrap().parse::<i64>().unwrap(), 3);
    assert_eq!(client.del("foo").unwrap(), 1);
}

#[test]
fn test_keys_pattern() {
    let (gateway, client) = connect();
    gateway.seed("seq:1", "a");
    gateway.seed("seq:2", "b");
    gateway.seed("other", "c");
    assert_eq!(client.keys("seq*").unwrap(), ["seq:1", "seq:2"]);
}

#[test]
fn test_slash_key_round_trips() {
    let (gateway, client) = connect();
    client.set("path/to/key", "a/b").unwrap();
    assert_eq!(gateway.last_request().path, "/SET/path%2Fto%2Fkey/a%2Fb");
    assert_eq!(client.get("path/to/key").unwrap(), Some("a/b".to_string()));
}

#[test]
fn test_type_names() {
    let (_gateway, client) = connect();
    client.set("s", "v").unwrap();
    client.lpush("l", "v").unwrap();
    client.sadd("z", "v").unwrap();
    assert_eq!(client.key_type("s").unwrap(), "string");
    assert_eq!(client.key_type("l").unwrap(), "list");
    assert_eq!(client.key_type("z").unwrap(), "set");
    assert_eq!(client.key_type("nothing").unwrap(), "none");
}

// =============================================================================
// Lists and Sets
// =============================================================================

#[test]
fn test_list_methods() {
    let (_gateway, client) = connect();
    client.del("foo").unwrap();
    assert_eq!(client.lpush("foo", "x").unwrap(), 1);
    assert_eq!(client.lpush("foo", "y").unwrap(), 2);
    assert_eq!(client.lpush("foo", 1).unwrap(), 3);
    assert_eq!(client.llen("foo").unwrap(), 3);
    assert_eq!(client.lrange("foo", 2, 3).unwrap(), ["x"]);
    assert_eq!(client.lrange("foo", 0, -1).unwrap(), ["1", "y", "x"]);
    assert_eq!(client.lindex("foo", 2).unwrap(), Some("x".to_string()));
    assert_eq!(client.del("foo").unwrap(), 1);
}

#[test]
fn test_set_methods() {
    let (_gateway, client) = connect();
    client.del("foo").unwrap();
    for member in ["abc", "def", "ghi"] {
        assert_eq!(client.sadd("foo", member).unwrap(), 1);
    }
    assert_eq!(client.sadd("foo", "abc").unwrap(), 0);
    assert_eq!(client.scard("foo").unwrap(), 3);
    let mut members = client.smembers("foo").unwrap();
    members.sort();
    assert_eq!(members, ["abc", "def", "ghi"]);
    assert_eq!(client.zcard("foo").unwrap_err().as_store_error().unwrap().message(),
        "WRONGTYPE Operation against a key holding the wrong kind of value");
    assert_eq!(client.del("foo").unwrap(), 1);
}

// =============================================================================
// Store Errors
// =============================================================================

#[test]
fn test_violations() {
    let (_gateway, client) = connect();
    client.del("foo").unwrap();

    let err = client
        .execute(CommandName::Get, ["foo", "bar"])
        .unwrap_err();
    assert_eq!(
        err.as_store_error().unwrap().message(),
        "ERR wrong number of arguments for 'get' command"
    );

    assert_eq!(client.lpush("foo", 5).unwrap(), 1);
    let err = client.get("foo").unwrap_err();
    assert_eq!(
        err.as_store_error().unwrap().message(),
        "WRONGTYPE Operation against a key holding the wrong kind of value"
    );
    assert_eq!(client.del("foo").unwrap(), 1);
}

#[test]
fn test_http_status_failure_is_fatal() {
    let (gateway, client) = connect();
    gateway.force_status(503);
    let err = client.ping().unwrap_err();
    assert!(matches!(err, WebKvError::HttpStatus { status: 503, .. }));
}

// =============================================================================
// Passthrough
// =============================================================================

#[test]
fn test_headers_pass_through() {
    let (gateway, client) = connect();
    let cmd = Command::new(CommandName::Get, ["foo"]);
    client
        .execute_with(&cmd, &CallOptions::header("User-Agent", "Miller"))
        .unwrap();
    let seen = gateway.last_request();
    assert_eq!(seen.method, "GET");
    assert_eq!(seen.headers.get("user-agent").map(String::as_str), Some("Miller"));
}

#[test]
fn test_typed_get_carries_call_headers() {
    let (gateway, client) = connect();
    client.set("foo", "bar").unwrap();
    let value = client
        .get_with("foo", &CallOptions::header("User-Agent", "Miller"))
        .unwrap();
    assert_eq!(value, Some("bar".to_string()));
    let seen = gateway.last_request();
    assert_eq!(seen.path, "/GET/foo");
    assert_eq!(seen.headers.get("user-agent").map(String::as_str), Some("Miller"));
}

#[test]
fn test_body_replaces_value_argument() {
    let (gateway, client) = connect();
    client.set("foo", "moo").unwrap();
    assert_eq!(client.get("foo").unwrap(), Some("moo".to_string()));

    client.set_body("foo", "goo").unwrap();
    let seen = gateway.last_request();
    assert_eq!(seen.method, "PUT");
    assert_eq!(seen.path, "/SET/foo");
    assert_eq!(seen.body, b"goo");
    assert_eq!(client.get("foo").unwrap(), Some("goo".to_string()));
}

#[test]
fn test_body_plus_value_is_rejected_by_store() {
    let (_gateway, client) = connect();
    let cmd = Command::new(CommandName::Set, ["foo", "moo"]);
    let err = client
        .execute_with(&cmd, &CallOptions::body("goo"))
        .unwrap_err();
    assert!(err.as_store_error().is_some(), "{err:?}");
}

#[test]
fn test_large_body_value() {
    let (_gateway, client) = connect();
    let value = "x".repeat(64 * 1024);
    client.set_body("big", value.clone()).unwrap();
    assert_eq!(client.get("big").unwrap(), Some(value));
}
