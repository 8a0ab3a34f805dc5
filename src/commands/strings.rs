//! String commands

use super::key_args;
use crate::network::Doer;
use crate::protocol::Arg;
use crate::reply::{Array, BulkString, Integer, SimpleString};

/// Get the value of a key. A missing key gives a nil bulk string; a key
/// holding a non-string value gives an error.
pub fn get<D: Doer + ?Sized>(conn: &mut D, key: &str) -> BulkString {
    BulkString::new(conn.issue("GET", &[Arg::from(key)]))
}

/// Set the key to the value
pub fn set<D: Doer + ?Sized>(conn: &mut D, key: &str, value: impl Into<Arg>) -> SimpleString {
    SimpleString::new(conn.issue("SET", &[Arg::from(key), value.into()]))
}

/// Set the key to the value with an expiry in seconds
pub fn set_ex<D: Doer + ?Sized>(conn: &mut D, key: &str, value: impl Into<Arg>, seconds: i64) -> SimpleString {
    SimpleString::new(conn.issue(
        "SET",
        &[Arg::from(key), value.into(), Arg::from("EX"), Arg::from(seconds)],
    ))
}

/// Set the key to the value with an expiry in milliseconds
pub fn set_px<D: Doer + ?Sized>(conn: &mut D, key: &str, value: impl Into<Arg>, milliseconds: i64) -> SimpleString {
    SimpleString::new(conn.issue(
        "SET",
        &[Arg::from(key), value.into(), Arg::from("PX"), Arg::from(milliseconds)],
    ))
}

/// Set the key only if it does not exist yet. The reply is nil when the key
/// was left untouched.
pub fn set_nx<D: Doer + ?Sized>(conn: &mut D, key: &str, value: impl Into<Arg>) -> SimpleString {
    SimpleString::new(conn.issue("SET", &[Arg::from(key), value.into(), Arg::from("NX")]))
}

/// Set the key only if it already exists. The reply is nil when the key
/// was left untouched.
pub fn set_xx<D: Doer + ?Sized>(conn: &mut D, key: &str, value: impl Into<Arg>) -> SimpleString {
    SimpleString::new(conn.issue("SET", &[Arg::from(key), value.into(), Arg::from("XX")]))
}

/// Values of all given keys; missing keys are nil elements
pub fn mget<D: Doer + ?Sized>(conn: &mut D, keys: &[&str]) -> Array {
    Array::new(conn.issue("MGET", &key_args(keys)))
}

/// Increment the integer stored at the key and return the new value
pub fn incr<D: Doer + ?Sized>(conn: &mut D, key: &str) -> Integer {
    Integer::new(conn.issue("INCR", &[Arg::from(key)]))
}
