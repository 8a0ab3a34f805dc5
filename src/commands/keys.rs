//! Key space commands

use super::key_args;
use crate::network::Doer;
use crate::protocol::Arg;
use crate::reply::{Boolean, Integer};

/// How many of the given keys exist. A key named twice counts twice.
pub fn exists<D: Doer + ?Sized>(conn: &mut D, keys: &[&str]) -> Integer {
    Integer::new(conn.issue("EXISTS", &key_args(keys)))
}

/// Delete keys and return how many were removed
pub fn del<D: Doer + ?Sized>(conn: &mut D, keys: &[&str]) -> Integer {
    Integer::new(conn.issue("DEL", &key_args(keys)))
}

/// Set a timeout on the key; false when the key does not exist
pub fn expire<D: Doer + ?Sized>(conn: &mut D, key: &str, seconds: i64) -> Boolean {
    Boolean::new(conn.issue("EXPIRE", &[Arg::from(key), Arg::from(seconds)]))
}
