//! Hash commands

use crate::network::Doer;
use crate::protocol::Arg;
use crate::reply::{Array, Boolean, BulkString, Integer};

/// Value of the field in the hash stored at the key. A missing field or key
/// gives a nil bulk string.
pub fn hget<D: Doer + ?Sized>(conn: &mut D, key: &str, field: &str) -> BulkString {
    BulkString::new(conn.issue("HGET", &[Arg::from(key), Arg::from(field)]))
}

/// Set the field in the hash stored at the key, creating the hash if needed.
/// Returns 1 when the field is new and 0 when an existing field was overwritten.
pub fn hset<D: Doer + ?Sized>(conn: &mut D, key: &str, field: &str, value: impl Into<Arg>) -> Integer {
    Integer::new(conn.issue("HSET", &[Arg::from(key), Arg::from(field), value.into()]))
}

pub fn hexists<D: Doer + ?Sized>(conn: &mut D, key: &str, field: &str) -> Boolean {
    Boolean::new(conn.issue("HEXISTS", &[Arg::from(key), Arg::from(field)]))
}

/// All fields and values of the hash, flattened. Use [`Array::string_map`]
/// to read it as a map.
pub fn hgetall<D: Doer + ?Sized>(conn: &mut D, key: &str) -> Array {
    Array::new(conn.issue("HGETALL", &[Arg::from(key)]))
}
