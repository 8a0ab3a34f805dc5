//! Buffered sends
//!
//! Same argument layout as the issuing commands, but the command is only
//! written to the connection's output buffer. Replies are read later by
//! whoever flushes the connection.

use crate::error::ClientResult;
use crate::network::Sender;
use crate::protocol::Arg;

pub fn send_get<S: Sender + ?Sized>(conn: &mut S, key: &str) -> ClientResult<()> {
    conn.enqueue("GET", &[Arg::from(key)])
}

pub fn send_set<S: Sender + ?Sized>(conn: &mut S, key: &str, value: impl Into<Arg>) -> ClientResult<()> {
    conn.enqueue("SET", &[Arg::from(key), value.into()])
}

pub fn send_set_ex<S: Sender + ?Sized>(conn: &mut S, key: &str, value: impl Into<Arg>, seconds: i64) -> ClientResult<()> {
    conn.enqueue("SET", &[Arg::from(key), value.into(), Arg::from("EX"), Arg::from(seconds)])
}

pub fn send_set_px<S: Sender + ?Sized>(conn: &mut S, key: &str, value: impl Into<Arg>, milliseconds: i64) -> ClientResult<()> {
    conn.enqueue("SET", &[Arg::from(key), value.into(), Arg::from("PX"), Arg::from(milliseconds)])
}

pub fn send_set_nx<S: Sender + ?Sized>(conn: &mut S, key: &str, value: impl Into<Arg>) -> ClientResult<()> {
    conn.enqueue("SET", &[Arg::from(key), value.into(), Arg::from("NX")])
}

pub fn send_set_xx<S: Sender + ?Sized>(conn: &mut S, key: &str, value: impl Into<Arg>) -> ClientResult<()> {
    conn.enqueue("SET", &[Arg::from(key), value.into(), Arg::from("XX")])
}
