//! Connection seams
//!
//! Typed commands never talk to a socket themselves. They go through a
//! [`Doer`] (issue one command, get one reply) or a [`Sender`] (buffer a
//! command for a later flush). [`PoolDoer`] adapts a connection [`Pool`] into
//! a `Doer` by borrowing one connection per command.

mod pool;

pub use pool::{Pool, PoolDoer, PooledConnection};

use crate::error::ClientResult;
use crate::protocol::{Arg, RespFrame};

/// Issues commands and waits for the reply
pub trait Doer {
    fn issue(&mut self, command: &str, args: &[Arg]) -> ClientResult<RespFrame>;
}

/// Writes commands to a connection's output buffer without waiting for replies
pub trait Sender {
    fn enqueue(&mut self, command: &str, args: &[Arg]) -> ClientResult<()>;
}

impl<D: Doer + ?Sized> Doer for &mut D {
    fn issue(&mut self, command: &str, args: &[Arg]) -> ClientResult<RespFrame> {
        (**self).issue(command, args)
    }
}

impl<D: Doer + ?Sized> Doer for Box<D> {
    fn issue(&mut self, command: &str, args: &[Arg]) -> ClientResult<RespFrame> {
        (**self).issue(command, args)
    }
}

impl<S: Sender + ?Sized> Sender for &mut S {
    fn enqueue(&mut self, command: &str, args: &[Arg]) -> ClientResult<()> {
        (**self).enqueue(command, args)
    }
}

impl<S: Sender + ?Sized> Sender for Box<S> {
    fn enqueue(&mut self, command: &str, args: &[Arg]) -> ClientResult<()> {
        (**self).enqueue(command, args)
    }
}
