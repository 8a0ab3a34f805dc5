//! Typed command replies
//!
//! A [`Reply`] holds what a connection returned for one command: either a
//! frame or the transport error. The typed wrappers ([`Integer`], [`Boolean`],
//! [`SimpleString`], [`BulkString`], [`Array`]) each hold an optional reply and
//! bind `result()` to the conversion matching the command's declared reply
//! type. A wrapper with no reply at all answers every accessor with the zero
//! value and no error.
//!
//! ```
//! use ferrous_typed::{Integer, RespFrame, TypedReply};
//!
//! let exists = Integer::new(Ok(RespFrame::Integer(1)));
//! assert_eq!(exists.result(), Ok(1));
//! assert_eq!(exists.to_bool(), Ok(true));
//!
//! let nothing = Integer::absent();
//! assert_eq!(nothing.result(), Ok(0));
//! ```

pub mod convert;
mod types;

pub use types::{Array, Boolean, BulkString, Integer, SimpleString};

use crate::error::{ClientError, ReplyError, ReplyResult};
use crate::protocol::RespFrame;

/// The outcome of issuing one command
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    outcome: Result<RespFrame, ClientError>,
}

impl Reply {
    pub fn new(outcome: Result<RespFrame, ClientError>) -> Self {
        Reply { outcome }
    }

    /// Build from a value and an optional error; the error wins when both are set.
    pub fn from_parts(value: RespFrame, err: Option<ClientError>) -> Self {
        match err {
            Some(err) => Reply::new(Err(err)),
            None => Reply::new(Ok(value)),
        }
    }

    /// The frame or error exactly as the connection returned it
    pub fn raw(&self) -> Result<&RespFrame, &ClientError> {
        self.outcome.as_ref()
    }

    pub fn into_raw(self) -> Result<RespFrame, ClientError> {
        self.outcome
    }

    pub fn error(&self) -> Option<&ClientError> {
        self.outcome.as_ref().err()
    }

    /// Apply a conversion rule; a stored transport error short-circuits it.
    pub fn convert<T, F>(&self, rule: F) -> ReplyResult<T>
    where
        F: FnOnce(&RespFrame) -> ReplyResult<T>,
    {
        match &self.outcome {
            Ok(frame) => rule(frame),
            Err(err) => Err(ReplyError::Transport(err.clone())),
        }
    }
}

impl From<Result<RespFrame, ClientError>> for Reply {
    fn from(outcome: Result<RespFrame, ClientError>) -> Self {
        Reply::new(outcome)
    }
}

/// Conversions shared by every typed reply
///
/// Implementors only say where their reply lives; every accessor handles the
/// absent case first and answers it with the zero value.
pub trait TypedReply {
    /// The wrapped reply, or `None` when no command produced one
    fn reply(&self) -> Option<&Reply>;

    fn is_absent(&self) -> bool {
        self.reply().is_none()
    }

    /// The frame or error as the connection returned it; `Ok(None)` when absent
    fn raw(&self) -> Result<Option<&RespFrame>, &ClientError> {
        match self.reply() {
            None => Ok(None),
            Some(reply) => reply.raw().map(Some),
        }
    }

    fn to_bool(&self) -> ReplyResult<bool> {
        project(self.reply(), convert::to_bool)
    }

    fn to_bytes(&self) -> ReplyResult<Vec<u8>> {
        project(self.reply(), convert::to_bytes)
    }

    fn to_float64(&self) -> ReplyResult<f64> {
        project(self.reply(), convert::to_float64)
    }

    fn to_int(&self) -> ReplyResult<isize> {
        project(self.reply(), convert::to_int)
    }

    fn to_int64(&self) -> ReplyResult<i64> {
        project(self.reply(), convert::to_int64)
    }

    fn to_uint64(&self) -> ReplyResult<u64> {
        project(self.reply(), convert::to_uint64)
    }

    fn to_string(&self) -> ReplyResult<String> {
        project(self.reply(), convert::to_string)
    }
}

impl TypedReply for Reply {
    fn reply(&self) -> Option<&Reply> {
        Some(self)
    }
}

pub(crate) fn project<T, F>(reply: Option<&Reply>, rule: F) -> ReplyResult<T>
where
    T: Default,
    F: FnOnce(&RespFrame) -> ReplyResult<T>,
{
    match reply {
        None => Ok(T::default()),
        Some(reply) => reply.convert(rule),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport_error() -> ClientError {
        ClientError::Connection("connection refused".to_string())
    }

    #[test]
    fn test_error_wins_over_value() {
        let reply = Reply::from_parts(RespFrame::Integer(5), Some(transport_error()));
        let expected: ReplyResult<i64> = Err(ReplyError::Transport(transport_error()));

        assert_eq!(reply.to_int64(), expected);
        assert_eq!(reply.to_bool(), Err(ReplyError::Transport(transport_error())));
        assert_eq!(reply.to_bytes(), Err(ReplyError::Transport(transport_error())));
        assert_eq!(reply.to_float64(), Err(ReplyError::Transport(transport_error())));
        assert_eq!(reply.to_int(), Err(ReplyError::Transport(transport_error())));
        assert_eq!(reply.to_uint64(), Err(ReplyError::Transport(transport_error())));
        assert_eq!(reply.to_string(), Err(ReplyError::Transport(transport_error())));
        assert_eq!(reply.error(), Some(&transport_error()));
    }

    #[test]
    fn test_error_wins_over_nil() {
        let reply = Reply::new(Err(transport_error()));
        assert!(reply.to_bytes().unwrap_err().is_transport());
    }

    #[test]
    fn test_raw_passthrough() {
        let reply = Reply::new(Ok(RespFrame::ok()));
        assert_eq!(reply.raw(), Ok(&RespFrame::ok()));
        assert_eq!(TypedReply::raw(&reply), Ok(Some(&RespFrame::ok())));
        assert_eq!(reply.into_raw(), Ok(RespFrame::ok()));

        let reply = Reply::new(Err(transport_error()));
        assert_eq!(reply.raw(), Err(&transport_error()));
    }

    #[test]
    fn test_project_absent() {
        assert_eq!(project(None, convert::to_int64), Ok(0));
        assert_eq!(project(None, convert::to_string), Ok(String::new()));
        assert_eq!(project(None, convert::values), Ok(Vec::new()));
    }
}
