//! Error types for Ferrous typed commands
//!
//! Two layers of failure exist: the transport that issued a command
//! (`ClientError`) and the conversion of a reply into a native value
//! (`ReplyError`). Transport failures pass through conversions verbatim.

use std::io;
use thiserror::Error;

/// Failure reported by the connection that issued a command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Network/IO errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Connection could not be established or was lost
    #[error("Connection error: {0}")]
    Connection(String),

    /// Malformed data on the wire
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Pool could not hand out a connection
    #[error("Pool error: {0}")]
    Pool(String),

    /// Error reply surfaced by the connection as a failure
    #[error("{0}")]
    Server(String),
}

/// Failure converting a reply into a native value
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReplyError {
    /// The command never produced a reply
    #[error(transparent)]
    Transport(#[from] ClientError),

    /// The reply was nil (key or field absent)
    #[error("nil reply")]
    Nil,

    /// The reply has a shape the conversion does not accept
    #[error("unexpected {found} reply, expected {expected}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// The reply has an accepted shape but its content does not parse
    #[error("cannot convert {value:?} to {target}: {reason}")]
    Conversion {
        target: &'static str,
        value: String,
        reason: String,
    },

    /// One element of an array reply failed to convert
    #[error("element {index}: {source}")]
    Element {
        index: usize,
        #[source]
        source: Box<ReplyError>,
    },
}

/// Type alias for transport results
pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Type alias for conversion results
pub type ReplyResult<T> = std::result::Result<T, ReplyError>;

impl ReplyError {
    pub(crate) fn mismatch(expected: &'static str, found: &'static str) -> Self {
        ReplyError::TypeMismatch { expected, found }
    }

    pub(crate) fn conversion(
        target: &'static str,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        ReplyError::Conversion {
            target,
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn at(index: usize, source: ReplyError) -> Self {
        ReplyError::Element {
            index,
            source: Box::new(source),
        }
    }

    /// The underlying error once any element nesting is peeled off
    pub fn root(&self) -> &ReplyError {
        match self {
            ReplyError::Element { source, .. } => source.root(),
            other => other,
        }
    }

    /// Check if the failure is a nil reply
    pub fn is_nil(&self) -> bool {
        matches!(self.root(), ReplyError::Nil)
    }

    /// Check if the failure came from the transport rather than the reply
    pub fn is_transport(&self) -> bool {
        matches!(self, ReplyError::Transport(_))
    }
}

impl From<io::Error> for ClientError {
    fn from(err: io::Error) -> Self {
        ClientError::Io(err.to_string())
    }
}
