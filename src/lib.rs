//! Ferrous typed commands
//!
//! Typed Redis commands on top of any connection that can issue a command and
//! hand back a RESP frame. Commands return thin wrappers around the raw reply
//! ([`Integer`], [`Boolean`], [`SimpleString`], [`BulkString`], [`Array`]);
//! their `result()` and conversion methods turn the reply into a native value
//! and tell a nil reply apart from a reply of the wrong shape.
//!
//! ```
//! use ferrous_typed::{BulkString, ReplyError, RespFrame, TypedReply};
//!
//! let value = BulkString::new(Ok(RespFrame::bulk_string("17")));
//! assert_eq!(value.result(), Ok(b"17".to_vec()));
//! assert_eq!(value.to_int64(), Ok(17));
//!
//! let missing = BulkString::new(Ok(RespFrame::null_bulk()));
//! assert_eq!(missing.result(), Err(ReplyError::Nil));
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod network;
pub mod protocol;
pub mod reply;

// Re-export commonly used types
pub use config::Config;
pub use error::{ClientError, ClientResult, ReplyError, ReplyResult};
pub use network::{Doer, Pool, PoolDoer, PooledConnection, Sender};
pub use protocol::{Arg, RespFrame};
pub use reply::{Array, Boolean, BulkString, Integer, Reply, SimpleString, TypedReply};
