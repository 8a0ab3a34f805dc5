//! RESP (REdis Serialization Protocol) types
//!
//! Reply frames as produced by a connection, command arguments, and the
//! serializer that turns a command into its request form.

pub mod args;
pub mod resp;
pub mod serializer;

pub use args::Arg;
pub use resp::{Bytes, RespFrame};

// Re-export commonly used items
pub use serializer::{encode_command, write_command};
