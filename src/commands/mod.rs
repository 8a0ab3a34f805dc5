//! Typed Redis commands
//!
//! Each function issues exactly one command on the given connection and wraps
//! the reply in the type Redis documents for that command. Nothing is
//! converted until the caller asks for a result.
//!
//! ```
//! use ferrous_typed::commands::{exists, get};
//! use ferrous_typed::{Arg, ClientResult, Doer, RespFrame};
//!
//! struct Canned(RespFrame);
//!
//! impl Doer for Canned {
//!     fn issue(&mut self, _command: &str, _args: &[Arg]) -> ClientResult<RespFrame> {
//!         Ok(self.0.clone())
//!     }
//! }
//!
//! let mut conn = Canned(RespFrame::Integer(1));
//! assert_eq!(exists(&mut conn, &["key1", "key2"]).result(), Ok(1));
//!
//! let mut conn = Canned(RespFrame::null_bulk());
//! assert!(get(&mut conn, "missing").result().unwrap_err().is_nil());
//! ```

pub mod hashes;
pub mod keys;
pub mod send;
pub mod strings;

pub use hashes::{hexists, hget, hgetall, hset};
pub use keys::{del, exists, expire};
pub use send::{send_get, send_set, send_set_ex, send_set_nx, send_set_px, send_set_xx};
pub use strings::{get, incr, mget, set, set_ex, set_nx, set_px, set_xx};

use crate::protocol::Arg;

fn key_args(keys: &[&str]) -> Vec<Arg> {
    keys.iter().map(|key| Arg::from(*key)).collect()
}
