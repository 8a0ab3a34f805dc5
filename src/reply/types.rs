//! Typed reply wrappers, one per Redis reply type

use std::collections::HashMap;

use super::{convert, project, Reply, TypedReply};
use crate::error::{ClientError, ReplyResult};
use crate::protocol::RespFrame;

macro_rules! typed_reply {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name(Option<Reply>);

        impl $name {
            /// Wrap the outcome of issuing a command
            pub fn new(outcome: Result<RespFrame, ClientError>) -> Self {
                $name(Some(Reply::new(outcome)))
            }

            /// A wrapper that holds no reply
            pub fn absent() -> Self {
                $name(None)
            }
        }

        impl TypedReply for $name {
            fn reply(&self) -> Option<&Reply> {
                self.0.as_ref()
            }
        }

        impl From<Reply> for $name {
            fn from(reply: Reply) -> Self {
                $name(Some(reply))
            }
        }

        impl From<Option<Reply>> for $name {
            fn from(reply: Option<Reply>) -> Self {
                $name(reply)
            }
        }
    };
}

typed_reply! {
    /// Reply of a command with integer return type
    Integer
}

typed_reply! {
    /// Reply of a command answering yes or no, usually as integer 0 or 1
    Boolean
}

typed_reply! {
    /// Reply of a command with simple string return type
    SimpleString
}

typed_reply! {
    /// Reply of a command with bulk string return type
    BulkString
}

typed_reply! {
    /// Reply of a command with array return type
    Array
}

impl Integer {
    pub fn result(&self) -> ReplyResult<i64> {
        self.to_int64()
    }
}

impl Boolean {
    pub fn result(&self) -> ReplyResult<bool> {
        self.to_bool()
    }
}

impl SimpleString {
    pub fn result(&self) -> ReplyResult<String> {
        self.to_string()
    }
}

impl BulkString {
    pub fn result(&self) -> ReplyResult<Vec<u8>> {
        self.to_bytes()
    }
}

impl Array {
    /// The elements, unconverted
    pub fn result(&self) -> ReplyResult<Vec<RespFrame>> {
        project(self.reply(), convert::values)
    }

    /// Every element must be a bulk string
    pub fn byte_slices(&self) -> ReplyResult<Vec<Vec<u8>>> {
        project(self.reply(), convert::byte_slices)
    }

    pub fn strings(&self) -> ReplyResult<Vec<String>> {
        project(self.reply(), convert::strings)
    }

    pub fn ints(&self) -> ReplyResult<Vec<isize>> {
        project(self.reply(), convert::ints)
    }

    pub fn int64s(&self) -> ReplyResult<Vec<i64>> {
        project(self.reply(), convert::int64s)
    }

    pub fn float64s(&self) -> ReplyResult<Vec<f64>> {
        project(self.reply(), convert::float64s)
    }

    /// Alternating key/value elements as a map, e.g. the reply of HGETALL
    pub fn string_map(&self) -> ReplyResult<HashMap<String, String>> {
        project(self.reply(), convert::string_map)
    }

    pub fn int_map(&self) -> ReplyResult<HashMap<String, isize>> {
        project(self.reply(), convert::int_map)
    }

    pub fn int64_map(&self) -> ReplyResult<HashMap<String, i64>> {
        project(self.reply(), convert::int64_map)
    }
}
