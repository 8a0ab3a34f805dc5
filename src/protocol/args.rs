//! Command arguments
//!
//! Commands take an ordered list of positional arguments. Each argument is a
//! string, an integer or raw bytes, and is sent as a bulk string.

use std::borrow::Cow;
use std::fmt;

/// A single positional command argument
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Arg {
    Str(String),
    Int(i64),
    Bytes(Vec<u8>),
}

impl Arg {
    /// Wire representation of the argument; integers are written in decimal
    pub fn to_bytes(&self) -> Cow<'_, [u8]> {
        match self {
            Arg::Str(s) => Cow::Borrowed(s.as_bytes()),
            Arg::Int(n) => Cow::Owned(n.to_string().into_bytes()),
            Arg::Bytes(b) => Cow::Borrowed(b),
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Str(s) => write!(f, "{}", s),
            Arg::Int(n) => write!(f, "{}", n),
            Arg::Bytes(b) => write!(f, "{}", String::from_utf8_lossy(b)),
        }
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Str(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Str(s)
    }
}

impl From<&String> for Arg {
    fn from(s: &String) -> Self {
        Arg::Str(s.clone())
    }
}

impl From<&[u8]> for Arg {
    fn from(b: &[u8]) -> Self {
        Arg::Bytes(b.to_vec())
    }
}

impl From<Vec<u8>> for Arg {
    fn from(b: Vec<u8>) -> Self {
        Arg::Bytes(b)
    }
}

impl From<i64> for Arg {
    fn from(n: i64) -> Self {
        Arg::Int(n)
    }
}

impl From<i32> for Arg {
    fn from(n: i32) -> Self {
        Arg::Int(n.into())
    }
}

impl From<u32> for Arg {
    fn from(n: u32) -> Self {
        Arg::Int(n.into())
    }
}

impl From<usize> for Arg {
    fn from(n: usize) -> Self {
        // Wider than any key count or timeout a command takes
        Arg::Int(n as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_bytes() {
        assert_eq!(Arg::from("key").to_bytes().as_ref(), b"key");
        assert_eq!(Arg::from(-15i64).to_bytes().as_ref(), b"-15");
        assert_eq!(Arg::from(vec![0u8, 255]).to_bytes().as_ref(), &[0u8, 255]);
    }

    #[test]
    fn test_conversions_keep_kind() {
        assert_eq!(Arg::from(10usize), Arg::Int(10));
        assert_eq!(Arg::from(String::from("v")), Arg::Str("v".to_string()));
        assert_eq!(Arg::from(&b"raw"[..]), Arg::Bytes(b"raw".to_vec()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Arg::from("EX").to_string(), "EX");
        assert_eq!(Arg::from(30).to_string(), "30");
    }
}
