//! RESP reply frames
//!
//! The raw shape of a store reply as handed over by the connection layer.
//! Covers RESP2 and the RESP3 additions.

use std::sync::Arc;

/// Type alias for byte strings used throughout the protocol
pub type Bytes = Arc<Vec<u8>>;

/// RESP protocol frame types
#[derive(Debug, Clone, PartialEq)]
pub enum RespFrame {
    /// Simple string: +OK\r\n
    SimpleString(Bytes),

    /// Error: -Error message\r\n
    Error(Bytes),

    /// Integer: :1000\r\n
    Integer(i64),

    /// Bulk string: $6\r\nfoobar\r\n or $-1\r\n (null)
    BulkString(Option<Bytes>),

    /// Array: *2\r\n$3\r\nfoo\r\n$3\r\nbar\r\n or *-1\r\n (null)
    Array(Option<Vec<RespFrame>>),

    // RESP3 additions
    /// Null value: _\r\n
    Null,

    /// Boolean: #t\r\n or #f\r\n
    Boolean(bool),

    /// Double: ,1.23\r\n or ,inf\r\n
    Double(f64),

    /// Map: %2\r\n+first\r\n:1\r\n+second\r\n:2\r\n
    Map(Vec<(RespFrame, RespFrame)>),

    /// Set: ~2\r\n+first\r\n+second\r\n
    Set(Vec<RespFrame>),
}

impl RespFrame {
    /// Create a simple string response
    pub fn ok() -> Self {
        RespFrame::SimpleString(Arc::new(b"OK".to_vec()))
    }

    /// Create a simple string response
    pub fn simple_string(s: impl Into<Vec<u8>>) -> Self {
        RespFrame::SimpleString(Arc::new(s.into()))
    }

    /// Create an error response
    pub fn error(msg: impl Into<Vec<u8>>) -> Self {
        RespFrame::Error(Arc::new(msg.into()))
    }

    /// Create an integer response
    pub fn integer(n: i64) -> Self {
        RespFrame::Integer(n)
    }

    /// Create a null bulk string
    pub fn null_bulk() -> Self {
        RespFrame::BulkString(None)
    }

    /// Create a null array
    pub fn null_array() -> Self {
        RespFrame::Array(None)
    }

    /// Create a bulk string from bytes
    pub fn bulk_string(bytes: impl AsRef<[u8]>) -> Self {
        RespFrame::BulkString(Some(Arc::new(bytes.as_ref().to_vec())))
    }

    /// Create an array of frames
    pub fn array(frames: Vec<RespFrame>) -> Self {
        RespFrame::Array(Some(frames))
    }

    /// Check if this frame is an error
    pub fn is_error(&self) -> bool {
        matches!(self, RespFrame::Error(_))
    }

    /// Check if this frame represents a null/nil value
    pub fn is_null(&self) -> bool {
        matches!(self,
            RespFrame::Null |
            RespFrame::BulkString(None) |
            RespFrame::Array(None)
        )
    }

    /// Name of the reply shape, as used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            RespFrame::SimpleString(_) => "simple string",
            RespFrame::Error(_) => "error",
            RespFrame::Integer(_) => "integer",
            RespFrame::BulkString(Some(_)) => "bulk string",
            RespFrame::Array(Some(_)) => "array",
            RespFrame::BulkString(None) | RespFrame::Array(None) | RespFrame::Null => "nil",
            RespFrame::Boolean(_) => "boolean",
            RespFrame::Double(_) => "double",
            RespFrame::Map(_) => "map",
            RespFrame::Set(_) => "set",
        }
    }
}

impl From<String> for RespFrame {
    fn from(s: String) -> Self {
        RespFrame::BulkString(Some(Arc::new(s.into_bytes())))
    }
}

impl From<&str> for RespFrame {
    fn from(s: &str) -> Self {
        RespFrame::bulk_string(s)
    }
}

impl From<Vec<u8>> for RespFrame {
    fn from(bytes: Vec<u8>) -> Self {
        RespFrame::BulkString(Some(Arc::new(bytes)))
    }
}

impl From<i64> for RespFrame {
    fn from(n: i64) -> Self {
        RespFrame::Integer(n)
    }
}

impl From<Vec<RespFrame>> for RespFrame {
    fn from(frames: Vec<RespFrame>) -> Self {
        RespFrame::Array(Some(frames))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resp_frame_creation() {
        let ok = RespFrame::ok();
        assert!(matches!(ok, RespFrame::SimpleString(_)));

        let err = RespFrame::error("ERR test");
        assert!(err.is_error());

        let null = RespFrame::null_bulk();
        assert!(null.is_null());
        assert!(RespFrame::null_array().is_null());
        assert!(RespFrame::Null.is_null());
    }

    #[test]
    fn test_empty_values_are_not_null() {
        assert!(!RespFrame::bulk_string("").is_null());
        assert!(!RespFrame::array(vec![]).is_null());
        assert!(!RespFrame::Set(vec![]).is_null());
    }

    #[test]
    fn test_resp_frame_conversions() {
        let frame: RespFrame = "hello".into();
        assert!(matches!(frame, RespFrame::BulkString(Some(_))));

        let frame: RespFrame = 42i64.into();
        assert!(matches!(frame, RespFrame::Integer(42)));

        let frame: RespFrame = vec![RespFrame::from("a")].into();
        assert_eq!(frame.kind(), "array");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(RespFrame::ok().kind(), "simple string");
        assert_eq!(RespFrame::null_bulk().kind(), "nil");
        assert_eq!(RespFrame::Double(1.5).kind(), "double");
        assert_eq!(RespFrame::Map(vec![]).kind(), "map");
    }
}
