//! Reply conversion rules
//!
//! Every conversion looks at the shape of a frame and either produces the
//! native value, reports a nil reply, reports a shape it does not accept, or
//! reports content it cannot parse. These functions work on a frame that is
//! already known to be a reply; transport failures are handled by [`Reply`].
//!
//! | Conversion | Accepted shapes                           |
//! |------------|-------------------------------------------|
//! | bool       | integer, bulk string, simple string, boolean |
//! | bytes      | bulk string, simple string                |
//! | float64    | bulk string, double                       |
//! | int, int64, uint64 | integer, bulk string              |
//! | string     | bulk string, simple string                |
//! | array      | array, set, map (flattened)               |
//!
//! [`Reply`]: super::Reply

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

use crate::error::{ReplyError, ReplyResult};
use crate::protocol::RespFrame;

/// Nil frames report `Nil`; anything else is a shape mismatch.
fn unexpected(frame: &RespFrame, expected: &'static str) -> ReplyError {
    if frame.is_null() {
        ReplyError::Nil
    } else {
        ReplyError::mismatch(expected, frame.kind())
    }
}

fn parse_number<T>(data: &[u8], target: &'static str) -> ReplyResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    let text = std::str::from_utf8(data)
        .map_err(|e| ReplyError::conversion(target, String::from_utf8_lossy(data), e))?;
    text.parse::<T>()
        .map_err(|e| ReplyError::conversion(target, text, e))
}

fn parse_bool(data: &[u8]) -> ReplyResult<bool> {
    match data {
        b"1" | b"t" | b"T" | b"TRUE" | b"true" | b"True" => Ok(true),
        b"0" | b"f" | b"F" | b"FALSE" | b"false" | b"False" => Ok(false),
        _ => Err(ReplyError::conversion(
            "boolean",
            String::from_utf8_lossy(data),
            "invalid syntax",
        )),
    }
}

/// Integer replies are non-zero checks; strings use the usual boolean spellings.
pub fn to_bool(frame: &RespFrame) -> ReplyResult<bool> {
    match frame {
        RespFrame::Integer(n) => Ok(*n != 0),
        RespFrame::Boolean(b) => Ok(*b),
        RespFrame::BulkString(Some(data)) | RespFrame::SimpleString(data) => parse_bool(data),
        other => Err(unexpected(other, "boolean")),
    }
}

pub fn to_bytes(frame: &RespFrame) -> ReplyResult<Vec<u8>> {
    match frame {
        RespFrame::BulkString(Some(data)) | RespFrame::SimpleString(data) => Ok(data.to_vec()),
        other => Err(unexpected(other, "bulk string")),
    }
}

pub fn to_float64(frame: &RespFrame) -> ReplyResult<f64> {
    match frame {
        RespFrame::BulkString(Some(data)) => parse_number(data, "float64"),
        RespFrame::Double(f) => Ok(*f),
        other => Err(unexpected(other, "bulk string")),
    }
}

pub fn to_int(frame: &RespFrame) -> ReplyResult<isize> {
    match frame {
        RespFrame::Integer(n) => isize::try_from(*n)
            .map_err(|e| ReplyError::conversion("int", n.to_string(), e)),
        RespFrame::BulkString(Some(data)) => parse_number(data, "int"),
        other => Err(unexpected(other, "integer")),
    }
}

pub fn to_int64(frame: &RespFrame) -> ReplyResult<i64> {
    match frame {
        RespFrame::Integer(n) => Ok(*n),
        RespFrame::BulkString(Some(data)) => parse_number(data, "int64"),
        other => Err(unexpected(other, "integer")),
    }
}

pub fn to_uint64(frame: &RespFrame) -> ReplyResult<u64> {
    match frame {
        RespFrame::Integer(n) => u64::try_from(*n)
            .map_err(|_| ReplyError::conversion("uint64", n.to_string(), "negative value")),
        RespFrame::BulkString(Some(data)) => parse_number(data, "uint64"),
        other => Err(unexpected(other, "integer")),
    }
}

/// Bulk strings must hold UTF-8 to become a `String`.
pub fn to_string(frame: &RespFrame) -> ReplyResult<String> {
    match frame {
        RespFrame::BulkString(Some(data)) | RespFrame::SimpleString(data) => {
            String::from_utf8(data.to_vec()).map_err(|e| {
                ReplyError::conversion("string", String::from_utf8_lossy(data), e)
            })
        }
        other => Err(unexpected(other, "bulk string")),
    }
}

fn items(frame: &RespFrame) -> ReplyResult<Cow<'_, [RespFrame]>> {
    match frame {
        RespFrame::Array(Some(items)) | RespFrame::Set(items) => Ok(Cow::Borrowed(items.as_slice())),
        RespFrame::Map(pairs) => Ok(Cow::Owned(
            pairs
                .iter()
                .flat_map(|(k, v)| [k.clone(), v.clone()])
                .collect(),
        )),
        other => Err(unexpected(other, "array")),
    }
}

/// The elements of an array reply, unconverted
pub fn values(frame: &RespFrame) -> ReplyResult<Vec<RespFrame>> {
    items(frame).map(Cow::into_owned)
}

/// Convert each element; nil elements become the zero value.
fn elements<T, F>(frame: &RespFrame, convert: F) -> ReplyResult<Vec<T>>
where
    T: Default,
    F: Fn(&RespFrame) -> ReplyResult<T>,
{
    items(frame)?
        .iter()
        .enumerate()
        .map(|(index, item)| {
            if item.is_null() {
                Ok(T::default())
            } else {
                convert(item).map_err(|e| ReplyError::at(index, e))
            }
        })
        .collect()
}

fn bulk_bytes(frame: &RespFrame) -> ReplyResult<Vec<u8>> {
    match frame {
        RespFrame::BulkString(Some(data)) => Ok(data.to_vec()),
        other => Err(unexpected(other, "bulk string")),
    }
}

pub fn byte_slices(frame: &RespFrame) -> ReplyResult<Vec<Vec<u8>>> {
    elements(frame, bulk_bytes)
}

pub fn strings(frame: &RespFrame) -> ReplyResult<Vec<String>> {
    elements(frame, to_string)
}

pub fn ints(frame: &RespFrame) -> ReplyResult<Vec<isize>> {
    elements(frame, to_int)
}

pub fn int64s(frame: &RespFrame) -> ReplyResult<Vec<i64>> {
    elements(frame, to_int64)
}

pub fn float64s(frame: &RespFrame) -> ReplyResult<Vec<f64>> {
    elements(frame, to_float64)
}

fn pairs(frame: &RespFrame) -> ReplyResult<Vec<(&RespFrame, &RespFrame)>> {
    match frame {
        RespFrame::Map(pairs) => Ok(pairs.iter().map(|(k, v)| (k, v)).collect()),
        RespFrame::Array(Some(items)) | RespFrame::Set(items) => {
            if items.len() % 2 != 0 {
                return Err(ReplyError::conversion(
                    "map",
                    format!("{} elements", items.len()),
                    "odd number of elements",
                ));
            }
            Ok(items.chunks_exact(2).map(|pair| (&pair[0], &pair[1])).collect())
        }
        other => Err(unexpected(other, "array")),
    }
}

fn map_key(frame: &RespFrame) -> ReplyResult<String> {
    match frame {
        RespFrame::BulkString(Some(_)) | RespFrame::SimpleString(_) => to_string(frame),
        other => Err(unexpected(other, "bulk string")),
    }
}

/// Pair up alternating key/value elements. Later keys overwrite earlier ones.
fn map_with<T, F>(frame: &RespFrame, convert: F) -> ReplyResult<HashMap<String, T>>
where
    F: Fn(&RespFrame) -> ReplyResult<T>,
{
    let pairs = pairs(frame)?;
    let mut map = HashMap::with_capacity(pairs.len());

    for (i, (key, value)) in pairs.into_iter().enumerate() {
        let key = map_key(key).map_err(|e| ReplyError::at(2 * i, e))?;
        let value = convert(value).map_err(|e| ReplyError::at(2 * i + 1, e))?;
        map.insert(key, value);
    }

    Ok(map)
}

pub fn string_map(frame: &RespFrame) -> ReplyResult<HashMap<String, String>> {
    map_with(frame, to_string)
}

pub fn int_map(frame: &RespFrame) -> ReplyResult<HashMap<String, isize>> {
    map_with(frame, to_int)
}

pub fn int64_map(frame: &RespFrame) -> ReplyResult<HashMap<String, i64>> {
    map_with(frame, to_int64)
}
