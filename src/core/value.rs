//! Attribute values for structured log records
//!
//! This module provides:
//! - `Value`: one variant per semantic category a formatter knows how to render
//! - `Attr`: a single key/value pair attached to a record
//! - `attrs_from_flat`: validated conversion from an alternating key/value list

use super::error::{LoggerError, Result};
use chrono::{DateTime, NaiveDateTime, TimeZone};
use std::fmt;
use std::sync::Arc;

/// Value of a structured attribute
#[derive(Clone)]
pub enum Value {
    Str(String),
    Bytes(Vec<u8>),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    /// Wall-clock timestamp, rendered with the record time pattern
    Time(NaiveDateTime),
    /// Anything with a textual form; rendered through `Display`
    Display(Arc<dyn fmt::Display + Send + Sync>),
    /// Fallback for everything else; rendered through `Debug`
    Debug(Arc<dyn fmt::Debug + Send + Sync>),
}

impl Value {
    /// Wrap a value that is rendered through its `Display` impl.
    pub fn display<T>(value: T) -> Self
    where
        T: fmt::Display + Send + Sync + 'static,
    {
        Value::Display(Arc::new(value))
    }

    /// Wrap a value that is rendered through its `Debug` impl.
    pub fn debug<T>(value: T) -> Self
    where
        T: fmt::Debug + Send + Sync + 'static,
    {
        Value::Debug(Arc::new(value))
    }

    /// Short name of the variant, used in error reports
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Str(_) => "text",
            Value::Bytes(_) => "bytes",
            Value::Int(_) | Value::Uint(_) => "integer",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Time(_) => "timestamp",
            Value::Display(_) => "display",
            Value::Debug(_) => "debug",
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::Bytes(b) => f.debug_tuple("Bytes").field(b).finish(),
            Value::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Value::Uint(u) => f.debug_tuple("Uint").field(u).finish(),
            Value::Float(fl) => f.debug_tuple("Float").field(fl).finish(),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Time(t) => f.debug_tuple("Time").field(t).finish(),
            Value::Display(d) => f.debug_tuple("Display").field(&d.to_string()).finish(),
            Value::Debug(d) => f.debug_tuple("Debug").field(d).finish(),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Str(s.clone())
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Bytes(b.to_vec())
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(i: $t) -> Self {
                Value::Int(i as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(u: $t) -> Self {
                Value::Uint(u as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(t: NaiveDateTime) -> Self {
        Value::Time(t)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(t: DateTime<Tz>) -> Self {
        Value::Time(t.naive_local())
    }
}

/// One key/value pair attached to a log record
#[derive(Debug, Clone)]
pub struct Attr {
    pub key: String,
    pub value: Value,
}

impl Attr {
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> From<(K, V)> for Attr {
    fn from((key, value): (K, V)) -> Self {
        Attr::new(key, value)
    }
}

/// Pair up an alternating `key, value, key, value, ...` list.
///
/// An odd-length list is rejected rather than truncated, and every key
/// position must hold a `Value::Str`.
pub fn attrs_from_flat(values: Vec<Value>) -> Result<Vec<Attr>> {
    if values.len() % 2 != 0 {
        return Err(LoggerError::odd_attributes(values.len()));
    }

    let mut attrs = Vec::with_capacity(values.len() / 2);
    let mut iter = values.into_iter().enumerate();
    while let (Some((index, key)), Some((_, value))) = (iter.next(), iter.next()) {
        match key {
            Value::Str(key) => attrs.push(Attr { key, value }),
            other => return Err(LoggerError::non_text_key(index, other.kind())),
        }
    }
    Ok(attrs)
}
