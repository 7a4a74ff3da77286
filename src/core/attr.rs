//! Key/value attributes attached to records and handlers
//!
//! This module provides:
//! - `Value`: typed attribute value
//! - `Attr`: a key paired with a `Value`

use chrono::{DateTime, Local};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Value type for structured attributes
#[derive(Clone)]
pub enum Value {
    String(String),
    Bytes(Vec<u8>),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Duration(Duration),
    Time(DateTime<Local>),
    Json(serde_json::Value),
    /// Nested attributes, rendered as `[k=v k=v]`
    Group(Vec<Attr>),
    /// Any other value, rendered through its `Display` impl
    Any(Arc<dyn fmt::Display + Send + Sync>),
}

impl Value {
    /// Wrap an arbitrary displayable value
    pub fn any<T>(value: T) -> Self
    where
        T: fmt::Display + Send + Sync + 'static,
    {
        Value::Any(Arc::new(value))
    }

    /// Short name of the value kind
    pub fn kind(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Int(_) => "int",
            Value::Uint(_) => "uint",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Duration(_) => "duration",
            Value::Time(_) => "time",
            Value::Json(_) => "json",
            Value::Group(_) => "group",
            Value::Any(_) => "any",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Bytes(b) => write!(f, "{:?}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Uint(u) => write!(f, "{}", u),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Duration(d) => write!(f, "{:?}", d),
            Value::Time(t) => write!(f, "{}", t.to_rfc3339()),
            Value::Json(j) => write!(f, "{}", j),
            Value::Group(attrs) => {
                write!(f, "[")?;
                for (i, attr) in attrs.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", attr)?;
                }
                write!(f, "]")
            }
            Value::Any(v) => write!(f, "{}", v),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Bytes(b) => f.debug_tuple("Bytes").field(&b.len()).finish(),
            Value::Group(attrs) => f.debug_tuple("Group").field(attrs).finish(),
            other => f
                .debug_tuple(other.kind())
                .field(&format_args!("{}", other))
                .finish(),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
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

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        Value::Uint(u)
    }
}

impl From<u32> for Value {
    fn from(u: u32) -> Self {
        Value::Uint(u as u64)
    }
}

impl From<usize> for Value {
    fn from(u: usize) -> Self {
        Value::Uint(u as u64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Duration> for Value {
    fn from(d: Duration) -> Self {
        Value::Duration(d)
    }
}

impl From<DateTime<Local>> for Value {
    fn from(t: DateTime<Local>) -> Self {
        Value::Time(t)
    }
}

impl From<serde_json::Value> for Value {
    fn from(j: serde_json::Value) -> Self {
        Value::Json(j)
    }
}

impl From<Vec<Attr>> for Value {
    fn from(attrs: Vec<Attr>) -> Self {
        Value::Group(attrs)
    }
}

/// A single key/value attribute
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

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}
