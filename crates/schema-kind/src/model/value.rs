//! Values checked against kinds.
//!
//! A value carries exactly one native representation. Text and byte
//! payloads are borrowed where possible so validation never copies them.

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};

use crate::model::Kind;

/// Runtime type tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeType {
    String,
    Bytes,
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Bool,
    Time,
    Duration,
    Float32,
    Float64,
    Json,
}

impl NativeType {
    /// Returns the Rust-facing name used in mismatch errors.
    pub fn name(self) -> &'static str {
        match self {
            NativeType::String => "string",
            NativeType::Bytes => "bytes",
            NativeType::Int8 => "i8",
            NativeType::Uint8 => "u8",
            NativeType::Int16 => "i16",
            NativeType::Uint16 => "u16",
            NativeType::Int32 => "i32",
            NativeType::Uint32 => "u32",
            NativeType::Int64 => "i64",
            NativeType::Uint64 => "u64",
            NativeType::Bool => "bool",
            NativeType::Time => "DateTime<Utc>",
            NativeType::Duration => "TimeDelta",
            NativeType::Float32 => "f32",
            NativeType::Float64 => "f64",
            NativeType::Json => "json",
        }
    }

    /// Returns the simplest kind with this native type.
    ///
    /// Kinds that share a native type with a simpler kind (integer, decimal,
    /// enum and address) are never returned.
    pub fn simplest_kind(self) -> Kind {
        match self {
            NativeType::String => Kind::String,
            NativeType::Bytes => Kind::Bytes,
            NativeType::Int8 => Kind::Int8,
            NativeType::Uint8 => Kind::Uint8,
            NativeType::Int16 => Kind::Int16,
            NativeType::Uint16 => Kind::Uint16,
            NativeType::Int32 => Kind::Int32,
            NativeType::Uint32 => Kind::Uint32,
            NativeType::Int64 => Kind::Int64,
            NativeType::Uint64 => Kind::Uint64,
            NativeType::Bool => Kind::Bool,
            NativeType::Time => Kind::Time,
            NativeType::Duration => Kind::Duration,
            NativeType::Float32 => Kind::Float32,
            NativeType::Float64 => Kind::Float64,
            NativeType::Json => Kind::Json,
        }
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dynamically typed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    String(Cow<'a, str>),
    Bytes(Cow<'a, [u8]>),
    Int8(i8),
    Uint8(u8),
    Int16(i16),
    Uint16(u16),
    Int32(i32),
    Uint32(u32),
    Int64(i64),
    Uint64(u64),
    Bool(bool),
    Time(DateTime<Utc>),
    Duration(TimeDelta),
    Float32(f32),
    Float64(f64),
    /// Raw JSON document, not yet known to be well-formed.
    Json(Cow<'a, [u8]>),
}

impl<'a> Value<'a> {
    /// Creates a JSON value from raw text or bytes.
    pub fn json(raw: impl Into<Cow<'a, [u8]>>) -> Self {
        Value::Json(raw.into())
    }

    /// Creates a JSON value from text.
    pub fn json_str(raw: &'a str) -> Self {
        Value::Json(Cow::Borrowed(raw.as_bytes()))
    }

    /// Returns the runtime type tag of this value.
    pub fn native_type(&self) -> NativeType {
        match self {
            Value::String(_) => NativeType::String,
            Value::Bytes(_) => NativeType::Bytes,
            Value::Int8(_) => NativeType::Int8,
            Value::Uint8(_) => NativeType::Uint8,
            Value::Int16(_) => NativeType::Int16,
            Value::Uint16(_) => NativeType::Uint16,
            Value::Int32(_) => NativeType::Int32,
            Value::Uint32(_) => NativeType::Uint32,
            Value::Int64(_) => NativeType::Int64,
            Value::Uint64(_) => NativeType::Uint64,
            Value::Bool(_) => NativeType::Bool,
            Value::Time(_) => NativeType::Time,
            Value::Duration(_) => NativeType::Duration,
            Value::Float32(_) => NativeType::Float32,
            Value::Float64(_) => NativeType::Float64,
            Value::Json(_) => NativeType::Json,
        }
    }

    /// Returns the simplest kind that can hold this value.
    pub fn infer_kind(&self) -> Kind {
        self.native_type().simplest_kind()
    }

    /// Detaches this value from any borrowed payload.
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::String(s) => Value::String(Cow::Owned(s.into_owned())),
            Value::Bytes(b) => Value::Bytes(Cow::Owned(b.into_owned())),
            Value::Json(b) => Value::Json(Cow::Owned(b.into_owned())),
            Value::Int8(v) => Value::Int8(v),
            Value::Uint8(v) => Value::Uint8(v),
            Value::Int16(v) => Value::Int16(v),
            Value::Uint16(v) => Value::Uint16(v),
            Value::Int32(v) => Value::Int32(v),
            Value::Uint32(v) => Value::Uint32(v),
            Value::Int64(v) => Value::Int64(v),
            Value::Uint64(v) => Value::Uint64(v),
            Value::Bool(v) => Value::Bool(v),
            Value::Time(v) => Value::Time(v),
            Value::Duration(v) => Value::Duration(v),
            Value::Float32(v) => Value::Float32(v),
            Value::Float64(v) => Value::Float64(v),
        }
    }
}

/// Renders the payload for error messages; byte payloads are decoded lossily.
impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Bytes(b) | Value::Json(b) => f.write_str(&String::from_utf8_lossy(b)),
            Value::Int8(v) => write!(f, "{}", v),
            Value::Uint8(v) => write!(f, "{}", v),
            Value::Int16(v) => write!(f, "{}", v),
            Value::Uint16(v) => write!(f, "{}", v),
            Value::Int32(v) => write!(f, "{}", v),
            Value::Uint32(v) => write!(f, "{}", v),
            Value::Int64(v) => write!(f, "{}", v),
            Value::Uint64(v) => write!(f, "{}", v),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Time(v) => write!(f, "{}", v.to_rfc3339()),
            Value::Duration(v) => write!(f, "{}", v),
            Value::Float32(v) => write!(f, "{}", v),
            Value::Float64(v) => write!(f, "{}", v),
        }
    }
}

/// Returns the simplest kind that can hold `value`.
///
/// Total: a value never fails inference. Integer, decimal, address and enum
/// kinds share their native type with string or bytes and need schema
/// context to tell apart, so they are never inferred.
pub fn infer_kind(value: &Value<'_>) -> Kind {
    value.infer_kind()
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(v: &'a str) -> Self {
        Value::String(Cow::Borrowed(v))
    }
}

impl From<String> for Value<'static> {
    fn from(v: String) -> Self {
        Value::String(Cow::Owned(v))
    }
}

impl<'a> From<&'a [u8]> for Value<'a> {
    fn from(v: &'a [u8]) -> Self {
        Value::Bytes(Cow::Borrowed(v))
    }
}

impl From<Vec<u8>> for Value<'static> {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(Cow::Owned(v))
    }
}

macro_rules! impl_from_copy {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value<'_> {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_from_copy! {
    i8 => Int8,
    u8 => Uint8,
    i16 => Int16,
    u16 => Uint16,
    i32 => Int32,
    u32 => Uint32,
    i64 => Int64,
    u64 => Uint64,
    bool => Bool,
    f32 => Float32,
    f64 => Float64,
    DateTime<Utc> => Time,
    TimeDelta => Duration,
}
