//! The kind catalog.
//!
//! A kind is the basic type of a schema field. Each kind requires exactly
//! one native representation for its values and some kinds layer a grammar
//! on top of that representation.

use std::borrow::Cow;
use std::fmt;

use crate::error::KindError;
use crate::model::{NativeType, Value};
use crate::validate;

/// Value kinds, ordered by their stable ordinal.
///
/// Ordinal 0 is the invalid sentinel. It is never a legal kind for a field
/// and every operation that takes a kind rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(i32)]
pub enum Kind {
    /// Invalid sentinel.
    #[default]
    Invalid = 0,
    /// UTF-8 text.
    String = 1,
    /// Opaque bytes.
    Bytes = 2,
    Int8 = 3,
    Uint8 = 4,
    Int16 = 5,
    Uint16 = 6,
    Int32 = 7,
    Uint32 = 8,
    Int64 = 9,
    Uint64 = 10,
    /// Arbitrary precision integer held as a base10 string matching
    /// [`INTEGER_FORMAT`](crate::limits::INTEGER_FORMAT).
    Integer = 11,
    /// Arbitrary precision decimal held as a string matching
    /// [`DECIMAL_FORMAT`](crate::limits::DECIMAL_FORMAT).
    Decimal = 12,
    Bool = 13,
    /// UTC instant.
    Time = 14,
    /// Signed time span.
    Duration = 15,
    Float32 = 16,
    Float64 = 17,
    /// Address held as raw bytes.
    ///
    /// Fields of this kind declare their bech32 prefix in the schema so that
    /// indexers can render them as strings. The prefix is not checked here.
    Bech32Address = 18,
    /// Enum value held as a string.
    ///
    /// Membership in a particular enum is checked by whoever owns the enum
    /// definition, never by the kind.
    Enum = 19,
    /// JSON document held as raw bytes.
    Json = 20,
}

impl Kind {
    /// The maximum valid kind.
    pub const MAX: Kind = Kind::Json;

    /// Every valid kind in ordinal order.
    pub const ALL: [Kind; 20] = [
        Kind::String,
        Kind::Bytes,
        Kind::Int8,
        Kind::Uint8,
        Kind::Int16,
        Kind::Uint16,
        Kind::Int32,
        Kind::Uint32,
        Kind::Int64,
        Kind::Uint64,
        Kind::Integer,
        Kind::Decimal,
        Kind::Bool,
        Kind::Time,
        Kind::Duration,
        Kind::Float32,
        Kind::Float64,
        Kind::Bech32Address,
        Kind::Enum,
        Kind::Json,
    ];

    /// Returns the stable ordinal of this kind.
    pub fn ordinal(self) -> i32 {
        self as i32
    }

    /// Resolves a raw ordinal to a valid kind.
    ///
    /// Fails with [`KindError::UnknownKind`] at or below the sentinel and
    /// with [`KindError::OutOfRangeKind`] above [`Kind::MAX`].
    pub fn from_ordinal(ordinal: i32) -> Result<Kind, KindError> {
        if ordinal <= Kind::Invalid.ordinal() {
            return Err(KindError::UnknownKind(ordinal));
        }
        if ordinal > Kind::MAX.ordinal() {
            return Err(KindError::OutOfRangeKind(ordinal));
        }
        Ok(Kind::ALL[(ordinal - 1) as usize])
    }

    /// Checks that this kind is not the invalid sentinel.
    pub fn validate(self) -> Result<(), KindError> {
        Kind::from_ordinal(self.ordinal()).map(|_| ())
    }

    /// Returns the canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Invalid => "invalid(0)",
            Kind::String => "string",
            Kind::Bytes => "bytes",
            Kind::Int8 => "int8",
            Kind::Uint8 => "uint8",
            Kind::Int16 => "int16",
            Kind::Uint16 => "uint16",
            Kind::Int32 => "int32",
            Kind::Uint32 => "uint32",
            Kind::Int64 => "int64",
            Kind::Uint64 => "uint64",
            Kind::Integer => "integer",
            Kind::Decimal => "decimal",
            Kind::Bool => "bool",
            Kind::Time => "time",
            Kind::Duration => "duration",
            Kind::Float32 => "float32",
            Kind::Float64 => "float64",
            Kind::Bech32Address => "bech32address",
            Kind::Enum => "enum",
            Kind::Json => "json",
        }
    }

    /// Parses a canonical kind name.
    pub fn from_name(name: &str) -> Option<Kind> {
        Kind::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Returns the native type values of this kind must have, or `None` for
    /// the invalid sentinel.
    pub fn native_type(self) -> Option<NativeType> {
        let native = match self {
            Kind::Invalid => return None,
            Kind::String | Kind::Integer | Kind::Decimal | Kind::Enum => NativeType::String,
            Kind::Bytes | Kind::Bech32Address => NativeType::Bytes,
            Kind::Int8 => NativeType::Int8,
            Kind::Uint8 => NativeType::Uint8,
            Kind::Int16 => NativeType::Int16,
            Kind::Uint16 => NativeType::Uint16,
            Kind::Int32 => NativeType::Int32,
            Kind::Uint32 => NativeType::Uint32,
            Kind::Int64 => NativeType::Int64,
            Kind::Uint64 => NativeType::Uint64,
            Kind::Bool => NativeType::Bool,
            Kind::Time => NativeType::Time,
            Kind::Duration => NativeType::Duration,
            Kind::Float32 => NativeType::Float32,
            Kind::Float64 => NativeType::Float64,
            Kind::Json => NativeType::Json,
        };
        Some(native)
    }

    /// Returns true if values of this kind carry a grammar beyond their
    /// native type.
    pub fn has_format(self) -> bool {
        matches!(
            self,
            Kind::String | Kind::Integer | Kind::Decimal | Kind::Json
        )
    }

    /// Checks only that the value has this kind's native type.
    ///
    /// This is the cheap check for hot paths. It never looks at content, so
    /// it accepts `"abc"` for [`Kind::Integer`]. Use
    /// [`validate_value`](Kind::validate_value) where the grammar matters.
    pub fn validate_representation(self, value: &Value<'_>) -> Result<(), KindError> {
        validate::validate_representation(self, value)
    }

    /// Checks the native type and then the kind's grammar, if any.
    ///
    /// Enum membership is not checked because a kind has no enum schema.
    pub fn validate_value(self, value: &Value<'_>) -> Result<(), KindError> {
        validate::validate_value(self, value)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i32> for Kind {
    type Error = KindError;

    fn try_from(ordinal: i32) -> Result<Self, Self::Error> {
        Kind::from_ordinal(ordinal)
    }
}

/// Describes a raw kind ordinal.
///
/// Never fails: invalid ordinals render as `invalid(<ordinal>)`, which keeps
/// this usable while reporting an error about the same ordinal.
pub fn describe(ordinal: i32) -> Cow<'static, str> {
    match Kind::from_ordinal(ordinal) {
        Ok(kind) => Cow::Borrowed(kind.name()),
        Err(_) => Cow::Owned(format!("invalid({})", ordinal)),
    }
}
