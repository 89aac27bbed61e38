//! Validation of values against kinds.
//!
//! Validation happens in two passes. The representation pass compares
//! native types only and is cheap enough for every field write. The format
//! pass adds the grammar checks that downstream arithmetic and serialization
//! rely on: UTF-8 for strings, the integer and decimal grammars, and JSON
//! syntax. Neither pass checks nullability, enum membership or address
//! prefixes; those depend on the caller's schema.

mod format;

pub use format::{is_decimal_string, is_integer_string, is_valid_json, is_valid_utf8};

use crate::error::KindError;
use crate::model::{Kind, Value};

/// Resolves a raw kind ordinal, rejecting the sentinel and out-of-range
/// ordinals.
pub fn validate_kind_identity(ordinal: i32) -> Result<Kind, KindError> {
    Kind::from_ordinal(ordinal)
}

/// Checks that `value` has the native type `kind` requires.
///
/// Never inspects content. A value of a different fixed-width type is a
/// mismatch even when it would fit numerically.
pub fn validate_representation(kind: Kind, value: &Value<'_>) -> Result<(), KindError> {
    let expected = kind
        .native_type()
        .ok_or(KindError::UnknownKind(kind.ordinal()))?;
    let actual = value.native_type();
    if expected != actual {
        return Err(KindError::TypeMismatch { expected, actual });
    }
    Ok(())
}

/// Checks the native type and then the grammar of kinds that carry one.
///
/// Representation failures are reported as such; only a value with the
/// right native type can fail with [`KindError::InvalidFormat`].
pub fn validate_value(kind: Kind, value: &Value<'_>) -> Result<(), KindError> {
    validate_representation(kind, value)?;

    let conforms = match (kind, value) {
        (Kind::String, Value::String(s)) => is_valid_utf8(s.as_bytes()),
        (Kind::Integer, Value::String(s)) => is_integer_string(s),
        (Kind::Decimal, Value::String(s)) => is_decimal_string(s),
        (Kind::Json, Value::Json(raw)) => is_valid_json(raw),
        _ => true,
    };

    if conforms {
        Ok(())
    } else {
        Err(KindError::InvalidFormat {
            kind,
            value: value.to_string(),
        })
    }
}
