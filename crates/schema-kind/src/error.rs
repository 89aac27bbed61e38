//! Error types for kind validation.

use thiserror::Error;

use crate::model::{Kind, NativeType};

/// Errors returned when a kind ordinal or a value fails validation.
///
/// Every variant describes a defect in caller-supplied input and carries
/// enough context to build an actionable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KindError {
    /// The ordinal is at or below the invalid sentinel.
    #[error("unknown type: {0}")]
    UnknownKind(i32),

    /// The ordinal is above the maximum defined kind.
    #[error("invalid type: {0}")]
    OutOfRangeKind(i32),

    /// The value's native type is not the one the kind requires.
    #[error("expected {expected}, got {actual}")]
    TypeMismatch {
        expected: NativeType,
        actual: NativeType,
    },

    /// The native type matched but the content failed the kind's grammar.
    #[error("invalid {kind} value: expected {}, got {value}", format_expectation(.kind))]
    InvalidFormat { kind: Kind, value: String },
}

fn format_expectation(kind: &Kind) -> &'static str {
    match kind {
        Kind::String => "valid utf-8 string",
        Kind::Integer => "base10 integer",
        Kind::Decimal => "decimal number",
        Kind::Json => "valid JSON",
        _ => "well-formed value",
    }
}
