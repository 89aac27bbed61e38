//! Schema kinds: a closed catalog of value shapes and the rules for
//! checking that a dynamically typed value belongs to one.
//!
//! Kinds describe schema fields generically, for example the fields of
//! state-change records a module emits for indexers, or the untyped input a
//! decoder accepts. A value that passes validation is safe to interpret
//! according to its kind's contract, including the precision ceilings that
//! keep arbitrary-precision numbers portable across implementations.
//!
//! # Quick Start
//!
//! ```rust
//! use schema_kind::{infer_kind, Kind, KindError, Value};
//!
//! // Representation only: a decimal kind needs a string.
//! assert!(Kind::Decimal.validate_representation(&Value::from("1.5e3")).is_ok());
//!
//! // Full check: the string must also match the decimal grammar.
//! let err = Kind::Decimal.validate_value(&Value::from("1e100")).unwrap_err();
//! assert!(matches!(err, KindError::InvalidFormat { .. }));
//!
//! // Raw ordinals from a wire format are resolved first.
//! assert_eq!(Kind::from_ordinal(20), Ok(Kind::Json));
//! assert_eq!(schema_kind::describe(42), "invalid(42)");
//!
//! // Inference picks the simplest kind for a native type.
//! assert_eq!(infer_kind(&Value::from(7u16)), Kind::Uint16);
//! ```
//!
//! # Modules
//!
//! - [`model`]: Kind catalog and the value container
//! - [`validate`]: Representation and format validation
//! - [`error`]: Error types
//! - [`limits`]: Digit ceilings and the published number formats
//!
//! # What is not checked
//!
//! Nullability, enum membership and bech32 address prefixes are schema
//! concerns. Callers check them before or after calling into this crate.

pub mod error;
pub mod limits;
pub mod model;
pub mod validate;

// Re-export commonly used types at crate root
pub use error::KindError;
pub use limits::{DECIMAL_FORMAT, INTEGER_FORMAT};
pub use model::{describe, infer_kind, Kind, NativeType, Value};
pub use validate::{
    is_decimal_string, is_integer_string, is_valid_json, is_valid_utf8, validate_kind_identity,
    validate_representation, validate_value,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
