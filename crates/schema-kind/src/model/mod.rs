//! Data model for schema kinds.
//!
//! This module contains the core types:
//! - Kinds (the closed catalog of value shapes)
//! - Values (dynamically typed inputs to validation)

pub mod kind;
pub mod value;

pub use kind::{describe, Kind};
pub use value::{infer_kind, NativeType, Value};
