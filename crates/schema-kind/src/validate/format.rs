//! Grammar checks for kinds whose native type is text or bytes.
//!
//! Matching uses the `regex` crate, which runs in time linear in the input
//! and never backtracks. Together with the digit ceilings in
//! [`limits`](crate::limits) this bounds the work of every check.

use regex::Regex;
use serde::de::IgnoredAny;

use crate::limits::{DECIMAL_FORMAT, INTEGER_FORMAT};

lazy_static::lazy_static! {
    static ref INTEGER_REGEX: Regex =
        Regex::new(INTEGER_FORMAT).expect("integer format must compile");

    static ref DECIMAL_REGEX: Regex =
        Regex::new(DECIMAL_FORMAT).expect("decimal format must compile");
}

/// Returns true if `s` fully matches [`INTEGER_FORMAT`].
pub fn is_integer_string(s: &str) -> bool {
    INTEGER_REGEX.is_match(s)
}

/// Returns true if `s` fully matches [`DECIMAL_FORMAT`].
pub fn is_decimal_string(s: &str) -> bool {
    DECIMAL_REGEX.is_match(s)
}

/// Returns true if `raw` is one syntactically valid JSON document.
///
/// Surrounding whitespace is allowed; trailing content is not.
pub fn is_valid_json(raw: &[u8]) -> bool {
    serde_json::from_slice::<IgnoredAny>(raw).is_ok()
}

/// Returns true if `raw` is well-formed UTF-8.
pub fn is_valid_utf8(raw: &[u8]) -> bool {
    std::str::from_utf8(raw).is_ok()
}
