//! Precision limits for arbitrary-precision number kinds.
//!
//! These ceilings guarantee that any conforming implementation can hold an
//! integer or decimal string without precision loss, whatever big-number
//! type it uses natively. They also bound the work done per grammar check.

/// Maximum digits in an integer string.
pub const MAX_INTEGER_DIGITS: usize = 100;

/// Maximum digits before the decimal point in a decimal string.
pub const MAX_DECIMAL_INTEGER_DIGITS: usize = 50;

/// Maximum digits after the decimal point in a decimal string.
pub const MAX_DECIMAL_FRACTION_DIGITS: usize = 50;

/// Maximum digits in a decimal string's exponent.
pub const MAX_EXPONENT_DIGITS: usize = 2;

/// Pattern integer strings must fully match.
///
/// Part of the published contract: downstream systems validate the same
/// strings with this exact pattern.
pub const INTEGER_FORMAT: &str = r"^-?[0-9]{1,100}$";

/// Pattern decimal strings must fully match.
///
/// At most 50 digits on either side of the point and an optional exponent
/// of at most 2 digits.
pub const DECIMAL_FORMAT: &str = r"^-?[0-9]{1,50}(\.[0-9]{1,50})?([eE][-+]?[0-9]{1,2})?$";
