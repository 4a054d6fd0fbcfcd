use crate::error::RuntimeError;

/// The result of reading a numeric literal as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerLiteral {
    /// The integer part of the literal.
    pub value:     i64,
    /// `true` if a non-zero fractional part was dropped.
    pub truncated: bool,
}

/// Reads a numeric literal with integer semantics.
///
/// Everything after the decimal point is discarded, which truncates toward
/// zero: `3.9` reads as `3` and `-0.5` reads as `0`.
///
/// ## Errors
/// Returns `RuntimeError::InvalidNumber` if the integer part does not fit in
/// an `i64`.
///
/// ## Example
/// ```
/// use clips::{error::RuntimeError, util::num::parse_integer_literal};
///
/// let lit = parse_integer_literal("-12.75").unwrap();
/// assert_eq!(lit.value, -12);
/// assert!(lit.truncated);
///
/// assert_eq!(parse_integer_literal("99999999999999999999"),
///            Err(RuntimeError::InvalidNumber));
/// ```
pub fn parse_integer_literal(text: &str) -> Result<IntegerLiteral, RuntimeError> {
    let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));

    let value = whole.parse::<i64>()
                     .map_err(|_| RuntimeError::InvalidNumber)?;
    let truncated = fraction.bytes().any(|b| b != b'0');

    Ok(IntegerLiteral { value, truncated })
}

/// Negates an integer, failing on overflow (`-i64::MIN`).
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the result is not representable.
pub const fn checked_negate(value: i64) -> Result<i64, RuntimeError> {
    match value.checked_neg() {
        Some(n) => Ok(n),
        None => Err(RuntimeError::Overflow),
    }
}
