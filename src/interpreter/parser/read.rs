use crate::{
    ast::{Operator, Symbol},
    interpreter::value::core::Value,
    util::num::parse_integer_literal,
};

/// Lifts a numeric literal into a value.
///
/// Literals are read with integer semantics. A literal that does not fit in
/// 64 bits is not a parse failure: it becomes an in-band
/// `Error: Invalid number` value, which evaluation then propagates like any
/// other error.
///
/// # Example
/// ```
/// use clips::interpreter::{parser::read::read_number, value::core::Value};
///
/// assert_eq!(read_number("42"), Value::Number(42));
/// assert_eq!(read_number("-3.9"), Value::Number(-3));
/// assert!(read_number("123456789012345678901234567890").is_error());
/// ```
#[must_use]
pub fn read_number(text: &str) -> Value {
    match parse_integer_literal(text) {
        Ok(literal) => {
            if literal.truncated {
                log::warn!("fractional part of {text} discarded, read as {}", literal.value);
            }
            Value::Number(literal.value)
        },
        Err(e) => {
            log::debug!("literal {text} is out of range");
            Value::Error(e)
        },
    }
}

/// Lifts an operator token into a symbol, keeping the spelling it was
/// written with.
#[must_use]
pub fn read_symbol(spelling: &str, op: Operator) -> Value {
    Value::Symbol(Symbol { name:     spelling.to_string(),
                           operator: Some(op), })
}
