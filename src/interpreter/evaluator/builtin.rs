use crate::{
    ast::{Operator, Symbol},
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::checked_negate,
};

/// Applies a built-in operator to its operands.
///
/// The operands are reduced left to right: the first one is the running
/// accumulator and each following operand is combined into it. `-` with a
/// single operand negates it. Any other operator with a single operand
/// returns that operand.
///
/// The checks run in this order, and the first failure is the result:
/// - every operand must be a number (`Cannot operate on non-number!`),
/// - the symbol must name a built-in operator (`Unknown operator`),
/// - a zero divisor aborts `/` and `%` (`Division by zero!`) without looking
///   at the remaining operands,
/// - any overflow of 64-bit arithmetic yields `Integer overflow!`.
///
/// # Example
/// ```
/// use clips::{
///     ast::Symbol,
///     error::RuntimeError,
///     interpreter::{evaluator::builtin::apply_op, value::core::Value},
/// };
///
/// let nums = [Value::Number(7), Value::Number(2)];
/// assert_eq!(apply_op(&Symbol::new("div"), &nums), Value::Number(3));
/// assert_eq!(apply_op(&Symbol::new("%"), &nums), Value::Number(1));
///
/// assert_eq!(apply_op(&Symbol::new("sub"), &[Value::Number(5)]), Value::Number(-5));
///
/// let zero = [Value::Number(7), Value::Number(0), Value::Number(1)];
/// assert_eq!(apply_op(&Symbol::new("/"), &zero), Value::Error(RuntimeError::DivisionByZero));
/// ```
#[must_use]
pub fn apply_op(symbol: &Symbol, operands: &[Value]) -> Value {
    log::trace!("applying {symbol} to {} operand(s)", operands.len());

    Value::from(reduce(symbol, operands))
}

fn reduce(symbol: &Symbol, operands: &[Value]) -> EvalResult<i64> {
    let numbers = operands.iter()
                          .map(Value::as_number)
                          .collect::<EvalResult<Vec<_>>>()?;

    let op = symbol.operator
                   .ok_or_else(|| RuntimeError::UnknownOperator { name: symbol.name.clone() })?;

    let Some((&first, rest)) = numbers.split_first() else {
        return Err(RuntimeError::MissingOperand { name: symbol.name.clone() });
    };

    if op == Operator::Sub && rest.is_empty() {
        return checked_negate(first);
    }

    rest.iter()
        .try_fold(first, |acc, &operand| apply_binary(op, acc, operand))
}

/// Combines two integers with a binary operator.
///
/// Division and remainder truncate toward zero.
///
/// # Errors
/// - `DivisionByZero` if `op` is `Div` or `Rem` and `right` is zero.
/// - `Overflow` if the result does not fit in an `i64`.
pub fn apply_binary(op: Operator, left: i64, right: i64) -> EvalResult<i64> {
    let result = match op {
        Operator::Add => left.checked_add(right),
        Operator::Sub => left.checked_sub(right),
        Operator::Mul => left.checked_mul(right),
        Operator::Div | Operator::Rem if right == 0 => return Err(RuntimeError::DivisionByZero),
        Operator::Div => left.checked_div(right),
        // `i64::MIN % -1` is 0, which `checked_rem` reports as overflow.
        Operator::Rem => Some(left.wrapping_rem(right)),
    };

    result.ok_or(RuntimeError::Overflow)
}
