use crate::{
    error::RuntimeError,
    interpreter::{evaluator::builtin::apply_op, value::core::Value},
};

/// Result type used by the evaluator internals.
///
/// Operator application works in terms of `Result` and the outcome is lifted
/// into a `Value` at the boundary, so callers of [`eval`] never see it.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a tree down to a single value.
///
/// Numbers, symbols and errors are returned unchanged. An S-expression is
/// reduced innermost-first:
///
/// 1. Every child is evaluated, left to right.
/// 2. If any child reduced to an error, the first such error is the result
///    and every other child is dropped.
/// 3. An empty S-expression is returned as-is.
/// 4. A single child is unwrapped and returned.
/// 5. Otherwise the first child must be a symbol, which is applied to the
///    remaining children.
///
/// Evaluation never fails loudly. Failures are returned as `Value::Error`.
///
/// # Example
/// ```
/// use clips::{
///     ast::Operator,
///     error::RuntimeError,
///     interpreter::{evaluator::core::eval, value::core::Value},
/// };
///
/// let tree = Value::SExpr(vec![Operator::Sub.into(),
///                              Value::Number(10),
///                              Value::Number(2),
///                              Value::Number(3)]);
/// assert_eq!(eval(tree), Value::Number(5));
///
/// let tree = Value::SExpr(vec![Operator::Add.into(), Value::Number(1), Value::symbol("foo")]);
/// assert_eq!(eval(tree), Value::Error(RuntimeError::NonNumber));
/// ```
#[must_use]
pub fn eval(value: Value) -> Value {
    match value {
        Value::SExpr(children) => eval_sexpr(children),
        other => other,
    }
}

/// Reduces the children of an S-expression.
fn eval_sexpr(children: Vec<Value>) -> Value {
    let mut evaluated = children.into_iter().map(eval).collect::<Vec<_>>();

    if let Some(index) = evaluated.iter().position(Value::is_error) {
        return evaluated.swap_remove(index);
    }

    let mut iter = evaluated.into_iter();

    let Some(head) = iter.next() else {
        return Value::sexpr();
    };

    let operands = iter.collect::<Vec<_>>();

    if operands.is_empty() {
        return head;
    }

    match head {
        Value::Symbol(symbol) => apply_op(&symbol, &operands),
        other => {
            log::debug!("s-expression starts with a {} instead of a symbol", other.kind());
            Value::Error(RuntimeError::NotASymbol)
        },
    }
}
