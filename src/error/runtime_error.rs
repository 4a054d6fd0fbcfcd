#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Runtime errors travel in-band as `Value::Error`. Their `Display` output is
/// the bare message; the `Error: ` prefix is added when the value is printed.
pub enum RuntimeError {
    /// Attempted division or remainder by zero.
    DivisionByZero,
    /// An operand of an operator was not a number.
    NonNumber,
    /// An S-expression with two or more elements did not start with a symbol.
    NotASymbol,
    /// A symbol in operator position does not name a built-in operator.
    UnknownOperator {
        /// The symbol's spelling.
        name: String,
    },
    /// An operator was applied to no operands at all.
    MissingOperand {
        /// The operator's spelling.
        name: String,
    },
    /// A numeric literal does not fit in a 64-bit signed integer.
    InvalidNumber,
    /// Arithmetic overflowed a 64-bit signed integer.
    Overflow,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero!"),
            Self::NonNumber => write!(f, "Cannot operate on non-number!"),
            Self::NotASymbol => write!(f, "S-expression does not start with symbol!"),
            Self::UnknownOperator { name } => write!(f, "Unknown operator '{name}'!"),
            Self::MissingOperand { name } => write!(f, "Operator '{name}' needs an operand!"),
            Self::InvalidNumber => write!(f, "Invalid number"),
            Self::Overflow => write!(f, "Integer overflow!"),
        }
    }
}

impl std::error::Error for RuntimeError {}
