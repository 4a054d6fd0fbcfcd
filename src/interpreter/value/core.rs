use crate::{
    ast::{Operator, Symbol},
    error::RuntimeError,
};

/// A node of the expression tree, and the result of evaluating one.
///
/// The parser builds trees out of these values and the evaluator reduces
/// them, so the same type serves as both syntax and result. An `SExpr` owns
/// its children outright; there is no sharing between nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A signed 64-bit integer.
    Number(i64),
    /// An evaluation failure. Once produced it propagates to the root
    /// unchanged.
    Error(RuntimeError),
    /// An operator token that has not been applied yet.
    Symbol(Symbol),
    /// A parenthesized list of children. The first child names the operator
    /// once the children have been evaluated.
    SExpr(Vec<Self>),
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<RuntimeError> for Value {
    fn from(e: RuntimeError) -> Self {
        Self::Error(e)
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Self::Symbol(s)
    }
}

impl From<Operator> for Value {
    fn from(op: Operator) -> Self {
        Self::Symbol(Symbol::from(op))
    }
}

impl From<Vec<Self>> for Value {
    fn from(children: Vec<Self>) -> Self {
        Self::SExpr(children)
    }
}

impl<T: Into<Self>, E: Into<RuntimeError>> From<Result<T, E>> for Value {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(v) => v.into(),
            Err(e) => Self::Error(e.into()),
        }
    }
}

impl Value {
    /// Creates a symbol value from a spelling.
    ///
    /// # Example
    /// ```
    /// use clips::{ast::Operator, interpreter::value::core::Value};
    ///
    /// let v = Value::symbol("add");
    /// assert!(matches!(v, Value::Symbol(ref s) if s.operator == Some(Operator::Add)));
    /// assert_eq!(v.to_string(), "add");
    /// ```
    #[must_use]
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(Symbol::new(name))
    }

    /// Creates an empty S-expression, `()`.
    #[must_use]
    pub const fn sexpr() -> Self {
        Self::SExpr(Vec::new())
    }

    /// Returns `true` for `Value::Error`.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Extracts the integer of a `Value::Number`.
    ///
    /// # Errors
    /// Returns `RuntimeError::NonNumber` for any other variant.
    pub const fn as_number(&self) -> Result<i64, RuntimeError> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(RuntimeError::NonNumber),
        }
    }

    /// A short name of the variant, for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Error(_) => "error",
            Self::Symbol(_) => "symbol",
            Self::SExpr(_) => "s-expression",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Error(e) => write!(f, "Error: {e}"),
            Self::Symbol(s) => write!(f, "{s}"),
            Self::SExpr(children) => {
                write!(f, "(")?;

                for (index, child) in children.iter().enumerate() {
                    if index > 0 {
                        write!(f, " ")?;
                    }

                    write!(f, "{child}")?;
                }

                write!(f, ")")
            },
        }
    }
}
