/// The built-in arithmetic operators.
///
/// Every operator spelling the grammar accepts is mapped to one of these
/// variants as soon as it is read, so the evaluator dispatches by pattern
/// matching instead of comparing names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+` or `add`.
    Add,
    /// `-` or `sub`. With exactly one operand this is negation.
    Sub,
    /// `*` or `mul`.
    Mul,
    /// `/` or `div`. Integer division truncating toward zero.
    Div,
    /// `%`. Integer remainder with the same truncation as `Div`.
    Rem,
}

impl Operator {
    /// Resolves an operator spelling.
    ///
    /// # Returns
    /// `Some(Operator)` for one of the nine accepted spellings, `None`
    /// otherwise.
    ///
    /// # Example
    /// ```
    /// use clips::ast::Operator;
    ///
    /// assert_eq!(Operator::from_name("sub"), Some(Operator::Sub));
    /// assert_eq!(Operator::from_name("%"), Some(Operator::Rem));
    /// assert_eq!(Operator::from_name("pow"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "+" | "add" => Some(Self::Add),
            "-" | "sub" => Some(Self::Sub),
            "*" | "mul" => Some(Self::Mul),
            "/" | "div" => Some(Self::Div),
            "%" => Some(Self::Rem),
            _ => None,
        }
    }

    /// The short symbolic spelling of the operator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An operator token as it appears in a tree.
///
/// A symbol keeps the spelling it was written with, so `sub` renders as
/// `sub` and not `-`, together with the operator that spelling resolves to.
/// Symbols built from arbitrary names (for example by embedding code) have
/// no operator; applying one is an `UnknownOperator` error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// The spelling of the symbol.
    pub name:     String,
    /// The operator the spelling resolves to, if any.
    pub operator: Option<Operator>,
}

impl Symbol {
    /// Creates a symbol and resolves its operator.
    ///
    /// # Example
    /// ```
    /// use clips::ast::{Operator, Symbol};
    ///
    /// assert_eq!(Symbol::new("mul").operator, Some(Operator::Mul));
    /// assert_eq!(Symbol::new("foo").operator, None);
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let operator = Operator::from_name(&name);

        Self { name, operator }
    }
}

impl From<Operator> for Symbol {
    fn from(op: Operator) -> Self {
        Self { name:     op.as_str().to_string(),
               operator: Some(op), }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
