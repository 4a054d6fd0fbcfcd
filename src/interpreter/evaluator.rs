/// Core evaluation logic.
///
/// Reduces S-expressions innermost-first, propagates the first error found
/// among the children and unwraps single-element lists.
pub mod core;

/// Built-in operator application.
///
/// Implements the left-to-right reduction of `+ - * / %`, unary negation
/// and the zero-divisor and overflow checks.
pub mod builtin;
