/// Parsing errors.
///
/// Defines the errors that can occur while lexing and parsing a line: unknown
/// tokens and unbalanced parentheses. A parse error stops the line before
/// evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors that can be produced during evaluation, such as
/// division by zero or operating on a non-number. They are carried in-band
/// by `Value::Error` rather than returned through `Result`.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
