//! # clips
//!
//! clips is a tiny calculator language written in Rust. A line of input is a
//! sequence of prefix-notation S-expressions such as `(+ 1 (* 2 3))`. Each
//! line is parsed into an owned tree, reduced to a single value, and printed.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Operator and symbol definitions.
///
/// This module declares the closed set of built-in operators and the
/// `Symbol` type that pairs an operator with the spelling it was written
/// with. Operator spellings are resolved once, when they are read, so the
/// evaluator never compares names.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// Parse errors and runtime errors are disjoint. A parse error is returned
/// through `Result` and stops the line. A runtime error is carried in-band
/// as a value and printed like any other result.
///
/// # Responsibilities
/// - Defines error enums for both failure channels.
/// - Attaches columns to parse errors for user feedback.
/// - Renders the exact messages printed to the user.
pub mod error;
/// Orchestrates reading and evaluating a line.
///
/// This module ties together lexing, parsing, the value tree and evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Provides entry points for parsing and evaluating user input.
pub mod interpreter;
/// Logging setup for the command-line driver.
///
/// The library only emits records through the `log` facade. This module
/// installs a `fern` dispatcher for the binary.
pub mod logger;
/// The interactive driver.
///
/// Reads lines from any buffered reader, records them in an append-only
/// history, and prints the outcome of each line. No outcome ends the loop;
/// only end of input does.
pub mod repl;
/// General numeric utilities.
///
/// # Responsibilities
/// - Read numeric literals with integer semantics.
/// - Provide checked integer helpers that fail with runtime errors.
pub mod util;

pub use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{evaluator::core::eval, parser::core::parse, value::core::Value},
};

/// Parses and evaluates one line of input.
///
/// Evaluation failures are not errors at this level: they come back as
/// `Ok(Value::Error(..))`, ready to be printed.
///
/// # Errors
/// Returns a `ParseError` if the line is malformed. Nothing is evaluated in
/// that case.
///
/// # Examples
/// ```
/// use clips::get_result;
///
/// let value = get_result("(+ 1 (* 2 3))").unwrap();
/// assert_eq!(value.to_string(), "7");
///
/// let value = get_result("(/ 10 0)").unwrap();
/// assert_eq!(value.to_string(), "Error: Division by zero!");
///
/// assert!(get_result("(+ 1 2").is_err());
/// ```
pub fn get_result(line: &str) -> Result<Value, ParseError> {
    let tree = parse(line)?;
    log::debug!("parsed {line:?} into {tree}");

    Ok(eval(tree))
}
