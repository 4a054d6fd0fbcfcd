/// The evaluator module reduces trees to values.
///
/// The evaluator walks a parsed tree, applies operators to their operands
/// and produces a single number or error. It never fails loudly; failures
/// are values.
///
/// # Responsibilities
/// - Evaluates S-expressions innermost-first, left to right.
/// - Propagates the first error found without re-wrapping it.
/// - Applies the built-in arithmetic operators.
pub mod evaluator;
/// The lexer module tokenizes a line of input.
///
/// # Responsibilities
/// - Recognizes parentheses, numeric literals and operator spellings.
/// - Skips whitespace.
/// - Surfaces anything else as an error token for the parser to report.
pub mod lexer;
/// The parser module builds the tree from tokens.
///
/// # Responsibilities
/// - Checks that parentheses are balanced.
/// - Lifts literals and operators into leaf values.
/// - Reports malformed input without returning a partial tree.
pub mod parser;
/// The value module defines the tree type shared by parser and evaluator.
pub mod value;
