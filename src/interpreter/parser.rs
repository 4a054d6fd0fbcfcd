/// Tree construction.
///
/// Lexes a line, checks parenthesis structure and builds the owned `Value`
/// tree. This is the entry point for parsing.
pub mod core;

/// Literal lifting.
///
/// Converts number and operator tokens into leaf values. Out-of-range
/// numbers become in-band error values here rather than parse failures.
pub mod read;
