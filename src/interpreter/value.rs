/// The expression tree and value type.
///
/// Defines `Value`, the single owned tree type that the parser produces and
/// the evaluator reduces, along with its constructors and its textual
/// rendering.
pub mod core;
