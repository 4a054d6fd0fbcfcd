/// Numeric helpers.
///
/// This module reads numeric literals with integer semantics and provides
/// checked integer operations shared by the reader and the evaluator. All
/// functions report failures as `RuntimeError` so the caller can lift them
/// into an in-band error value.
pub mod num;
