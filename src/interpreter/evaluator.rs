/// Binary operator evaluation logic.
///
/// Implements bitwise AND, XOR and OR on evaluated operands.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements bitwise NOT.
pub mod unary;

/// Core evaluation logic.
///
/// Resolves variables against an [`Environment`] and converts constants.
///
/// [`Environment`]: crate::interpreter::environment::Environment
pub mod core;
