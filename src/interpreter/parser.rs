/// Binary operator parsing.
///
/// Implements the XOR and AND precedence levels and the left fold shared by
/// every binary level.
pub mod binary;

/// Core parsing logic.
///
/// Contains the result type and the entry point for expressions, which sits
/// at the loosest-binding level, bitwise OR.
pub mod core;

/// Statement parsing.
///
/// Parses `variable = expression` and enforces one statement per line.
pub mod statement;

/// Unary and primary expression parsing.
///
/// Handles `~`, variables, constants and parenthesized expressions.
pub mod unary;
