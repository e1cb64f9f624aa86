//! # binops
//!
//! binops is an interpreter for a tiny language of bitwise assignments.
//! Every line assigns an expression built from `&`, `^`, `|`, `~`,
//! parentheses, variables and decimal constants to a variable:
//!
//! ```text
//! mask = 12
//! flags = ~mask & 255 | 1
//! ```
//!
//! `&` binds tightest and `|` loosest. Variables keep their values for the
//! whole session and the value assigned by the last line is the result.

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

/// Operator definitions shared by the parser and the evaluator.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Each phase has its own error enum carrying the line number and the
/// offending input. The umbrella [`error::Error`] wraps all of them and
/// reports an [`error::ErrorKind`] so callers can tell failures apart
/// without inspecting messages.
pub mod error;
/// Lexer, parser, evaluator and environment.
///
/// This module ties together the phases that turn a line of text into an
/// assigned value.
pub mod interpreter;
/// Drives statements through the interpreter.
///
/// A [`Session`] runs lines in order against one environment and tracks the
/// result of the last statement.
pub mod session;

pub use session::{Session, get_result, run_lines};
