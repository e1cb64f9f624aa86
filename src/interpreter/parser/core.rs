use std::iter::Peekable;

use crate::{
    ast::BinaryOperator,
    error::{Error, ParseError},
    interpreter::{
        environment::Environment,
        lexer::Token,
        parser::binary::{parse_left_fold, parse_term},
    },
};

/// Parsing evaluates as it goes, so it fails with any [`Error`], not only
/// with a [`ParseError`].
pub type ParseResult<T> = Result<T, Error>;

/// Deepest parenthesis nesting accepted on one line.
pub const MAX_NESTING_DEPTH: usize = 256;

/// What every grammar function needs besides the tokens: the variables to
/// read, the line for error reporting and the current parenthesis depth.
#[derive(Debug, Clone, Copy)]
pub struct LineContext<'e> {
    /// Variables visible to the statement.
    pub environment: &'e Environment,
    /// The line being parsed.
    pub line:        usize,
    depth:           usize,
}

impl<'e> LineContext<'e> {
    /// Creates the context for the top level of a line.
    #[must_use]
    pub const fn new(environment: &'e Environment, line: usize) -> Self {
        Self { environment,
               line,
               depth: 0 }
    }

    /// Returns the context for the inside of one more pair of parentheses.
    ///
    /// # Errors
    /// Returns `ParseError::NestingTooDeep` past [`MAX_NESTING_DEPTH`].
    pub(in crate::interpreter::parser) fn nested(self) -> ParseResult<Self> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                    line:  self.line, }.into());
        }
        Ok(Self { depth: self.depth + 1,
                  ..self })
    }
}

/// Parses and evaluates a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, bitwise OR, and recursively
/// descends through the precedence hierarchy. Every operand is evaluated as
/// soon as it is parsed, so the first error in reading order is the one
/// reported.
///
/// Grammar: `expression := term ("|" term)*`
///
/// # Parameters
/// - `tokens`: Token iterator for the current line.
/// - `ctx`: Environment, line and nesting depth.
///
/// # Returns
/// The value of the expression.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, ctx: LineContext<'_>) -> ParseResult<i64>
    where I: Iterator<Item = &'a Token>
{
    parse_left_fold(tokens, ctx, BinaryOperator::Or, parse_term)
}
