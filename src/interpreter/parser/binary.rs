use std::iter::Peekable;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        environment::Environment,
        lexer::Token,
        parser::{
            core::{LineContext, ParseResult},
            unary::parse_unary,
        },
    },
};

/// Parses XOR expressions.
///
/// The rule is: `term := factor ("^" factor)*`
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>, ctx: LineContext<'_>) -> ParseResult<i64>
    where I: Iterator<Item = &'a Token>
{
    parse_left_fold(tokens, ctx, BinaryOperator::Xor, parse_factor)
}

/// Parses AND expressions, the tightest-binding binary level.
///
/// The rule is: `factor := unary ("&" unary)*`
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>, ctx: LineContext<'_>) -> ParseResult<i64>
    where I: Iterator<Item = &'a Token>
{
    parse_left_fold(tokens, ctx, BinaryOperator::And, parse_unary)
}

/// Parses one precedence level of left-associative binary operators.
///
/// Parses an operand with `parse_operand`, then greedily consumes
/// `op operand` pairs for as long as the next token is the operator of
/// `level`, folding each operand onto the running value in source order.
///
/// # Parameters
/// - `tokens`: Token iterator for the current line.
/// - `ctx`: Environment, line and nesting depth.
/// - `level`: The only operator accepted at this level.
/// - `parse_operand`: Parser for the next tighter-binding level.
pub(in crate::interpreter::parser) fn parse_left_fold<'a, 'e, I>(
    tokens: &mut Peekable<I>,
    ctx: LineContext<'e>,
    level: BinaryOperator,
    parse_operand: impl Fn(&mut Peekable<I>, LineContext<'e>) -> ParseResult<i64>)
    -> ParseResult<i64>
    where I: Iterator<Item = &'a Token>
{
    let mut value = parse_operand(tokens, ctx)?;
    while let Some(token) = tokens.peek()
          && token_to_binary_operator(token) == Some(level)
    {
        tokens.next();
        let right = parse_operand(tokens, ctx)?;
        value = Environment::eval_binary(level, value, right);
    }
    Ok(value)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for every token that is not `&`, `^` or `|`.
///
/// # Example
/// ```
/// use binops::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Caret), Some(BinaryOperator::Xor));
/// assert_eq!(token_to_binary_operator(&Token::Tilde), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Ampersand => Some(BinaryOperator::And),
        Token::Caret => Some(BinaryOperator::Xor),
        Token::Pipe => Some(BinaryOperator::Or),
        _ => None,
    }
}
