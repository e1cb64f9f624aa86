use std::iter::Peekable;

use crate::{
    ast::UnaryOperator,
    error::ParseError,
    interpreter::{
        environment::Environment,
        lexer::Token,
        parser::core::{LineContext, ParseResult, parse_expression},
    },
};

/// Parses a unary expression.
///
/// `~` is right-associative and may be repeated without limit, so `~~x`
/// means `~(~x)`. A run of `~` is consumed in one loop and collapses to a
/// single complement when its length is odd, or to the operand itself when
/// it is even.
///
/// Grammar:
/// ```text
///     unary := "~" unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, ctx: LineContext<'_>) -> ParseResult<i64>
    where I: Iterator<Item = &'a Token>
{
    let mut nots = 0_usize;
    while tokens.next_if(|tok| matches!(tok, Token::Tilde)).is_some() {
        nots += 1;
    }

    let value = parse_primary(tokens, ctx)?;
    if nots % 2 == 1 {
        Ok(Environment::eval_unary(UnaryOperator::Not, value))
    } else {
        Ok(value)
    }
}

/// Parses and evaluates a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := variable
///              | constant
///              | "(" expression ")"
/// ```
///
/// # Errors
/// - `ParseError::ExpectedOperand` if the line ends or the next token cannot
///   start an operand.
/// - `ParseError::NestingTooDeep` past the parenthesis nesting limit.
/// - `RuntimeError::UnknownVariable` and `RuntimeError::InvalidLiteral` from
///   evaluating the operand.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, ctx: LineContext<'_>) -> ParseResult<i64>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(Token::Variable(name)) => Ok(ctx.environment.eval_variable(name, ctx.line)?),
        Some(Token::Constant(text)) => Ok(Environment::eval_literal(text, ctx.line)?),
        Some(Token::LParen) => parse_grouping(tokens, ctx.nested()?),
        other => Err(ParseError::ExpectedOperand { found: other.map(ToString::to_string),
                                                   line:  ctx.line, }.into()),
    }
}

/// Parses the rest of a parenthesized expression after its `(`.
///
/// # Errors
/// Returns `ParseError::ExpectedClosingParen` if the expression is not
/// followed by `)`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, ctx: LineContext<'_>) -> ParseResult<i64>
    where I: Iterator<Item = &'a Token>
{
    let value = parse_expression(tokens, ctx)?;
    match tokens.next() {
        Some(Token::RParen) => Ok(value),
        other => Err(ParseError::ExpectedClosingParen { found: other.map(ToString::to_string),
                                                        line:  ctx.line, }.into()),
    }
}
