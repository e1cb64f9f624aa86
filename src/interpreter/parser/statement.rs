use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        environment::Environment,
        lexer::Token,
        parser::core::{LineContext, ParseResult, parse_expression},
    },
};

/// Parses and runs the tokens of one line as exactly one assignment.
///
/// The value is stored in `environment` only once the whole line has been
/// accepted. Returns the name of the assigned variable.
///
/// # Errors
/// Returns any error from [`parse_assignment`], or
/// `ParseError::UnexpectedTrailingTokens` when tokens remain after the
/// assigned expression.
///
/// # Example
/// ```
/// use binops::{
///     error::{Error, ParseError},
///     interpreter::{environment::Environment, lexer::tokenize, parser::statement::parse_line},
/// };
///
/// let mut env = Environment::new();
/// let tokens = tokenize("a = 1 | 2", 1).unwrap();
/// assert_eq!(parse_line(&tokens, &mut env, 1).unwrap(), "a");
/// assert_eq!(env.get("a"), Some(3));
///
/// let tokens = tokenize("b = a 2", 4).unwrap();
/// let err = parse_line(&tokens, &mut env, 4).unwrap_err();
/// assert!(matches!(err, Error::Parse(ParseError::UnexpectedTrailingTokens { line: 4, .. })));
/// assert_eq!(env.get("b"), None);
/// ```
pub fn parse_line(tokens: &[Token], environment: &mut Environment, line: usize) -> ParseResult<String> {
    let mut iter = tokens.iter().peekable();
    let (name, value) = parse_assignment(&mut iter, LineContext::new(environment, line))?;

    if let Some(token) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token: token.to_string(),
                                                          line }.into());
    }

    environment.assign(&name, value);
    Ok(name)
}

/// Parses an assignment of the form `<variable> = <expression>` and
/// returns the variable name with the value of the expression.
///
/// # Errors
/// - `ParseError::ExpectedVariable` if the first token is not a variable.
/// - `ParseError::ExpectedEquals` if the variable is not followed by `=`.
/// - Any error from parsing or evaluating the assigned expression.
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>,
                               ctx: LineContext<'_>)
                               -> ParseResult<(String, i64)>
    where I: Iterator<Item = &'a Token>
{
    let name = match tokens.next() {
        Some(Token::Variable(name)) => name.clone(),
        other => {
            return Err(ParseError::ExpectedVariable { found: other.map(ToString::to_string),
                                                      line:  ctx.line, }.into());
        },
    };

    match tokens.next() {
        Some(Token::Equals) => {},
        other => {
            return Err(ParseError::ExpectedEquals { found: other.map(ToString::to_string),
                                                    line:  ctx.line, }.into());
        },
    }

    let value = parse_expression(tokens, ctx)?;

    Ok((name, value))
}
