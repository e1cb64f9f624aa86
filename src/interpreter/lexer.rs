use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in a statement line.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Variable names such as `a` or `mask2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Variable(String),
    /// Decimal constants such as `42`, kept as written.
    ///
    /// The text is only converted to an integer during evaluation, so that
    /// overflowing literals are reported as evaluation errors.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Constant(String),
    /// `=`
    #[token("=")]
    Equals,
    /// `|`
    #[token("|")]
    Pipe,
    /// `^`
    #[token("^")]
    Caret,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `~`
    #[token("~")]
    Tilde,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces and tabs.
    #[regex(r"[ \t]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable(text) | Self::Constant(text) => f.write_str(text),
            Self::Equals => f.write_str("="),
            Self::Pipe => f.write_str("|"),
            Self::Caret => f.write_str("^"),
            Self::Ampersand => f.write_str("&"),
            Self::Tilde => f.write_str("~"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Splits one line of source text into tokens.
///
/// Tokens carry no position; `line` is only used to report errors.
///
/// # Errors
/// Returns a [`LexError`] holding the first character that is neither a
/// letter, a digit, a space, a tab nor one of `= | ^ & ~ ( )`.
///
/// # Example
/// ```
/// use binops::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x = ~12", 1).unwrap();
/// assert_eq!(tokens,
///            vec![Token::Variable("x".to_string()),
///                 Token::Equals,
///                 Token::Tilde,
///                 Token::Constant("12".to_string())]);
///
/// let err = tokenize("x = 1 $ 2", 3).unwrap_err();
/// assert_eq!(err.character, '$');
/// assert_eq!(err.line, 3);
/// ```
pub fn tokenize(source: &str, line: usize) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push(tok);
        } else {
            let character = lexer.slice().chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
            return Err(LexError { character, line });
        }
    }

    Ok(tokens)
}
