/// Lexical errors.
///
/// Raised by the lexer when a line contains a character that is not part of
/// the language.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while matching a token sequence
/// against the statement grammar: missing variables, missing `=`, missing
/// closing parentheses and leftover tokens.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: references
/// to unassigned variables and constants that do not fit the integer width.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The category of a failure, independent of its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A character outside the language was found.
    Lex,
    /// An expected token was absent or a line had leftover tokens.
    Syntax,
    /// A variable was referenced before its first assignment.
    UndefinedVariable,
    /// A constant did not parse as a signed 64-bit integer.
    NumericParse,
}

#[derive(Debug)]
/// Any error that aborts a session.
pub enum Error {
    /// The line could not be tokenized.
    Lex(LexError),
    /// The tokens did not form a statement.
    Parse(ParseError),
    /// The statement could not be evaluated.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lex(_) => ErrorKind::Lex,
            Self::Parse(_) => ErrorKind::Syntax,
            Self::Runtime(RuntimeError::UnknownVariable { .. }) => ErrorKind::UndefinedVariable,
            Self::Runtime(RuntimeError::InvalidLiteral { .. }) => ErrorKind::NumericParse,
        }
    }

    /// Returns the source line the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Lex(e) => e.line,
            Self::Parse(e) => e.line(),
            Self::Runtime(e) => e.line(),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
