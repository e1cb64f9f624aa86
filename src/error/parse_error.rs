#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a statement.
///
/// `found` holds the offending token as written, or `None` when the line
/// ended before the expected token.
pub enum ParseError {
    /// A statement did not start with a variable.
    ExpectedVariable {
        /// The token encountered instead.
        found: Option<String>,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The assigned variable was not followed by `=`.
    ExpectedEquals {
        /// The token encountered instead.
        found: Option<String>,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The token encountered instead.
        found: Option<String>,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An operand (variable, constant, `~` or `(`) was expected.
    ExpectedOperand {
        /// The token encountered instead.
        found: Option<String>,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Parentheses were nested deeper than the parser accepts.
    NestingTooDeep {
        /// The deepest nesting accepted.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Found extra tokens after the statement should have completed.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl ParseError {
    /// Returns the source line the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::ExpectedVariable { line, .. }
            | Self::ExpectedEquals { line, .. }
            | Self::ExpectedClosingParen { line, .. }
            | Self::ExpectedOperand { line, .. }
            | Self::NestingTooDeep { line, .. }
            | Self::UnexpectedTrailingTokens { line, .. } => *line,
        }
    }
}

fn describe(found: Option<&str>) -> String {
    found.map_or_else(|| "end of line".to_string(), |token| format!("'{token}'"))
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedVariable { found, line } => write!(f,
                                                             "Error on line {line}: Expected variable, found {}.",
                                                             describe(found.as_deref())),
            Self::ExpectedEquals { found, line } => write!(f,
                                                           "Error on line {line}: Expected '=', found {}.",
                                                           describe(found.as_deref())),
            Self::ExpectedClosingParen { found, line } => write!(f,
                                                                 "Error on line {line}: Expected closing parenthesis ')', found {}.",
                                                                 describe(found.as_deref())),
            Self::ExpectedOperand { found, line } => write!(f,
                                                            "Error on line {line}: Expected variable, constant, '~' or '(', found {}.",
                                                            describe(found.as_deref())),
            Self::NestingTooDeep { limit, line } => write!(f,
                                                           "Error on line {line}: Parentheses are nested deeper than {limit} levels."),
            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "Error on line {line}: Extra tokens after expression, starting at '{token}'."),
        }
    }
}

impl std::error::Error for ParseError {}
