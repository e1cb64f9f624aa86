use crate::{
    error::Error,
    interpreter::{environment::Environment, lexer::tokenize, parser::statement::parse_line},
};

/// Runs statements one line at a time against a shared environment.
///
/// A session owns its [`Environment`]. Lines are numbered from 1 in the
/// order they are run, and the session remembers which variable the most
/// recent statement assigned.
#[derive(Debug, Default)]
pub struct Session {
    environment:   Environment,
    last_assigned: Option<String>,
    line:          usize,
}

impl Session {
    /// Creates a session with an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenizes, parses and evaluates one line.
    ///
    /// Returns the assigned value, or `None` for a blank line.
    ///
    /// # Errors
    /// Returns the first lexical, syntax or evaluation error on the line. The
    /// environment is not modified when an error is returned.
    ///
    /// # Example
    /// ```
    /// use binops::Session;
    ///
    /// let mut session = Session::new();
    /// assert_eq!(session.run_line("a = 5").unwrap(), Some(5));
    /// assert_eq!(session.run_line("   ").unwrap(), None);
    /// assert_eq!(session.run_line("b = a & 3").unwrap(), Some(1));
    /// assert_eq!(session.result(), Some(1));
    /// ```
    pub fn run_line(&mut self, source: &str) -> Result<Option<i64>, Error> {
        self.line += 1;

        let tokens = tokenize(source, self.line)?;
        if tokens.is_empty() {
            return Ok(None);
        }

        let name = parse_line(&tokens, &mut self.environment, self.line)?;
        let value = self.environment.get(&name);
        self.last_assigned = Some(name);

        Ok(value)
    }

    /// Returns the value of the variable assigned by the last statement, or
    /// `None` if no statement has run yet.
    #[must_use]
    pub fn result(&self) -> Option<i64> {
        self.last_assigned
            .as_deref()
            .and_then(|name| self.environment.get(name))
    }

    /// Returns the current value of `name`.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<i64> {
        self.environment.get(name)
    }

    /// Returns the environment shared by all statements of this session.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Number of lines run so far, blank lines included.
    #[must_use]
    pub const fn lines_run(&self) -> usize {
        self.line
    }
}

/// Runs every line in a fresh session and returns the final result.
///
/// # Errors
/// Stops at the first failing line and returns its error; no result is
/// produced in that case.
pub fn run_lines<'a, I>(lines: I) -> Result<Option<i64>, Error>
    where I: IntoIterator<Item = &'a str>
{
    let mut session = Session::new();
    for line in lines {
        session.run_line(line)?;
    }
    Ok(session.result())
}

/// Returns the final evaluation result of a program.
///
/// Every line of `source` is one statement; blank lines are skipped. The
/// result is the value assigned by the last statement, or `None` if the
/// program contains no statements.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation of any line fails.
///
/// # Examples
/// ```
/// use binops::{error::ErrorKind, get_result};
///
/// let source = "a = 5\nb = a & 3";
/// assert_eq!(get_result(source).unwrap(), Some(1));
///
/// // Example with an intentional error (unknown variable).
/// let source = "y = x | 1"; // 'x' is not defined
/// let err = get_result(source).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::UndefinedVariable);
/// ```
pub fn get_result(source: &str) -> Result<Option<i64>, Error> {
    run_lines(source.lines())
}
