use crate::{error::RuntimeError, interpreter::environment::Environment};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl Environment {
    /// Resolves a variable reference.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownVariable` if `name` was never assigned.
    pub fn eval_variable(&self, name: &str, line: usize) -> EvalResult<i64> {
        self.get(name)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }

    /// Converts the text of a constant to its value.
    ///
    /// # Errors
    /// Returns `RuntimeError::InvalidLiteral` if the text does not fit in an
    /// `i64`.
    ///
    /// # Example
    /// ```
    /// use binops::interpreter::environment::Environment;
    ///
    /// assert_eq!(Environment::eval_literal("0042", 1).unwrap(), 42);
    /// assert!(Environment::eval_literal("9223372036854775808", 1).is_err());
    /// ```
    pub fn eval_literal(text: &str, line: usize) -> EvalResult<i64> {
        text.parse::<i64>()
            .map_err(|_| RuntimeError::InvalidLiteral { literal: text.to_string(),
                                                        line })
    }
}
