use crate::{ast::UnaryOperator, interpreter::environment::Environment};

impl Environment {
    /// Applies a unary operator to an evaluated operand.
    ///
    /// # Example
    /// ```
    /// use binops::{ast::UnaryOperator, interpreter::environment::Environment};
    ///
    /// assert_eq!(Environment::eval_unary(UnaryOperator::Not, 0), -1);
    /// assert_eq!(Environment::eval_unary(UnaryOperator::Not, 5), -6);
    /// ```
    #[must_use]
    pub const fn eval_unary(op: UnaryOperator, value: i64) -> i64 {
        match op {
            UnaryOperator::Not => !value,
        }
    }
}
