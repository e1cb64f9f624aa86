use crate::{ast::BinaryOperator, interpreter::environment::Environment};

impl Environment {
    /// Applies a binary operator to two evaluated operands.
    ///
    /// # Example
    /// ```
    /// use binops::{ast::BinaryOperator, interpreter::environment::Environment};
    ///
    /// assert_eq!(Environment::eval_binary(BinaryOperator::And, 6, 3), 2);
    /// assert_eq!(Environment::eval_binary(BinaryOperator::Xor, 6, 3), 5);
    /// assert_eq!(Environment::eval_binary(BinaryOperator::Or, 6, 3), 7);
    /// ```
    #[must_use]
    pub const fn eval_binary(op: BinaryOperator, left: i64, right: i64) -> i64 {
        match op {
            BinaryOperator::And => left & right,
            BinaryOperator::Xor => left ^ right,
            BinaryOperator::Or => left | right,
        }
    }
}
