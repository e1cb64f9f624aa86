/// A unary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `~`: bitwise complement.
    Not,
}

/// A binary operator, listed from tightest to loosest binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `&`: bitwise AND.
    And,
    /// `^`: bitwise XOR.
    Xor,
    /// `|`: bitwise OR.
    Or,
}
