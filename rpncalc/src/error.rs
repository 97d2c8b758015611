use thiserror::Error;

/// Every way tokenizing, converting or evaluating an expression can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A whitespace separated fragment is neither a number nor an operator.
    #[error("invalid token {0:?}")]
    InvalidToken(String),

    /// The symbol isn't registered in the operator table.
    #[error("{0:?} is not an operator")]
    UnknownOperator(String),

    /// An operator found fewer than two operands on the stack, or the
    /// expression was empty.
    #[error("stack underflow: missing operand")]
    StackUnderflow,

    /// Operands were left over after the result (strict evaluation only).
    #[error("malformed expression: {0} unused operand(s)")]
    MalformedExpression(usize),

    /// An operand is not a non-negative integer that fits in an `i64`.
    #[error("bad number {0:?}")]
    BadNumber(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, Error>;
