use thiserror::Error;

/// The ways in which evaluating an expression can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// A run of digits and decimal points that is not a valid number, e.g. `1..2`.
    #[error("malformed number: '{0}'")]
    MalformedNumber(String),
    #[error("divide by zero")]
    DivideByZero,
    /// The operands ran out while applying an operator or extracting the result.
    #[error("malformed expression: {0}")]
    MalformedExpression(&'static str),
    #[error("invalid operator: '{0}'")]
    InvalidOperator(char),
    /// The result of an operation does not fit in an `f64`.
    #[error("numeric overflow")]
    Overflow,
}

pub type Result<T, E = EvaluationError> = std::result::Result<T, E>;
