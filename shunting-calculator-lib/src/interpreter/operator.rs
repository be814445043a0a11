use crate::interpreter::error::{EvaluationError, Result};
use std::fmt;
use std::fmt::Formatter;

/// A binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
        }
    }

    pub(crate) fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 1,
            BinaryOperator::Multiply | BinaryOperator::Divide => 2,
        }
    }

    pub(crate) fn precedence_eq(&self, other: &Self) -> bool {
        self.precedence().eq(&other.precedence())
    }

    pub(crate) fn precedence_gt(&self, other: &Self) -> bool {
        self.precedence().gt(&other.precedence())
    }

    /// Whether `self`, sitting on top of the operator stack, has to be applied
    /// before `incoming` can be pushed. All four operators are left-associative,
    /// so ties are applied first.
    pub(crate) fn binds_before(&self, incoming: &Self) -> bool {
        self.precedence_gt(incoming) || self.precedence_eq(incoming)
    }

    /// Applies the operator to a left-hand side `a` and a right-hand side `b`.
    /// Results outside the finite `f64` range are reported as [`EvaluationError::Overflow`].
    ///
    /// # Examples
    ///
    /// ```
    /// use shunting_calculator::interpreter::operator::BinaryOperator;
    /// use shunting_calculator::EvaluationError;
    ///
    /// assert_eq!(BinaryOperator::Subtract.evaluate(8.0, 3.0), Ok(5.0));
    /// assert_eq!(
    ///     BinaryOperator::Divide.evaluate(5.0, 0.0),
    ///     Err(EvaluationError::DivideByZero)
    /// );
    /// ```
    pub fn evaluate(&self, a: f64, b: f64) -> Result<f64> {
        let result = match self {
            BinaryOperator::Add => a + b,
            BinaryOperator::Subtract => a - b,
            BinaryOperator::Multiply => a * b,
            BinaryOperator::Divide if b == 0.0 => return Err(EvaluationError::DivideByZero),
            BinaryOperator::Divide => a / b,
        };
        if !result.is_finite() {
            return Err(EvaluationError::Overflow);
        }
        Ok(result)
    }
}

impl TryFrom<char> for BinaryOperator {
    type Error = EvaluationError;

    fn try_from(symbol: char) -> Result<Self> {
        match symbol {
            '+' => Ok(BinaryOperator::Add),
            '-' => Ok(BinaryOperator::Subtract),
            '*' => Ok(BinaryOperator::Multiply),
            '/' => Ok(BinaryOperator::Divide),
            other => Err(EvaluationError::InvalidOperator(other)),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
