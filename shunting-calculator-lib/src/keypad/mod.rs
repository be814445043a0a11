mod key;

pub use key::Key;

use crate::interpreter::error::EvaluationError;
use crate::interpreter::evaluate;
use crate::interpreter::token::is_operator_symbol;
use log::debug;

/// Accumulates keypad input into an expression and evaluates it on demand.
///
/// Operators are only accepted directly after a number, so the accumulated
/// expression never starts with an operator or holds two in a row.
///
/// # Examples
///
/// ```
/// use shunting_calculator::keypad::{Calculator, Key};
///
/// let mut calculator = Calculator::new();
/// for character in "2+3*4=".chars() {
///     calculator.press(Key::from_char(character).unwrap());
/// }
/// assert_eq!(calculator.display(), "14");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calculator {
    expression: String,
    error: Option<EvaluationError>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The expression typed so far, or the result of the last evaluation.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The error of the last evaluation, until the next accepted key.
    pub fn error(&self) -> Option<&EvaluationError> {
        self.error.as_ref()
    }

    /// Handles a key press.
    ///
    /// A result can be extended with further operators, but since there is no unary
    /// minus, only non-negative results evaluate again; `-3+1` displays `Error`.
    ///
    /// returns: Whether the key was accepted. Only operators can be rejected.
    pub fn press(&mut self, key: Key) -> bool {
        match key {
            Key::Numeral(character) => {
                self.error = None;
                self.expression.push(character);
            }
            Key::Operator(operator) => {
                if !self.accepts_operator() {
                    debug!("rejected '{}' after '{}'", operator, self.expression);
                    return false;
                }
                self.expression.push(operator.symbol());
            }
            Key::Clear => {
                self.error = None;
                self.expression.clear();
            }
            Key::Evaluate => self.evaluate_expression(),
        }
        true
    }

    fn accepts_operator(&self) -> bool {
        self.expression
            .chars()
            .last()
            .map_or(false, |last| !is_operator_symbol(last))
    }

    fn evaluate_expression(&mut self) {
        match evaluate(&self.expression) {
            Ok(value) => {
                debug!("{} = {}", self.expression, value);
                self.error = None;
                self.expression = value.to_string();
            }
            Err(error) => {
                debug!("could not evaluate '{}': {}", self.expression, error);
                self.error = Some(error);
                self.expression.clear();
            }
        }
    }

    /// The text to show on the calculator's screen.
    pub fn display(&self) -> String {
        match &self.error {
            Some(EvaluationError::DivideByZero) => "Error: Divide by Zero".to_string(),
            Some(_) => "Error".to_string(),
            None if self.expression.is_empty() => "0".to_string(),
            None => self.expression.clone(),
        }
    }
}
