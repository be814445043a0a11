pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod token;

use crate::interpreter::error::Result;
use crate::interpreter::evaluator::evaluate_tokens;
use crate::interpreter::token::Token;
use anyhow::Context;
use string_builder::Builder;

/// Calculates the value of the given arithmetic expression.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format, made of numbers and `+ - * /`.
///   Any other characters are ignored.
///
/// returns: The value of the expression, or why it could not be calculated.
///
/// # Examples
///
/// ```
/// use shunting_calculator::interpreter::evaluate;
/// use shunting_calculator::EvaluationError;
///
/// assert_eq!(evaluate("2+3*4"), Ok(14.0));
/// assert_eq!(evaluate("5/0"), Err(EvaluationError::DivideByZero));
/// ```
pub fn evaluate(expression: &str) -> Result<f64> {
    evaluate_tokens(lexer::tokenize(expression))
}

/// Pretty-prints the given expression with whitespace around its operators.
///
/// # Arguments
///
/// * `expression`: The expression to print. Ignored characters are dropped.
///
/// returns: A pretty-printed text-version of the expression's tokens.
///
/// # Examples
///
/// ```
/// use shunting_calculator::interpreter::format_expression;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let pretty_printed = format_expression("2+3*4")?;
/// assert_eq!(pretty_printed, "2 + 3 * 4");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn format_expression(expression: &str) -> anyhow::Result<String> {
    let tokens = lexer::tokenize(expression)
        .collect::<Result<Vec<Token>>>()
        .with_context(|| format!("could not read expression '{}'", expression))?;
    tokens_to_string(tokens)
}

/// Joins tokens back into text, with a space on each side of every operator.
pub fn tokens_to_string(tokens: Vec<Token>) -> anyhow::Result<String> {
    let mut builder = Builder::new(tokens.len());

    for token in tokens {
        match token {
            Token::Literal(value) => builder.append(value.to_string()),
            Token::Operator(operator) => {
                builder.append(" ");
                builder.append(operator.to_string());
                builder.append(" ");
            }
        }
    }

    builder.string().context("Failed to build token string")
}

#[cfg(test)]
mod interpreter_tests {
    use super::*;
    use crate::interpreter::error::EvaluationError;
    use parameterized_macro::parameterized;

    #[parameterized(
    expression = {
    "2+3*4",
    "8-3-2",
    "2.5*2+1",
    "2 + 3",
    "14",
    "8/4/2",
    "2*3-4/8",
    "0.1+0.2*10",
    "5.",
    "100-99*1",
    },
    expected_value = {
    14.0,
    3.0,
    6.0,
    5.0,
    14.0,
    1.0,
    5.5,
    2.1,
    5.0,
    1.0,
    }
    )]
    fn evaluate_expression_returns_correct_value(expression: &str, expected_value: f64) {
        let actual_value = evaluate(expression).unwrap();
        assert!(
            (actual_value - expected_value).abs() < 1e-12,
            "{} evaluated to {}, expected {}",
            expression,
            actual_value,
            expected_value
        );
    }

    #[test]
    fn division_by_zero_is_reported() {
        assert_eq!(evaluate("5/0"), Err(EvaluationError::DivideByZero));
        assert_eq!(evaluate("1+5/0.0*2"), Err(EvaluationError::DivideByZero));
    }

    #[test]
    fn division_by_zero_valued_subexpression_is_allowed() {
        // The right-hand side of `/` is the literal 2, not `2 - 2`.
        assert_eq!(evaluate("4/2-2"), Ok(0.0));
    }

    #[test]
    fn malformed_literal_is_reported() {
        assert_eq!(
            evaluate("1..2+3"),
            Err(EvaluationError::MalformedNumber("1..2".to_string()))
        );
    }

    #[test]
    fn result_too_large_for_a_float_is_an_overflow() {
        let factor = "9".repeat(200);
        let expression = format!("{}*{}", factor, factor);

        assert_eq!(evaluate(&expression), Err(EvaluationError::Overflow));
    }

    #[test]
    fn literal_too_large_for_a_float_is_malformed() {
        let literal = format!("1{}", "0".repeat(400));

        assert_eq!(
            evaluate(&format!("{}+1", literal)),
            Err(EvaluationError::MalformedNumber(literal))
        );
    }

    #[parameterized(expression = { "", "   ", "+", "abc", "1+", "*2", "1 2" })]
    fn structurally_invalid_expression_is_malformed(expression: &str) {
        assert!(matches!(
            evaluate(expression),
            Err(EvaluationError::MalformedExpression(_))
        ));
    }

    #[test]
    fn stringified_result_evaluates_to_itself() {
        let first = evaluate("2.5*2+1.25").unwrap();
        let second = evaluate(&first.to_string()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn expression_is_pretty_printed() {
        let pretty_printed = format_expression("1.50*2 -x3").unwrap();
        assert_eq!(pretty_printed, "1.5 * 2 - 3");
    }

    #[test]
    fn malformed_expression_cannot_be_pretty_printed() {
        assert!(format_expression("1..2").is_err());
    }
}
