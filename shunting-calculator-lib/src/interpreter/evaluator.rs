use crate::interpreter::error::{EvaluationError, Result};
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use log::trace;

/// Evaluates infix tokens with an operand stack and an operator stack,
/// applying pending operators as soon as precedence allows.
///
/// # Arguments
///
/// * `tokens`: The tokens to evaluate, in infix order. The first error is returned as-is.
///
/// returns: The value of the expression.
pub fn evaluate_tokens(tokens: impl IntoIterator<Item = Result<Token>>) -> Result<f64> {
    let mut operands: Vec<f64> = Vec::new();
    let mut operators: Vec<BinaryOperator> = Vec::new();

    for token in tokens {
        match token? {
            Token::Literal(value) => operands.push(value),
            Token::Operator(operator) => {
                parse_operator_token(&mut operators, &mut operands, operator)?
            }
        }
    }

    apply_leftover_operators(&mut operators, &mut operands)?;

    let result = operands
        .pop()
        .ok_or(EvaluationError::MalformedExpression("no result"))?;
    if !operands.is_empty() {
        return Err(EvaluationError::MalformedExpression(
            "operands left without an operator",
        ));
    }
    Ok(result)
}

fn parse_operator_token(
    operators: &mut Vec<BinaryOperator>,
    operands: &mut Vec<f64>,
    operator: BinaryOperator,
) -> Result<()> {
    while let Some(top_of_operator_stack) = operators.last() {
        if !top_of_operator_stack.binds_before(&operator) {
            break;
        }
        let other_operator = *top_of_operator_stack;
        operators.pop();
        apply_operator(operands, other_operator)?;
    }

    operators.push(operator);
    Ok(())
}

fn apply_leftover_operators(
    operators: &mut Vec<BinaryOperator>,
    operands: &mut Vec<f64>,
) -> Result<()> {
    while let Some(operator) = operators.pop() {
        apply_operator(operands, operator)?;
    }
    Ok(())
}

fn apply_operator(operands: &mut Vec<f64>, operator: BinaryOperator) -> Result<()> {
    let right_operand = operands
        .pop()
        .ok_or(EvaluationError::MalformedExpression("expected a second operand"))?;
    let left_operand = operands
        .pop()
        .ok_or(EvaluationError::MalformedExpression("expected a first operand"))?;

    let result = operator.evaluate(left_operand, right_operand)?;
    trace!("{} {} {} = {}", left_operand, operator, right_operand, result);
    operands.push(result);
    Ok(())
}
