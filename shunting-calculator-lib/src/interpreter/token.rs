use crate::interpreter::operator::BinaryOperator;
use std::fmt;
use std::fmt::Formatter;

/// A discrete part of an expression
#[derive(Clone, Copy, PartialEq)]
pub enum Token {
    Literal(f64),
    Operator(BinaryOperator),
}

/// Characters that make up a numeric literal.
pub fn is_numeral(character: char) -> bool {
    character.is_ascii_digit() || character == '.'
}

/// Characters that are read as an operator.
pub fn is_operator_symbol(character: char) -> bool {
    matches!(character, '+' | '-' | '*' | '/')
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(value) => write!(f, "{}", value),
            Token::Operator(operator) => write!(f, "{}", operator),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
