use crate::interpreter::error::{EvaluationError, Result};
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::{is_numeral, is_operator_symbol, Token};
use std::iter::Peekable;
use std::str::CharIndices;

/// Splits an expression into tokens, one at a time.
///
/// Runs of digits and decimal points become a single literal, each of `+ - * /`
/// becomes an operator, and every other character is skipped.
pub struct Lexer<'a> {
    expression: &'a str,
    characters: Peekable<CharIndices<'a>>,
}

/// Creates a lazy token stream over the given expression.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: An iterator yielding each token, or an error for a literal that is not a number.
///
/// # Examples
///
/// ```
/// use shunting_calculator::interpreter::lexer::tokenize;
/// use shunting_calculator::interpreter::token::Token;
///
/// let tokens: Vec<Token> = tokenize("2 + 3").collect::<Result<_, _>>().unwrap();
/// assert_eq!(tokens.len(), 3);
/// ```
pub fn tokenize(expression: &str) -> Lexer<'_> {
    Lexer::new(expression)
}

impl<'a> Lexer<'a> {
    pub fn new(expression: &'a str) -> Self {
        Lexer {
            expression,
            characters: expression.char_indices().peekable(),
        }
    }

    fn read_literal(&mut self, start: usize) -> Result<Token> {
        let mut end = start + 1;
        while let Some((index, _)) = self
            .characters
            .next_if(|&(_, character)| is_numeral(character))
        {
            end = index + 1;
        }

        let text = &self.expression[start..end];
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Token::Literal(value)),
            _ => Err(EvaluationError::MalformedNumber(text.to_string())),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((index, character)) = self.characters.next() {
            if is_numeral(character) {
                return Some(self.read_literal(index));
            }
            if is_operator_symbol(character) {
                return Some(BinaryOperator::try_from(character).map(Token::Operator));
            }
        }
        None
    }
}
