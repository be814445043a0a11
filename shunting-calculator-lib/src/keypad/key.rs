use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::{is_numeral, is_operator_symbol};

/// A single button press on the calculator keypad.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    /// A digit or the decimal point.
    Numeral(char),
    Operator(BinaryOperator),
    Clear,
    Evaluate,
}

impl Key {
    /// Maps a typed character to its key, if it has one.
    ///
    /// # Examples
    ///
    /// ```
    /// use shunting_calculator::keypad::Key;
    ///
    /// assert_eq!(Key::from_char('='), Some(Key::Evaluate));
    /// assert_eq!(Key::from_char('x'), None);
    /// ```
    pub fn from_char(character: char) -> Option<Key> {
        match character {
            c if is_numeral(c) => Some(Key::Numeral(c)),
            c if is_operator_symbol(c) => BinaryOperator::try_from(c).ok().map(Key::Operator),
            'c' | 'C' => Some(Key::Clear),
            '=' => Some(Key::Evaluate),
            _ => None,
        }
    }
}
