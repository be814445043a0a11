pub mod interpreter;
pub mod keypad;

pub use interpreter::error::EvaluationError;
pub use interpreter::evaluate;
