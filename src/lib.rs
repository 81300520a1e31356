pub mod calculator;
pub mod error;
pub mod eval;
pub mod format;
pub mod functions;

pub use calculator::{Calculator, Constant};
pub use error::SyntaxError;
pub use functions::UnaryFunction;

/// Evaluates an expression string: the power-mode pre-pass first, then the
/// general recursive-descent evaluator.
pub fn evaluate_expression(expression: &str) -> Result<f64, SyntaxError> {
    if let Some(result) = eval::try_power(expression) {
        return result;
    }
    eval::evaluate(expression)
}
