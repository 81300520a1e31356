use crate::error::SyntaxError;
use crate::eval;
use crate::format::format_value;
use crate::functions::UnaryFunction;
use log::debug;

/// Display text when a unary function or power-mode application fails.
pub const ERROR_DISPLAY: &str = "Error";

/// Display text when the general evaluator rejects a top-level `=` input.
pub const INVALID_EXPRESSION_DISPLAY: &str = "Invalid Expression";

/// Constants insertable into the input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    Pi,
    E,
}

impl Constant {
    pub fn value(self) -> f64 {
        match self {
            Constant::Pi => std::f64::consts::PI,
            Constant::E => std::f64::consts::E,
        }
    }
}

/// The input-accumulation engine a button panel drives.
///
/// Owns the mutable expression text built from discrete key presses and runs
/// it through the evaluator on demand. Successful results are formatted and
/// become the new input, so they chain into further operations. Any evaluation
/// failure maps to one of the two fixed display strings and empties the input;
/// one malformed expression invalidates the whole buffer, not just its tail.
#[derive(Debug, Default)]
pub struct Calculator {
    input: String,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current accumulated input, which doubles as the display text.
    pub fn display(&self) -> &str {
        &self.input
    }

    /// Appends a literal token: digits, `.`, or one of `+ - * / ^ %`.
    /// Nothing is validated here; mistakes surface at evaluation time.
    pub fn append(&mut self, token: &str) {
        self.input.push_str(token);
    }

    /// Appends the constant's full-precision decimal text.
    pub fn push_constant(&mut self, constant: Constant) {
        self.input.push_str(&constant.value().to_string());
    }

    /// The `AC` key.
    pub fn clear(&mut self) {
        self.input.clear();
    }

    /// The `DEL` key: drops the last character, if any.
    pub fn delete_last(&mut self) {
        self.input.pop();
    }

    /// The `=` key.
    ///
    /// A `^` anywhere in the input selects power-mode for the whole text and
    /// its failures display as `"Error"`; otherwise the general evaluator runs
    /// and its failures display as `"Invalid Expression"`.
    pub fn equals(&mut self) -> String {
        match eval::try_power(&self.input) {
            Some(Ok(value)) => self.replace_with(value),
            Some(Err(err)) => self.fail(err, ERROR_DISPLAY),
            None => match eval::evaluate(&self.input) {
                Ok(value) => self.replace_with(value),
                Err(err) => self.fail(err, INVALID_EXPRESSION_DISPLAY),
            },
        }
    }

    /// Evaluates the accumulated input, applies `function` to the value, and
    /// replaces the input with the formatted result.
    pub fn apply(&mut self, function: UnaryFunction) -> String {
        match eval::evaluate(&self.input) {
            Ok(value) => self.replace_with(function.apply(value)),
            Err(err) => self.fail(err, ERROR_DISPLAY),
        }
    }

    fn replace_with(&mut self, value: f64) -> String {
        self.input = format_value(value);
        self.input.clone()
    }

    fn fail(&mut self, err: SyntaxError, display: &str) -> String {
        debug!("evaluation of {:?} failed: {err}", self.input);
        self.input.clear();
        display.to_string()
    }
}
