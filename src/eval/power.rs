use crate::error::SyntaxError;
use log::debug;

/// Power-mode pre-pass.
///
/// Returns `None` when the text contains no `^`, in which case the caller
/// falls through to the general evaluator. When a `^` is present anywhere the
/// whole input is treated as `base^exponent`: the text is split at the first
/// `^` and both sides must be plain decimal numbers. There is no recursion
/// into the evaluator, so `2^3^2` fails rather than chaining exponents.
pub fn try_power(expression: &str) -> Option<Result<f64, SyntaxError>> {
    let (left, right) = expression.split_once('^')?;
    debug!("power-mode: {left:?} ^ {right:?}");
    Some(apply_power(left, right))
}

fn apply_power(left: &str, right: &str) -> Result<f64, SyntaxError> {
    let base = parse_operand(left)?;
    let exponent = parse_operand(right)?;
    Ok(base.powf(exponent))
}

fn parse_operand(text: &str) -> Result<f64, SyntaxError> {
    let trimmed = text.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| SyntaxError::InvalidPowerOperand(trimmed.to_string()))
}
