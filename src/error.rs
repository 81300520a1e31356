use thiserror::Error;

/// Grammar violations raised while evaluating an expression.
///
/// Domain problems (division by zero, log of a negative number, ...) are not
/// errors: they follow IEEE `f64` semantics and come back as `NaN` or an
/// infinity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    /// A full expression was parsed but input remained after it.
    #[error("unexpected trailing input starting at '{0}'")]
    TrailingInput(char),

    /// The number scanner accepted a digit/dot run that is not a valid number,
    /// e.g. `1.2.3`.
    #[error("invalid number literal '{0}'")]
    InvalidNumber(String),

    /// A `^` operand that is not a plain decimal number. Power-mode does not
    /// evaluate sub-expressions.
    #[error("invalid power operand '{0}': expected a plain number")]
    InvalidPowerOperand(String),
}
