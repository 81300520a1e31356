use std::str::FromStr;

/// The calculator's one-argument functions.
///
/// These operate on the already evaluated value of the accumulated input, never
/// inside the expression grammar. Dispatch is a single match from tag to pure
/// numeric function; domain problems come back as `NaN`/infinity per IEEE
/// semantics, never as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryFunction {
    Sin,
    Cos,
    Tan,
    /// Natural logarithm.
    Ln,
    /// Base-10 logarithm.
    Log10,
    Sqrt,
    Square,
    Cube,
    /// `1/x`; `inf` at zero.
    Reciprocal,
    Factorial,
    /// Sign negation, the `±` key.
    Negate,
}

impl UnaryFunction {
    pub fn apply(self, x: f64) -> f64 {
        match self {
            UnaryFunction::Sin => x.sin(),
            UnaryFunction::Cos => x.cos(),
            UnaryFunction::Tan => x.tan(),
            UnaryFunction::Ln => x.ln(),
            UnaryFunction::Log10 => x.log10(),
            UnaryFunction::Sqrt => x.sqrt(),
            UnaryFunction::Square => x * x,
            UnaryFunction::Cube => x * x * x,
            UnaryFunction::Reciprocal => 1.0 / x,
            UnaryFunction::Factorial => factorial(x),
            UnaryFunction::Negate => -x,
        }
    }
}

impl FromStr for UnaryFunction {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "sin" => Ok(UnaryFunction::Sin),
            "cos" => Ok(UnaryFunction::Cos),
            "tan" => Ok(UnaryFunction::Tan),
            "ln" => Ok(UnaryFunction::Ln),
            "log" => Ok(UnaryFunction::Log10),
            "sqrt" => Ok(UnaryFunction::Sqrt),
            "sqr" => Ok(UnaryFunction::Square),
            "cube" => Ok(UnaryFunction::Cube),
            "inv" => Ok(UnaryFunction::Reciprocal),
            "fact" => Ok(UnaryFunction::Factorial),
            "neg" => Ok(UnaryFunction::Negate),
            _ => Err(format!("unknown function '{name}'")),
        }
    }
}

/// Iterative factorial over `f64`.
///
/// Negative input is `NaN`. A fractional input is silently truncated: the loop
/// runs up to `floor(n)`, so `3.7!` equals `3!`.
fn factorial(n: f64) -> f64 {
    if n < 0.0 {
        return f64::NAN;
    }
    if n == 0.0 || n == 1.0 {
        return 1.0;
    }
    let limit = n as i64;
    let mut result = 1.0;
    for i in 2..=limit {
        result *= i as f64;
    }
    result
}
