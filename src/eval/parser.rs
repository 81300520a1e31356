use crate::error::SyntaxError;
use log::debug;

/// Evaluates an infix arithmetic expression directly to an `f64`.
///
/// The grammar has three precedence tiers, each left-to-right associative:
///
/// ```text
/// expression := term (("+" | "-") term)*
/// term       := factor (("*" | "/") factor)*
/// factor     := "+" factor | "-" factor | "(" expression ")" | number
/// ```
///
/// No token list or tree is built; the three tiers recurse into each other and
/// fold values as they go. Division by zero is not an error, it produces the
/// IEEE infinity or `NaN` the operands call for.
pub fn evaluate(expression: &str) -> Result<f64, SyntaxError> {
    debug!("evaluating expression: {expression:?}");
    let mut cursor = Cursor::new(expression);
    let value = cursor.parse_expression()?;

    // The operator loops above already skipped trailing whitespace looking for
    // the next operator, so anything still unconsumed is a real stray.
    match cursor.current {
        Some(ch) => Err(SyntaxError::TrailingInput(ch)),
        None => Ok(value),
    }
}

/// Parse state for a single `evaluate` call: a byte position into the text and
/// the one-character lookahead at that position. Owned exclusively by the call,
/// threaded by `&mut self` through the three tier functions.
struct Cursor<'a> {
    text: &'a str,
    pos: usize,
    current: Option<char>,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Cursor {
            text,
            pos: 0,
            current: text.chars().next(),
        }
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current {
            self.pos += ch.len_utf8();
            self.current = self.text[self.pos..].chars().next();
        }
    }

    /// Skips whitespace, then consumes `wanted` if it is the next character.
    /// Whitespace is only ever skipped here, so it can never split a number.
    fn eat(&mut self, wanted: char) -> bool {
        while matches!(self.current, Some(ch) if ch.is_whitespace()) {
            self.advance();
        }
        if self.current == Some(wanted) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn parse_expression(&mut self) -> Result<f64, SyntaxError> {
        let mut value = self.parse_term()?;
        loop {
            if self.eat('+') {
                value += self.parse_term()?;
            } else if self.eat('-') {
                value -= self.parse_term()?;
            } else {
                return Ok(value);
            }
        }
    }

    fn parse_term(&mut self) -> Result<f64, SyntaxError> {
        let mut value = self.parse_factor()?;
        loop {
            if self.eat('*') {
                value *= self.parse_factor()?;
            } else if self.eat('/') {
                value /= self.parse_factor()?;
            } else {
                return Ok(value);
            }
        }
    }

    fn parse_factor(&mut self) -> Result<f64, SyntaxError> {
        if self.eat('+') {
            return self.parse_factor();
        }
        if self.eat('-') {
            return Ok(-self.parse_factor()?);
        }

        if self.eat('(') {
            let value = self.parse_expression()?;
            // A missing close paren is tolerated: the group simply ends at
            // whatever stopped the inner expression.
            self.eat(')');
            return Ok(value);
        }

        match self.current {
            Some(ch) if ch.is_ascii_digit() || ch == '.' => {
                let start = self.pos;
                while matches!(self.current, Some(c) if c.is_ascii_digit() || c == '.') {
                    self.advance();
                }
                let literal = &self.text[start..self.pos];
                literal
                    .parse::<f64>()
                    .map_err(|_| SyntaxError::InvalidNumber(literal.to_string()))
            }
            Some(ch) => Err(SyntaxError::UnexpectedChar(ch)),
            None => Err(SyntaxError::UnexpectedEnd),
        }
    }
}
