//! Safe arithmetic evaluation for calculator queries.
//!
//! Supports `+ - * / %`, parentheses, decimals, and unary sign. The error
//! display strings are part of the reply contract and surface verbatim in
//! `The result is: <...>` messages.

use std::iter::Peekable;
use std::str::Chars;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    #[error("Invalid characters in expression")]
    InvalidCharacters,
    #[error("Division by zero is not allowed")]
    DivisionByZero,
    #[error("Invalid expression")]
    Invalid,
}

/// Evaluates a math expression.
pub fn evaluate(expr: &str) -> Result<f64, CalcError> {
    let expr: String = expr.chars().filter(|c| !c.is_whitespace()).collect();

    if !expr
        .chars()
        .all(|c| c.is_ascii_digit() || "+-*/%.()".contains(c))
    {
        return Err(CalcError::InvalidCharacters);
    }
    if expr.is_empty() {
        return Err(CalcError::Invalid);
    }

    let mut parser = Parser {
        chars: expr.chars().peekable(),
    };
    let value = parser.expression()?;
    if parser.chars.peek().is_some() {
        return Err(CalcError::Invalid);
    }
    Ok(value)
}

/// Formats a result the way the reply renders it: integer-valued results
/// print without a fractional part.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

struct Parser<'a> {
    chars: Peekable<Chars<'a>>,
}

impl Parser<'_> {
    // expression := term (('+' | '-') term)*
    fn expression(&mut self) -> Result<f64, CalcError> {
        let mut value = self.term()?;
        while let Some(&op) = self.chars.peek() {
            match op {
                '+' => {
                    self.chars.next();
                    value += self.term()?;
                }
                '-' => {
                    self.chars.next();
                    value -= self.term()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    // term := factor (('*' | '/' | '%') factor)*
    fn term(&mut self) -> Result<f64, CalcError> {
        let mut value = self.factor()?;
        while let Some(&op) = self.chars.peek() {
            match op {
                '*' => {
                    self.chars.next();
                    value *= self.factor()?;
                }
                '/' => {
                    self.chars.next();
                    let divisor = self.factor()?;
                    if divisor == 0.0 {
                        return Err(CalcError::DivisionByZero);
                    }
                    value /= divisor;
                }
                '%' => {
                    self.chars.next();
                    let divisor = self.factor()?;
                    if divisor == 0.0 {
                        return Err(CalcError::DivisionByZero);
                    }
                    value = value.rem_euclid(divisor);
                }
                _ => break,
            }
        }
        Ok(value)
    }

    // factor := ('+' | '-') factor | '(' expression ')' | number
    fn factor(&mut self) -> Result<f64, CalcError> {
        match self.chars.peek() {
            Some('+') => {
                self.chars.next();
                self.factor()
            }
            Some('-') => {
                self.chars.next();
                Ok(-self.factor()?)
            }
            Some('(') => {
                self.chars.next();
                let value = self.expression()?;
                if self.chars.next() != Some(')') {
                    return Err(CalcError::Invalid);
                }
                Ok(value)
            }
            _ => self.number(),
        }
    }

    fn number(&mut self) -> Result<f64, CalcError> {
        let mut literal = String::new();
        while let Some(&c) = self.chars.peek() {
            if c.is_ascii_digit() || c == '.' {
                literal.push(c);
                self.chars.next();
            } else {
                break;
            }
        }
        literal.parse().map_err(|_| CalcError::Invalid)
    }
}
