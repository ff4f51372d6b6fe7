use std::{fmt, str::FromStr};

use thiserror::Error;

use super::{Operator, UnaryFunction};

/// Error returned when a token does not name a calculator button.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown button '{0}'")]
pub struct ParseButtonError(pub String);

/// A single key press accepted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Digit(u8),
    DecimalPoint,
    Operator(Operator),
    Equals,
    Clear,
    SignToggle,
    Function(UnaryFunction),
}

impl Button {
    /// Returns a digit button, or `None` for anything outside `0..=9`.
    pub fn digit(d: u8) -> Option<Self> {
        (d <= 9).then_some(Self::Digit(d))
    }

    /// The label printed on the keypad.
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::DecimalPoint => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::SignToggle => "±".to_string(),
            Self::Function(function) => function.label().to_string(),
        }
    }
}

impl FromStr for Button {
    type Err = ParseButtonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if let [b @ b'0'..=b'9'] = token.as_bytes() {
            return Ok(Self::Digit(b - b'0'));
        }
        match token {
            "." | "," => return Ok(Self::DecimalPoint),
            "=" => return Ok(Self::Equals),
            "C" | "c" => return Ok(Self::Clear),
            "±" | "+/-" | "neg" => return Ok(Self::SignToggle),
            _ => {}
        }
        if let Some(op) = Operator::parse(token) {
            return Ok(Self::Operator(op));
        }
        UnaryFunction::parse(token)
            .map(Self::Function)
            .ok_or_else(|| ParseButtonError(token.to_string()))
    }
}

impl fmt::Display for Button {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.label())
    }
}
