use std::fmt;

use serde::{Deserialize, Serialize};

/// A function applied in place to the displayed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryFunction {
    Square,
    SquareRoot,
    /// Degrees.
    Sin,
    /// Degrees.
    Cos,
    /// Degrees.
    Tan,
    /// Natural logarithm.
    Ln,
    /// Base-10 logarithm.
    Log,
}

impl UnaryFunction {
    pub const ALL: [UnaryFunction; 7] = [
        Self::Square,
        Self::SquareRoot,
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Ln,
        Self::Log,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Square => "x²",
            Self::SquareRoot => "√x",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Ln => "ln",
            Self::Log => "log",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "x²" | "sqr" | "x^2" => Some(Self::Square),
            "√x" | "√" | "sqrt" => Some(Self::SquareRoot),
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "ln" => Some(Self::Ln),
            "log" => Some(Self::Log),
            _ => None,
        }
    }

    /// Name used in domain error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::SquareRoot => "sqrt",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Ln => "ln",
            Self::Log => "log",
        }
    }
}

impl fmt::Display for UnaryFunction {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}
