use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Button, Operator, UnaryFunction};

/// How a zero right operand of `÷` is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivisionByZero {
    /// Evaluate to the divisor itself (zero). Kept for the basic keypad.
    ReturnDivisor,
    /// Reject with [`crate::EngineError::DivisionByZero`].
    Error,
}

/// Which engine configuration a calculator screen runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Basic,
    Scientific,
}

/// What a variant supports and how strictly it evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub operators: &'static [Operator],
    pub functions: &'static [UnaryFunction],
    pub sign_toggle: bool,
    pub division_by_zero: DivisionByZero,
    /// Fold a pending operation when another operator follows a typed operand.
    pub chain_pending: bool,
    /// Equals with nothing pending re-formats the displayed value.
    pub reformat_on_idle_equals: bool,
}

const BASIC_OPERATORS: [Operator; 4] = [
    Operator::Add,
    Operator::Subtract,
    Operator::Multiply,
    Operator::Divide,
];

static BASIC: Capabilities = Capabilities {
    operators: &BASIC_OPERATORS,
    functions: &[],
    sign_toggle: false,
    division_by_zero: DivisionByZero::ReturnDivisor,
    chain_pending: false,
    reformat_on_idle_equals: true,
};

static SCIENTIFIC: Capabilities = Capabilities {
    operators: &Operator::ALL,
    functions: &UnaryFunction::ALL,
    sign_toggle: true,
    division_by_zero: DivisionByZero::Error,
    chain_pending: true,
    reformat_on_idle_equals: false,
};

impl Variant {
    pub fn capabilities(&self) -> &'static Capabilities {
        match self {
            Self::Basic => &BASIC,
            Self::Scientific => &SCIENTIFIC,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Scientific => "scientific",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Capabilities {
    /// Returns `true` when `button` can be pressed on this keypad.
    pub fn supports(
        &self,
        button: Button,
    ) -> bool {
        match button {
            Button::Operator(op) => self.operators.contains(&op),
            Button::Function(function) => self.functions.contains(&function),
            Button::SignToggle => self.sign_toggle,
            Button::Digit(_) | Button::DecimalPoint | Button::Equals | Button::Clear => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn basic_supports_four_operators_only() {
        let caps = Variant::Basic.capabilities();

        assert!(caps.supports(Button::Operator(Operator::Divide)));
        assert!(!caps.supports(Button::Operator(Operator::Power)));
        assert!(!caps.supports(Button::Operator(Operator::Remainder)));
        assert!(!caps.supports(Button::Function(UnaryFunction::Sin)));
        assert!(!caps.supports(Button::SignToggle));
    }

    #[test]
    fn scientific_supports_everything() {
        let caps = Variant::Scientific.capabilities();

        for op in Operator::ALL {
            assert!(caps.supports(Button::Operator(op)));
        }
        for function in UnaryFunction::ALL {
            assert!(caps.supports(Button::Function(function)));
        }
        assert!(caps.supports(Button::SignToggle));
    }

    #[test]
    fn division_policies_differ() {
        assert_eq!(
            Variant::Basic.capabilities().division_by_zero,
            DivisionByZero::ReturnDivisor
        );
        assert_eq!(
            Variant::Scientific.capabilities().division_by_zero,
            DivisionByZero::Error
        );
    }
}
