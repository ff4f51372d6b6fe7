//! The calculator's only mutable entity.
//!
//! A [`CalculatorState`] lives for as long as a calculator screen is open.
//! The engine replaces it wholesale after each accepted key press; a host
//! may also serialize it on suspend and hand it back on resume.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Operator;

/// Reasons a restored snapshot is refused.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SnapshotError {
    #[error("display is empty")]
    EmptyDisplay,

    #[error("display '{0}' has more than one decimal point")]
    MultipleDecimalPoints(String),

    /// Neither a decimal number in progress nor a named non-finite result.
    #[error("display '{0}' is not a number")]
    InvalidDisplay(String),

    /// Stored value and operator must be present together.
    #[error("stored value and operator are not paired")]
    UnpairedOperand,

    #[error("stored value {0} is not finite")]
    NonFiniteOperand(f64),
}

/// Names `format_result` gives non-finite results.
const NON_FINITE_NAMES: [&str; 2] = ["NaN", "Infinity"];

/// Equality compares `stored_value` bit for bit, so a state holding a NaN
/// operand still equals itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Text currently shown.
    pub display: String,

    /// Left operand of the pending operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stored_value: Option<f64>,

    /// The pending operator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<Operator>,

    /// The next digit replaces the display instead of extending it.
    pub is_new_input: bool,
}

impl PartialEq for CalculatorState {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.display == other.display
            && self.stored_value.map(f64::to_bits) == other.stored_value.map(f64::to_bits)
            && self.operator == other.operator
            && self.is_new_input == other.is_new_input
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            stored_value: None,
            operator: None,
            is_new_input: true,
        }
    }

    /// The pending `(left operand, operator)` pair, if both are set.
    pub fn pending(&self) -> Option<(f64, Operator)> {
        self.stored_value.zip(self.operator)
    }

    pub fn has_decimal_point(&self) -> bool {
        self.display.contains('.')
    }

    /// Checks the invariants a snapshot must hold before it is restored.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.display.is_empty() {
            return Err(SnapshotError::EmptyDisplay);
        }
        if self.display.matches('.').count() > 1 {
            return Err(SnapshotError::MultipleDecimalPoints(self.display.clone()));
        }
        if !is_display_text(&self.display) {
            return Err(SnapshotError::InvalidDisplay(self.display.clone()));
        }
        if self.stored_value.is_some() != self.operator.is_some() {
            return Err(SnapshotError::UnpairedOperand);
        }
        match self.stored_value {
            Some(value) if !value.is_finite() => Err(SnapshotError::NonFiniteOperand(value)),
            _ => Ok(()),
        }
    }
}

/// Digits with at most one decimal point, or a non-finite name, after an
/// optional leading minus.
fn is_display_text(display: &str) -> bool {
    let unsigned = display.strip_prefix('-').unwrap_or(display);
    if NON_FINITE_NAMES.contains(&unsigned) {
        return true;
    }
    unsigned.bytes().any(|b| b.is_ascii_digit())
        && unsigned.bytes().all(|b| b.is_ascii_digit() || b == b'.')
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn new_state_is_initial_lifecycle_value() {
        let state = CalculatorState::new();

        assert_eq!(state.display, "0");
        assert_eq!(state.stored_value, None);
        assert_eq!(state.operator, None);
        assert!(state.is_new_input);
        assert_eq!(state, CalculatorState::default());
    }

    #[test]
    fn pending_requires_both_halves() {
        let mut state = CalculatorState::new();
        state.stored_value = Some(3.0);
        assert_eq!(state.pending(), None);

        state.operator = Some(Operator::Add);
        assert_eq!(state.pending(), Some((3.0, Operator::Add)));
    }

    #[test]
    fn validate_accepts_initial_state() {
        assert_eq!(CalculatorState::new().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_empty_display() {
        let state = CalculatorState {
            display: String::new(),
            ..CalculatorState::new()
        };

        assert_eq!(state.validate(), Err(SnapshotError::EmptyDisplay));
    }

    #[test]
    fn validate_rejects_two_decimal_points() {
        let state = CalculatorState {
            display: "1.2.3".to_string(),
            ..CalculatorState::new()
        };

        assert_eq!(
            state.validate(),
            Err(SnapshotError::MultipleDecimalPoints("1.2.3".to_string()))
        );
    }

    #[test]
    fn validate_rejects_non_numeric_display() {
        for display in ["12a", ".", "-", "1-2", "nan", "+5"] {
            let state = CalculatorState {
                display: display.to_string(),
                ..CalculatorState::new()
            };

            assert_eq!(
                state.validate(),
                Err(SnapshotError::InvalidDisplay(display.to_string())),
                "display {display}"
            );
        }
    }

    #[test]
    fn validate_accepts_partial_and_non_finite_displays() {
        for display in ["0.", "-0.5", "123", "NaN", "-NaN", "Infinity", "-Infinity"] {
            let state = CalculatorState {
                display: display.to_string(),
                ..CalculatorState::new()
            };

            assert_eq!(state.validate(), Ok(()), "display {display}");
        }
    }

    #[test]
    fn validate_rejects_non_finite_operand() {
        let state = CalculatorState {
            stored_value: Some(f64::INFINITY),
            operator: Some(Operator::Add),
            ..CalculatorState::new()
        };

        assert_eq!(
            state.validate(),
            Err(SnapshotError::NonFiniteOperand(f64::INFINITY))
        );
    }

    #[test]
    fn nan_operand_state_equals_itself() {
        let state = CalculatorState {
            display: "NaN".to_string(),
            stored_value: Some(f64::NAN),
            operator: Some(Operator::Add),
            is_new_input: true,
        };

        assert_eq!(state, state.clone());
    }

    #[test]
    fn validate_rejects_operator_without_operand() {
        let state = CalculatorState {
            operator: Some(Operator::Power),
            ..CalculatorState::new()
        };

        assert_eq!(state.validate(), Err(SnapshotError::UnpairedOperand));
    }

    #[test]
    fn snapshot_survives_toml() {
        let state = CalculatorState {
            display: "4".to_string(),
            stored_value: Some(3.0),
            operator: Some(Operator::Divide),
            is_new_input: false,
        };

        let text = toml::to_string(&state).unwrap();
        let restored: CalculatorState = toml::from_str(&text).unwrap();

        assert_eq!(restored, state);
    }
}
