//! The calculator evaluation engine.
//!
//! [`CalculatorEngine`] turns key presses into display text. It owns one
//! [`CalculatorState`] and one [`Variant`]; the variant's [`Capabilities`]
//! decide which keys exist and how strictly the arithmetic is checked.
//!
//! # State Machine
//!
//! | Phase | Entered by | Left by |
//! |-------|------------|---------|
//! | Idle  | `new`, `=`, `C` | an operator key |
//! | PendingOperator | an operator key | `=`, `C` |
//!
//! Digit, decimal point, sign toggle and function keys only touch the
//! display and the new-input flag.
//!
//! Every transition is computed from the current state into a fresh one and
//! committed only when it succeeds, so a rejected key leaves the engine
//! exactly as it was.
//!
//! # Example
//!
//! ```
//! use calc_core::{Button, CalculatorEngine, Operator, Variant};
//!
//! let mut engine = CalculatorEngine::new(Variant::Scientific);
//! for button in [
//!     Button::Digit(3),
//!     Button::Operator(Operator::Add),
//!     Button::Digit(4),
//!     Button::Operator(Operator::Add),
//!     Button::Digit(5),
//!     Button::Equals,
//! ] {
//!     engine.press(button).unwrap();
//! }
//!
//! assert_eq!(engine.display(), "12");
//! ```

use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::{apply_unary, evaluate_binary, format_result, parse_display};
use crate::{
    Button, CalculatorState, Capabilities, Operator, SnapshotError, UnaryFunction, Variant,
};

/// Errors reported for a rejected key press.
///
/// None of these are fatal: the state is left untouched and the next key
/// press is accepted as usual.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The display text is not a finite number.
    #[error("invalid input '{0}'")]
    Parse(String),

    /// A function was applied outside its domain.
    #[error("invalid input for {}", .0.name())]
    Domain(UnaryFunction),

    #[error("division by zero")]
    DivisionByZero,

    /// The key does not exist on this variant's keypad.
    #[error("'{button}' is not available on the {variant} keypad")]
    Unsupported { button: Button, variant: Variant },

    #[error("'{0}' is not a digit")]
    InvalidDigit(u8),
}

/// Whether a binary operation is waiting for its right operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    PendingOperator,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorEngine {
    variant: Variant,
    state: CalculatorState,
}

impl CalculatorEngine {
    /// Creates an engine in the initial lifecycle state.
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            state: CalculatorState::new(),
        }
    }

    /// Resumes from a snapshot taken with [`CalculatorEngine::snapshot`].
    pub fn restore(
        variant: Variant,
        state: CalculatorState,
    ) -> Result<Self, SnapshotError> {
        state.validate()?;
        Ok(Self { variant, state })
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn display(&self) -> &str {
        &self.state.display
    }

    pub fn phase(&self) -> Phase {
        match self.state.pending() {
            Some(_) => Phase::PendingOperator,
            None => Phase::Idle,
        }
    }

    pub fn snapshot(&self) -> CalculatorState {
        self.state.clone()
    }

    /// Applies one key press.
    pub fn press(
        &mut self,
        button: Button,
    ) -> Result<&CalculatorState, EngineError> {
        match transition(self.variant, &self.state, button) {
            Ok(next) => {
                self.state = next;
                debug!(
                    variant = %self.variant,
                    %button,
                    display = %self.state.display,
                    "key accepted"
                );
                Ok(&self.state)
            }
            Err(error) => {
                warn!(variant = %self.variant, %button, %error, "key rejected");
                Err(error)
            }
        }
    }

    pub fn digit(
        &mut self,
        d: u8,
    ) -> Result<&CalculatorState, EngineError> {
        self.press(Button::Digit(d))
    }

    pub fn decimal_point(&mut self) -> Result<&CalculatorState, EngineError> {
        self.press(Button::DecimalPoint)
    }

    pub fn sign_toggle(&mut self) -> Result<&CalculatorState, EngineError> {
        self.press(Button::SignToggle)
    }

    pub fn binary_operator(
        &mut self,
        op: Operator,
    ) -> Result<&CalculatorState, EngineError> {
        self.press(Button::Operator(op))
    }

    pub fn equals(&mut self) -> Result<&CalculatorState, EngineError> {
        self.press(Button::Equals)
    }

    pub fn unary(
        &mut self,
        function: UnaryFunction,
    ) -> Result<&CalculatorState, EngineError> {
        self.press(Button::Function(function))
    }

    /// Resets to the initial lifecycle state. Never fails.
    pub fn clear(&mut self) -> &CalculatorState {
        self.state = CalculatorState::new();
        debug!(variant = %self.variant, "cleared");
        &self.state
    }
}

/// Computes the state that follows `button`, without modifying `state`.
pub fn transition(
    variant: Variant,
    state: &CalculatorState,
    button: Button,
) -> Result<CalculatorState, EngineError> {
    let caps = variant.capabilities();
    if !caps.supports(button) {
        return Err(EngineError::Unsupported { button, variant });
    }
    match button {
        Button::Digit(d) => digit(state, d),
        Button::DecimalPoint => Ok(decimal_point(state)),
        Button::SignToggle => Ok(sign_toggle(state)),
        Button::Operator(op) => binary_operator(caps, state, op),
        Button::Equals => equals(caps, state),
        Button::Function(function) => unary(state, function),
        Button::Clear => Ok(CalculatorState::new()),
    }
}

fn digit(
    state: &CalculatorState,
    d: u8,
) -> Result<CalculatorState, EngineError> {
    if d > 9 {
        return Err(EngineError::InvalidDigit(d));
    }
    let display = if state.is_new_input || state.display == "0" {
        d.to_string()
    } else {
        format!("{}{d}", state.display)
    };
    Ok(CalculatorState {
        display,
        is_new_input: false,
        ..state.clone()
    })
}

fn decimal_point(state: &CalculatorState) -> CalculatorState {
    let mut next = state.clone();
    if state.is_new_input {
        next.display = "0.".to_string();
        next.is_new_input = false;
    } else if !state.has_decimal_point() {
        next.display.push('.');
    }
    next
}

fn sign_toggle(state: &CalculatorState) -> CalculatorState {
    let mut next = state.clone();
    if state.display != "0" {
        next.display = match state.display.strip_prefix('-') {
            Some(positive) => positive.to_string(),
            None => format!("-{}", state.display),
        };
    }
    next
}

fn binary_operator(
    caps: &Capabilities,
    state: &CalculatorState,
    op: Operator,
) -> Result<CalculatorState, EngineError> {
    let current = parse_display(&state.display)?;
    let mut next = state.clone();

    match state.pending() {
        // A right operand was typed: fold left to right before queueing `op`.
        Some((left, pending)) if caps.chain_pending && !state.is_new_input => {
            let result = evaluate_binary(left, pending, current, caps.division_by_zero)?;
            next.stored_value = Some(result);
            next.display = format_result(result);
        }
        _ => next.stored_value = Some(current),
    }
    next.operator = Some(op);
    next.is_new_input = true;
    Ok(next)
}

fn equals(
    caps: &Capabilities,
    state: &CalculatorState,
) -> Result<CalculatorState, EngineError> {
    let current = parse_display(&state.display)?;
    let result = match state.pending() {
        Some((left, op)) => evaluate_binary(left, op, current, caps.division_by_zero)?,
        None if caps.reformat_on_idle_equals => current,
        None => return Ok(state.clone()),
    };
    Ok(CalculatorState {
        display: format_result(result),
        stored_value: None,
        operator: None,
        is_new_input: true,
    })
}

fn unary(
    state: &CalculatorState,
    function: UnaryFunction,
) -> Result<CalculatorState, EngineError> {
    let value = parse_display(&state.display)?;
    let result = apply_unary(function, value)?;
    Ok(CalculatorState {
        display: format_result(result),
        is_new_input: true,
        ..state.clone()
    })
}
