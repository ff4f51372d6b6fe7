//! Two-operand evaluation.

use crate::{DivisionByZero, EngineError, Operator};

/// Evaluates `left <op> right`.
///
/// `÷` by zero follows `policy`. `%` is the floating remainder, taking the
/// sign of the dividend. `^` follows IEEE `pow`, so invalid combinations such
/// as a negative base with a fractional exponent yield `NaN`.
///
/// # Examples
///
/// ```
/// use calc_core::calculations::evaluate_binary;
/// use calc_core::{DivisionByZero, Operator};
///
/// assert_eq!(evaluate_binary(3.0, Operator::Divide, 2.0, DivisionByZero::Error), Ok(1.5));
/// assert_eq!(evaluate_binary(8.0, Operator::Divide, 0.0, DivisionByZero::ReturnDivisor), Ok(0.0));
/// assert!(evaluate_binary(8.0, Operator::Divide, 0.0, DivisionByZero::Error).is_err());
/// ```
pub fn evaluate_binary(
    left: f64,
    op: Operator,
    right: f64,
    policy: DivisionByZero,
) -> Result<f64, EngineError> {
    let value = match op {
        Operator::Add => left + right,
        Operator::Subtract => left - right,
        Operator::Multiply => left * right,
        Operator::Divide if right == 0.0 => match policy {
            DivisionByZero::ReturnDivisor => right,
            DivisionByZero::Error => return Err(EngineError::DivisionByZero),
        },
        Operator::Divide => left / right,
        Operator::Remainder => left % right,
        Operator::Power => left.powf(right),
    };
    Ok(value)
}
