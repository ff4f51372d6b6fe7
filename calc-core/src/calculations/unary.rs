//! Functions applied to the displayed value.

use crate::{EngineError, UnaryFunction};

/// Applies `function` to `value`.
///
/// Trigonometric functions read `value` in degrees. `√x` needs a
/// non-negative argument and both logarithms need a positive one; anything
/// else is a [`EngineError::Domain`] error.
pub fn apply_unary(
    function: UnaryFunction,
    value: f64,
) -> Result<f64, EngineError> {
    let result = match function {
        UnaryFunction::Square => value * value,
        UnaryFunction::SquareRoot if value < 0.0 => return Err(EngineError::Domain(function)),
        UnaryFunction::SquareRoot => value.sqrt(),
        UnaryFunction::Sin => value.to_radians().sin(),
        UnaryFunction::Cos => value.to_radians().cos(),
        UnaryFunction::Tan => value.to_radians().tan(),
        UnaryFunction::Ln | UnaryFunction::Log if value <= 0.0 => {
            return Err(EngineError::Domain(function));
        }
        UnaryFunction::Ln => value.ln(),
        UnaryFunction::Log => value.log10(),
    };
    Ok(result)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn close(
        actual: f64,
        expected: f64,
    ) -> bool {
        (actual - expected).abs() < 1e-12
    }

    #[test]
    fn square_and_root() {
        assert_eq!(apply_unary(UnaryFunction::Square, -3.0), Ok(9.0));
        assert_eq!(apply_unary(UnaryFunction::SquareRoot, 16.0), Ok(4.0));
        assert_eq!(apply_unary(UnaryFunction::SquareRoot, 0.0), Ok(0.0));
    }

    #[test]
    fn root_of_negative_is_domain_error() {
        assert_eq!(
            apply_unary(UnaryFunction::SquareRoot, -9.0),
            Err(EngineError::Domain(UnaryFunction::SquareRoot))
        );
    }

    #[test]
    fn trigonometry_uses_degrees() {
        assert!(close(apply_unary(UnaryFunction::Sin, 90.0).unwrap(), 1.0));
        assert!(close(apply_unary(UnaryFunction::Cos, 180.0).unwrap(), -1.0));
        assert!(close(apply_unary(UnaryFunction::Tan, 45.0).unwrap(), 1.0));
        assert_eq!(apply_unary(UnaryFunction::Sin, 0.0), Ok(0.0));
    }

    #[test]
    fn logarithms() {
        assert!(close(apply_unary(UnaryFunction::Log, 1000.0).unwrap(), 3.0));
        assert_eq!(apply_unary(UnaryFunction::Ln, 1.0), Ok(0.0));
        assert!(close(
            apply_unary(UnaryFunction::Ln, std::f64::consts::E).unwrap(),
            1.0
        ));
    }

    #[test]
    fn logarithms_reject_non_positive_input() {
        for function in [UnaryFunction::Ln, UnaryFunction::Log] {
            assert_eq!(apply_unary(function, 0.0), Err(EngineError::Domain(function)));
            assert_eq!(apply_unary(function, -1.0), Err(EngineError::Domain(function)));
        }
    }
}
