mod button;
mod operator;
mod state;
mod unary_function;
mod variant;

pub use button::{Button, ParseButtonError};
pub use operator::Operator;
pub use state::{CalculatorState, SnapshotError};
pub use unary_function::UnaryFunction;
pub use variant::{Capabilities, DivisionByZero, Variant};
