pub mod calculations;
pub mod engine;
pub mod models;

pub use engine::{CalculatorEngine, EngineError, Phase};
pub use models::*;
