//! Arithmetic behind the calculator keys.
//!
//! These are pure functions over `f64`. The engine calls them and decides
//! what to do with the results; nothing here touches calculator state.

pub mod binary;
pub mod common;
pub mod unary;

pub use binary::evaluate_binary;
pub use common::{format_result, parse_display};
pub use unary::apply_unary;
