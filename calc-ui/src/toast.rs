//! Transient, non-blocking notifications shown after a key press.

use std::fmt;

use calc_core::EngineError;

/// A one-shot message rendered below the screen that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    message: String,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Builds the toast for a rejected key press.
    pub fn from_error(error: &EngineError) -> Self {
        Self::new(format!("Error: {error}"))
    }

    pub fn unknown_input(token: &str) -> Self {
        Self::new(format!("Unknown input '{token}'"))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Toast {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "! {}", self.message)
    }
}
