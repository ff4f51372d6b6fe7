//! Text renderings of the four screens.

mod about;
mod calculator;
mod start;
mod status_bar;

pub use about::AboutScreen;
pub use calculator::{ADVANCED_KEYPAD, CalculatorScreen, SIMPLE_KEYPAD};
pub use start::StartScreen;
pub use status_bar::{KeyHint, hints, render_status_bar};

use calc_core::Variant;
use serde::{Deserialize, Serialize};

/// Which screen is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Start,
    Simple,
    Advanced,
    About,
}

impl Screen {
    /// The engine variant behind a calculator screen.
    pub fn variant(&self) -> Option<Variant> {
        match self {
            Screen::Simple => Some(Variant::Basic),
            Screen::Advanced => Some(Variant::Scientific),
            Screen::Start | Screen::About => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Start => "Calculator",
            Screen::Simple => "Simple",
            Screen::Advanced => "Advanced",
            Screen::About => "About",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn calculator_screens_map_to_variants() {
        assert_eq!(Screen::Simple.variant(), Some(Variant::Basic));
        assert_eq!(Screen::Advanced.variant(), Some(Variant::Scientific));
        assert_eq!(Screen::Start.variant(), None);
        assert_eq!(Screen::About.variant(), None);
    }
}
