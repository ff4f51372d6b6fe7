//! The simple and advanced calculator screens.
//!
//! Both draw the engine's display right-aligned in a box of the configured
//! width, followed by the keypad. Text wider than the box is printed in full
//! and pushes the border out rather than being cut.

use std::io::{self, Write};

use calc_core::{CalculatorEngine, Variant};

use super::{Screen, hints, render_status_bar};

/// Keypad of the basic variant.
pub const SIMPLE_KEYPAD: &[&[&str]] = &[
    &["7", "8", "9", "+"],
    &["4", "5", "6", "-"],
    &["1", "2", "3", "×"],
    &["0", ".", "=", "÷"],
];

/// Keypad of the scientific variant.
pub const ADVANCED_KEYPAD: &[&[&str]] = &[
    &["sin", "cos", "tan", "√x"],
    &["x²", "ln", "log", "C"],
    &["7", "8", "9", "÷"],
    &["4", "5", "6", "×"],
    &["1", "2", "3", "-"],
    &["0", ".", "±", "+"],
    &["^", "="],
];

const CELL_WIDTH: usize = 5;

pub struct CalculatorScreen;

impl CalculatorScreen {
    pub fn keypad(variant: Variant) -> &'static [&'static [&'static str]] {
        match variant {
            Variant::Basic => SIMPLE_KEYPAD,
            Variant::Scientific => ADVANCED_KEYPAD,
        }
    }

    pub fn render(
        engine: &CalculatorEngine,
        display_width: usize,
        out: &mut impl Write,
    ) -> io::Result<()> {
        let screen = match engine.variant() {
            Variant::Basic => Screen::Simple,
            Variant::Scientific => Screen::Advanced,
        };
        let text = engine.display();
        let inner = display_width.max(text.chars().count());
        let border = format!("+{}+", "-".repeat(inner));

        writeln!(out, "=== {} ===", screen.title())?;
        writeln!(out, "{border}")?;
        writeln!(out, "|{text:>inner$}|")?;
        writeln!(out, "{border}")?;

        for row in Self::keypad(engine.variant()) {
            let cells: String = row
                .iter()
                .map(|label| format!("{label:^CELL_WIDTH$}"))
                .collect();
            writeln!(out, "{}", cells.trim_end())?;
        }
        writeln!(out, "{:^width$}", "Back", width = CELL_WIDTH * 4)?;
        writeln!(out, "{}", render_status_bar(&[hints::BACK]))
    }
}
