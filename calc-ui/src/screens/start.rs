use std::io::{self, Write};

use super::{Screen, hints, render_status_bar};

/// The menu shown on launch and after `back`.
pub struct StartScreen;

impl StartScreen {
    pub fn render(out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "=== {} ===", Screen::Start.title())?;
        writeln!(out, "  [Simple]  [Advanced]  [About]  [Exit]")?;
        writeln!(
            out,
            "{}",
            render_status_bar(&[hints::SIMPLE, hints::ADVANCED, hints::ABOUT, hints::EXIT])
        )
    }
}
