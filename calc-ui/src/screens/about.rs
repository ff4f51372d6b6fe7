use std::io::{self, Write};

use super::{Screen, hints, render_status_bar};

pub struct AboutScreen;

impl AboutScreen {
    pub fn render(out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "=== {} ===", Screen::About.title())?;
        writeln!(out, "Calculator App")?;
        writeln!(out, "Version: {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(out, "{}", render_status_bar(&[hints::BACK]))
    }
}
