//! Status line listing the navigation words a screen accepts.

/// Navigation hint for the status bar.
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(
        key: &'static str,
        action: &'static str,
    ) -> Self {
        Self { key, action }
    }
}

/// Build a status line from a list of hints.
pub fn render_status_bar(hints: &[KeyHint]) -> String {
    hints
        .iter()
        .map(|h| format!("{}: {}", h.key, h.action))
        .collect::<Vec<_>>()
        .join(" │ ")
}

pub mod hints {
    use super::KeyHint;

    pub const SIMPLE: KeyHint = KeyHint::new("simple", "Basic keypad");
    pub const ADVANCED: KeyHint = KeyHint::new("advanced", "Scientific keypad");
    pub const ABOUT: KeyHint = KeyHint::new("about", "About");
    pub const EXIT: KeyHint = KeyHint::new("exit", "Quit");
    pub const BACK: KeyHint = KeyHint::new("back", "Menu");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn joins_hints_with_separator() {
        let line = render_status_bar(&[hints::BACK, hints::EXIT]);

        assert_eq!(line, "back: Menu │ exit: Quit");
    }

    #[test]
    fn empty_hints_render_empty_line() {
        assert_eq!(render_status_bar(&[]), "");
    }
}
