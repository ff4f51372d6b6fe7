//! The terminal host: navigation, dispatch and the input loop.
//!
//! Input is read a line at a time. Each line is split on whitespace and the
//! tokens are handled in order: navigation words are handled here, anything
//! else on a calculator screen is parsed as a [`Button`] and pressed. The
//! active screen is redrawn once per line, followed by any toasts raised
//! while handling it.
//!
//! Two host commands work on every screen: `log=<directive>` changes the
//! log filter and `verbose=on|off` switches stderr logging.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use calc_core::{Button, CalculatorEngine, Variant};
use tracing::{debug, info, warn};

use crate::{
    AppConfig, Screen, logging,
    screens::{AboutScreen, CalculatorScreen, StartScreen},
    session::Session,
    toast::Toast,
};

/// Whether to keep reading input after a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// How an input loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user chose `exit` on the start screen.
    Exited,
    /// Input ran out; the session may be resumed later.
    Suspended,
}

pub struct App {
    config: AppConfig,
    screen: Screen,
    engine: Option<CalculatorEngine>,
    toasts: Vec<Toast>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            screen: Screen::Start,
            engine: None,
            toasts: Vec::new(),
        }
    }

    /// Rebuilds the app from a saved session.
    ///
    /// A calculator snapshot that fails validation is dropped and the
    /// screen starts with a fresh engine.
    pub fn resume(
        config: AppConfig,
        session: Session,
    ) -> Self {
        let mut app = Self::new(config);
        app.screen = session.screen;
        app.engine = session.screen.variant().map(|variant| {
            let Some(state) = session.calculator else {
                return CalculatorEngine::new(variant);
            };
            CalculatorEngine::restore(variant, state).unwrap_or_else(|error| {
                warn!(%error, "discarding invalid calculator snapshot");
                CalculatorEngine::new(variant)
            })
        });
        app
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn engine(&self) -> Option<&CalculatorEngine> {
        self.engine.as_ref()
    }

    /// Toasts raised since the last render.
    pub fn pending_toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Snapshot of the current screen for suspend.
    pub fn session(&self) -> Session {
        Session {
            screen: self.screen,
            calculator: self.engine.as_ref().map(CalculatorEngine::snapshot),
        }
    }

    fn navigate(
        &mut self,
        to: Screen,
    ) {
        debug!(from = ?self.screen, ?to, "navigate");
        self.screen = to;
        // Entering a calculator always starts fresh; leaving one discards it.
        self.engine = to.variant().map(CalculatorEngine::new);
    }

    /// Handles one token.
    pub fn handle_token(
        &mut self,
        token: &str,
    ) -> Flow {
        if let Some((command, value)) = token.split_once('=') {
            if !command.is_empty() {
                self.configure(command, value, token);
                return Flow::Continue;
            }
        }
        let word = token.to_ascii_lowercase();
        match (self.screen, word.as_str()) {
            (Screen::Start, "simple") => self.navigate(Screen::Simple),
            (Screen::Start, "advanced") => self.navigate(Screen::Advanced),
            (Screen::Start, "about") => self.navigate(Screen::About),
            (Screen::Start, "exit") => return Flow::Exit,
            (Screen::Simple | Screen::Advanced | Screen::About, "back") => {
                self.navigate(Screen::Start)
            }
            _ => self.press(token),
        }
        Flow::Continue
    }

    fn configure(
        &mut self,
        command: &str,
        value: &str,
        token: &str,
    ) {
        let result = match command {
            "log" => logging::set_log_level(value),
            "verbose" => logging::parse_switch(value).and_then(logging::set_console_enabled),
            _ => {
                self.toasts.push(Toast::unknown_input(token));
                return;
            }
        };
        match result {
            Ok(()) => info!(command, value, "logging reconfigured"),
            Err(error) => self.toasts.push(Toast::new(format!("Error: {error}"))),
        }
    }

    fn press(
        &mut self,
        token: &str,
    ) {
        let Some(engine) = self.engine.as_mut() else {
            self.toasts.push(Toast::unknown_input(token));
            return;
        };
        match token.parse::<Button>() {
            Ok(button) => {
                if let Err(error) = engine.press(button) {
                    self.toasts.push(Toast::from_error(&error));
                }
            }
            Err(error) => {
                debug!(%error, "unrecognised token");
                self.toasts.push(Toast::unknown_input(token));
            }
        }
    }

    /// Handles every token on a line, stopping early on `exit`.
    pub fn handle_line(
        &mut self,
        line: &str,
    ) -> Flow {
        for token in line.split_whitespace() {
            if self.handle_token(token) == Flow::Exit {
                return Flow::Exit;
            }
        }
        Flow::Continue
    }

    /// Draws the active screen, then drains pending toasts.
    pub fn render(
        &mut self,
        out: &mut impl Write,
    ) -> Result<()> {
        match (self.screen, self.engine.as_ref()) {
            (Screen::Simple | Screen::Advanced, Some(engine)) => {
                CalculatorScreen::render(engine, self.config.display_width, out)?
            }
            (Screen::About, _) => AboutScreen::render(out)?,
            _ => StartScreen::render(out)?,
        }
        for toast in self.toasts.drain(..) {
            writeln!(out, "{toast}")?;
        }
        out.flush()?;
        Ok(())
    }

    /// Runs the input loop until `exit` or end of input.
    pub fn run(
        &mut self,
        input: impl BufRead,
        mut out: impl Write,
    ) -> Result<Outcome> {
        info!(screen = ?self.screen, "calculator started");
        self.render(&mut out)?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            if self.handle_line(&line) == Flow::Exit {
                info!("exit requested");
                return Ok(Outcome::Exited);
            }
            self.render(&mut out)?;
        }

        info!(screen = ?self.screen, "input closed, suspending");
        Ok(Outcome::Suspended)
    }
}

/// Presses every token on `line` against a fresh engine and returns the
/// final display. Any unknown token or rejected press is an error.
pub fn evaluate_line(
    variant: Variant,
    line: &str,
) -> Result<String> {
    let mut engine = CalculatorEngine::new(variant);
    for token in line.split_whitespace() {
        let button: Button = token.parse()?;
        if let Err(error) = engine.press(button) {
            bail!("'{token}' rejected: {error}");
        }
    }
    Ok(engine.display().to_string())
}

#[cfg(test)]
mod tests {
    use calc_core::{CalculatorState, Operator};
    use pretty_assertions::assert_eq;

    use super::*;

    fn app() -> App {
        App::new(AppConfig::default())
    }

    #[test]
    fn starts_on_menu_without_engine() {
        let app = app();

        assert_eq!(app.screen(), Screen::Start);
        assert!(app.engine().is_none());
    }

    #[test]
    fn entering_simple_creates_basic_engine() {
        let mut app = app();

        app.handle_token("simple");

        assert_eq!(app.screen(), Screen::Simple);
        assert_eq!(app.engine().map(CalculatorEngine::variant), Some(Variant::Basic));
    }

    #[test]
    fn back_discards_calculator_state() {
        let mut app = app();
        app.handle_line("advanced 4 2 back advanced");

        assert_eq!(app.engine().map(|e| e.display()), Some("0"));
    }

    #[test]
    fn exit_only_works_on_start_screen() {
        let mut app = app();
        app.handle_token("simple");

        assert_eq!(app.handle_token("exit"), Flow::Continue);
        assert_eq!(app.pending_toasts(), &[Toast::unknown_input("exit")]);

        app.handle_token("back");
        assert_eq!(app.handle_token("exit"), Flow::Exit);
    }

    #[test]
    fn engine_errors_become_toasts_and_input_continues() {
        let mut app = app();

        app.handle_line("advanced 8 ÷ 0 =");
        assert_eq!(
            app.pending_toasts(),
            &[Toast::new("Error: division by zero")]
        );

        app.handle_line("C 2 + 2 =");
        assert_eq!(app.engine().map(|e| e.display()), Some("4"));
    }

    #[test]
    fn unknown_tokens_toast_on_every_screen() {
        let mut app = app();

        app.handle_line("hello about 5");

        assert_eq!(
            app.pending_toasts(),
            &[Toast::unknown_input("hello"), Toast::unknown_input("5")]
        );
    }

    #[test]
    fn logging_commands_report_failures_as_toasts() {
        let mut app = app();
        app.handle_line("advanced 7 verbose=maybe log=calc_ui=loud colour=red");

        let toasts = app.pending_toasts();
        assert_eq!(toasts.len(), 3);
        assert_eq!(toasts[0], Toast::new("Error: expected on or off, got 'maybe'"));
        assert!(
            toasts[1]
                .message()
                .starts_with("Error: invalid log level 'calc_ui=loud'"),
            "{}",
            toasts[1]
        );
        assert_eq!(toasts[2], Toast::unknown_input("colour=red"));
    }

    #[test]
    fn logging_commands_do_not_reach_engine() {
        let mut app = app();
        app.handle_line("advanced 7 verbose=off =");

        assert_eq!(app.engine().map(|e| e.display()), Some("7"));
    }

    #[test]
    fn render_drains_toasts() {
        let mut app = app();
        app.handle_line("simple sin");
        let mut out = Vec::new();

        app.render(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("! Error: 'sin' is not available on the basic keypad\n"), "{text}");
        assert!(app.pending_toasts().is_empty());
    }

    #[test]
    fn session_round_trip_resumes_pending_operation() {
        let mut app = app();
        app.handle_line("advanced 6 × 7");

        let resumed = App::resume(AppConfig::default(), app.session());

        assert_eq!(resumed.screen(), Screen::Advanced);
        assert_eq!(resumed.engine().map(|e| e.state()), app.engine().map(|e| e.state()));
    }

    #[test]
    fn resume_discards_invalid_snapshot() {
        let session = Session {
            screen: Screen::Simple,
            calculator: Some(CalculatorState {
                operator: Some(Operator::Add),
                ..CalculatorState::new()
            }),
        };

        let app = App::resume(AppConfig::default(), session);

        assert_eq!(app.engine().map(|e| e.state()), Some(&CalculatorState::new()));
    }

    #[test]
    fn resume_on_about_has_no_engine() {
        let session = Session {
            screen: Screen::About,
            calculator: None,
        };

        assert!(App::resume(AppConfig::default(), session).engine().is_none());
    }

    #[test]
    fn run_reports_exit_and_suspend() {
        let mut out = Vec::new();
        assert_eq!(app().run("exit\n".as_bytes(), &mut out).unwrap(), Outcome::Exited);

        let mut out = Vec::new();
        assert_eq!(app().run("simple 1\n".as_bytes(), &mut out).unwrap(), Outcome::Suspended);
    }

    #[test]
    fn evaluate_line_returns_final_display() {
        assert_eq!(evaluate_line(Variant::Scientific, "3 + 4 + 5 =").unwrap(), "12");
        assert_eq!(evaluate_line(Variant::Basic, "8 ÷ 0 =").unwrap(), "0");
    }

    #[test]
    fn evaluate_line_fails_on_rejected_press() {
        let error = evaluate_line(Variant::Scientific, "8 ÷ 0 =").unwrap_err();

        assert!(error.to_string().contains("division by zero"), "{error}");
        assert!(evaluate_line(Variant::Basic, "2 wat").is_err());
    }
}
