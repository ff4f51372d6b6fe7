use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use calc_core::Variant;
use clap::Parser;
use tracing::{debug, info, warn};

use calc_ui::{App, AppConfig, Outcome, app, logging, session::Session};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Terminal calculator with a basic and a scientific keypad.
///
/// Reads whitespace-separated key presses from stdin, one screen redraw per
/// line. Start with `simple` or `advanced`, go back with `back`, quit from
/// the menu with `exit`.
#[derive(Debug, Parser)]
#[command(name = "calculator")]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Saves the session here when input ends and restores it on start.
    #[arg(short, long)]
    session: Option<PathBuf>,

    /// Log filter directive (overrides the config file; RUST_LOG wins over both).
    #[arg(long)]
    log_level: Option<String>,

    /// Append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Mirror log records to stderr.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Evaluate one line of key presses, print the final display and exit.
    #[arg(short, long, value_name = "KEYS")]
    eval: Option<String>,

    /// Use the basic keypad with --eval instead of the scientific one.
    #[arg(long, default_value_t = false, requires = "eval")]
    basic: bool,
}

impl Cli {
    fn into_config(self) -> Result<(AppConfig, Option<String>, bool)> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if self.log_file.is_some() {
            config.log_file = self.log_file;
        }
        if self.session.is_some() {
            config.session_file = self.session;
        }
        config.console_logging |= self.verbose;
        config.validate()?;
        Ok((config, self.eval, self.basic))
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let (config, eval, basic) = Cli::parse().into_config()?;

    logging::init_logging(&config.log_level, config.console_logging);
    if let Some(path) = &config.log_file {
        logging::enable_file_logging(path)?;
    }
    debug!(?config, "configuration loaded");

    if let Some(keys) = eval {
        let variant = if basic { Variant::Basic } else { Variant::Scientific };
        println!("{}", app::evaluate_line(variant, &keys)?);
        return Ok(());
    }

    let session_file = config.session_file.clone();
    let mut app = match session_file.as_deref().map(Session::load).transpose() {
        Ok(Some(Some(session))) => App::resume(config, session),
        Ok(_) => App::new(config),
        Err(error) => {
            warn!(?error, "could not restore session, starting fresh");
            App::new(config)
        }
    };

    let outcome = app.run(io::stdin().lock(), io::stdout().lock())?;

    if let Some(path) = &session_file {
        match outcome {
            Outcome::Suspended => app
                .session()
                .save(path)
                .with_context(|| format!("Failed to suspend to {}", path.display()))?,
            Outcome::Exited => Session::discard(path)?,
        }
    }

    info!(?outcome, "calculator stopped");
    logging::disable_file_logging();
    Ok(())
}
