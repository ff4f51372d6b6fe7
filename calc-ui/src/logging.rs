//! Process-wide tracing setup for the terminal host.
//!
//! Stdout belongs to the calculator screens, so log records go to stderr
//! (only while the console is switched on) and to an optional file. The
//! level and the console switch can be changed while the calculator runs
//! through the `log=` and `verbose=` host commands.

use anyhow::{Result, anyhow, bail};
use chrono::Local;
use std::{
    fs::File,
    io::{self, IsTerminal, Write},
    path::Path,
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError},
};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    Layer, // Layer is used by .with_filter() on the console layer below
    fmt::{
        FmtContext, MakeWriter,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

const DIM: &str = "\x1b[2m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

fn level_colour(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "\x1b[1;31m",
        Level::WARN => "\x1b[1;33m",
        Level::INFO => "\x1b[1;32m",
        Level::DEBUG => "\x1b[1;34m",
        Level::TRACE => "\x1b[1;35m",
    }
}

/// `<timestamp> <LEVEL> <target> <fields>`, coloured on a terminal.
struct RecordFormat;

impl<S, N> FormatEvent<S, N> for RecordFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let stamp = Local::now().format("%H:%M:%S%.3f");

        if writer.has_ansi_escapes() {
            let colour = level_colour(meta.level());
            write!(
                writer,
                "{DIM}{stamp}{RESET} {colour}{:>5}{RESET} {CYAN}{}{RESET} ",
                meta.level(),
                meta.target()
            )?;
        } else {
            write!(writer, "{stamp} {:>5} {} ", meta.level(), meta.target())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

type SharedFile = Arc<Mutex<Option<File>>>;

/// A panic while writing a record must not take logging down with it.
fn lock_file(file: &SharedFile) -> MutexGuard<'_, Option<File>> {
    file.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Writer for the file layer; records are dropped while no file is open.
#[derive(Clone)]
struct OptionalFile(SharedFile);

struct OptionalFileGuard<'a>(MutexGuard<'a, Option<File>>);

impl Write for OptionalFileGuard<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        self.0.as_mut().map_or(Ok(buf.len()), |f| f.write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.as_mut().map_or(Ok(()), File::flush)
    }
}

impl<'a> MakeWriter<'a> for OptionalFile {
    type Writer = OptionalFileGuard<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        OptionalFileGuard(lock_file(&self.0))
    }
}

type Reload = Box<dyn Fn(EnvFilter) -> Result<()> + Send + Sync>;

/// Handles kept after the subscriber is installed.
struct Controls {
    level: Reload,
    console: Reload,
    file: SharedFile,
}

static CONTROLS: OnceLock<Controls> = OnceLock::new();

fn controls() -> Result<&'static Controls> {
    CONTROLS
        .get()
        .ok_or_else(|| anyhow!("logging not yet initialized"))
}

fn reloader<S>(
    handle: reload::Handle<EnvFilter, S>,
    what: &'static str,
) -> Reload
where
    S: Subscriber + Send + Sync + 'static,
{
    Box::new(move |filter: EnvFilter| {
        handle
            .reload(filter)
            .map_err(|e| anyhow!("{what} reload failed: {e}"))
    })
}

/// "trace" passes everything through; the global filter is still the ceiling.
fn console_gate(enabled: bool) -> EnvFilter {
    EnvFilter::new(if enabled { "trace" } else { "off" })
}

/// Changes the active log filter at runtime.
/// Accepts a bare level ("error", "warn", "info", "debug", "trace")
/// or any full EnvFilter directive.
pub fn set_log_level(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive)
        .map_err(|e| anyhow!("invalid log level '{directive}': {e}"))?;
    (controls()?.level)(filter)
}

/// Shows or hides stderr log output without affecting file logging.
pub fn set_console_enabled(enabled: bool) -> Result<()> {
    (controls()?.console)(console_gate(enabled))
}

/// Starts appending log output to `path`, replacing any open file.
/// The directory must already exist.
pub fn enable_file_logging(path: &Path) -> Result<()> {
    let controls = controls()?;
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| anyhow!("cannot open log file '{}': {e}", path.display()))?;
    *lock_file(&controls.file) = Some(file);
    Ok(())
}

/// Closes the current log file.
pub fn disable_file_logging() {
    if let Ok(controls) = controls() {
        *lock_file(&controls.file) = None;
    }
}

/// Installs the global subscriber. Later calls are ignored.
///
/// - Level: `default_directive`, or overridden by the RUST_LOG env var.
/// - Console: stderr, coloured on a terminal, shown only if `console`.
/// - File: inactive until `enable_file_logging()` is called.
pub fn init_logging(
    default_directive: &str,
    console: bool,
) {
    if CONTROLS.get().is_some() {
        return;
    }
    let file: SharedFile = Arc::new(Mutex::new(None));
    let level = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let (level_layer, level_handle) = reload::Layer::new(level);
    let (gate_layer, gate_handle) = reload::Layer::new(console_gate(console));

    let console_layer = tracing_subscriber::fmt::layer()
        .event_format(RecordFormat)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .with_filter(gate_layer);

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(RecordFormat)
        .with_ansi(false)
        .with_writer(OptionalFile(file.clone()));

    if tracing_subscriber::registry()
        .with(level_layer)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .is_err()
    {
        return;
    }
    let _ = CONTROLS.set(Controls {
        level: reloader(level_handle, "level"),
        console: reloader(gate_handle, "console"),
        file,
    });
}

/// Parses the argument of `verbose=`.
pub fn parse_switch(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "1" => Ok(true),
        "off" | "false" | "0" => Ok(false),
        _ => bail!("expected on or off, got '{value}'"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_switch_accepts_on_and_off() {
        assert_eq!(parse_switch("on").unwrap(), true);
        assert_eq!(parse_switch("OFF").unwrap(), false);
        assert!(parse_switch("maybe").is_err());
    }

    #[test]
    fn invalid_directive_is_rejected_before_reload() {
        let error = set_log_level("calc_ui=loud").unwrap_err();

        assert!(error.to_string().contains("invalid log level"), "{error}");
    }
}
