//! Host configuration.
//!
//! Read from an optional TOML file; every field has a default so an empty
//! file (or no file at all) is valid. Command-line flags are applied on top
//! in `main`.
//!
//! ```toml
//! log_level = "debug"
//! log_file = "calculator.log"
//! console_logging = false
//! session_file = "session.toml"
//! display_width = 32
//! ```

use std::{fs, path::{Path, PathBuf}};

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

/// Narrowest display the screens can lay out.
pub const MIN_DISPLAY_WIDTH: usize = 8;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("display_width must be at least {MIN_DISPLAY_WIDTH}, got {0}")]
    DisplayTooNarrow(usize),

    #[error("log_level must not be empty")]
    EmptyLogLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Any `EnvFilter` directive. `RUST_LOG` wins when set.
    pub log_level: String,
    pub log_file: Option<PathBuf>,
    /// Mirror log records to stderr.
    pub console_logging: bool,
    /// Where the session is saved on suspend and restored on start.
    pub session_file: Option<PathBuf>,
    pub display_width: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: None,
            console_logging: false,
            session_file: None,
            display_width: 24,
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("invalid configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display_width < MIN_DISPLAY_WIDTH {
            return Err(ConfigError::DisplayTooNarrow(self.display_width));
        }
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::EmptyLogLevel);
        }
        Ok(())
    }
}
