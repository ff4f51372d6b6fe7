//! Suspend/resume snapshots.
//!
//! A session is the active screen plus, on a calculator screen, a verbatim
//! copy of its [`CalculatorState`]. It is written as TOML when input ends
//! without an explicit `exit` and read back on the next start.

use std::{fs, io, path::Path};

use anyhow::{Context, Result};
use calc_core::CalculatorState;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::Screen;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Session {
    pub screen: Screen,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculator: Option<CalculatorState>,
}

impl Session {
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize session")
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse session")
    }

    /// Reads a saved session. A missing file is not an error.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read session: {}", path.display()));
            }
        };
        let session = Self::from_toml_str(&text)
            .with_context(|| format!("Failed to load session: {}", path.display()))?;
        info!(path = %path.display(), screen = ?session.screen, "session restored");
        Ok(Some(session))
    }

    pub fn save(
        &self,
        path: &Path,
    ) -> Result<()> {
        fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write session: {}", path.display()))?;
        info!(path = %path.display(), screen = ?self.screen, "session saved");
        Ok(())
    }

    /// Deletes a saved session, if any.
    pub fn discard(path: &Path) -> Result<()> {
        match fs::remove_file(path) {
            Ok(()) => {
                info!(path = %path.display(), "session discarded");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to remove session: {}", path.display()))
            }
        }
    }
}
