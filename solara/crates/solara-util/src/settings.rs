//! Per-compilation settings.
//!
//! Settings are read from a TOML file. Every field is optional in the file
//! and falls back to its default.
//!
//! ```toml
//! input_file = "main.sol"
//! output_file = "main.out"
//! log_file = "solara.log"
//! trace_interning = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Default settings file name
pub const SETTINGS_FILE_NAME: &str = "solara.toml";

/// Settings for one compilation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Source file to compile
    pub input_file: Option<PathBuf>,
    /// Where output should be written
    pub output_file: Option<PathBuf>,
    /// Append every diagnostic to this file as well as to `tracing`
    pub log_file: Option<PathBuf>,
    /// Emit an `Info` diagnostic for every newly interned string
    pub trace_interning: bool,
}

impl Settings {
    /// Parse settings from TOML text
    ///
    /// ```
    /// use solara_util::Settings;
    ///
    /// let settings = Settings::from_toml_str("trace_interning = true").unwrap();
    /// assert!(settings.trace_interning);
    /// assert!(settings.input_file.is_none());
    /// ```
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load settings from a TOML file
    pub fn load_from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Set the input file
    pub fn with_input_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_file = Some(path.into());
        self
    }

    /// Set the log file
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Turn interning traces on or off
    pub fn with_trace_interning(mut self, enabled: bool) -> Self {
        self.trace_interning = enabled;
        self
    }
}
