//! Scanner configuration.
//!
//! The defaults match plain `Scanner::new`. A configuration can also be read
//! from a flat TOML document:
//!
//! ```toml
//! skip_bom = true
//! skip_shebang = true
//! emit_diagnostics = false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or saving a [`ScanConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The document is not valid TOML or has unknown or mistyped keys.
    #[error("failed to parse scanner configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be rendered as TOML.
    #[error("failed to serialize scanner configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The configuration file could not be read.
    #[error("failed to read scanner configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Options that change what the scanner treats as trivia and how it reports
/// malformed input. None of them change how tokens are classified.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Treat a leading U+FEFF byte-order mark as whitespace.
    #[serde(default = "default_true")]
    pub skip_bom: bool,

    /// Treat a leading `#!` line as a comment.
    #[serde(default)]
    pub skip_shebang: bool,

    /// Report each invalid token to the scanner's diagnostic handler.
    #[serde(default = "default_true")]
    pub emit_diagnostics: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            skip_bom: true,
            skip_shebang: false,
            emit_diagnostics: true,
        }
    }
}

impl ScanConfig {
    /// Parses a configuration from TOML. Missing keys take their defaults.
    ///
    /// # Example
    ///
    /// ```
    /// use emberc_lex::ScanConfig;
    ///
    /// let config = ScanConfig::from_toml_str("skip_shebang = true").unwrap();
    /// assert!(config.skip_shebang);
    /// assert!(config.skip_bom);
    /// ```
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a configuration file.
    pub fn load_from_path(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Sets [`skip_bom`](Self::skip_bom).
    pub fn with_skip_bom(mut self, skip: bool) -> Self {
        self.skip_bom = skip;
        self
    }

    /// Sets [`skip_shebang`](Self::skip_shebang).
    pub fn with_skip_shebang(mut self, skip: bool) -> Self {
        self.skip_shebang = skip;
        self
    }

    /// Sets [`emit_diagnostics`](Self::emit_diagnostics).
    pub fn with_emit_diagnostics(mut self, emit: bool) -> Self {
        self.emit_diagnostics = emit;
        self
    }
}
