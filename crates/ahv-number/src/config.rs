//! `ahv-check` configuration loaded via OrthoConfig.

use std::ffi::OsString;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::cli::{CliError, OutputFormat};

/// Settings controlling `ahv-check` output and logging.
///
/// Values come from `AHV_CHECK_*` environment variables or a configuration
/// file; command-line flags take precedence over both.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "AHV_CHECK")]
pub struct AhvCheckSettings {
    /// Output format, `text` or `json`.
    pub format: Option<String>,
    /// Emit log lines as JSON.
    #[ortho_config(default = false)]
    pub log_json: bool,
}

impl AhvCheckSettings {
    /// Load settings from the environment and configuration files.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Config`] when a source cannot be parsed.
    pub fn load_for(program: &str) -> Result<Self, CliError> {
        Self::load_from_iter([OsString::from(program)]).map_err(|err| CliError::Config {
            message: err.to_string(),
        })
    }

    /// Resolve the output format, preferring `flag` over the configured value.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::UnknownFormat`] when the configured format is not
    /// recognised.
    pub fn output_format(&self, flag: Option<OutputFormat>) -> Result<OutputFormat, CliError> {
        if let Some(format) = flag {
            return Ok(format);
        }
        self.format
            .as_deref()
            .map_or(Ok(OutputFormat::Text), str::parse)
    }

    /// Return `true` when log lines should be JSON.
    #[must_use]
    pub const fn log_json(&self) -> bool {
        self.log_json
    }
}
