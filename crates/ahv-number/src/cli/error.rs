//! Error types for the `ahv-check` CLI.

use thiserror::Error;

/// Errors surfaced by the CLI parsing and reporting flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// Settings could not be loaded from the environment or config files.
    #[error("failed to load configuration: {message}")]
    Config {
        /// Loader error message.
        message: String,
    },
    /// The configured output format is not recognised.
    #[error("unknown output format '{value}'; expected 'text' or 'json'")]
    UnknownFormat {
        /// Format name that was supplied.
        value: String,
    },
    /// A check-digit payload is not exactly twelve digits.
    #[error("invalid payload '{value}': expected exactly 12 digits")]
    InvalidPayload {
        /// Payload that was supplied.
        value: String,
    },
    /// Standard input could not be read.
    #[error("failed to read input: {message}")]
    ReadInput {
        /// I/O error message.
        message: String,
    },
    /// Reports could not be encoded as JSON.
    #[error("failed to encode report: {message}")]
    Encode {
        /// Encoder error message.
        message: String,
    },
}
