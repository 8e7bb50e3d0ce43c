//! CLI support for checking AHV numbers.
//!
//! The `ahv-check` binary delegates to these functions so argument handling,
//! execution and rendering can be exercised in tests without spawning a
//! process.

mod error;

use std::io::BufRead;
use std::str::FromStr;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, info};

use crate::checksum::complete_formatted;
use crate::format::format;
use crate::number::AhvInput;
use crate::validation::{AhvErrorKind, ValidationResult, validate};

pub use error::CliError;

/// `ahv-check` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ahv-check",
    about = "Format and validate Swiss AHV social-insurance numbers",
    version
)]
pub struct Cli {
    /// Output format; falls back to `AHV_CHECK_FORMAT`, then `text`.
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,
    /// Operation to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Operations offered by `ahv-check`.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print each value in AHV display form.
    Format {
        /// Values to format; read from standard input when omitted.
        values: Vec<String>,
    },
    /// Validate each value and report the failure kind.
    Validate {
        /// Validate values exactly as given instead of formatting them first.
        #[arg(long)]
        strict: bool,
        /// Values to validate; read from standard input when omitted.
        values: Vec<String>,
    },
    /// Append the check digit to twelve-digit payloads.
    CheckDigit {
        /// Payloads to complete; read from standard input when omitted.
        payloads: Vec<String>,
    },
}

impl Command {
    /// Values supplied on the command line.
    #[must_use]
    pub fn values(&self) -> &[String] {
        match self {
            Self::Format { values } | Self::Validate { values, .. } => values,
            Self::CheckDigit { payloads } => payloads,
        }
    }

    /// Subcommand name used in log events.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Format { .. } => "format",
            Self::Validate { .. } => "validate",
            Self::CheckDigit { .. } => "check-digit",
        }
    }
}

/// Report rendering style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per value.
    #[default]
    Text,
    /// A JSON array of report objects.
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(CliError::UnknownFormat {
                value: s.to_owned(),
            }),
        }
    }
}

/// Result of formatting one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatReport {
    /// Value as supplied.
    pub input: String,
    /// Value in display form.
    pub formatted: String,
}

/// Result of validating one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateReport {
    /// Value as supplied.
    pub input: String,
    /// Value in display form.
    pub formatted: String,
    /// Whether the value passed every check.
    pub is_valid: bool,
    /// Failure code, `none` when valid.
    pub error_kind: &'static str,
    /// Failure kind, used for the text message.
    #[serde(skip)]
    pub kind: Option<AhvErrorKind>,
}

/// Result of completing one payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckDigitReport {
    /// Twelve-digit payload as supplied.
    pub payload: String,
    /// Completed number in display form.
    pub number: String,
}

/// One line of `ahv-check` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Report {
    /// Output of `format`.
    Format(FormatReport),
    /// Output of `validate`.
    Validate(ValidateReport),
    /// Output of `check-digit`.
    CheckDigit(CheckDigitReport),
}

/// Reports produced by one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Reports in input order.
    pub reports: Vec<Report>,
    /// Number of values that failed validation.
    pub invalid: usize,
}

impl Outcome {
    /// Return `true` when no value failed validation.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.invalid == 0
    }
}

/// Return the command-line values, or one value per non-empty line of
/// `reader` when none were given.
///
/// # Errors
///
/// Returns [`CliError::ReadInput`] when `reader` fails.
///
/// # Example
///
/// ```
/// use ahv_number::cli::read_inputs;
///
/// let values = read_inputs(&[], "756.1234.5678.97\n\n 7561234 \n".as_bytes())
///     .expect("read stdin");
/// assert_eq!(values, vec!["756.1234.5678.97".to_owned(), "7561234".to_owned()]);
/// ```
pub fn read_inputs(values: &[String], reader: impl BufRead) -> Result<Vec<String>, CliError> {
    if !values.is_empty() {
        return Ok(values.to_vec());
    }
    let mut inputs = Vec::new();
    for line in reader.lines() {
        let text = line.map_err(|err| CliError::ReadInput {
            message: err.to_string(),
        })?;
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            inputs.push(trimmed.to_owned());
        }
    }
    Ok(inputs)
}

/// Run `command` over `inputs`.
///
/// # Errors
///
/// Returns [`CliError::InvalidPayload`] when a `check-digit` payload is not
/// exactly twelve digits.
///
/// # Example
///
/// ```
/// use ahv_number::cli::{Command, execute};
///
/// let command = Command::Validate { strict: false, values: vec![] };
/// let outcome = execute(&command, &["7561234567897".to_owned()]).expect("execute");
/// assert!(outcome.is_success());
/// ```
pub fn execute(command: &Command, inputs: &[String]) -> Result<Outcome, CliError> {
    let mut reports = Vec::with_capacity(inputs.len());
    let mut invalid = 0;
    for (index, value) in inputs.iter().enumerate() {
        let report = match command {
            Command::Format { .. } => Report::Format(format_report(value)),
            Command::Validate { strict, .. } => {
                let validated = validate_report(value, *strict);
                debug!(index, error_kind = validated.error_kind, "validated value");
                if !validated.is_valid {
                    invalid += 1;
                }
                Report::Validate(validated)
            }
            Command::CheckDigit { .. } => Report::CheckDigit(check_digit_report(value)?),
        };
        reports.push(report);
    }
    info!(
        command = command.name(),
        total = inputs.len(),
        invalid,
        "ahv-check finished"
    );
    Ok(Outcome { reports, invalid })
}

/// Render reports in the requested format.
///
/// # Errors
///
/// Returns [`CliError::Encode`] when JSON encoding fails.
pub fn render(reports: &[Report], output: OutputFormat) -> Result<String, CliError> {
    match output {
        OutputFormat::Json => {
            serde_json::to_string_pretty(reports).map_err(|err| CliError::Encode {
                message: err.to_string(),
            })
        }
        OutputFormat::Text => Ok(render_text(reports)),
    }
}

fn format_report(value: &str) -> FormatReport {
    FormatReport {
        input: value.to_owned(),
        formatted: format(value),
    }
}

fn validate_report(value: &str, strict: bool) -> ValidateReport {
    let input = AhvInput::new(value);
    let result = if strict {
        validate(value)
    } else {
        ValidationResult::from(input.to_number().map(drop))
    };
    ValidateReport {
        input: value.to_owned(),
        formatted: input.formatted().to_owned(),
        is_valid: result.is_valid(),
        error_kind: result.error_code(),
        kind: result.error_kind(),
    }
}

fn check_digit_report(payload: &str) -> Result<CheckDigitReport, CliError> {
    let number = complete_formatted(payload).ok_or_else(|| CliError::InvalidPayload {
        value: payload.to_owned(),
    })?;
    Ok(CheckDigitReport {
        payload: payload.to_owned(),
        number,
    })
}

fn render_text(reports: &[Report]) -> String {
    let mut out = String::new();
    for entry in reports {
        let line = match entry {
            Report::Format(report) => report.formatted.clone(),
            Report::Validate(report) => match report.kind {
                None => format!("{}: valid", report.input),
                Some(kind) => format!("{}: invalid [{}] {kind}", report.input, kind.code()),
            },
            Report::CheckDigit(report) => report.number.clone(),
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}
