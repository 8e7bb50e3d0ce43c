//! Format, validate and complete AHV numbers from the command line.
//!
//! This binary delegates to `ahv_number::cli` for execution and rendering,
//! keeping the CLI behaviour testable without spawning a process.

use std::io::{self, Write};
use std::process::ExitCode;

use ahv_number::AhvCheckSettings;
use ahv_number::cli::{Cli, CliError, execute, read_inputs, render};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// Exit status when at least one value failed validation.
const EXIT_INVALID: u8 = 1;
/// Exit status for usage, configuration and I/O errors.
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_INVALID),
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "ahv-check: {err}") {
                drop(write_err);
            }
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: &Cli) -> Result<bool, CliError> {
    let settings = AhvCheckSettings::load_for("ahv-check")?;
    init_tracing(settings.log_json());

    let output = settings.output_format(cli.format)?;
    let inputs = read_inputs(cli.command.values(), io::stdin().lock())?;
    let outcome = execute(&cli.command, &inputs)?;
    let rendered = render(&outcome.reports, output)?;
    write_stdout(&rendered);
    Ok(outcome.is_success())
}

fn init_tracing(json: bool) {
    let builder = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

fn write_stdout(rendered: &str) {
    let mut out = io::stdout().lock();
    if let Err(err) = out.write_all(rendered.as_bytes()) {
        drop(err);
    }
    if !rendered.is_empty() && !rendered.ends_with('\n') {
        if let Err(err) = writeln!(out) {
            drop(err);
        }
    }
}
