//! CLI entry point and dispatch logic
//!
//! This module owns the `run()` function which:
//! - Parses CLI arguments
//! - Builds CliArgs and discovers Config
//! - Initialises logging
//! - Runs the compose command
//! - Handles all error output

use clap::Parser;

use super::args::Cli;
use super::commands;

use crate::exit_codes::error_to_exit_code_and_kind;
use crate::logging;
use crate::{Config, ConfigError, DaijiError, ExitCode};

/// Main CLI execution function.
///
/// This function handles ALL output including errors. It returns `Result<(), ExitCode>`:
/// - On success: returns `Ok(())` after printing the composed text
/// - On error: prints a contextual report to stderr, returns `Err(ExitCode)`
///
/// main.rs only calls `std::process::exit(code.as_i32())` on error - it does NOT print.
pub fn run() -> Result<(), ExitCode> {
    let cli = Cli::parse();
    let cli_args = cli.to_cli_args();

    let config = match Config::discover(&cli_args) {
        Ok(config) => config,
        Err(err) => {
            let (report, code) = report_error(&err, ExitCode::CLI_ARGS);
            eprintln!("{report}");
            return Err(code);
        }
    };

    if let Err(e) = logging::init_tracing(config.verbose()) {
        eprintln!("Warning: failed to initialise logging: {e}");
    }

    if config.verbose() {
        let mut effective: Vec<_> = config.effective_config().into_iter().collect();
        effective.sort();
        for (key, (value, source)) in effective {
            tracing::debug!(key = %key, value = %value, source = %source, "Effective configuration");
        }
    }

    match commands::execute_compose_command(&cli.number, &config) {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(err) => {
            logging::log_compose_error(&cli.number, &format!("{err:#}"));
            let (report, code) = report_error(&err, ExitCode::INTERNAL);
            eprintln!("{report}");
            Err(code)
        }
    }
}

/// Render an error for stderr and pick its exit code.
///
/// Typed `DaijiError`s carry their own code; anything else falls back to
/// `fallback`.
pub(crate) fn report_error(err: &anyhow::Error, fallback: ExitCode) -> (String, ExitCode) {
    match err.downcast_ref::<DaijiError>() {
        Some(daiji_err) => {
            let (code, kind) = error_to_exit_code_and_kind(daiji_err);
            tracing::debug!(?kind, exit_code = code.as_i32(), "Reporting error");
            (daiji_err.display_for_user(), code)
        }
        None if fallback == ExitCode::CLI_ARGS => {
            let wrapped = DaijiError::Config(ConfigError::InvalidFile(format!("{err:#}")));
            (wrapped.display_for_user(), fallback)
        }
        None => (format!("Error: {err:#}\n"), fallback),
    }
}
