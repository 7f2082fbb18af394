//! Command implementations for the daiji CLI

use anyhow::{Context, Result};
use std::time::Instant;

use crate::logging;
use crate::{ComposeOutput, Composer, Config, DaijiError, Numeral, emit_jcs};

/// Compose `number` according to `config` and return the text to print.
///
/// Checks run in order: the number's type, its range, then the glyph table.
/// Errors are `DaijiError`s wrapped in `anyhow` so the caller can map them to
/// exit codes.
pub fn execute_compose_command(number: &str, config: &Config) -> Result<String> {
    let started = Instant::now();
    let numeral: Numeral = number.parse().map_err(DaijiError::from)?;
    let value = numeral.to_composable().map_err(DaijiError::from)?;

    let selection = config.glyph_selection()?;
    let span = logging::compose_span(number, selection.label());
    let _guard = span.enter();
    logging::log_compose_start(number, selection.label());

    let text = Composer::new(selection)
        .compose(value)
        .map_err(DaijiError::from)?;
    logging::log_compose_complete(value, text.chars().count(), started.elapsed());

    if config.json() {
        let output = ComposeOutput {
            number: value,
            mode: selection.mode().map(|mode| mode.number()),
            selection: selection.label().to_string(),
            text,
        };
        emit_compose_json(&output)
    } else {
        Ok(text)
    }
}

/// Emit compose output as canonical JSON using JCS (RFC 8785)
pub fn emit_compose_json(output: &ComposeOutput) -> Result<String> {
    emit_jcs(output).context("Failed to emit compose JSON")
}
