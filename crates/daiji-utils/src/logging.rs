//! Logging and observability infrastructure for daiji
//!
//! Structured logging goes to stderr through `tracing`; stdout is reserved for
//! the composed result so the CLI stays pipe-friendly.

use std::time::Duration;
use tracing::{Level, debug, info, span, warn};
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Default filter directives when `RUST_LOG` is not set.
fn default_directives(verbose: bool) -> &'static str {
    if verbose { "daiji=debug,info" } else { "warn" }
}

/// Initialize tracing subscriber for structured logging
///
/// Sets up tracing with either compact (default) or verbose format. `RUST_LOG`
/// takes precedence over the `verbose` switch.
///
/// # Arguments
/// * `verbose` - If true, emit debug events from the daiji crates with targets
///
/// # Returns
/// Result indicating success or failure of initialization. Fails if a global
/// subscriber was already installed.
pub fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives(verbose)))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    if verbose {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_line_number(false)
                    .with_file(false)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_line_number(false)
                    .with_file(false)
                    .compact(),
            )
            .try_init()?;
    }

    Ok(())
}

/// Create a span covering one composition
pub fn compose_span(number: &str, selection: &str) -> tracing::Span {
    span!(
        Level::INFO,
        "compose",
        number = %number,
        selection = %selection,
    )
}

/// Log composition start
pub fn log_compose_start(number: &str, selection: &str) {
    debug!(
        number = %number,
        selection = %selection,
        "Starting composition"
    );
}

/// Log composition completion with duration
pub fn log_compose_complete(number: u64, glyph_count: usize, duration: Duration) {
    info!(
        number = number,
        glyph_count = glyph_count,
        duration_us = %duration.as_micros(),
        "Composition completed"
    );
}

/// Log a rejected input
pub fn log_compose_error(number: &str, error: &str) {
    warn!(
        number = %number,
        error = %error,
        "Composition rejected"
    );
}
