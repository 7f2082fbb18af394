//! daiji - convert integers into formal Japanese daiji numerals
//!
//! Daiji (大字) are the tamper-resistant numerals written on receipts, cheques
//! and legal documents. This crate converts any whole number from 0 to
//! 999,999,999,999 into daiji text.
//!
//! daiji can be used in two ways:
//! - **CLI**: `daiji 123456789 --mode 3`
//! - **Library**: call [`compose`] or keep a [`Composer`] around
//!
//! # Quick Start (CLI)
//!
//! ```bash
//! daiji 123456
//! # 壱拾弐万参千四百五拾六
//!
//! daiji 123456 --mode 3
//! # 壹拾貳萬參仟肆佰伍拾陸
//!
//! daiji 123456 --charlist 零一二三四五六七八九十百千万億
//! # 一十二万三千四百五十六
//!
//! daiji 2005 --json
//! # {"mode":1,"number":2005,"selection":"1","text":"弐千五"}
//! ```
//!
//! # Quick Start (Library)
//!
//! ```rust
//! use daiji::{compose, compose_with, GlyphSelection, Mode};
//!
//! let text = compose(123_456_789_u64, &GlyphSelection::Builtin(Mode::Standard))?;
//! assert_eq!(text, "壱億弐千参百四拾五万六千七百八拾九");
//!
//! let text = compose_with(2005_u32, Mode::FormalOlder, "")?;
//! assert_eq!(text, "貳仟伍");
//! # Ok::<(), daiji::ComposeError>(())
//! ```
//!
//! # Stable Public API
//!
//! - [`compose`], [`compose_with`], [`Composer`] - composition
//! - [`Mode`], [`GlyphTable`], [`GlyphSelection`], [`Numeral`] - inputs
//! - [`ComposeError`], [`DaijiError`], [`ExitCode`] - errors
//! - [`Config`] and [`ConfigBuilder`] - configuration
//! - [`emit_jcs`] and [`ComposeOutput`] - JSON output contract
//!
//! Internal modules are accessible via module paths but are marked `#[doc(hidden)]`
//! and are not covered by semver stability guarantees.

// ============================================================================
// Stable Public API - covered by semver guarantees for 1.x
// ============================================================================

pub use daiji_composer::{
    Composer, GLYPH_COUNT, GlyphSelection, GlyphTable, MAX_COMPOSABLE, Mode, Numeral, Unit,
    compose, compose_with, split_groups,
};

/// Configuration with CLI > file > defaults precedence.
pub use daiji_config::{CliArgs, Config, ConfigBuilder};

/// Library-level error types.
pub use daiji_utils::error::{ComposeError, ConfigError, DaijiError, UserFriendlyError};

/// CLI exit codes.
pub use daiji_utils::exit_codes::ExitCode;

/// Canonical JSON emission and the `--json` output shape.
pub use daiji_utils::canonicalization::emit_jcs;
pub use daiji_utils::types::ComposeOutput;

pub mod cli;

// ============================================================================
// Internal modules - not covered by semver
// ============================================================================

#[doc(hidden)]
pub use daiji_utils::{error, exit_codes, logging, types};
