//! Configuration management for daiji
//!
//! This module provides hierarchical configuration with discovery and precedence:
//! CLI > file > defaults. Supports TOML configuration files with a `[defaults]`
//! section.

mod builder;
mod cli_args;
mod discovery;
mod model;
mod sources;
mod validation;

pub use builder::ConfigBuilder;
pub use cli_args::CliArgs;
pub use daiji_utils::types::ConfigSource;
pub use discovery::{CONFIG_DIR, CONFIG_FILE};
pub use model::*;

use daiji_composer::{GlyphSelection, Mode};

use crate::error::{ConfigError, DaijiError};

impl Config {
    /// The effective built-in mode.
    pub fn mode(&self) -> Result<Mode, DaijiError> {
        let number = self.defaults.mode.unwrap_or(1);
        Mode::from_number(number).ok_or_else(|| {
            DaijiError::Config(ConfigError::InvalidValue {
                key: "mode".to_string(),
                value: format!("{number} (expected 1, 2 or 3)"),
            })
        })
    }

    /// Resolve the glyph selection: a non-empty `charlist` overrides `mode`.
    ///
    /// # Errors
    ///
    /// `LengthViolation` when `charlist` is non-empty and not 15 glyphs long.
    pub fn glyph_selection(&self) -> Result<GlyphSelection, DaijiError> {
        let mode = self.mode()?;
        let charlist = self.defaults.charlist.as_deref().unwrap_or_default();
        Ok(GlyphSelection::resolve(mode, charlist)?)
    }

    /// Whether output should be canonical JSON.
    #[must_use]
    pub fn json(&self) -> bool {
        self.defaults.json.unwrap_or(false)
    }

    #[must_use]
    pub fn verbose(&self) -> bool {
        self.defaults.verbose.unwrap_or(false)
    }
}
