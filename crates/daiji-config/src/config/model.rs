use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::ConfigSource;

/// Configuration for daiji operations.
///
/// `Config` provides hierarchical configuration with discovery and precedence:
/// CLI arguments > config file > built-in defaults.
///
/// # Discovery
///
/// Use [`Config::discover()`] for CLI-like behavior that searches for
/// `.daiji/config.toml` upward from the current directory, or
/// [`Config::builder()`] for programmatic configuration.
///
/// # Configuration File Format
///
/// ```toml
/// [defaults]
/// mode = 2
/// charlist = ""
/// json = false
/// verbose = false
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Default values for every setting.
    pub defaults: Defaults,
    /// Source attribution for each setting (for `--verbose` display).
    pub source_attribution: HashMap<String, ConfigSource>,
}

/// Default configuration values
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    /// Built-in glyph table, 1 to 3.
    pub mode: Option<u8>,
    /// Custom 15-glyph table; empty means "use `mode`".
    pub charlist: Option<String>,
    /// Emit canonical JSON instead of bare text.
    pub json: Option<bool>,
    pub verbose: Option<bool>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            mode: Some(1),
            charlist: Some(String::new()),
            json: Some(false),
            verbose: Some(false),
        }
    }
}

/// Keys tracked in [`Config::source_attribution`].
pub(crate) const ATTRIBUTED_KEYS: [&str; 4] = ["mode", "charlist", "json", "verbose"];
