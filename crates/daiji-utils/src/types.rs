//! Shared types used across the daiji crates.

use serde::{Deserialize, Serialize};

/// Source of a configuration value.
///
/// Indicates where a configuration value originated from in the precedence chain:
/// CLI arguments > config file > programmatic overrides > built-in defaults.
///
/// # Serialization
///
/// Serializes to lowercase strings: `"cli"`, `"config"`, `"programmatic"`, `"default"`.
///
/// # Example
///
/// ```rust
/// use daiji_utils::types::ConfigSource;
///
/// let source = ConfigSource::Cli;
/// let json = serde_json::to_string(&source).unwrap();
/// assert_eq!(json, r#""cli""#);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "test-utils", derive(strum::VariantNames))]
pub enum ConfigSource {
    /// Value provided via CLI argument (highest precedence).
    Cli,
    /// Value loaded from configuration file.
    Config,
    /// Value provided programmatically (e.g., `Config::builder()`).
    Programmatic,
    /// Built-in default value (lowest precedence).
    Default,
}

impl ConfigSource {
    /// Stable lowercase label, identical to the serialized form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cli => "cli",
            Self::Config => "config",
            Self::Programmatic => "programmatic",
            Self::Default => "default",
        }
    }
}

/// Error kinds reported in JSON output and logs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "test-utils", derive(strum::VariantNames))]
pub enum ErrorKind {
    TypeMismatch,
    RangeViolation,
    LengthViolation,
    Config,
    Internal,
}

/// Result of a single composition, emitted by `daiji --json`.
///
/// Field order is irrelevant: the CLI emits it through JCS, which sorts keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComposeOutput {
    /// The input number
    pub number: u64,
    /// Built-in mode number, or `None` when a custom table was used
    pub mode: Option<u8>,
    /// `"1"`, `"2"`, `"3"` or `"custom"`
    pub selection: String,
    /// The composed daiji text
    pub text: String,
}
