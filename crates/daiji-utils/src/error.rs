use std::fmt;
use thiserror::Error;

/// Library-level error type with rich context and user-friendly reporting.
///
/// `DaijiError` is the primary error type returned by daiji library operations.
/// It provides:
/// - Detailed error information for programmatic handling
/// - User-friendly messages with context and suggestions
/// - Mapping to CLI exit codes for consistent error reporting
///
/// # Error Categories
///
/// | Category | Description |
/// |----------|-------------|
/// | `Compose` | The number or glyph table was rejected before composition |
/// | `Config` | Configuration file or CLI argument errors |
/// | `Io` | Reading a configuration file failed |
///
/// # Exit Code Mapping
///
/// Use [`to_exit_code()`](Self::to_exit_code) to map errors to CLI exit codes:
///
/// | Exit Code | Error Type |
/// |-----------|------------|
/// | 1 | Type mismatch, range violation, length violation |
/// | 2 | Configuration/CLI argument errors |
/// | 70 | Other errors |
///
/// # Example
///
/// ```rust
/// use daiji_utils::error::{ComposeError, DaijiError};
/// use daiji_utils::exit_codes::ExitCode;
///
/// let err = DaijiError::from(ComposeError::RangeViolation { value: "-1".into() });
/// assert_eq!(err.to_exit_code(), ExitCode::COMPOSE_FAILURE);
/// assert!(err.display_for_user().starts_with("Error: "));
/// ```
///
/// Library code returns `DaijiError` and does NOT call `std::process::exit()`.
#[derive(Error, Debug)]
pub enum DaijiError {
    #[error("{0}")]
    Compose(#[from] ComposeError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for providing user-friendly error reporting with context and suggestions
pub trait UserFriendlyError {
    /// Get a user-friendly error message
    fn user_message(&self) -> String;

    /// Get contextual information about the error
    fn context(&self) -> Option<String>;

    /// Get suggested actions to resolve the error
    fn suggestions(&self) -> Vec<String>;

    /// Get the error category for grouping similar errors
    fn category(&self) -> ErrorCategory;
}

/// Categories of errors for better organization and handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    FileSystem,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Configuration => write!(f, "Configuration"),
            Self::FileSystem => write!(f, "File System"),
        }
    }
}

/// Rejections raised before any composition takes place.
///
/// All three are caller misuse, never transient: the composer does not retry
/// and produces no partial output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComposeError {
    /// The number is not an integral value (floating-point or non-numeric text).
    #[error("Not a number: '{input}' is not an integer")]
    TypeMismatch { input: String },

    /// The number lies outside `0..=999_999_999_999`.
    #[error("Not a natural number (0 to 999,999,999,999): {value}")]
    RangeViolation { value: String },

    /// A non-empty custom glyph table does not hold exactly 15 glyphs.
    #[error("charlist not proper length: expected {expected} glyphs, got {actual}")]
    LengthViolation { expected: usize, actual: usize },
}

impl UserFriendlyError for ComposeError {
    fn user_message(&self) -> String {
        match self {
            Self::TypeMismatch { input } => {
                format!("'{input}' is not an integer")
            }
            Self::RangeViolation { value } => {
                format!("{value} is outside the supported range 0 to 999,999,999,999")
            }
            Self::LengthViolation { expected, actual } => {
                format!("Custom glyph table has {actual} glyphs but exactly {expected} are required")
            }
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::TypeMismatch { .. } => Some(
                "Daiji numerals only exist for whole numbers; fractional and floating-point values are rejected even when they are integral (e.g. 3.0).".to_string(),
            ),
            Self::RangeViolation { .. } => Some(
                "The largest unit marker is the hundred-million glyph, so values stop just below one trillion.".to_string(),
            ),
            Self::LengthViolation { .. } => Some(
                "A glyph table lists zero, the digits one to nine, then the ten, hundred, thousand, ten-thousand and hundred-million markers.".to_string(),
            ),
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TypeMismatch { .. } => vec![
                "Pass the number without a decimal point or exponent".to_string(),
                "Remove any currency symbols or thousands separators".to_string(),
            ],
            Self::RangeViolation { .. } => vec![
                "Use a value between 0 and 999999999999".to_string(),
            ],
            Self::LengthViolation { .. } => vec![
                "Example table: --charlist 零一二三四五六七八九十百千万億".to_string(),
                "Omit --charlist to use the built-in table selected by --mode".to_string(),
            ],
        }
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Input
    }
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration file: {0}")]
    InvalidFile(String),

    #[error("Invalid configuration value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found at {path}")]
    NotFound { path: String },
}

impl UserFriendlyError for ConfigError {
    fn user_message(&self) -> String {
        match self {
            Self::InvalidFile(reason) => {
                format!("Configuration file has invalid format: {reason}")
            }
            Self::InvalidValue { key, value } => {
                format!("Configuration '{key}' has invalid value: {value}")
            }
            Self::NotFound { path } => {
                format!("Configuration file not found: {path}")
            }
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::InvalidFile(_) => Some(
                "Configuration files must be valid TOML with an optional [defaults] section."
                    .to_string(),
            ),
            Self::InvalidValue { key, value: _ } => Some(format!(
                "The '{key}' configuration option has specific format requirements."
            )),
            Self::NotFound { path: _ } => Some(
                "daiji searches for .daiji/config.toml starting from the current directory upward."
                    .to_string(),
            ),
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidFile(_) => vec![
                "Check the TOML syntax using a TOML validator".to_string(),
                "Only mode, charlist, json and verbose are accepted under [defaults]".to_string(),
            ],
            Self::InvalidValue { key, value: _ } => match key.as_str() {
                "mode" => vec!["Use 1 (standard), 2 (formal-old) or 3 (formal-older)".to_string()],
                _ => vec![
                    "Check the documentation for valid values for this option".to_string(),
                    "Remove the option to use the default value".to_string(),
                ],
            },
            Self::NotFound { path: _ } => vec![
                "Create .daiji/config.toml in your project root".to_string(),
                "Use CLI flags instead of a configuration file".to_string(),
            ],
        }
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Configuration
    }
}

impl UserFriendlyError for DaijiError {
    fn user_message(&self) -> String {
        match self {
            Self::Compose(err) => err.user_message(),
            Self::Config(err) => err.user_message(),
            Self::Io(err) => format!("File system operation failed: {err}"),
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::Compose(err) => err.context(),
            Self::Config(err) => err.context(),
            Self::Io(_) => None,
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Compose(err) => err.suggestions(),
            Self::Config(err) => err.suggestions(),
            Self::Io(_) => vec!["Check file permissions and that the path exists".to_string()],
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Compose(err) => err.category(),
            Self::Config(err) => err.category(),
            Self::Io(_) => ErrorCategory::FileSystem,
        }
    }
}

impl DaijiError {
    /// Get a user-friendly error message with context and actionable suggestions.
    #[must_use]
    pub fn display_for_user(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Error: {}\n", self.user_message()));

        if let Some(ctx) = self.context() {
            output.push_str(&format!("\nContext: {ctx}\n"));
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str("\nSuggestions:\n");
            for suggestion in suggestions {
                output.push_str(&format!("  • {suggestion}\n"));
            }
        }

        output
    }

    /// Map this error to the process exit code the CLI reports.
    #[must_use]
    pub fn to_exit_code(&self) -> crate::exit_codes::ExitCode {
        use crate::exit_codes::ExitCode;

        match self {
            DaijiError::Compose(_) => ExitCode::COMPOSE_FAILURE,
            DaijiError::Config(_) => ExitCode::CLI_ARGS,
            DaijiError::Io(_) => ExitCode::INTERNAL,
        }
    }
}
