//! Exit code constants and error kind mapping for daiji.
//!
//! # Exit Code Table
//!
//! | Code | Constant | Description |
//! |------|----------|-------------|
//! | 0 | `SUCCESS` | Number composed and printed |
//! | 1 | `COMPOSE_FAILURE` | Type mismatch, range violation or length violation |
//! | 2 | `CLI_ARGS` | Invalid CLI arguments or configuration |
//! | 70 | `INTERNAL` | Unexpected internal failure |

use crate::error::{ComposeError, DaijiError};
use crate::types::ErrorKind;

/// Exit codes matching the documented exit code table.
///
/// The numeric values are part of the public API and will not change in 1.x
/// releases.
///
/// # Example
///
/// ```rust
/// use daiji_utils::exit_codes::ExitCode;
///
/// assert_eq!(ExitCode::SUCCESS.as_i32(), 0);
/// assert_eq!(ExitCode::COMPOSE_FAILURE, ExitCode::from_i32(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Success - operation completed successfully
    pub const SUCCESS: ExitCode = ExitCode(0);

    /// Compose failure - the number or glyph table was rejected
    pub const COMPOSE_FAILURE: ExitCode = ExitCode(1);

    /// CLI arguments error - invalid arguments or configuration
    pub const CLI_ARGS: ExitCode = ExitCode(2);

    /// Internal error - unexpected failure outside the composer
    pub const INTERNAL: ExitCode = ExitCode(70);

    /// Get the numeric exit code value.
    ///
    /// Use this with `std::process::exit()`.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// Create an ExitCode from a raw i32 value.
    ///
    /// Prefer using the named constants when possible.
    #[must_use]
    pub const fn from_i32(code: i32) -> Self {
        ExitCode(code)
    }
}

impl From<i32> for ExitCode {
    fn from(code: i32) -> Self {
        ExitCode(code)
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.0
    }
}

/// Convert `DaijiError` to (`exit_code`, `error_kind`) tuple
pub fn error_to_exit_code_and_kind(error: &DaijiError) -> (ExitCode, ErrorKind) {
    let kind = match error {
        DaijiError::Compose(ComposeError::TypeMismatch { .. }) => ErrorKind::TypeMismatch,
        DaijiError::Compose(ComposeError::RangeViolation { .. }) => ErrorKind::RangeViolation,
        DaijiError::Compose(ComposeError::LengthViolation { .. }) => ErrorKind::LengthViolation,
        DaijiError::Config(_) => ErrorKind::Config,
        DaijiError::Io(_) => ErrorKind::Internal,
    };
    (error.to_exit_code(), kind)
}
