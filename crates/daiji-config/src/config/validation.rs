use crate::error::{ConfigError, DaijiError};

use super::Config;

impl Config {
    /// Validate configuration values
    ///
    /// The custom glyph table is not checked here. Its length is reported as a
    /// compose-time `LengthViolation` whatever its source.
    pub(crate) fn validate(&self) -> Result<(), DaijiError> {
        if let Some(mode) = self.defaults.mode {
            if !(1..=3).contains(&mode) {
                return Err(DaijiError::Config(ConfigError::InvalidValue {
                    key: "mode".to_string(),
                    value: format!("{mode} (expected 1, 2 or 3)"),
                }));
            }
        }

        Ok(())
    }
}
