use std::collections::HashMap;

use daiji_composer::Mode;

use crate::error::DaijiError;

use super::model::ATTRIBUTED_KEYS;
use super::{Config, ConfigSource, Defaults};

impl Config {
    /// Create a builder for programmatic configuration.
    ///
    /// Use this when embedding daiji without relying on config files.
    ///
    /// # Example
    ///
    /// ```rust
    /// use daiji_composer::Mode;
    /// use daiji_config::Config;
    ///
    /// let config = Config::builder()
    ///     .mode(Mode::FormalOlder)
    ///     .json(true)
    ///     .build()
    ///     .expect("Failed to build config");
    /// assert_eq!(config.defaults.mode, Some(3));
    /// ```
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Builder for programmatic configuration of daiji.
///
/// # Source Attribution
///
/// All values set via the builder are attributed to `ConfigSource::Programmatic`
/// in the resulting `Config`'s source attribution map.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    mode: Option<Mode>,
    charlist: Option<String>,
    json: Option<bool>,
    verbose: Option<bool>,
}

impl ConfigBuilder {
    /// Create a new `ConfigBuilder` with no values set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a built-in glyph table.
    #[must_use]
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Supply a custom 15-glyph table. An empty string keeps the mode table.
    #[must_use]
    pub fn charlist(mut self, charlist: impl Into<String>) -> Self {
        self.charlist = Some(charlist.into());
        self
    }

    #[must_use]
    pub fn json(mut self, json: bool) -> Self {
        self.json = Some(json);
        self
    }

    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn build(self) -> Result<Config, DaijiError> {
        let mut defaults = Defaults::default();
        let mut source_attribution: HashMap<String, ConfigSource> = ATTRIBUTED_KEYS
            .iter()
            .map(|key| ((*key).to_string(), ConfigSource::Default))
            .collect();

        let programmatic = Defaults {
            mode: self.mode.map(Mode::number),
            charlist: self.charlist,
            json: self.json,
            verbose: self.verbose,
        };
        defaults.merge(
            programmatic,
            ConfigSource::Programmatic,
            &mut source_attribution,
        );

        let config = Config {
            defaults,
            source_attribution,
        };
        config.validate()?;
        Ok(config)
    }
}
