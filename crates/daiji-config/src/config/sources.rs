use std::collections::HashMap;

use crate::types::ConfigSource;

use super::Config;

impl Config {
    /// Get effective configuration as key-value pairs with source attribution
    #[must_use]
    pub fn effective_config(&self) -> HashMap<String, (String, String)> {
        let mut config = HashMap::new();

        let mut add_config = |key: &str, value: Option<String>| {
            if let Some(val) = value {
                let source = self
                    .source_attribution
                    .get(key)
                    .unwrap_or(&ConfigSource::Default)
                    .as_str()
                    .to_string();
                config.insert(key.to_string(), (val, source));
            }
        };

        add_config("mode", self.defaults.mode.map(|m| m.to_string()));
        add_config("charlist", self.defaults.charlist.clone());
        add_config("json", self.defaults.json.map(|b| b.to_string()));
        add_config("verbose", self.defaults.verbose.map(|b| b.to_string()));

        config
    }
}
