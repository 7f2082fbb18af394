use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, DaijiError};

use super::model::ATTRIBUTED_KEYS;
use super::{CliArgs, Config, ConfigSource, Defaults};

/// Directory holding the config file, relative to a project root.
pub const CONFIG_DIR: &str = ".daiji";
/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    defaults: Option<Defaults>,
}

impl Config {
    /// Discover and load configuration with precedence: CLI > file > defaults
    ///
    /// Uses current working directory for config file discovery when no explicit
    /// path is provided in cli_args.
    pub fn discover(cli_args: &CliArgs) -> Result<Self> {
        let start_dir = std::env::current_dir().context("Failed to get current directory")?;
        Self::discover_from(&start_dir, cli_args)
    }

    /// Discover and load configuration starting from a specific directory
    ///
    /// This is the path-driven variant used by tests to avoid process-global state.
    pub fn discover_from(start_dir: &Path, cli_args: &CliArgs) -> Result<Self> {
        let mut defaults = Defaults::default();
        let mut source_attribution: HashMap<String, ConfigSource> = ATTRIBUTED_KEYS
            .iter()
            .map(|key| ((*key).to_string(), ConfigSource::Default))
            .collect();

        let config_path = match &cli_args.config_path {
            Some(explicit_path) => Some(explicit_path.clone()),
            None => Self::discover_config_file_from(start_dir),
        };

        if let Some(path) = &config_path {
            let file_config = Self::load_config_file(path)
                .with_context(|| format!("Failed to load config file: {}", path.display()))?;

            if let Some(file_defaults) = file_config.defaults {
                defaults.merge(file_defaults, ConfigSource::Config, &mut source_attribution);
            }
        }

        let cli_defaults = Defaults {
            mode: cli_args.mode,
            charlist: cli_args.charlist.clone(),
            json: cli_args.json,
            verbose: cli_args.verbose,
        };
        defaults.merge(cli_defaults, ConfigSource::Cli, &mut source_attribution);

        let config = Self {
            defaults,
            source_attribution,
        };

        config.validate()?;

        Ok(config)
    }

    /// Discover config file by searching upward from a given directory
    ///
    /// Walks up the directory tree looking for `.daiji/config.toml`, stopping
    /// at repository root markers (.git, .hg, .svn) or filesystem root.
    #[must_use]
    pub fn discover_config_file_from(start_dir: &Path) -> Option<PathBuf> {
        let mut current_dir = start_dir;

        loop {
            let config_path = current_dir.join(CONFIG_DIR).join(CONFIG_FILE);
            if config_path.is_file() {
                return Some(config_path);
            }

            if [".git", ".hg", ".svn"]
                .iter()
                .any(|marker| current_dir.join(marker).exists())
            {
                return None;
            }

            current_dir = current_dir.parent()?;
        }
    }

    /// Load configuration from TOML file
    fn load_config_file(path: &Path) -> Result<TomlConfig, DaijiError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| {
                DaijiError::Config(ConfigError::InvalidFile(format!(
                    "{}: {}",
                    path.display(),
                    e.to_string().trim_end()
                )))
            }),
            // Missing config file is OK - defaults apply
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(TomlConfig::default()),
            Err(e) => Err(DaijiError::Io(e)),
        }
    }
}

impl Defaults {
    /// Overlay every `Some` field of `other`, recording `source` for it.
    pub(crate) fn merge(
        &mut self,
        other: Defaults,
        source: ConfigSource,
        attribution: &mut HashMap<String, ConfigSource>,
    ) {
        let mut record = |key: &str| {
            attribution.insert(key.to_string(), source.clone());
        };

        if other.mode.is_some() {
            self.mode = other.mode;
            record("mode");
        }
        if other.charlist.is_some() {
            self.charlist = other.charlist;
            record("charlist");
        }
        if other.json.is_some() {
            self.json = other.json;
            record("json");
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
            record("verbose");
        }
    }
}
