//! daiji-config - configuration for the daiji CLI and embedders
//!
//! Precedence is CLI > config file > built-in defaults; programmatic
//! configuration goes through [`ConfigBuilder`].

pub mod config;

pub use config::{CliArgs, Config, ConfigBuilder, ConfigSource, Defaults};

pub(crate) use daiji_utils::{error, types};
