//! CLI argument definitions and parsing structures
//!
//! This module defines the command-line interface structure using clap.

use clap::{CommandFactory, Parser};
use std::path::PathBuf;

use crate::CliArgs;

/// daiji - convert integers into formal Japanese daiji numerals
#[derive(Parser, Debug)]
#[command(name = "daiji")]
#[command(about = "Convert a number into daiji, the formal numerals used on receipts")]
#[command(long_about = r#"
daiji converts a whole number from 0 to 999,999,999,999 into daiji (大字),
the formal Japanese numerals written on receipts and legal documents.

EXAMPLES:
  daiji 123456
  壱拾弐万参千四百五拾六

  daiji 123456 --mode 2
  壹拾貳万參千四百五拾六

  daiji 123456 --mode 3
  壹拾貳萬參仟肆佰伍拾陸

  daiji 123456 --charlist "零一二三四五六七八九十百千万億"
  一十二万三千四百五十六

MODES:
  1  零壱弐参四五六七八九拾百千万億  (standard, used on receipts)
  2  零壹貳參四五六七八九拾百千万億  (formal-old)
  3  零壹貳參肆伍陸漆捌玖拾佰仟萬億  (formal-older)

CONFIGURATION:
  Configuration is loaded with precedence: CLI flags > config file > defaults
  Config file is discovered by searching upward from CWD for .daiji/config.toml
  Use --config to specify an explicit config file path

EXIT CODES:
  0 success, 1 rejected number or glyph table, 2 invalid arguments or configuration
"#)]
#[command(version)]
pub struct Cli {
    /// Number to convert (0 to 999,999,999,999)
    #[arg(value_name = "NUMBER", allow_negative_numbers = true)]
    pub number: String,

    /// Glyph table: 1 standard, 2 formal-old, 3 formal-older (default: 1)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
    pub mode: Option<u8>,

    /// Custom 15-glyph table; overrides --mode
    #[arg(long, visible_alias = "glyphs", value_name = "GLYPHS")]
    pub charlist: Option<String>,

    /// Print canonical JSON instead of bare text
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Configuration overrides carried by this invocation.
    ///
    /// Boolean flags only override when present, so a config file can still
    /// turn them on.
    #[must_use]
    pub fn to_cli_args(&self) -> CliArgs {
        CliArgs {
            config_path: self.config.clone(),
            mode: self.mode,
            charlist: self.charlist.clone(),
            json: self.json.then_some(true),
            verbose: self.verbose.then_some(true),
        }
    }
}

/// Build the clap command, for help rendering and introspection.
#[must_use]
pub fn build_cli() -> clap::Command {
    Cli::command()
}
