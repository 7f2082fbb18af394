use std::path::PathBuf;

/// CLI overrides fed into [`Config::discover`](super::Config::discover).
///
/// `None` means "not given on the command line" so lower-precedence sources
/// can still apply.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub config_path: Option<PathBuf>,
    pub mode: Option<u8>,
    pub charlist: Option<String>,
    pub json: Option<bool>,
    pub verbose: Option<bool>,
}
