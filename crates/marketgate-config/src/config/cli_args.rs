use std::path::PathBuf;

/// CLI-provided overrides, highest precedence.
///
/// The free-period window is a deploy-time constant and has no CLI override.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Explicit config file; disables discovery
    pub config_path: Option<PathBuf>,
    pub redirect_target: Option<String>,
    pub verbose: Option<bool>,
}
