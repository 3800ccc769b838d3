use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use std::path::{Path, PathBuf};
use tracing::debug;

use marketgate_utils::error::{ConfigError, MarketgateError};

use super::validation::validate_cutoff;
use super::{CliArgs, Config, ConfigSource, Layers, TomlConfig};

/// Directory holding the project config file
pub const CONFIG_DIR_NAME: &str = ".marketgate";

/// Name of the config file inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.toml";

impl Config {
    /// Discover and load configuration with precedence: CLI > file > defaults
    ///
    /// Searches upward from the current directory; when nothing is found
    /// there, falls back to `<user config dir>/marketgate/config.toml`.
    pub fn discover(cli_args: &CliArgs) -> Result<Self> {
        let start_dir = std::env::current_dir().context("Failed to get current directory")?;
        let config_path = match &cli_args.config_path {
            Some(explicit) => Some(explicit.clone()),
            None => Self::discover_config_file_from(&start_dir)?.or_else(user_config_file),
        };
        Self::load_with(config_path, cli_args)
    }

    /// Discover and load configuration starting from a specific directory
    ///
    /// Path-driven variant used by tests; never consults the user config dir.
    pub fn discover_from(start_dir: &Path, cli_args: &CliArgs) -> Result<Self> {
        let config_path = match &cli_args.config_path {
            Some(explicit) => Some(explicit.clone()),
            None => Self::discover_config_file_from(start_dir)?,
        };
        Self::load_with(config_path, cli_args)
    }

    /// Search upward from `start_dir` for `.marketgate/config.toml`.
    ///
    /// Stops at the first repository root (`.git`, `.hg`, `.svn`) or at the
    /// filesystem root.
    pub fn discover_config_file_from(start_dir: &Path) -> Result<Option<PathBuf>> {
        let mut current_dir = start_dir.to_path_buf();

        loop {
            let config_path = current_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Ok(Some(config_path));
            }

            if current_dir.join(".git").exists()
                || current_dir.join(".hg").exists()
                || current_dir.join(".svn").exists()
            {
                break;
            }

            if !current_dir.pop() {
                break;
            }
        }

        Ok(None)
    }

    fn load_with(config_path: Option<PathBuf>, cli_args: &CliArgs) -> Result<Self> {
        let mut layers = Layers::default();

        let config_path = match config_path {
            Some(path) => {
                let file_config = Self::load_config_file(&path)
                    .with_context(|| format!("Failed to load config file: {}", path.display()))?;
                apply_file(&mut layers, file_config)?;
                debug!(path = %path.display(), "Loaded config file");
                Some(Utf8PathBuf::from_path_buf(path).map_err(|p| {
                    MarketgateError::Config(ConfigError::InvalidFile(format!(
                        "config path is not valid UTF-8: {}",
                        p.display()
                    )))
                })?)
            }
            None => None,
        };

        if let Some(target) = &cli_args.redirect_target {
            layers.redirect_target = Some((target.clone(), ConfigSource::Cli));
        }
        if let Some(verbose) = cli_args.verbose {
            layers.verbose = Some((verbose, ConfigSource::Cli));
        }

        Ok(Self::assemble(layers, config_path)?)
    }

    /// Load configuration from TOML file
    fn load_config_file(path: &Path) -> Result<TomlConfig> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(MarketgateError::Config(ConfigError::NotFound {
                    path: path.display().to_string(),
                })
                .into());
            }
            Err(e) => return Err(MarketgateError::Io(e).into()),
        };

        toml::from_str(&content).map_err(|e| {
            MarketgateError::Config(ConfigError::InvalidFile(format!(
                "{}: {}",
                path.display(),
                e.message()
            )))
            .into()
        })
    }
}

fn apply_file(layers: &mut Layers, file: TomlConfig) -> Result<(), MarketgateError> {
    if let Some(target) = file.compliance.redirect_target {
        layers.redirect_target = Some((target, ConfigSource::Config));
    }
    if let Some(raw) = file.eligibility.cutoff {
        layers.cutoff = Some((validate_cutoff(&raw)?, ConfigSource::Config));
    }
    if let Some(cap) = file.eligibility.founding_member_cap {
        layers.founding_member_cap = Some((cap, ConfigSource::Config));
    }
    if let Some(verbose) = file.logging.verbose {
        layers.verbose = Some((verbose, ConfigSource::Config));
    }
    Ok(())
}

fn user_config_file() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("marketgate").join(CONFIG_FILE_NAME);
    path.exists().then_some(path)
}
