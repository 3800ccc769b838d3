//! Configuration management for marketgate
//!
//! Values are collected layer by layer (defaults, then file, then CLI or
//! builder), each tagged with its [`ConfigSource`], and validated once when
//! the [`Config`] is assembled.

mod builder;
mod cli_args;
mod discovery;
mod model;
mod sources;
mod validation;

pub use builder::ConfigBuilder;
pub use cli_args::CliArgs;
pub use model::*;
pub use marketgate_utils::types::ConfigSource;
pub use validation::MAX_FOUNDING_MEMBER_CAP;

use camino::Utf8PathBuf;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

use marketgate_eligibility::{BUILD_WINDOW, EligibilityPolicy, EligibilityWindow};
use marketgate_gate::RedirectTarget;
use marketgate_utils::error::MarketgateError;

/// Raw values gathered from every layer, highest precedence last written
#[derive(Debug, Clone, Default)]
pub(crate) struct Layers {
    pub(crate) redirect_target: Option<(String, ConfigSource)>,
    pub(crate) cutoff: Option<(DateTime<Utc>, ConfigSource)>,
    pub(crate) founding_member_cap: Option<(u32, ConfigSource)>,
    pub(crate) verbose: Option<(bool, ConfigSource)>,
}

impl Config {
    /// Validate the gathered layers and fill the gaps with build defaults
    pub(crate) fn assemble(
        layers: Layers,
        config_path: Option<Utf8PathBuf>,
    ) -> Result<Self, MarketgateError> {
        let mut source_attribution = HashMap::new();

        let redirect_target = match layers.redirect_target {
            Some((raw, source)) => {
                source_attribution.insert("redirect_target".to_string(), source);
                validation::validate_redirect_target(&raw)?
            }
            None => {
                source_attribution.insert("redirect_target".to_string(), ConfigSource::Default);
                RedirectTarget::default()
            }
        };

        let cutoff = match layers.cutoff {
            Some((cutoff, source)) => {
                source_attribution.insert("cutoff".to_string(), source);
                cutoff
            }
            None => {
                source_attribution.insert("cutoff".to_string(), ConfigSource::Default);
                BUILD_WINDOW.cutoff
            }
        };

        let founding_member_cap = match layers.founding_member_cap {
            Some((cap, source)) => {
                source_attribution.insert("founding_member_cap".to_string(), source);
                validation::validate_founding_member_cap(cap)?
            }
            None => {
                source_attribution
                    .insert("founding_member_cap".to_string(), ConfigSource::Default);
                BUILD_WINDOW.founding_member_cap
            }
        };

        let verbose = match layers.verbose {
            Some((verbose, source)) => {
                source_attribution.insert("verbose".to_string(), source);
                verbose
            }
            None => {
                source_attribution.insert("verbose".to_string(), ConfigSource::Default);
                false
            }
        };

        Ok(Self {
            redirect_target,
            eligibility_window: EligibilityWindow::new(cutoff, founding_member_cap),
            verbose,
            config_path,
            source_attribution,
        })
    }

    /// Build defaults with no file and no overrides
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            redirect_target: RedirectTarget::default(),
            eligibility_window: *BUILD_WINDOW,
            verbose: false,
            config_path: None,
            source_attribution: ["redirect_target", "cutoff", "founding_member_cap", "verbose"]
                .into_iter()
                .map(|key| (key.to_string(), ConfigSource::Default))
                .collect(),
        }
    }

    /// Redirect destination for the compliance gate
    #[must_use]
    pub fn redirect_target(&self) -> &RedirectTarget {
        &self.redirect_target
    }

    /// Free-period window for the eligibility policy
    #[must_use]
    pub fn eligibility_window(&self) -> EligibilityWindow {
        self.eligibility_window
    }

    /// Eligibility policy over the configured window
    #[must_use]
    pub fn eligibility_policy(&self) -> EligibilityPolicy {
        EligibilityPolicy::new(self.eligibility_window)
    }

    /// Source of a setting, `Default` when untracked
    #[must_use]
    pub fn source_of(&self, key: &str) -> ConfigSource {
        self.source_attribution
            .get(key)
            .cloned()
            .unwrap_or(ConfigSource::Default)
    }
}
