use chrono::{DateTime, Utc};

use marketgate_utils::error::MarketgateError;

use super::{Config, ConfigSource, Layers};

impl Config {
    /// Create a builder for programmatic configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use marketgate_config::Config;
    ///
    /// let config = Config::builder()
    ///     .redirect_target("/store-notice")
    ///     .founding_member_cap(250)
    ///     .build()
    ///     .expect("valid configuration");
    /// assert_eq!(config.redirect_target().as_str(), "/store-notice");
    /// ```
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Builder for programmatic configuration of marketgate.
///
/// Never reads files or the environment. All values set via the builder are
/// attributed to `ConfigSource::Programmatic`.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    redirect_target: Option<String>,
    cutoff: Option<DateTime<Utc>>,
    founding_member_cap: Option<u32>,
    verbose: Option<bool>,
}

impl ConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Route guarded payment pages redirect to on iOS
    #[must_use]
    pub fn redirect_target(mut self, target: impl Into<String>) -> Self {
        self.redirect_target = Some(target.into());
        self
    }

    /// First instant outside the free period
    #[must_use]
    pub fn cutoff(mut self, cutoff: DateTime<Utc>) -> Self {
        self.cutoff = Some(cutoff);
        self
    }

    #[must_use]
    pub fn founding_member_cap(mut self, cap: u32) -> Self {
        self.founding_member_cap = Some(cap);
        self
    }

    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<Config, MarketgateError> {
        let layers = Layers {
            redirect_target: self
                .redirect_target
                .map(|target| (target, ConfigSource::Programmatic)),
            cutoff: self.cutoff.map(|cutoff| (cutoff, ConfigSource::Programmatic)),
            founding_member_cap: self
                .founding_member_cap
                .map(|cap| (cap, ConfigSource::Programmatic)),
            verbose: self.verbose.map(|verbose| (verbose, ConfigSource::Programmatic)),
        };
        Config::assemble(layers, None)
    }
}
