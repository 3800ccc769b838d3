use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use marketgate_eligibility::EligibilityWindow;
use marketgate_gate::RedirectTarget;
use marketgate_utils::types::ConfigSource;

/// Effective configuration after discovery, precedence and validation.
///
/// Values are typed and already validated; an invalid value never makes it
/// into a `Config`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where guarded payment routes redirect on iOS
    pub redirect_target: RedirectTarget,
    /// Cutoff and founding member cap of the free period
    pub eligibility_window: EligibilityWindow,
    /// Debug-level logging
    pub verbose: bool,
    /// Config file the values were read from, if any
    pub config_path: Option<Utf8PathBuf>,
    /// Track source of each setting for status display
    pub source_attribution: HashMap<String, ConfigSource>,
}

/// `[compliance]` section
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ComplianceSection {
    pub redirect_target: Option<String>,
}

/// `[eligibility]` section
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EligibilitySection {
    /// RFC 3339 timestamp, e.g. `"2026-03-01T00:00:00Z"`
    pub cutoff: Option<String>,
    pub founding_member_cap: Option<u32>,
}

/// `[logging]` section
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    pub verbose: Option<bool>,
}

/// TOML configuration file structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub compliance: ComplianceSection,
    #[serde(default)]
    pub eligibility: EligibilitySection,
    #[serde(default)]
    pub logging: LoggingSection,
}
