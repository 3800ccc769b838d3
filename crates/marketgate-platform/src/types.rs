//! Platform identity value types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

/// Platform the front-end is running on.
///
/// Derived on every query from the host environment and never stored.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PlatformIdentity {
    /// Ordinary browser, or anything detection could not classify
    Web,
    /// iOS app shell
    Ios,
    /// Android app shell
    Android,
}

impl PlatformIdentity {
    /// True for the app-shell platforms
    #[must_use]
    pub const fn is_native(self) -> bool {
        matches!(self, Self::Ios | Self::Android)
    }
}

/// Whether the code runs inside a native shell or a plain browser
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ExecutionMode {
    Native,
    Web,
}

/// Identity and execution mode resolved by a single detection pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    pub identity: PlatformIdentity,
    pub mode: ExecutionMode,
}

impl Detection {
    /// The least-privileged detection: a plain web browser
    pub const WEB: Detection = Detection {
        identity: PlatformIdentity::Web,
        mode: ExecutionMode::Web,
    };
}
