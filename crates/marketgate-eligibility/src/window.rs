//! The free-access window

use chrono::{DateTime, TimeDelta, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Build-time cutoff: 2026-03-01T00:00:00Z
pub const DEFAULT_CUTOFF_UNIX_SECS: i64 = 1_772_323_200;

/// Build-time founding member cap
pub const DEFAULT_FOUNDING_MEMBER_CAP: u32 = 1_000;

/// Window compiled into this build
pub static BUILD_WINDOW: Lazy<EligibilityWindow> = Lazy::new(EligibilityWindow::default);

/// Cutoff instant and founding member cap of the free-access period.
///
/// Set once at build or deploy time and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityWindow {
    /// First instant that is no longer free (exclusive end of the period)
    pub cutoff: DateTime<Utc>,
    /// Number of founding members after which the period ends early
    pub founding_member_cap: u32,
}

impl EligibilityWindow {
    #[must_use]
    pub const fn new(cutoff: DateTime<Utc>, founding_member_cap: u32) -> Self {
        Self {
            cutoff,
            founding_member_cap,
        }
    }
}

impl Default for EligibilityWindow {
    fn default() -> Self {
        Self {
            cutoff: DateTime::<Utc>::UNIX_EPOCH + TimeDelta::seconds(DEFAULT_CUTOFF_UNIX_SECS),
            founding_member_cap: DEFAULT_FOUNDING_MEMBER_CAP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_cutoff_is_first_of_march_2026() {
        let expected = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(EligibilityWindow::default().cutoff, expected);
        assert_eq!(BUILD_WINDOW.cutoff, expected);
    }

    #[test]
    fn test_default_cap() {
        assert_eq!(BUILD_WINDOW.founding_member_cap, 1_000);
    }
}
