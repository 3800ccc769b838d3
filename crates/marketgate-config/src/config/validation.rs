use chrono::{DateTime, Utc};

use marketgate_gate::RedirectTarget;
use marketgate_utils::error::{ConfigError, MarketgateError};

/// Upper bound for `founding_member_cap`
pub const MAX_FOUNDING_MEMBER_CAP: u32 = 1_000_000;

pub(crate) fn validate_redirect_target(raw: &str) -> Result<RedirectTarget, MarketgateError> {
    RedirectTarget::new(raw).map_err(|e| {
        MarketgateError::Config(ConfigError::InvalidValue {
            key: "redirect_target".to_string(),
            value: e.to_string(),
        })
    })
}

pub(crate) fn validate_cutoff(raw: &str) -> Result<DateTime<Utc>, MarketgateError> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            MarketgateError::Config(ConfigError::InvalidValue {
                key: "cutoff".to_string(),
                value: format!("'{raw}' is not an RFC 3339 timestamp: {e}"),
            })
        })
}

pub(crate) fn validate_founding_member_cap(cap: u32) -> Result<u32, MarketgateError> {
    if cap == 0 {
        return Err(MarketgateError::Config(ConfigError::InvalidValue {
            key: "founding_member_cap".to_string(),
            value: "must be greater than 0".to_string(),
        }));
    }
    if cap > MAX_FOUNDING_MEMBER_CAP {
        return Err(MarketgateError::Config(ConfigError::InvalidValue {
            key: "founding_member_cap".to_string(),
            value: "exceeds maximum limit of 1,000,000".to_string(),
        }));
    }
    Ok(cap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_redirect_target_must_be_absolute() {
        assert!(validate_redirect_target("/ios-blocked").is_ok());
        let err = validate_redirect_target("ios-blocked").unwrap_err();
        assert!(err.to_string().contains("redirect_target"));
    }

    #[test]
    fn test_cutoff_parses_offsets_into_utc() {
        let cutoff = validate_cutoff("2026-02-28T19:00:00-05:00").unwrap();
        assert_eq!(cutoff, Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap());
        assert!(validate_cutoff("March 1st").is_err());
    }

    #[test]
    fn test_founding_member_cap_bounds() {
        assert!(validate_founding_member_cap(0).is_err());
        assert_eq!(validate_founding_member_cap(1).unwrap(), 1);
        assert_eq!(
            validate_founding_member_cap(MAX_FOUNDING_MEMBER_CAP).unwrap(),
            MAX_FOUNDING_MEMBER_CAP
        );
        assert!(validate_founding_member_cap(MAX_FOUNDING_MEMBER_CAP + 1).is_err());
    }
}
