//! JSON emission for eligibility decisions

use anyhow::Context;
use marketgate_utils::canonicalization::emit_jcs;

use crate::policy::EligibilityDecision;

/// Emit an eligibility decision as canonical JSON using JCS (RFC 8785)
pub fn emit_eligibility_json(decision: &EligibilityDecision) -> anyhow::Result<String> {
    emit_jcs(decision).context("Failed to emit eligibility JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::EligibilityPolicy;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_emit_eligibility_json() {
        let now = Utc.with_ymd_and_hms(2026, 2, 28, 23, 59, 59).unwrap();
        let decision = EligibilityPolicy::default().evaluate(now, Some(12), false);

        let parsed: serde_json::Value =
            serde_json::from_str(&emit_eligibility_json(&decision).unwrap()).unwrap();

        assert_eq!(parsed["in_free_period"], true);
        assert_eq!(parsed["reason"], "before_cutoff");
        assert_eq!(parsed["cutoff"], "2026-03-01T00:00:00Z");
        assert_eq!(parsed["founding_member_cap"], 1000);
        assert_eq!(parsed["founding_members"], 12);
        assert_eq!(parsed["end_date_display"], "March 1, 2026");
    }
}
