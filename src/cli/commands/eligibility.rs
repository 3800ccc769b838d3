//! Eligibility command implementation
//!
//! Handles `marketgate eligibility` for the free-period policy.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::info;

use marketgate_eligibility::display::group_thousands;
use marketgate_eligibility::{EligibilityDecision, EligibilityReason, emit_eligibility_json};

use crate::{Config, ExitCode, MarketgateError};

/// Execute the eligibility command.
///
/// `now` defaults to the current time. Returns `POLICY_DENIED` under
/// `enforce` once the free period is over.
pub fn execute_eligibility_command(
    now: Option<&str>,
    founding_members: Option<u64>,
    long: bool,
    enforce: bool,
    json: bool,
    config: &Config,
) -> Result<ExitCode> {
    let now = match now {
        Some(raw) => parse_now(raw)?,
        None => Utc::now(),
    };

    let policy = config.eligibility_policy();
    let decision = policy.evaluate(now, founding_members, long);

    if json {
        let output =
            emit_eligibility_json(&decision).context("Failed to emit eligibility JSON")?;
        println!("{output}");
    } else {
        print_decision(&decision);
    }

    if enforce && !decision.in_free_period {
        info!(reason = reason_label(decision.reason), "Free period closed under --enforce");
        return Ok(ExitCode::POLICY_DENIED);
    }

    Ok(ExitCode::SUCCESS)
}

fn parse_now(raw: &str) -> Result<DateTime<Utc>, MarketgateError> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|e| MarketgateError::InvalidInput {
            field: "--now".to_string(),
            reason: format!("'{raw}' is not an RFC 3339 timestamp ({e})"),
        })
}

fn reason_label(reason: EligibilityReason) -> &'static str {
    match reason {
        EligibilityReason::BeforeCutoff => "before cutoff",
        EligibilityReason::CutoffReached => "cutoff reached",
        EligibilityReason::FoundingMembersFull => "founding members full",
    }
}

fn print_decision(decision: &EligibilityDecision) {
    let status = if decision.in_free_period {
        "✓ open"
    } else {
        "✗ closed"
    };
    println!("free period: {status} ({})", reason_label(decision.reason));
    println!("ends: {}", decision.end_date_display);
    if let Some(count) = decision.founding_members {
        println!(
            "founding members: {} / {}",
            group_thousands(count),
            group_thousands(u64::from(decision.founding_member_cap))
        );
    }
    println!("{}", decision.deadline_message);
}
