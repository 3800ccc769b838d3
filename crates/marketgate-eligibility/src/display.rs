//! Human-readable rendering of the free-period deadline

use chrono::{DateTime, Utc};

/// Render a cutoff as `March 1, 2026` (UTC)
#[must_use]
pub fn format_end_date(cutoff: DateTime<Utc>) -> String {
    cutoff.format("%B %-d, %Y").to_string()
}

/// Render a count with comma thousands separators: `1000` -> `1,000`
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `Free until March 1, 2026`
#[must_use]
pub fn short_deadline(end_date: &str) -> String {
    format!("Free until {end_date}")
}

/// Full sentence naming both the date and the founding member cap
#[must_use]
pub fn long_deadline(end_date: &str, founding_member_cap: u32) -> String {
    format!(
        "Free for all businesses until {end_date} or the first {} founding members, whichever comes first.",
        group_thousands(u64::from(founding_member_cap))
    )
}
