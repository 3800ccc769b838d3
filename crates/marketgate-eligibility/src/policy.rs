//! Free-period eligibility decisions
//!
//! `is_in_free_period` is the authoritative date check: free strictly before
//! the cutoff, not free at the cutoff instant or after it.
//!
//! `evaluate` adds the founding member criterion when the caller has a live
//! count: the period ends at the cutoff or once `count >= cap`, whichever
//! comes first. Without a count only the date decides.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::display::{format_end_date, long_deadline, short_deadline};
use crate::window::{BUILD_WINDOW, EligibilityWindow};

/// Why a decision came out the way it did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityReason {
    /// Before the cutoff and the founding member cap is not reached (or unknown)
    BeforeCutoff,
    /// The cutoff instant has passed
    CutoffReached,
    /// Before the cutoff, but the founding member cap is filled
    FoundingMembersFull,
}

/// Outcome of one eligibility evaluation plus the strings to display with it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityDecision {
    pub in_free_period: bool,
    pub reason: EligibilityReason,
    pub cutoff: DateTime<Utc>,
    pub founding_member_cap: u32,
    /// Count supplied by the caller, if any
    pub founding_members: Option<u64>,
    pub end_date_display: String,
    pub deadline_message: String,
}

/// Free-period policy over a fixed [`EligibilityWindow`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EligibilityPolicy {
    window: EligibilityWindow,
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self::new(*BUILD_WINDOW)
    }
}

impl EligibilityPolicy {
    #[must_use]
    pub const fn new(window: EligibilityWindow) -> Self {
        Self { window }
    }

    #[must_use]
    pub const fn window(&self) -> &EligibilityWindow {
        &self.window
    }

    /// True iff `now` is strictly earlier than the cutoff
    #[must_use]
    pub fn is_in_free_period(&self, now: DateTime<Utc>) -> bool {
        now < self.window.cutoff
    }

    /// Cap for callers combining it with an externally fetched member count
    #[must_use]
    pub const fn founding_member_cap(&self) -> u32 {
        self.window.founding_member_cap
    }

    /// The cutoff date as shown to users, e.g. `March 1, 2026`
    #[must_use]
    pub fn end_date_display(&self) -> String {
        format_end_date(self.window.cutoff)
    }

    /// Deadline sentence; `long` also names the founding member cap
    #[must_use]
    pub fn deadline_message(&self, long: bool) -> String {
        let end_date = self.end_date_display();
        if long {
            long_deadline(&end_date, self.window.founding_member_cap)
        } else {
            short_deadline(&end_date)
        }
    }

    /// Combine the date check with an optional live founding member count.
    ///
    /// `long` picks the deadline sentence carried by the decision, as in
    /// [`deadline_message`](Self::deadline_message).
    #[must_use]
    pub fn evaluate(
        &self,
        now: DateTime<Utc>,
        founding_members: Option<u64>,
        long: bool,
    ) -> EligibilityDecision {
        let cap = u64::from(self.window.founding_member_cap);

        let reason = if !self.is_in_free_period(now) {
            EligibilityReason::CutoffReached
        } else if founding_members.is_some_and(|count| count >= cap) {
            EligibilityReason::FoundingMembersFull
        } else {
            EligibilityReason::BeforeCutoff
        };
        let in_free_period = reason == EligibilityReason::BeforeCutoff;

        debug!(
            now = %now,
            cutoff = %self.window.cutoff,
            founding_members = ?founding_members,
            cap,
            in_free_period,
            "Evaluated free period eligibility"
        );

        EligibilityDecision {
            in_free_period,
            reason,
            cutoff: self.window.cutoff,
            founding_member_cap: self.window.founding_member_cap,
            founding_members,
            end_date_display: self.end_date_display(),
            deadline_message: self.deadline_message(long),
        }
    }
}
