//! marketgate - platform compliance gating and free-period eligibility
//!
//! The marketplace front-end ships both as a website and inside a native app
//! shell. Two independent policies decide what it may show:
//!
//! - **Compliance gate**: app-store policy forbids external payment flows in
//!   the iOS build, so payment and subscription UI is hidden and guarded
//!   routes redirect when the host resolves to iOS.
//! - **Eligibility**: the platform is free for businesses until a cutoff date
//!   or until the founding member cap fills, whichever comes first.
//!
//! Both are pure decisions over (current time, host environment, fixed
//! configuration). Host inspection is injected through [`PlatformProbe`].
//!
//! # Quick Start (Library)
//!
//! ```rust
//! use marketgate::{ComplianceGate, EligibilityPolicy, HostSnapshot, RouteDecision};
//! use chrono::{TimeZone, Utc};
//!
//! let host = HostSnapshot::default().with_native(true).with_platform_name("ios");
//! let gate = ComplianceGate::from_probe(host);
//! assert!(gate.should_hide_payments());
//! assert!(matches!(gate.guard_route(), RouteDecision::Redirect(_)));
//!
//! let policy = EligibilityPolicy::default();
//! let now = Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap();
//! assert!(policy.is_in_free_period(now));
//! assert_eq!(policy.deadline_message(false), "Free until March 1, 2026");
//! ```
//!
//! # Quick Start (CLI)
//!
//! ```bash
//! # Which platform does this host resolve to?
//! marketgate detect --platform ios --native fail
//!
//! # Would payment UI render? Exit code 3 under --enforce when hidden.
//! marketgate gate --scheme capacitor --enforce
//!
//! # Is the platform still free?
//! marketgate eligibility --now 2026-02-28T23:59:59Z --founding-members 420 --json
//! ```
//!
//! # JSON Contracts
//!
//! `--json` output is emitted in JCS (RFC 8785) canonical form through
//! [`emit_jcs`].

pub mod cli;
pub mod error_reporter;

pub use marketgate_config::{CliArgs, Config, ConfigBuilder, ConfigSource};
pub use marketgate_eligibility::{
    BUILD_WINDOW, EligibilityDecision, EligibilityPolicy, EligibilityReason, EligibilityWindow,
};
pub use marketgate_gate::{
    ComplianceDecision, ComplianceGate, DEFAULT_REDIRECT_TARGET, RedirectTarget, RouteDecision,
    Visibility,
};
pub use marketgate_platform::{
    Detection, ExecutionMode, HostSnapshot, NoBridge, PlatformDetector, PlatformIdentity,
    PlatformProbe, ProbeError, Signal,
};
pub use marketgate_utils::canonicalization::emit_jcs;
pub use marketgate_utils::error::{ConfigError, MarketgateError, UserFriendlyError};
pub use marketgate_utils::exit_codes::ExitCode;
