//! Compliance gate for payment and subscription UI
//!
//! App-store policy forbids external payment flows inside the iOS build.
//! [`ComplianceGate`] turns the detected platform into explicit decisions:
//! whether payment UI is visible and whether a guarded route redirects.

pub mod compliance;
pub mod json;
pub mod types;

pub use compliance::ComplianceGate;
pub use json::emit_compliance_json;
pub use types::{
    ComplianceDecision, DEFAULT_REDIRECT_TARGET, InvalidRedirectTarget, RedirectTarget,
    RouteDecision, Visibility,
};
