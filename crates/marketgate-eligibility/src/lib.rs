//! Free-period eligibility policy
//!
//! The platform is free for businesses until a fixed cutoff instant or until
//! a cap of founding members signs up, whichever comes first. The cutoff is
//! checked here; the live member count comes from the backend and is passed
//! in by the caller.

pub mod display;
pub mod json;
pub mod policy;
pub mod window;

pub use json::emit_eligibility_json;
pub use policy::{EligibilityDecision, EligibilityPolicy, EligibilityReason};
pub use window::{
    BUILD_WINDOW, DEFAULT_CUTOFF_UNIX_SECS, DEFAULT_FOUNDING_MEMBER_CAP, EligibilityWindow,
};
