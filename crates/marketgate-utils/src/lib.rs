//! Foundation utilities shared by the marketgate crates
//!
//! Error types, exit codes, tracing setup and canonical JSON emission live
//! here so the policy crates and the CLI agree on them.

pub mod canonicalization;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod types;
