//! CLI command implementations (facade).
//!
//! This module re-exports the command surface used by `run.rs`.
//! Implementations live in `commands/*`. Every handler returns the exit code
//! to finish with; errors are reported by `run()`.

mod config;
mod detect;
mod eligibility;
mod gate;
mod host;

pub use config::execute_config_command;
pub use detect::execute_detect_command;
pub use eligibility::execute_eligibility_command;
pub use gate::execute_gate_command;
