//! Configuration for marketgate
//!
//! Hierarchical configuration with discovery and precedence:
//! CLI > config file > defaults. The file is TOML with `[compliance]`,
//! `[eligibility]` and `[logging]` sections.

pub mod config;

pub use config::{CliArgs, Config, ConfigBuilder, ConfigSource};
