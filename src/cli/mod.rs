//! Command-line interface for marketgate
//!
//! Exposes the platform detector, the compliance gate and the eligibility
//! policy as subcommands so that a host environment can be described with
//! flags and the resulting decisions inspected or enforced in scripts.
//!
//! ## Module Structure
//!
//! - `args`: CLI argument definitions and parsing structures (clap)
//! - `run`: Main entry point and command dispatch
//! - `commands`: Command implementations

pub mod args;
mod commands;
mod run;

pub use args::{Cli, Commands, HostArgs, NativeFlag};

pub use run::run;
