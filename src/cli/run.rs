//! CLI entry point and dispatch logic
//!
//! This module owns the `run()` function which:
//! - Parses CLI arguments
//! - Builds CliArgs and discovers Config
//! - Installs the tracing subscriber
//! - Dispatches to command handlers
//! - Handles all error output

use clap::Parser;

use super::args::{Cli, Commands};
use super::commands;

use crate::error_reporter::{create_contextual_report, exit_code_for};
use crate::{CliArgs, Config, ExitCode};

/// Main CLI execution function.
///
/// This function handles ALL output including errors. It returns `Result<(), ExitCode>`:
/// - On success: returns `Ok(())` after printing any output
/// - On a policy denial under `--enforce`: returns `Err(ExitCode::POLICY_DENIED)`
/// - On error: prints error message via contextual reporting, returns `Err(ExitCode)`
///
/// main.rs only calls `std::process::exit(code.as_i32())` on error - it does NOT print.
pub fn run() -> Result<(), ExitCode> {
    let cli = Cli::parse();

    let cli_args = CliArgs {
        config_path: cli.config.clone(),
        redirect_target: cli.redirect_target.clone(),
        // Absent flag leaves room for `[logging] verbose` in the file
        verbose: cli.verbose.then_some(true),
    };

    let config = match Config::discover(&cli_args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", create_contextual_report(&err, "config"));
            return Err(exit_code_for(&err));
        }
    };

    if let Err(e) = marketgate_utils::logging::init_tracing(config.verbose) {
        eprintln!("Warning: failed to initialize logging: {e}");
    }

    let operation = match &cli.command {
        Commands::Detect { .. } => "detect",
        Commands::Gate { .. } => "gate",
        Commands::Eligibility { .. } => "eligibility",
        Commands::Config { .. } => "config",
    };

    let result = match cli.command {
        Commands::Detect { host, json } => commands::execute_detect_command(&host, json),
        Commands::Gate {
            host,
            enforce,
            json,
        } => commands::execute_gate_command(&host, enforce, json, &config),
        Commands::Eligibility {
            now,
            founding_members,
            long,
            enforce,
            json,
        } => commands::execute_eligibility_command(
            now.as_deref(),
            founding_members,
            long,
            enforce,
            json,
            &config,
        ),
        Commands::Config { json } => commands::execute_config_command(json, &config),
    };

    match result {
        Ok(code) if code == ExitCode::SUCCESS => Ok(()),
        Ok(code) => Err(code),
        Err(err) => {
            eprintln!("{}", create_contextual_report(&err, operation));
            Err(exit_code_for(&err))
        }
    }
}
