//! Gate command implementation
//!
//! Handles `marketgate gate` for app-store compliance decisions.

use anyhow::{Context, Result};

use marketgate_gate::{ComplianceDecision, ComplianceGate, emit_compliance_json};
use tracing::info;

use super::host::build_probe;
use crate::cli::args::HostArgs;
use crate::{Config, ExitCode};

/// Execute the gate command.
///
/// Returns `POLICY_DENIED` under `enforce` when payment UI is hidden.
pub fn execute_gate_command(
    host: &HostArgs,
    enforce: bool,
    json: bool,
    config: &Config,
) -> Result<ExitCode> {
    let gate = ComplianceGate::from_probe(build_probe(host))
        .with_redirect_target(config.redirect_target().clone());
    let decision = gate.decide();

    if json {
        let output =
            emit_compliance_json(&decision).context("Failed to emit compliance JSON")?;
        println!("{output}");
    } else {
        print_decision(&decision);
    }

    if enforce && decision.hide_payments {
        info!(platform = %decision.platform, "Payment UI denied under --enforce");
        return Ok(ExitCode::POLICY_DENIED);
    }

    Ok(ExitCode::SUCCESS)
}

fn print_decision(decision: &ComplianceDecision) {
    let payments = if decision.hide_payments {
        "✗ hidden"
    } else {
        "✓ visible"
    };
    println!("platform: {}", decision.platform);
    println!("payments: {payments}");
    match &decision.redirect_target {
        Some(target) => println!("redirect: {target}"),
        None => println!("redirect: none"),
    }
}
