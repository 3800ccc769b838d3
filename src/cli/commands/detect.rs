//! Detect command implementation
//!
//! Handles `marketgate detect`: resolves identity and execution mode of the
//! host described by the flags.

use anyhow::{Context, Result};

use marketgate_platform::PlatformDetector;
use marketgate_utils::canonicalization::emit_jcs;

use super::host::build_probe;
use crate::ExitCode;
use crate::cli::args::HostArgs;

/// Execute the detect command
pub fn execute_detect_command(host: &HostArgs, json: bool) -> Result<ExitCode> {
    let detector = PlatformDetector::new(build_probe(host));
    let detection = detector.detect_full();

    if json {
        let output = emit_jcs(&detection).context("Failed to emit detection JSON")?;
        println!("{output}");
    } else {
        println!("platform: {}", detection.identity);
        println!("mode: {}", detection.mode);
    }

    Ok(ExitCode::SUCCESS)
}
