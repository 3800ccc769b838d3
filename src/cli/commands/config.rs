//! Config command implementation
//!
//! Handles `marketgate config`: the effective configuration with the source
//! of every value.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;

use marketgate_utils::canonicalization::emit_jcs;

use crate::{Config, ExitCode};

#[derive(Serialize)]
struct ConfigEntry {
    value: String,
    source: String,
}

#[derive(Serialize)]
struct ConfigReport {
    config_path: Option<String>,
    values: BTreeMap<String, ConfigEntry>,
}

/// Execute the config command
pub fn execute_config_command(json: bool, config: &Config) -> Result<ExitCode> {
    let effective = config.effective_config();

    if json {
        let report = ConfigReport {
            config_path: config.config_path.as_ref().map(ToString::to_string),
            values: effective
                .into_iter()
                .map(|(key, (value, source))| (key, ConfigEntry { value, source }))
                .collect(),
        };
        let output = emit_jcs(&report).context("Failed to emit config JSON")?;
        println!("{output}");
        return Ok(ExitCode::SUCCESS);
    }

    match &config.config_path {
        Some(path) => println!("config file: {path}"),
        None => println!("config file: none"),
    }
    for (key, (value, source)) in &effective {
        println!("  {key} = {value} ({source})");
    }

    Ok(ExitCode::SUCCESS)
}
