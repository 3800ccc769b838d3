//! Error reporting for the CLI
//!
//! Turns an `anyhow::Error` coming out of a command into the text printed on
//! stderr and the exit code the process ends with.

use marketgate_utils::error::MarketgateError;
use marketgate_utils::exit_codes::ExitCode;

/// Build the stderr report for `err`, naming the operation that failed
#[must_use]
pub fn create_contextual_report(err: &anyhow::Error, operation: &str) -> String {
    match err.downcast_ref::<MarketgateError>() {
        Some(known) => {
            let mut report = known.display_for_user();
            // Causes already spelled out by the known error are dropped
            let known_text = known.to_string();
            let chain: Vec<String> = err
                .chain()
                .map(ToString::to_string)
                .filter(|cause| !known_text.contains(cause.as_str()))
                .collect();
            if !chain.is_empty() {
                report.push_str(&format!("\nWhile running '{operation}':\n"));
                for cause in chain {
                    report.push_str(&format!("  caused by: {cause}\n"));
                }
            }
            report
        }
        None => format!("Error: '{operation}' failed: {err:#}\n"),
    }
}

/// Exit code for `err`; unknown errors are internal failures
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    err.downcast_ref::<MarketgateError>()
        .map_or(ExitCode::INTERNAL, MarketgateError::to_exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use marketgate_utils::error::ConfigError;

    #[test]
    fn test_known_error_uses_user_message() {
        let err: anyhow::Error = MarketgateError::InvalidInput {
            field: "--now".to_string(),
            reason: "not a timestamp".to_string(),
        }
        .into();

        let report = create_contextual_report(&err, "eligibility");
        assert!(report.starts_with("Error: Invalid value for --now"));
        assert_eq!(exit_code_for(&err), ExitCode::CLI_ARGS);
    }

    #[test]
    fn test_context_chain_is_reported() {
        let err = Err::<(), _>(MarketgateError::Config(ConfigError::NotFound {
            path: "/x/config.toml".to_string(),
        }))
        .context("Failed to load config file: /x/config.toml")
        .unwrap_err();

        let report = create_contextual_report(&err, "config");
        assert!(report.contains("Configuration file not found"));
        assert!(report.contains("While running 'config'"));
        assert_eq!(exit_code_for(&err), ExitCode::CLI_ARGS);
    }

    #[test]
    fn test_unknown_error_is_internal() {
        let err = anyhow::anyhow!("stdout closed");
        assert_eq!(exit_code_for(&err), ExitCode::INTERNAL);
        assert!(create_contextual_report(&err, "gate").contains("stdout closed"));
    }
}
