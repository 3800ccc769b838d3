use std::fmt;
use thiserror::Error;

use crate::exit_codes::ExitCode;

/// Library-level error type for marketgate.
///
/// The policy components never return errors: probe failures are absorbed
/// inside the detector. `MarketgateError` covers the ambient layer around
/// them, i.e. configuration loading and CLI input.
///
/// | Category | Description |
/// |----------|-------------|
/// | `Config` | Configuration file or value errors |
/// | `InvalidInput` | Malformed CLI input (timestamps, host flags) |
/// | `Io` | Filesystem errors while reading configuration |
///
/// Use [`to_exit_code()`](Self::to_exit_code) to map an error to the CLI
/// exit code and [`display_for_user()`](Self::display_for_user) for a
/// message with suggestions.
///
/// ```rust
/// use marketgate_utils::error::{ConfigError, MarketgateError};
/// use marketgate_utils::exit_codes::ExitCode;
///
/// let err = MarketgateError::Config(ConfigError::InvalidFile("bad toml".to_string()));
/// assert_eq!(err.to_exit_code(), ExitCode::CLI_ARGS);
/// ```
#[derive(Error, Debug)]
pub enum MarketgateError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for errors that can explain themselves to an end user
pub trait UserFriendlyError {
    /// Get a user-friendly error message
    fn user_message(&self) -> String;

    /// Get contextual information about the error
    fn context(&self) -> Option<String>;

    /// Get suggested actions to resolve the error
    fn suggestions(&self) -> Vec<String>;

    /// Get the error category for grouping similar errors
    fn category(&self) -> ErrorCategory;
}

/// Categories of errors for grouping in reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    FileSystem,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Input => write!(f, "Input"),
            Self::FileSystem => write!(f, "File System"),
        }
    }
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration file: {0}")]
    InvalidFile(String),

    #[error("Invalid configuration value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found at {path}")]
    NotFound { path: String },
}

impl UserFriendlyError for ConfigError {
    fn user_message(&self) -> String {
        match self {
            Self::InvalidFile(reason) => {
                format!("Configuration file has invalid format: {reason}")
            }
            Self::InvalidValue { key, value } => {
                format!("Configuration '{key}' has invalid value: {value}")
            }
            Self::NotFound { path } => format!("Configuration file not found: {path}"),
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::InvalidFile(_) => Some(
                "marketgate reads TOML with [compliance], [eligibility] and [logging] sections."
                    .to_string(),
            ),
            Self::InvalidValue { .. } => {
                Some("Values are validated when the configuration is loaded.".to_string())
            }
            Self::NotFound { .. } => Some(
                "An explicit --config path must point at an existing file.".to_string(),
            ),
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidFile(_) => vec![
                "Check the TOML syntax of .marketgate/config.toml".to_string(),
                "Remove keys that are not part of a known section".to_string(),
            ],
            Self::InvalidValue { key, .. } => match key.as_str() {
                "redirect_target" => vec![
                    "Use an absolute route path such as '/ios-blocked'".to_string(),
                ],
                "founding_member_cap" => {
                    vec!["Use a cap between 1 and 1,000,000".to_string()]
                }
                "cutoff" => vec![
                    "Use an RFC 3339 timestamp such as '2026-03-01T00:00:00Z'".to_string(),
                ],
                _ => vec![format!("Review the value configured for '{key}'")],
            },
            Self::NotFound { .. } => vec![
                "Check the --config path".to_string(),
                "Omit --config to use discovery from the current directory".to_string(),
            ],
        }
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Configuration
    }
}

impl UserFriendlyError for MarketgateError {
    fn user_message(&self) -> String {
        match self {
            Self::Config(err) => err.user_message(),
            Self::InvalidInput { field, reason } => format!("Invalid value for {field}: {reason}"),
            Self::Io(err) => format!("File operation failed: {err}"),
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::Config(err) => err.context(),
            Self::InvalidInput { .. } => None,
            Self::Io(_) => Some("The configuration file could not be read.".to_string()),
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Config(err) => err.suggestions(),
            Self::InvalidInput { field, .. } => {
                vec![format!("Run with --help to see the accepted values for {field}")]
            }
            Self::Io(_) => vec!["Check file permissions".to_string()],
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Config(_) => ErrorCategory::Configuration,
            Self::InvalidInput { .. } => ErrorCategory::Input,
            Self::Io(_) => ErrorCategory::FileSystem,
        }
    }
}

impl MarketgateError {
    /// Get a user-friendly error message with context and actionable suggestions
    #[must_use]
    pub fn display_for_user(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Error: {}\n", self.user_message()));

        if let Some(ctx) = self.context() {
            output.push_str(&format!("\nContext: {}\n", ctx));
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str("\nSuggestions:\n");
            for suggestion in suggestions {
                output.push_str(&format!("  • {}\n", suggestion));
            }
        }

        output
    }

    /// Map this error to the CLI exit code
    #[must_use]
    pub fn to_exit_code(&self) -> ExitCode {
        match self {
            Self::Config(_) | Self::InvalidInput { .. } => ExitCode::CLI_ARGS,
            Self::Io(_) => ExitCode::INTERNAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_maps_to_cli_args() {
        let err = MarketgateError::Config(ConfigError::InvalidValue {
            key: "founding_member_cap".to_string(),
            value: "must be greater than 0".to_string(),
        });
        assert_eq!(err.to_exit_code(), ExitCode::CLI_ARGS);
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_invalid_input_maps_to_cli_args() {
        let err = MarketgateError::InvalidInput {
            field: "--now".to_string(),
            reason: "not an RFC 3339 timestamp".to_string(),
        };
        assert_eq!(err.to_exit_code(), ExitCode::CLI_ARGS);
        assert_eq!(err.category(), ErrorCategory::Input);
    }

    #[test]
    fn test_io_error_maps_to_internal() {
        let err = MarketgateError::from(std::io::Error::other("disk gone"));
        assert_eq!(err.to_exit_code(), ExitCode::INTERNAL);
    }

    #[test]
    fn test_display_for_user_includes_suggestions() {
        let err = MarketgateError::Config(ConfigError::InvalidValue {
            key: "redirect_target".to_string(),
            value: "must start with '/'".to_string(),
        });
        let text = err.display_for_user();
        assert!(text.starts_with("Error: Configuration 'redirect_target'"));
        assert!(text.contains("Suggestions:"));
        assert!(text.contains("/ios-blocked"));
    }

    #[test]
    fn test_not_found_has_context() {
        let err = ConfigError::NotFound {
            path: "/nowhere/config.toml".to_string(),
        };
        assert!(err.context().is_some());
        assert_eq!(err.suggestions().len(), 2);
    }
}
