//! CLI argument definitions and parsing structures
//!
//! This module defines the command-line interface structure using clap,
//! including the main `Cli` struct and all subcommand enums.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// marketgate - platform compliance gating and free-period eligibility
#[derive(Parser, Debug)]
#[command(name = "marketgate")]
#[command(about = "Decide whether payment UI may render and whether the free period is open")]
#[command(long_about = r#"
marketgate answers two questions for a marketplace front-end that ships both as
a website and inside a native app shell:

  1. May payment and subscription UI render on this host? (iOS: no)
  2. Is the platform still free for businesses?

EXAMPLES:
  # Resolve the platform of a host whose bridge reports ios
  marketgate detect --native true --platform ios

  # Capacitor on iOS serves from a custom scheme
  marketgate gate --scheme capacitor

  # Fail with exit code 3 when payment UI would be hidden
  marketgate gate --platform ios --enforce

  # Check eligibility at a given instant with a live member count
  marketgate eligibility --now 2026-02-28T23:59:59Z --founding-members 420

  # Show the effective configuration and where each value came from
  marketgate config --json

HOST FLAGS:
  Without host flags the host is a browser page served over https.
  A signal value of "fail" (or "fail:<reason>") simulates a bridge call that
  raises. --no-bridge describes a host exposing no bridge at all.

CONFIGURATION:
  Configuration is loaded with precedence: CLI flags > config file > defaults
  Config file is discovered by searching upward from CWD for .marketgate/config.toml
  Use --config to specify an explicit config file path

EXIT CODES:
  0 success, 1 internal error, 2 invalid arguments or configuration,
  3 policy denied (only with --enforce)
"#)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (overrides discovery)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug-level logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Route that guarded payment pages redirect to on iOS
    #[arg(long, global = true, value_name = "PATH")]
    pub redirect_target: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the platform identity and execution mode of a host
    ///
    /// EXAMPLES:
    ///   marketgate detect
    ///   marketgate detect --native true --platform android
    ///   marketgate detect --platform ios --native fail --json
    Detect {
        #[command(flatten)]
        host: HostArgs,

        /// Output as JSON (JCS canonical form)
        #[arg(long)]
        json: bool,
    },

    /// Evaluate the app-store compliance gate for a host
    ///
    /// Reports whether payment UI is hidden and where guarded routes
    /// redirect. With --enforce, exits 3 when payment UI is hidden.
    ///
    /// EXAMPLES:
    ///   marketgate gate --platform ios
    ///   marketgate gate --scheme capacitor --enforce
    ///   marketgate --redirect-target /store-notice gate --platform ios --json
    Gate {
        #[command(flatten)]
        host: HostArgs,

        /// Exit with code 3 when payment UI is hidden
        #[arg(long)]
        enforce: bool,

        /// Output as JSON (JCS canonical form)
        #[arg(long)]
        json: bool,
    },

    /// Evaluate whether the free period is still open
    ///
    /// EXAMPLES:
    ///   marketgate eligibility
    ///   marketgate eligibility --now 2026-03-01T00:00:00Z --enforce
    ///   marketgate eligibility --founding-members 1000 --long --json
    Eligibility {
        /// Instant to evaluate at, RFC 3339 (default: current time)
        #[arg(long, value_name = "RFC3339")]
        now: Option<String>,

        /// Current number of founding members, if known
        #[arg(long, value_name = "N")]
        founding_members: Option<u64>,

        /// Use the long deadline message naming the founding member cap
        #[arg(long)]
        long: bool,

        /// Exit with code 3 when the free period is over
        #[arg(long)]
        enforce: bool,

        /// Output as JSON (JCS canonical form)
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration and the source of each value
    Config {
        /// Output as JSON (JCS canonical form)
        #[arg(long)]
        json: bool,
    },
}

/// Description of the host environment, one flag per bridge signal
#[derive(Args, Debug, Clone, Default)]
pub struct HostArgs {
    /// Result of the native-platform query
    #[arg(long, value_enum, conflicts_with = "no_bridge")]
    pub native: Option<NativeFlag>,

    /// Platform name reported by the bridge, or "fail[:<reason>]"
    #[arg(long, value_name = "NAME", conflicts_with = "no_bridge")]
    pub platform: Option<String>,

    /// URL scheme of the page, or "fail[:<reason>]"
    #[arg(long, value_name = "SCHEME", conflicts_with = "no_bridge")]
    pub scheme: Option<String>,

    /// The host exposes no bridge and no URL scheme
    #[arg(long)]
    pub no_bridge: bool,
}

/// Value of `--native`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeFlag {
    True,
    False,
    /// The query raises
    Fail,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "marketgate",
            "gate",
            "--platform",
            "ios",
            "--redirect-target",
            "/store-notice",
            "--verbose",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.redirect_target.as_deref(), Some("/store-notice"));
        match cli.command {
            Commands::Gate { host, enforce, .. } => {
                assert_eq!(host.platform.as_deref(), Some("ios"));
                assert!(!enforce);
            }
            other => panic!("expected gate, got {other:?}"),
        }
    }

    #[test]
    fn test_native_flag_values() {
        let cli = Cli::try_parse_from(["marketgate", "detect", "--native", "fail"]).unwrap();
        match cli.command {
            Commands::Detect { host, .. } => assert_eq!(host.native, Some(NativeFlag::Fail)),
            other => panic!("expected detect, got {other:?}"),
        }

        assert!(Cli::try_parse_from(["marketgate", "detect", "--native", "maybe"]).is_err());
    }

    #[test]
    fn test_no_bridge_conflicts_with_signals() {
        let result =
            Cli::try_parse_from(["marketgate", "detect", "--no-bridge", "--platform", "ios"]);
        assert!(result.is_err());
    }
}
