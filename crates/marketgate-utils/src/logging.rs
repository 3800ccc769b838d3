//! Logging infrastructure for marketgate
//!
//! The policy crates only emit `tracing` events; the CLI installs the
//! subscriber once at startup through [`init_tracing`].

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "marketgate=info,warn";

/// Filter used when `--verbose` (or `[logging] verbose = true`) is set
pub const VERBOSE_FILTER: &str = "marketgate=debug,info";

/// Pick the filter directive for the requested verbosity
#[must_use]
pub fn filter_directive(verbose: bool) -> &'static str {
    if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER }
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins over the verbosity flag. Events go to stderr so that
/// `--json` output on stdout stays machine-readable.
pub fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter_directive(verbose)))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_line_number(false)
                .with_file(false)
                .compact(),
        )
        .try_init()?;

    Ok(())
}
