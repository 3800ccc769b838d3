//! Platform detection over an injected probe
//!
//! Signals are consulted in priority order:
//!
//! 1. the bridge's explicit native signal
//! 2. the bridge's platform name, when it is `ios` or `android`
//! 3. the URL scheme the page was served from (`capacitor*` / `app*`)
//!
//! A recognised platform name always decides the identity. Otherwise the
//! scheme is checked whatever the native signal says. A custom scheme resolves to iOS, the only shell that serves the app from
//! one; the Android shell serves from `http(s)://localhost`.

use tracing::debug;

use crate::probe::{
    PlatformProbe, ProbeError, SIGNAL_IS_NATIVE, SIGNAL_PLATFORM_NAME, SIGNAL_URL_SCHEME,
};
use crate::types::{Detection, ExecutionMode, PlatformIdentity};

/// Scheme prefixes served by a native app shell
const SHELL_SCHEME_PREFIXES: [&str; 2] = ["capacitor", "app"];

/// Classifies the host environment.
///
/// Every call re-reads the probe; nothing is cached.
#[derive(Debug, Clone)]
pub struct PlatformDetector<P> {
    probe: P,
}

impl<P: PlatformProbe> PlatformDetector<P> {
    /// Create a detector reading from `probe`
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    /// The injected probe
    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Resolve the platform identity
    pub fn detect(&self) -> PlatformIdentity {
        self.detect_full().identity
    }

    /// Resolve the execution mode
    pub fn mode(&self) -> ExecutionMode {
        self.detect_full().mode
    }

    /// Resolve identity and execution mode in one pass.
    ///
    /// Never fails. Unavailable or failing signals count as "no indication".
    pub fn detect_full(&self) -> Detection {
        let native = absorb(SIGNAL_IS_NATIVE, self.probe.is_native_platform());

        let named = absorb(SIGNAL_PLATFORM_NAME, self.probe.platform_name())
            .flatten()
            .and_then(|name| parse_shell_platform(&name));

        let identity = match named {
            Some(identity) => identity,
            None => absorb(SIGNAL_URL_SCHEME, self.probe.url_scheme())
                .flatten()
                .filter(|scheme| is_shell_scheme(scheme))
                .map_or(PlatformIdentity::Web, |_| PlatformIdentity::Ios),
        };

        let mode = if native == Some(true) || identity.is_native() {
            ExecutionMode::Native
        } else {
            ExecutionMode::Web
        };

        debug!(
            identity = %identity,
            mode = %mode,
            native_signal = ?native,
            "Resolved host platform"
        );

        Detection { identity, mode }
    }
}

/// Turn a probe failure into "no indication"
fn absorb<T>(signal: &'static str, result: Result<T, ProbeError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(signal, error = %err, "Host signal unavailable, ignoring");
            None
        }
    }
}

/// Map a bridge platform name to a shell platform; `web` and unknown names map to `None`
fn parse_shell_platform(name: &str) -> Option<PlatformIdentity> {
    match name.trim().to_ascii_lowercase().as_str() {
        "ios" => Some(PlatformIdentity::Ios),
        "android" => Some(PlatformIdentity::Android),
        _ => None,
    }
}

/// True when the scheme is one an app shell serves from
fn is_shell_scheme(scheme: &str) -> bool {
    let scheme = scheme.trim().to_ascii_lowercase();
    SHELL_SCHEME_PREFIXES
        .iter()
        .any(|prefix| scheme.starts_with(prefix))
}
