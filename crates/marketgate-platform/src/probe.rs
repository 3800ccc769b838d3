//! Host bridge inspection
//!
//! The app shell exposes its identity through a native bridge object. Code
//! running in a plain browser has no bridge at all, and a half-initialised
//! bridge may throw when called. [`PlatformProbe`] is the capability the
//! detector reads; every method reports "absent / throws" as a [`ProbeError`].

use std::sync::Arc;
use thiserror::Error;

/// Signal names used in probe errors and log fields
pub const SIGNAL_IS_NATIVE: &str = "is_native_platform";
pub const SIGNAL_PLATFORM_NAME: &str = "platform_name";
pub const SIGNAL_URL_SCHEME: &str = "url_scheme";

/// Failure while reading a host bridge signal
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// The bridge, or this particular signal, does not exist on the host
    #[error("host signal '{signal}' is unavailable")]
    Unavailable { signal: &'static str },

    /// The signal exists but raised when called
    #[error("host signal '{signal}' failed: {reason}")]
    Failed { signal: &'static str, reason: String },
}

/// Read-only view of the host bridge.
///
/// Implementations must not mutate host state; the detector may call each
/// method any number of times, from any thread.
pub trait PlatformProbe: Send + Sync {
    /// The bridge's own "is native platform" answer
    fn is_native_platform(&self) -> Result<bool, ProbeError>;

    /// The bridge's platform name (`"ios"`, `"android"`, `"web"`, ...)
    fn platform_name(&self) -> Result<Option<String>, ProbeError>;

    /// Scheme of the URL the front-end was loaded from (`"https"`, `"capacitor"`, ...)
    fn url_scheme(&self) -> Result<Option<String>, ProbeError>;
}

impl<P: PlatformProbe + ?Sized> PlatformProbe for &P {
    fn is_native_platform(&self) -> Result<bool, ProbeError> {
        (**self).is_native_platform()
    }

    fn platform_name(&self) -> Result<Option<String>, ProbeError> {
        (**self).platform_name()
    }

    fn url_scheme(&self) -> Result<Option<String>, ProbeError> {
        (**self).url_scheme()
    }
}

impl<P: PlatformProbe + ?Sized> PlatformProbe for Box<P> {
    fn is_native_platform(&self) -> Result<bool, ProbeError> {
        (**self).is_native_platform()
    }

    fn platform_name(&self) -> Result<Option<String>, ProbeError> {
        (**self).platform_name()
    }

    fn url_scheme(&self) -> Result<Option<String>, ProbeError> {
        (**self).url_scheme()
    }
}

impl<P: PlatformProbe + ?Sized> PlatformProbe for Arc<P> {
    fn is_native_platform(&self) -> Result<bool, ProbeError> {
        (**self).is_native_platform()
    }

    fn platform_name(&self) -> Result<Option<String>, ProbeError> {
        (**self).platform_name()
    }

    fn url_scheme(&self) -> Result<Option<String>, ProbeError> {
        (**self).url_scheme()
    }
}

/// Probe for a pure browser: no bridge object exists
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBridge;

impl PlatformProbe for NoBridge {
    fn is_native_platform(&self) -> Result<bool, ProbeError> {
        Err(ProbeError::Unavailable {
            signal: SIGNAL_IS_NATIVE,
        })
    }

    fn platform_name(&self) -> Result<Option<String>, ProbeError> {
        Err(ProbeError::Unavailable {
            signal: SIGNAL_PLATFORM_NAME,
        })
    }

    fn url_scheme(&self) -> Result<Option<String>, ProbeError> {
        Err(ProbeError::Unavailable {
            signal: SIGNAL_URL_SCHEME,
        })
    }
}

/// State of one host signal in a [`HostSnapshot`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Signal<T> {
    /// Not exposed by the host
    #[default]
    Absent,
    /// Exposed and returns this value
    Value(T),
    /// Exposed but raises with this message
    Fails(String),
}

impl<T: Clone> Signal<T> {
    fn read(&self, signal: &'static str) -> Result<T, ProbeError> {
        match self {
            Self::Absent => Err(ProbeError::Unavailable { signal }),
            Self::Value(value) => Ok(value.clone()),
            Self::Fails(reason) => Err(ProbeError::Failed {
                signal,
                reason: reason.clone(),
            }),
        }
    }
}

/// Fixed description of a host, one [`Signal`] per bridge method.
///
/// Used to describe hosts in tests and from the command line.
///
/// ```rust
/// use marketgate_platform::{HostSnapshot, PlatformDetector, PlatformIdentity};
///
/// let host = HostSnapshot::default()
///     .with_platform_name("ios")
///     .with_native_failing("bridge not ready");
/// assert_eq!(PlatformDetector::new(host).detect(), PlatformIdentity::Ios);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HostSnapshot {
    pub is_native: Signal<bool>,
    pub platform_name: Signal<String>,
    pub url_scheme: Signal<String>,
}

impl HostSnapshot {
    /// A browser page served over https with no bridge
    #[must_use]
    pub fn browser() -> Self {
        Self {
            url_scheme: Signal::Value("https".to_string()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_native(mut self, is_native: bool) -> Self {
        self.is_native = Signal::Value(is_native);
        self
    }

    #[must_use]
    pub fn with_native_failing(mut self, reason: impl Into<String>) -> Self {
        self.is_native = Signal::Fails(reason.into());
        self
    }

    #[must_use]
    pub fn with_platform_name(mut self, name: impl Into<String>) -> Self {
        self.platform_name = Signal::Value(name.into());
        self
    }

    #[must_use]
    pub fn with_platform_name_failing(mut self, reason: impl Into<String>) -> Self {
        self.platform_name = Signal::Fails(reason.into());
        self
    }

    #[must_use]
    pub fn with_url_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.url_scheme = Signal::Value(scheme.into());
        self
    }

    #[must_use]
    pub fn with_url_scheme_failing(mut self, reason: impl Into<String>) -> Self {
        self.url_scheme = Signal::Fails(reason.into());
        self
    }
}

impl PlatformProbe for HostSnapshot {
    fn is_native_platform(&self) -> Result<bool, ProbeError> {
        self.is_native.read(SIGNAL_IS_NATIVE)
    }

    fn platform_name(&self) -> Result<Option<String>, ProbeError> {
        self.platform_name.read(SIGNAL_PLATFORM_NAME).map(Some)
    }

    fn url_scheme(&self) -> Result<Option<String>, ProbeError> {
        self.url_scheme.read(SIGNAL_URL_SCHEME).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_bridge_reports_every_signal_unavailable() {
        assert_eq!(
            NoBridge.is_native_platform(),
            Err(ProbeError::Unavailable {
                signal: SIGNAL_IS_NATIVE
            })
        );
        assert!(NoBridge.platform_name().is_err());
        assert!(NoBridge.url_scheme().is_err());
    }

    #[test]
    fn test_snapshot_maps_signals() {
        let host = HostSnapshot::default()
            .with_native(true)
            .with_platform_name("android")
            .with_url_scheme_failing("location blocked");

        assert_eq!(host.is_native_platform(), Ok(true));
        assert_eq!(host.platform_name(), Ok(Some("android".to_string())));
        assert_eq!(
            host.url_scheme(),
            Err(ProbeError::Failed {
                signal: SIGNAL_URL_SCHEME,
                reason: "location blocked".to_string(),
            })
        );
    }

    #[test]
    fn test_browser_snapshot_has_only_a_scheme() {
        let host = HostSnapshot::browser();
        assert!(host.is_native_platform().is_err());
        assert!(host.platform_name().is_err());
        assert_eq!(host.url_scheme(), Ok(Some("https".to_string())));
    }

    #[test]
    fn test_probe_through_smart_pointers() {
        let shared: Arc<dyn PlatformProbe> = Arc::new(HostSnapshot::default().with_native(false));
        assert_eq!(shared.is_native_platform(), Ok(false));

        let boxed: Box<dyn PlatformProbe> = Box::new(NoBridge);
        assert!(boxed.platform_name().is_err());
    }

    #[test]
    fn test_probe_error_messages() {
        let err = ProbeError::Failed {
            signal: SIGNAL_IS_NATIVE,
            reason: "TypeError".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "host signal 'is_native_platform' failed: TypeError"
        );
    }
}
