//! Host platform detection for marketgate
//!
//! [`PlatformDetector`] classifies the host the front-end runs in as web,
//! iOS or Android by reading an injected [`PlatformProbe`]. Detection never
//! fails: an unavailable or failing bridge resolves to [`PlatformIdentity::Web`].

pub mod detector;
pub mod probe;
pub mod types;

pub use detector::PlatformDetector;
pub use probe::{HostSnapshot, NoBridge, PlatformProbe, ProbeError, Signal};
pub use types::{Detection, ExecutionMode, PlatformIdentity};
