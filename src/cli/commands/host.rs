//! Host description from command-line flags

use marketgate_platform::{HostSnapshot, NoBridge, PlatformProbe};

use crate::cli::args::{HostArgs, NativeFlag};

const FAIL_KEYWORD: &str = "fail";
const DEFAULT_FAILURE: &str = "simulated bridge failure";

/// Build the probe described by the host flags.
///
/// Without flags the host is a browser page served over https.
pub(crate) fn build_probe(host: &HostArgs) -> Box<dyn PlatformProbe> {
    if host.no_bridge {
        return Box::new(NoBridge);
    }

    let mut snapshot = HostSnapshot::browser();

    match host.native {
        Some(NativeFlag::True) => snapshot = snapshot.with_native(true),
        Some(NativeFlag::False) => snapshot = snapshot.with_native(false),
        Some(NativeFlag::Fail) => snapshot = snapshot.with_native_failing(DEFAULT_FAILURE),
        None => {}
    }

    if let Some(raw) = &host.platform {
        snapshot = match failure_reason(raw) {
            Some(reason) => snapshot.with_platform_name_failing(reason),
            None => snapshot.with_platform_name(raw.as_str()),
        };
    }

    if let Some(raw) = &host.scheme {
        snapshot = match failure_reason(raw) {
            Some(reason) => snapshot.with_url_scheme_failing(reason),
            None => snapshot.with_url_scheme(raw.as_str()),
        };
    }

    Box::new(snapshot)
}

/// `fail` or `fail:<reason>` requests a raising signal
fn failure_reason(raw: &str) -> Option<String> {
    if raw == FAIL_KEYWORD {
        return Some(DEFAULT_FAILURE.to_string());
    }
    raw.strip_prefix("fail:")
        .map(|reason| reason.trim())
        .map(|reason| {
            if reason.is_empty() {
                DEFAULT_FAILURE.to_string()
            } else {
                reason.to_string()
            }
        })
}
