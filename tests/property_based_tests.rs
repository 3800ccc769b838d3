//! Property-Based Tests for marketgate
//!
//! Verifies the detection, gating and eligibility invariants across
//! generated host environments and instants, through the public API only.
//!
//! ## Configuration
//!
//! - `PROPTEST_CASES`: Number of test cases per property (default: 64)
//! - `PROPTEST_MAX_SHRINK_ITERS`: Max shrinking iterations on failure (default: 1000)
//!
//! ```bash
//! PROPTEST_CASES=256 cargo test --test property_based_tests
//! ```

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use proptest::prelude::*;
use std::env;

use marketgate::{
    ComplianceGate, EligibilityPolicy, EligibilityReason, EligibilityWindow, ExecutionMode,
    HostSnapshot, NoBridge, PlatformDetector, PlatformIdentity, RouteDecision, Signal, Visibility,
};

/// Default number of test cases per property.
const DEFAULT_PROPTEST_CASES: u32 = 64;

/// Default max shrink iterations.
const DEFAULT_MAX_SHRINK_ITERS: u32 = 1000;

/// Creates a ProptestConfig that respects environment variables.
fn proptest_config() -> ProptestConfig {
    let cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(DEFAULT_PROPTEST_CASES);

    let max_shrink_iters = env::var("PROPTEST_MAX_SHRINK_ITERS")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(DEFAULT_MAX_SHRINK_ITERS);

    ProptestConfig {
        cases,
        max_shrink_iters,
        ..ProptestConfig::default()
    }
}

fn arb_failure() -> impl Strategy<Value = String> {
    "[a-z ]{1,20}"
}

fn arb_signal<T: Clone + std::fmt::Debug + 'static>(
    value: impl Strategy<Value = T> + 'static,
) -> impl Strategy<Value = Signal<T>> {
    prop_oneof![
        Just(Signal::Absent),
        value.prop_map(Signal::Value),
        arb_failure().prop_map(Signal::Fails),
    ]
}

/// Native signal that never claims a native shell
fn arb_not_native() -> impl Strategy<Value = Signal<bool>> {
    prop_oneof![
        Just(Signal::Absent),
        Just(Signal::Value(false)),
        arb_failure().prop_map(Signal::Fails),
    ]
}

/// Platform names that are neither ios nor android
fn arb_unrecognised_name() -> impl Strategy<Value = String> {
    "[a-z]{0,10}".prop_filter("recognised shell name", |name| {
        name != "ios" && name != "android"
    })
}

/// Schemes a browser serves from
fn arb_browser_scheme() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["https", "http", "file", "about", "data", "blob"])
        .prop_map(str::to_string)
}

fn arb_any_scheme() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_browser_scheme(),
        Just("capacitor".to_string()),
        Just("app".to_string()),
    ]
}

fn arb_native_signal() -> impl Strategy<Value = Signal<bool>> {
    arb_signal(any::<bool>())
}

fn cutoff() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap()
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn prop_no_native_indicators_is_web(
        is_native in arb_not_native(),
        platform_name in arb_signal(arb_unrecognised_name()),
        url_scheme in arb_signal(arb_browser_scheme()),
    ) {
        let host = HostSnapshot { is_native, platform_name, url_scheme };
        let detector = PlatformDetector::new(host.clone());

        prop_assert_eq!(detector.detect(), PlatformIdentity::Web);
        prop_assert_eq!(detector.mode(), ExecutionMode::Web);

        let gate = ComplianceGate::from_probe(host);
        prop_assert!(!gate.should_hide_payments());
        prop_assert_eq!(gate.guard_route(), RouteDecision::Render);
        prop_assert_eq!(gate.payment_visibility(), Visibility::Render);
    }

    #[test]
    fn prop_ios_name_always_hides_payments(
        name in prop::sample::select(vec!["ios", "IOS", "iOS", " ios ", "Ios"]),
        is_native in arb_native_signal(),
        url_scheme in arb_signal(arb_any_scheme()),
    ) {
        let host = HostSnapshot {
            is_native,
            platform_name: Signal::Value(name.to_string()),
            url_scheme,
        };
        let gate = ComplianceGate::from_probe(host);

        prop_assert_eq!(gate.detector().detect(), PlatformIdentity::Ios);
        prop_assert_eq!(gate.detector().mode(), ExecutionMode::Native);
        prop_assert!(gate.should_hide_payments());
        prop_assert_eq!(gate.payment_visibility(), Visibility::Hidden);
        prop_assert!(gate.guard_route().is_redirect());
    }

    #[test]
    fn prop_android_never_hides_payments(
        name in prop::sample::select(vec!["android", "Android", "ANDROID"]),
        is_native in arb_native_signal(),
        url_scheme in arb_signal(arb_any_scheme()),
    ) {
        let host = HostSnapshot {
            is_native,
            platform_name: Signal::Value(name.to_string()),
            url_scheme,
        };
        let gate = ComplianceGate::from_probe(host);

        prop_assert_eq!(gate.detector().detect(), PlatformIdentity::Android);
        prop_assert!(!gate.should_hide_payments());
        prop_assert_eq!(gate.should_redirect(PlatformIdentity::Android), None);
    }

    #[test]
    fn prop_free_period_is_strictly_before_cutoff(offset_secs in -400_000_000i64..400_000_000i64) {
        let policy = EligibilityPolicy::default();
        let now = cutoff() + TimeDelta::seconds(offset_secs);

        prop_assert_eq!(policy.is_in_free_period(now), offset_secs < 0);
    }

    #[test]
    fn prop_full_cap_closes_free_period(
        before_secs in 1i64..100_000_000,
        over in 0u64..10_000,
        cap in 1u32..100_000,
    ) {
        let policy = EligibilityPolicy::new(EligibilityWindow::new(cutoff(), cap));
        let now = cutoff() - TimeDelta::seconds(before_secs);

        let full = policy.evaluate(now, Some(u64::from(cap) + over), false);
        prop_assert!(!full.in_free_period);
        prop_assert_eq!(full.reason, EligibilityReason::FoundingMembersFull);

        let open = policy.evaluate(now, Some(u64::from(cap) - 1), false);
        prop_assert!(open.in_free_period);

        let unknown = policy.evaluate(now, None, true);
        prop_assert!(unknown.in_free_period);
    }

    #[test]
    fn prop_end_date_display_is_stable(days in 0i64..20_000) {
        let cutoff = DateTime::<Utc>::UNIX_EPOCH + TimeDelta::days(days);
        let policy = EligibilityPolicy::new(EligibilityWindow::new(cutoff, 1_000));

        let first = policy.end_date_display();
        prop_assert_eq!(&first, &policy.end_date_display());
        prop_assert!(policy.deadline_message(false).ends_with(&first));
    }
}

#[test]
fn test_bridge_absent_is_web_and_ungated() {
    let gate = ComplianceGate::from_probe(NoBridge);
    assert_eq!(gate.detector().detect(), PlatformIdentity::Web);
    assert!(!gate.should_hide_payments());
    assert_eq!(gate.should_redirect(gate.detector().detect()), None);
}

#[test]
fn test_should_redirect_only_on_ios() {
    let gate = ComplianceGate::from_probe(NoBridge);
    assert_eq!(
        gate.should_redirect(PlatformIdentity::Ios).map(|t| t.to_string()),
        Some("/ios-blocked".to_string())
    );
    assert_eq!(gate.should_redirect(PlatformIdentity::Web), None);
    assert_eq!(gate.should_redirect(PlatformIdentity::Android), None);
}

#[test]
fn test_one_second_boundary() {
    let policy = EligibilityPolicy::default();
    assert!(policy.is_in_free_period(cutoff() - TimeDelta::seconds(1)));
    assert!(!policy.is_in_free_period(cutoff()));
}
