//! iOS compliance gate
//!
//! Payments are hidden iff the host resolves to iOS. There is no override.
//! Detection failures already resolve to web inside the detector, so the gate
//! fails closed to "not iOS" and never blocks ordinary web users.

use marketgate_platform::{PlatformDetector, PlatformIdentity, PlatformProbe};
use tracing::debug;

use crate::types::{ComplianceDecision, RedirectTarget, RouteDecision, Visibility};

/// Gate for payment and subscription UI
#[derive(Debug, Clone)]
pub struct ComplianceGate<P> {
    detector: PlatformDetector<P>,
    redirect_target: RedirectTarget,
}

impl<P: PlatformProbe> ComplianceGate<P> {
    /// Create a gate over `detector` redirecting to the default target
    pub fn new(detector: PlatformDetector<P>) -> Self {
        Self {
            detector,
            redirect_target: RedirectTarget::default(),
        }
    }

    /// Create a gate reading the host through `probe`
    pub fn from_probe(probe: P) -> Self {
        Self::new(PlatformDetector::new(probe))
    }

    /// Replace the fallback destination for guarded routes
    #[must_use]
    pub fn with_redirect_target(mut self, target: RedirectTarget) -> Self {
        self.redirect_target = target;
        self
    }

    pub fn detector(&self) -> &PlatformDetector<P> {
        &self.detector
    }

    pub fn redirect_target(&self) -> &RedirectTarget {
        &self.redirect_target
    }

    /// True iff the host resolves to iOS
    pub fn should_hide_payments(&self) -> bool {
        self.detector.detect() == PlatformIdentity::Ios
    }

    /// Redirect destination for `current_platform`, or `None` to render normally
    pub fn should_redirect(&self, current_platform: PlatformIdentity) -> Option<RedirectTarget> {
        match current_platform {
            PlatformIdentity::Ios => Some(self.redirect_target.clone()),
            PlatformIdentity::Web | PlatformIdentity::Android => None,
        }
    }

    /// Detect once and derive every decision from that detection
    pub fn decide(&self) -> ComplianceDecision {
        let platform = self.detector.detect();
        let decision = ComplianceDecision {
            platform,
            hide_payments: platform == PlatformIdentity::Ios,
            redirect_target: self.should_redirect(platform),
        };

        debug!(
            platform = %decision.platform,
            hide_payments = decision.hide_payments,
            redirect_target = decision.redirect_target.as_ref().map(RedirectTarget::as_str),
            "Compliance decision"
        );

        decision
    }

    /// Decision for the route guard wrapping payment and subscription pages
    pub fn guard_route(&self) -> RouteDecision {
        match self.should_redirect(self.detector.detect()) {
            Some(target) => RouteDecision::Redirect(target),
            None => RouteDecision::Render,
        }
    }

    /// Decision for payment-related UI fragments
    pub fn payment_visibility(&self) -> Visibility {
        if self.should_hide_payments() {
            Visibility::Hidden
        } else {
            Visibility::Render
        }
    }
}
