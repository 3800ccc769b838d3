//! Decision types produced by the compliance gate

use marketgate_platform::PlatformIdentity;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Route shown to iOS users instead of a payment or subscription page
pub const DEFAULT_REDIRECT_TARGET: &str = "/ios-blocked";

/// Rejected redirect target
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidRedirectTarget {
    #[error("redirect target must not be empty")]
    Empty,

    #[error("redirect target '{0}' must be an absolute route path starting with '/'")]
    NotAbsolute(String),

    #[error("redirect target '{0}' must not contain whitespace")]
    Whitespace(String),
}

/// Client-side route a guarded page redirects to.
///
/// Always an absolute route path such as `/ios-blocked`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RedirectTarget(String);

impl RedirectTarget {
    /// Validate and wrap a route path
    pub fn new(path: impl Into<String>) -> Result<Self, InvalidRedirectTarget> {
        let path = path.into();
        if path.is_empty() {
            return Err(InvalidRedirectTarget::Empty);
        }
        if !path.starts_with('/') {
            return Err(InvalidRedirectTarget::NotAbsolute(path));
        }
        if path.chars().any(char::is_whitespace) {
            return Err(InvalidRedirectTarget::Whitespace(path));
        }
        Ok(Self(path))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RedirectTarget {
    fn default() -> Self {
        Self(DEFAULT_REDIRECT_TARGET.to_string())
    }
}

impl fmt::Display for RedirectTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for RedirectTarget {
    type Error = InvalidRedirectTarget;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RedirectTarget> for String {
    fn from(target: RedirectTarget) -> Self {
        target.0
    }
}

/// Gate outcome for one query; computed per call and never cached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceDecision {
    /// Platform the decision was made for
    pub platform: PlatformIdentity,
    /// Payment and subscription UI must not render
    pub hide_payments: bool,
    /// Where guarded routes go instead, if anywhere
    pub redirect_target: Option<RedirectTarget>,
}

/// What the route guard should do with a guarded page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "target", rename_all = "lowercase")]
pub enum RouteDecision {
    Render,
    Redirect(RedirectTarget),
}

impl RouteDecision {
    #[must_use]
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect(_))
    }
}

/// Whether a payment-related UI fragment renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Render,
    Hidden,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_target() {
        assert_eq!(RedirectTarget::default().as_str(), "/ios-blocked");
    }

    #[test]
    fn test_target_validation() {
        assert!(RedirectTarget::new("/pricing-unavailable").is_ok());
        assert_eq!(RedirectTarget::new(""), Err(InvalidRedirectTarget::Empty));
        assert_eq!(
            RedirectTarget::new("ios-blocked"),
            Err(InvalidRedirectTarget::NotAbsolute("ios-blocked".to_string()))
        );
        assert!(matches!(
            RedirectTarget::new("/ios blocked"),
            Err(InvalidRedirectTarget::Whitespace(_))
        ));
    }

    #[test]
    fn test_target_serde_validates() {
        let target: RedirectTarget = serde_json::from_str(r#""/blocked""#).unwrap();
        assert_eq!(target.to_string(), "/blocked");
        assert!(serde_json::from_str::<RedirectTarget>(r#""blocked""#).is_err());
    }

    #[test]
    fn test_route_decision_serialization() {
        let json = serde_json::to_value(RouteDecision::Redirect(RedirectTarget::default())).unwrap();
        assert_eq!(json["action"], "redirect");
        assert_eq!(json["target"], "/ios-blocked");

        let json = serde_json::to_value(RouteDecision::Render).unwrap();
        assert_eq!(json["action"], "render");
        assert!(!RouteDecision::Render.is_redirect());
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_absolute_paths_without_whitespace_are_accepted(path in "/[a-z0-9/_-]{0,30}") {
                let target = RedirectTarget::new(path.clone()).unwrap();
                prop_assert_eq!(target.as_str(), path.as_str());
            }

            #[test]
            fn prop_relative_paths_are_rejected(path in "[a-z][a-z0-9/_-]{0,30}") {
                prop_assert!(RedirectTarget::new(path).is_err());
            }
        }
    }
}
