//! Response security headers.

use axum::http::{header, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;

/// Same-origin content and scripts only, no plugin objects. Leaving out
/// `'unsafe-inline'` is what blocks inline scripts and event handlers.
pub const DEFAULT_CONTENT_SECURITY_POLICY: &str =
    "default-src 'self'; script-src 'self'; object-src 'none'";

/// Headers attached to responses on routes the CSP scope covers.
///
/// This is defense in depth alongside output sanitization, not a
/// replacement for it.
#[derive(Clone, Debug)]
pub struct SecurityHeaderPolicy {
    content_security_policy: HeaderValue,
}

impl SecurityHeaderPolicy {
    pub fn content_security_policy(&self) -> &HeaderValue {
        &self.content_security_policy
    }

    /// Layer that sets `Content-Security-Policy` on every response passing
    /// through it, replacing any value a handler set.
    pub fn layer(&self) -> SetResponseHeaderLayer<HeaderValue> {
        SetResponseHeaderLayer::overriding(
            header::CONTENT_SECURITY_POLICY,
            self.content_security_policy.clone(),
        )
    }
}

impl Default for SecurityHeaderPolicy {
    fn default() -> Self {
        Self {
            content_security_policy: HeaderValue::from_static(DEFAULT_CONTENT_SECURITY_POLICY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_restricts_scripts_and_objects() {
        let policy = SecurityHeaderPolicy::default();
        let csp = policy.content_security_policy().to_str().unwrap();

        assert!(csp.contains("default-src 'self'"));
        assert!(csp.contains("script-src 'self'"));
        assert!(csp.contains("object-src 'none'"));
        assert!(!csp.contains("unsafe-inline"));
    }
}
