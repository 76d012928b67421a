//! Anti-forgery header guard
//!
//! A cross-origin page cannot set arbitrary custom headers on credentialed
//! requests without tripping a CORS preflight, so requiring a custom header
//! with a known value is a lightweight CSRF mitigation for the proxy
//! surface. The frontend script attaches the header; anything that cannot
//! is rejected before proxying.

use tracing::debug;

use crate::config::BffConfig;
use crate::context::RequestContext;

/// Check the anti-forgery header against the configured name and value.
///
/// Returns `true` iff the header named by
/// [`BffConfig::anti_forgery_header_name`] is present and its first value is
/// byte-for-byte equal to [`BffConfig::anti_forgery_header_value`]. No
/// trimming, no case folding. Absent, empty or mismatched values all return
/// `false`; the caller must reject the request before any proxying occurs.
#[must_use]
pub fn check_anti_forgery_header(ctx: &RequestContext, config: &BffConfig) -> bool {
    match ctx.header_first(&config.anti_forgery_header_name) {
        Some(value) if value == config.anti_forgery_header_value => true,
        Some(_) => {
            debug!(
                header = %config.anti_forgery_header_name,
                "Anti-forgery header value mismatch"
            );
            false
        }
        None => {
            debug!(
                header = %config.anti_forgery_header_name,
                "Anti-forgery header missing"
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderMap, HeaderName, HeaderValue};

    use super::*;

    fn ctx(pairs: &[(&str, &str)]) -> RequestContext {
        let mut headers = HeaderMap::new();
        for (name, value) in pairs {
            headers.append(
                HeaderName::from_bytes(name.as_bytes()).unwrap(),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        RequestContext::new(headers, None)
    }

    fn config(name: &str, value: &str) -> BffConfig {
        BffConfig {
            anti_forgery_header_name: name.to_string(),
            anti_forgery_header_value: value.to_string(),
            ..BffConfig::default()
        }
    }

    #[test]
    fn test_matching_header_passes() {
        let ctx = ctx(&[("X-CSRF", "1")]);
        assert!(check_anti_forgery_header(&ctx, &config("X-CSRF", "1")));
    }

    #[test]
    fn test_header_name_lookup_is_case_insensitive() {
        let ctx = ctx(&[("x-csrf", "1")]);
        assert!(check_anti_forgery_header(&ctx, &config("X-CSRF", "1")));
    }

    #[test]
    fn test_missing_header_fails() {
        let ctx = ctx(&[]);
        assert!(!check_anti_forgery_header(&ctx, &config("X-CSRF", "1")));
    }

    #[test]
    fn test_empty_header_fails() {
        let ctx = ctx(&[("X-CSRF", "")]);
        assert!(!check_anti_forgery_header(&ctx, &config("X-CSRF", "1")));
    }

    #[test]
    fn test_value_comparison_is_case_sensitive() {
        let ctx = ctx(&[("X-CSRF", "Secret")]);
        assert!(check_anti_forgery_header(&ctx, &config("X-CSRF", "Secret")));
        assert!(!check_anti_forgery_header(&ctx, &config("X-CSRF", "secret")));
    }

    #[test]
    fn test_value_is_not_trimmed() {
        let ctx = ctx(&[("X-CSRF", " 1")]);
        assert!(!check_anti_forgery_header(&ctx, &config("X-CSRF", "1")));
    }

    #[test]
    fn test_different_header_name_fails() {
        let ctx = ctx(&[("X-Other", "1")]);
        assert!(!check_anti_forgery_header(&ctx, &config("X-CSRF", "1")));
    }

    #[test]
    fn test_only_first_value_is_checked() {
        let ctx = ctx(&[("X-CSRF", "wrong"), ("X-CSRF", "1")]);
        assert!(!check_anti_forgery_header(&ctx, &config("X-CSRF", "1")));
    }
}
