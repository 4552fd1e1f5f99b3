//! Recognized redirect callback shapes.
//!
//! The pattern set is declarative data: adding a third redirect shape means
//! appending a record, not adding a branch to the classifier.

use serde::{Deserialize, Serialize};

use crate::uri::UriParts;

// ─── Constants ──────────────────────────────────────────────────────

/// Custom app scheme the provider redirects to after an in-app payment.
pub const CUSTOM_SCHEME: &str = "lidapay";

/// Host component of the custom-scheme redirect.
pub const CUSTOM_HOST: &str = "redirect-url";

/// Host of the HTTPS redirect variant.
pub const HTTPS_HOST: &str = "api.advansistechnologies.com";

/// Exact path of the HTTPS redirect variant.
pub const HTTPS_PATH: &str = "/api/v1/advansispay/redirect-url";

// ─── RedirectPattern ────────────────────────────────────────────────

/// One recognized callback shape. `None` fields match any value; all
/// comparisons are exact, case-sensitive string equality against the raw
/// URI components — no normalization of case, trailing slashes,
/// dot-segments, or percent-encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectPattern {
    /// Expected scheme, or `None` for any.
    pub scheme: Option<String>,
    /// Expected host.
    pub host: String,
    /// Expected path, or `None` for any.
    pub path: Option<String>,
}

impl RedirectPattern {
    /// Pattern matching a single scheme and host, any path.
    pub fn scheme_host(scheme: &str, host: &str) -> Self {
        Self {
            scheme: Some(scheme.to_owned()),
            host: host.to_owned(),
            path: None,
        }
    }

    /// Pattern matching scheme, host, and an exact path.
    pub fn exact(scheme: &str, host: &str, path: &str) -> Self {
        Self {
            scheme: Some(scheme.to_owned()),
            host: host.to_owned(),
            path: Some(path.to_owned()),
        }
    }

    /// Wildcard-aware equality check against raw URI components.
    ///
    /// A URI without a host component matches nothing.
    pub fn matches(&self, parts: &UriParts<'_>) -> bool {
        if let Some(scheme) = self.scheme.as_deref() {
            if parts.scheme != scheme {
                return false;
            }
        }
        let Some(host) = parts.host else {
            return false;
        };
        if host != self.host {
            return false;
        }
        if let Some(path) = self.path.as_deref() {
            if parts.path != path {
                return false;
            }
        }
        true
    }
}

/// The two redirect shapes this integration recognizes, in match order.
pub fn recognized_patterns() -> Vec<RedirectPattern> {
    vec![
        RedirectPattern::scheme_host(CUSTOM_SCHEME, CUSTOM_HOST),
        RedirectPattern::exact("https", HTTPS_HOST, HTTPS_PATH),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uri::split_uri;

    fn matches(pattern: &RedirectPattern, uri: &str) -> bool {
        pattern.matches(&split_uri(uri).expect("valid test uri"))
    }

    #[test]
    fn custom_scheme_matches_any_path() {
        let pattern = RedirectPattern::scheme_host(CUSTOM_SCHEME, CUSTOM_HOST);
        let cases = [
            "lidapay://redirect-url",
            "lidapay://redirect-url?status=success",
            "lidapay://redirect-url/extra/segments?x=1",
        ];
        for uri in cases {
            assert!(matches(&pattern, uri), "{uri} should match");
        }
    }

    #[test]
    fn custom_scheme_rejects_other_hosts() {
        let pattern = RedirectPattern::scheme_host(CUSTOM_SCHEME, CUSTOM_HOST);
        assert!(!matches(&pattern, "lidapay://other-host?status=success"));
        assert!(!matches(&pattern, "otherapp://redirect-url?status=success"));
    }

    #[test]
    fn https_pattern_requires_exact_path() {
        let pattern = RedirectPattern::exact("https", HTTPS_HOST, HTTPS_PATH);
        assert!(matches(
            &pattern,
            "https://api.advansistechnologies.com/api/v1/advansispay/redirect-url?status=failed"
        ));
        // A prefix of the expected path is not a match.
        assert!(!matches(
            &pattern,
            "https://api.advansistechnologies.com/api/v1/advansispay"
        ));
        assert!(!matches(
            &pattern,
            "https://api.advansistechnologies.com/wrong/path?status=failed"
        ));
    }

    #[test]
    fn scheme_and_host_comparison_is_case_sensitive() {
        let custom = RedirectPattern::scheme_host(CUSTOM_SCHEME, CUSTOM_HOST);
        assert!(!matches(&custom, "LIDAPAY://redirect-url?status=success"));
        assert!(!matches(&custom, "lidapay://REDIRECT-URL?status=success"));

        let https = RedirectPattern::exact("https", HTTPS_HOST, HTTPS_PATH);
        assert!(!matches(
            &https,
            "HTTPS://API.ADVANSISTECHNOLOGIES.COM/api/v1/advansispay/redirect-url?status=failed"
        ));
    }

    #[test]
    fn path_comparison_is_case_sensitive() {
        let pattern = RedirectPattern::exact("https", HTTPS_HOST, HTTPS_PATH);
        assert!(!matches(
            &pattern,
            "https://api.advansistechnologies.com/API/V1/advansispay/redirect-url"
        ));
    }

    #[test]
    fn dot_segments_are_not_collapsed_before_matching() {
        let pattern = RedirectPattern::exact("https", HTTPS_HOST, HTTPS_PATH);
        assert!(!matches(
            &pattern,
            "https://api.advansistechnologies.com/x/../api/v1/advansispay/redirect-url?status=ok"
        ));
    }

    #[test]
    fn trailing_slash_is_a_different_path() {
        let pattern = RedirectPattern::exact("https", HTTPS_HOST, HTTPS_PATH);
        assert!(!matches(
            &pattern,
            "https://api.advansistechnologies.com/api/v1/advansispay/redirect-url/"
        ));
    }

    #[test]
    fn wildcard_scheme_matches_any_scheme() {
        let pattern = RedirectPattern {
            scheme: None,
            host: CUSTOM_HOST.to_owned(),
            path: None,
        };
        assert!(matches(&pattern, "lidapay://redirect-url"));
        assert!(matches(&pattern, "otherapp://redirect-url"));
    }

    #[test]
    fn recognized_set_has_both_shapes_in_order() {
        let patterns = recognized_patterns();
        assert_eq!(patterns.len(), 2);
        assert_eq!(patterns[0].scheme.as_deref(), Some(CUSTOM_SCHEME));
        assert!(patterns[0].path.is_none());
        assert_eq!(patterns[1].path.as_deref(), Some(HTTPS_PATH));
    }
}
