//! Raw URI decomposition.
//!
//! Pattern matching compares scheme/host/path by exact string equality, so
//! the components must come out of the raw string byte-for-byte: no case
//! folding, no dot-segment removal, no percent-encoding normalization. A
//! WHATWG-style parser would rewrite all three, so the splitting is done
//! here by hand.

use paylink_core::GatewayError;

/// Components of a raw URI, borrowed from the input string.
///
/// `host` is `None` for non-hierarchical URIs (no `//` after the scheme);
/// userinfo and port are not part of the host component. `query` excludes
/// the leading `?` and any fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UriParts<'a> {
    pub scheme: &'a str,
    pub host: Option<&'a str>,
    pub path: &'a str,
    pub query: Option<&'a str>,
}

/// Split a raw URI string into its components without normalizing them.
///
/// Fails only when no scheme can be found (no `:` separator, or an empty
/// scheme). Everything after that is taken as-is; a URI whose components
/// match nothing is a classification miss, not a parse error.
pub fn split_uri(raw: &str) -> Result<UriParts<'_>, GatewayError> {
    let colon = raw
        .find(':')
        .ok_or_else(|| GatewayError::UriParse(format!("missing scheme separator: {raw}")))?;
    let scheme = &raw[..colon];
    if scheme.is_empty() {
        return Err(GatewayError::UriParse(format!("empty scheme: {raw}")));
    }
    let rest = &raw[colon + 1..];

    let (host, after_authority) = match rest.strip_prefix("//") {
        Some(after) => {
            let end = after.find(['/', '?', '#']).unwrap_or(after.len());
            let authority = &after[..end];
            // Host is the authority minus userinfo and port.
            let host = authority.rsplit('@').next().unwrap_or(authority);
            let host = host.split(':').next().unwrap_or(host);
            (Some(host), &after[end..])
        }
        None => (None, rest),
    };

    let path_end = after_authority.find(['?', '#']).unwrap_or(after_authority.len());
    let path = &after_authority[..path_end];
    let query = after_authority[path_end..]
        .strip_prefix('?')
        .map(|q| q.split('#').next().unwrap_or(q));

    Ok(UriParts {
        scheme,
        host,
        path,
        query,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_custom_scheme_uri() {
        let parts = split_uri("lidapay://redirect-url?status=success&id=123").expect("split");
        assert_eq!(parts.scheme, "lidapay");
        assert_eq!(parts.host, Some("redirect-url"));
        assert_eq!(parts.path, "");
        assert_eq!(parts.query, Some("status=success&id=123"));
    }

    #[test]
    fn splits_https_uri_with_path() {
        let parts = split_uri(
            "https://api.advansistechnologies.com/api/v1/advansispay/redirect-url?status=failed",
        )
        .expect("split");
        assert_eq!(parts.scheme, "https");
        assert_eq!(parts.host, Some("api.advansistechnologies.com"));
        assert_eq!(parts.path, "/api/v1/advansispay/redirect-url");
        assert_eq!(parts.query, Some("status=failed"));
    }

    #[test]
    fn components_keep_their_original_case() {
        let parts = split_uri("LIDAPAY://Redirect-URL/Some/Path").expect("split");
        assert_eq!(parts.scheme, "LIDAPAY");
        assert_eq!(parts.host, Some("Redirect-URL"));
        assert_eq!(parts.path, "/Some/Path");
    }

    #[test]
    fn dot_segments_are_not_collapsed() {
        let parts = split_uri("https://host/x/../api/v1").expect("split");
        assert_eq!(parts.path, "/x/../api/v1");
    }

    #[test]
    fn userinfo_and_port_are_not_part_of_the_host() {
        let parts = split_uri("https://user:pw@host.example:8443/p?q=1").expect("split");
        assert_eq!(parts.host, Some("host.example"));
        assert_eq!(parts.path, "/p");
        assert_eq!(parts.query, Some("q=1"));
    }

    #[test]
    fn fragment_is_excluded_from_path_and_query() {
        let parts = split_uri("https://host/p#frag").expect("split");
        assert_eq!(parts.path, "/p");
        assert_eq!(parts.query, None);

        let parts = split_uri("https://host/p?a=1#frag").expect("split");
        assert_eq!(parts.query, Some("a=1"));
    }

    #[test]
    fn non_hierarchical_uri_has_no_host() {
        let parts = split_uri("mailto:pay@example.com").expect("split");
        assert_eq!(parts.scheme, "mailto");
        assert_eq!(parts.host, None);
    }

    #[test]
    fn missing_or_empty_scheme_is_an_error() {
        assert!(split_uri("not a uri at all").is_err());
        assert!(split_uri(":::").is_err());
        assert!(split_uri("").is_err());
    }

    #[test]
    fn empty_authority_yields_empty_host() {
        let parts = split_uri("lidapay://?x=1").expect("split");
        assert_eq!(parts.host, Some(""));
    }
}
