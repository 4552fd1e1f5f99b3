//! Diagnostic query-parameter extraction.
//!
//! Parameters are logged for engineers chasing provider-side issues; the
//! dispatch decision and the forwarded payload depend only on the full URI
//! string, never on individual parameter values.

use paylink_core::types::ParsedParameters;

/// Decode a raw query component into a name → value map.
///
/// Standard query-string semantics: `&`-separated pairs, `=`-separated
/// key/value, percent-decoded. Duplicate keys collapse to the last
/// occurrence. `None` (no query component) yields an empty map.
pub fn parse(query: Option<&str>) -> ParsedParameters {
    match query {
        Some(q) => url::form_urlencoded::parse(q.as_bytes())
            .into_owned()
            .collect(),
        None => ParsedParameters::new(),
    }
}
