//! URI sanitization.
//!
//! The payment provider has been observed to emit redirect URLs with stray
//! encoded-newline (`%0A`) artifacts and embedded whitespace. Either would
//! corrupt the event payload once it is embedded in a quoted string literal
//! on the bridge, so both are stripped before dispatch.

/// Encoded-newline artifact the provider emits. Only this exact uppercase
/// form has been observed; removal is byte-exact.
const ENCODED_NEWLINE: &str = "%0A";

/// Strip `%0A` sequences and all whitespace from a raw URI string.
///
/// Runs to a fixed point: removal can expose a new artifact (e.g. `%0%0AA`
/// collapses to `%0A`), so one pass is repeated until the string stops
/// changing. This makes `sanitize(sanitize(s)) == sanitize(s)` hold for
/// every input, and leaves an already-clean URI untouched.
pub fn sanitize(raw: &str) -> String {
    let mut current = raw.to_owned();
    loop {
        let next: String = current
            .replace(ENCODED_NEWLINE, "")
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if next == current {
            return current;
        }
        current = next;
    }
}
