//! Seam to the hosted web application layer.
//!
//! Delivery is best-effort, synchronous, fire-and-forget: one dispatch call
//! per classified activation, no acknowledgment, no retry, no buffering. A
//! bridge that is not yet ready (web content still loading) silently drops
//! the event.

use paylink_core::types::NotificationEvent;
use std::cell::RefCell;

/// Channel to the embedded web content. Single-writer: the gateway assumes
/// no concurrent dispatch attempts.
pub trait HostBridge {
    /// Whether the web content is loaded and able to receive events.
    fn is_ready(&self) -> bool;

    /// Deliver one event. Returns `true` if the bridge accepted it.
    fn dispatch(&self, event: &NotificationEvent) -> bool;
}

/// Render the JS snippet a webview bridge evaluates to surface the event to
/// the hosted app.
///
/// The detail lands inside a single-quoted literal. Sanitization already
/// strips the newline/whitespace artifacts; `\` and `'` are escaped here
/// because the query string is forwarded opaquely and may contain anything.
pub fn dispatch_script(event: &NotificationEvent) -> String {
    format!(
        "window.dispatchEvent(new CustomEvent('{}', {{ detail: '{}' }}));",
        event.event_name,
        escape_single_quoted(&event.detail)
    )
}

fn escape_single_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            _ => out.push(c),
        }
    }
    out
}

/// In-memory bridge that records every dispatched event. Test double.
#[derive(Debug, Default)]
pub struct RecordingBridge {
    ready: bool,
    events: RefCell<Vec<NotificationEvent>>,
}

impl RecordingBridge {
    /// Bridge that accepts events.
    pub fn ready() -> Self {
        Self {
            ready: true,
            events: RefCell::new(Vec::new()),
        }
    }

    /// Bridge whose web content has not finished loading.
    pub fn not_ready() -> Self {
        Self {
            ready: false,
            events: RefCell::new(Vec::new()),
        }
    }

    /// Events dispatched so far, in order.
    pub fn recorded(&self) -> Vec<NotificationEvent> {
        self.events.borrow().clone()
    }
}

impl HostBridge for RecordingBridge {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn dispatch(&self, event: &NotificationEvent) -> bool {
        self.events.borrow_mut().push(event.clone());
        true
    }
}
