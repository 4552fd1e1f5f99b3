use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ─── Constants ────────────────────────────────────────────────────

/// Action tag the OS layer attaches to a deep-link activation.
pub const ACTION_VIEW: &str = "view";

/// Fixed event name the hosted web app subscribes to.
pub const EVENT_NAME: &str = "deepLink";

// ─── Activation ───────────────────────────────────────────────────

/// Which OS delivery moment produced an activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationOrigin {
    /// App launched with a pending intent.
    ColdStart,
    /// New intent delivered while the app was already running.
    Reactivation,
}

impl ActivationOrigin {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ColdStart => "cold_start",
            Self::Reactivation => "reactivation",
        }
    }
}

impl fmt::Display for ActivationOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw activation handed over by the OS layer.
///
/// Consumed once per delivery; the gateway never retains it. The URI may be
/// absent (plain launch) or malformed (broken provider redirect) — neither
/// is a precondition violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activation {
    /// Semantic action tag (e.g. [`ACTION_VIEW`]).
    pub action: String,
    /// Raw URI string, if the activation carried one.
    pub uri: Option<String>,
}

impl Activation {
    /// Activation carrying a URI under the "view" action.
    pub fn view(uri: impl Into<String>) -> Self {
        Self {
            action: ACTION_VIEW.to_owned(),
            uri: Some(uri.into()),
        }
    }

    /// Activation with an arbitrary action and no URI (e.g. a plain launch).
    pub fn bare(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            uri: None,
        }
    }

    /// Whether the action tag indicates a view-style activation.
    pub fn is_view(&self) -> bool {
        self.action == ACTION_VIEW
    }
}

// ─── Parameters & Event ───────────────────────────────────────────

/// Decoded query parameters, keyed by name. Duplicate keys in the raw query
/// string collapse to the last occurrence. Diagnostic only: dispatch never
/// depends on individual parameter values.
pub type ParsedParameters = HashMap<String, String>;

/// Outbound payload delivered to the hosted web app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationEvent {
    /// Fixed event name ([`EVENT_NAME`]).
    pub event_name: String,
    /// Sanitized URI string.
    pub detail: String,
}

impl NotificationEvent {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            event_name: EVENT_NAME.to_owned(),
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_activation_carries_uri() {
        let act = Activation::view("lidapay://redirect-url?status=success");
        assert!(act.is_view());
        assert_eq!(
            act.uri.as_deref(),
            Some("lidapay://redirect-url?status=success")
        );
    }

    #[test]
    fn bare_activation_has_no_uri() {
        let act = Activation::bare("main");
        assert!(!act.is_view());
        assert!(act.uri.is_none());
    }

    #[test]
    fn notification_event_uses_fixed_name() {
        let ev = NotificationEvent::new("lidapay://redirect-url");
        assert_eq!(ev.event_name, EVENT_NAME);
        assert_eq!(ev.detail, "lidapay://redirect-url");
    }

    #[test]
    fn activation_origin_round_trips_through_serde() {
        let json = serde_json::to_string(&ActivationOrigin::ColdStart).expect("serialize");
        assert_eq!(json, "\"cold_start\"");
        let back: ActivationOrigin = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, ActivationOrigin::ColdStart);
    }
}
