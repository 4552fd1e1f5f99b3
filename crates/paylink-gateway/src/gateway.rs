//! DeepLinkGateway: classifies OS activations against the recognized
//! redirect shapes and relays matched callbacks to the host bridge.
//!
//! Classification is fail-open: a malformed payment callback never blocks
//! the activation path, it just produces no event. Both OS delivery moments
//! (cold start and reactivation) funnel into the same [`DeepLinkGateway::classify`]
//! call; the only difference is the origin tag carried for diagnostics.

use std::fmt;

use paylink_core::types::{Activation, ActivationOrigin, NotificationEvent, ParsedParameters};

use crate::bridge::HostBridge;
use crate::pattern::{RedirectPattern, recognized_patterns};
use crate::uri::split_uri;
use crate::{query, sanitize};

// ─── Outcome ────────────────────────────────────────────────────────

/// Result of classifying one activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifyOutcome {
    /// The URI matched a recognized redirect shape.
    Matched {
        /// Event to forward to the host layer.
        event: NotificationEvent,
        /// Decoded query parameters, diagnostic side channel only.
        parameters: ParsedParameters,
    },
    /// No event is produced.
    Ignored(IgnoreReason),
}

impl ClassifyOutcome {
    /// Collapse the outcome to the public "event or nothing" contract.
    pub fn into_event(self) -> Option<NotificationEvent> {
        match self {
            Self::Matched { event, .. } => Some(event),
            Self::Ignored(_) => None,
        }
    }
}

/// Why an activation produced no event. Only `UriUnparsable` is an error
/// condition; the rest are expected outcomes for unrelated activations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Action tag was not "view".
    NotAView { action: String },
    /// Activation carried no URI (e.g. a plain app launch).
    NoUri,
    /// URI failed to parse; logged at error level, never propagated.
    UriUnparsable { detail: String },
    /// URI parsed but matched neither recognized redirect shape.
    NoPatternMatch { uri: String },
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAView { action } => write!(f, "action is not view: {action}"),
            Self::NoUri => write!(f, "activation carried no uri"),
            Self::UriUnparsable { detail } => write!(f, "uri unparsable: {detail}"),
            Self::NoPatternMatch { uri } => write!(f, "no recognized redirect shape: {uri}"),
        }
    }
}

// ─── DeepLinkGateway ────────────────────────────────────────────────

/// Stateless classifier for payment redirect deep links.
///
/// Holds only the immutable pattern set; every call is independent. The
/// gateway does not deduplicate redelivered activations — an identical URI
/// delivered twice forwards the same event twice, and the hosted app is
/// expected to be idempotent about repeated payment callbacks.
#[derive(Debug, Clone)]
pub struct DeepLinkGateway {
    /// Recognized redirect shapes, checked in order.
    patterns: Vec<RedirectPattern>,
}

impl Default for DeepLinkGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl DeepLinkGateway {
    /// Gateway with the built-in redirect shapes.
    pub fn new() -> Self {
        Self {
            patterns: recognized_patterns(),
        }
    }

    /// Gateway with an explicit pattern set.
    pub fn with_patterns(patterns: Vec<RedirectPattern>) -> Self {
        Self { patterns }
    }

    // ── Classification ──────────────────────────────────────────────

    /// Classify one activation. Pure: no logging, no delivery — the
    /// diagnostic logging for the outcome (including the per-parameter
    /// dump) lives in [`Self::handle_activation`].
    ///
    /// Checks are short-circuit: action tag, URI presence, split, pattern
    /// match. The URI components are compared raw — the splitter performs
    /// no case folding, dot-segment removal, or percent-encoding
    /// normalization, so `LIDAPAY://…` or a `/x/../…` path is a miss even
    /// when a normalizing parser would rewrite it into a match. On a match
    /// the raw URI is sanitized and wrapped in a [`NotificationEvent`];
    /// the decoded query parameters ride along as a diagnostic side
    /// channel but never influence the decision or the payload.
    pub fn classify(&self, activation: &Activation) -> ClassifyOutcome {
        if !activation.is_view() {
            return ClassifyOutcome::Ignored(IgnoreReason::NotAView {
                action: activation.action.clone(),
            });
        }
        let Some(raw) = activation.uri.as_deref() else {
            return ClassifyOutcome::Ignored(IgnoreReason::NoUri);
        };

        let parts = match split_uri(raw) {
            Ok(parts) => parts,
            Err(err) => {
                return ClassifyOutcome::Ignored(IgnoreReason::UriUnparsable {
                    detail: err.to_string(),
                });
            }
        };

        if !self.patterns.iter().any(|p| p.matches(&parts)) {
            return ClassifyOutcome::Ignored(IgnoreReason::NoPatternMatch {
                uri: raw.to_owned(),
            });
        }

        ClassifyOutcome::Matched {
            event: NotificationEvent::new(sanitize::sanitize(raw)),
            parameters: query::parse(parts.query),
        }
    }

    /// Handle one activation: classify, log the outcome (matched
    /// parameters are dumped here at debug level), and collapse to the
    /// public contract of "produced an event, or didn't".
    pub fn handle_activation(&self, activation: &Activation) -> Option<NotificationEvent> {
        match self.classify(activation) {
            ClassifyOutcome::Matched { event, parameters } => {
                tracing::debug!(uri = %event.detail, "payment redirect recognized");
                for (name, value) in &parameters {
                    tracing::debug!(name = %name, value = %value, "payment parameter");
                }
                Some(event)
            }
            ClassifyOutcome::Ignored(reason) => {
                match &reason {
                    IgnoreReason::UriUnparsable { detail } => {
                        tracing::error!(error = %detail, "failed to process payment redirect");
                    }
                    IgnoreReason::NoPatternMatch { uri } => {
                        tracing::info!(uri = %uri, "unrecognized activation uri, ignoring");
                    }
                    IgnoreReason::NotAView { .. } | IgnoreReason::NoUri => {
                        tracing::debug!(reason = %reason, "activation is not a deep link");
                    }
                }
                None
            }
        }
    }

    // ── Delivery ────────────────────────────────────────────────────

    /// The single funnel both OS entry points call: classify the activation
    /// and, on a match, forward the event to the host bridge exactly once.
    ///
    /// Delivery is fire-and-forget. A bridge that is not ready drops the
    /// event silently (logged, not surfaced); the event is still returned
    /// so the shell can observe what was classified.
    pub fn relay(
        &self,
        origin: ActivationOrigin,
        activation: &Activation,
        bridge: &dyn HostBridge,
    ) -> Option<NotificationEvent> {
        tracing::debug!(origin = %origin, "activation received");
        let event = self.handle_activation(activation)?;

        if !bridge.is_ready() {
            tracing::warn!(origin = %origin, "host bridge not ready, event dropped");
        } else if !bridge.dispatch(&event) {
            tracing::warn!(origin = %origin, "host bridge refused event");
        } else {
            tracing::debug!(origin = %origin, "payment redirect forwarded to web app");
        }
        Some(event)
    }
}
