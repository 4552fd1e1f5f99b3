//! `paylink classify`: run one URI through the gateway and print the event.

use paylink_core::types::{Activation, ActivationOrigin};
use paylink_gateway::bridge::HostBridge;
use paylink_gateway::gateway::DeepLinkGateway;

use crate::cli::ClassifyOpts;

pub fn cmd_classify(gateway: &DeepLinkGateway, opts: &ClassifyOpts) -> anyhow::Result<()> {
    let activation = Activation {
        action: opts.action.clone(),
        uri: Some(opts.uri.clone()),
    };

    // Stdout bridge: prints the event JSON the moment it is dispatched.
    let bridge = StdoutBridge;
    match gateway.relay(ActivationOrigin::ColdStart, &activation, &bridge) {
        Some(_) => Ok(()),
        None => {
            // Not a process error: unmatched URIs are the expected outcome
            // for anything that is not a payment callback.
            tracing::info!(uri = %opts.uri, "no event produced");
            Ok(())
        }
    }
}

struct StdoutBridge;

impl HostBridge for StdoutBridge {
    fn is_ready(&self) -> bool {
        true
    }

    fn dispatch(&self, event: &paylink_core::types::NotificationEvent) -> bool {
        match serde_json::to_string_pretty(event) {
            Ok(json) => {
                println!("{json}");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize event");
                false
            }
        }
    }
}
