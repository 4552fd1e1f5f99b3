//! Error types for the gateway.
//!
//! These never cross the gateway's public API: classification is fail-open,
//! so every error is logged inside the gateway and folded into "no event".

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("failed to parse activation uri: {0}")]
    UriParse(String),
}
