//! paylink-core: Shared types for the payment redirect deep-link gateway.

pub mod error;
pub mod types;

pub use error::GatewayError;
