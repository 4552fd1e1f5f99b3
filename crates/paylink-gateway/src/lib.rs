//! paylink-gateway: Classifies OS deep-link activations against the known
//! payment redirect shapes and relays matched callbacks to the hosted web
//! app as a single `deepLink` event per activation.

pub mod bridge;
pub mod gateway;
pub mod pattern;
pub mod query;
pub mod sanitize;
pub mod uri;

pub use paylink_core::types;
