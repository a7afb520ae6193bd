//! HTTP surface for the lead intake relay.
//!
//! Thin plumbing around `leadrelay-core`: an axum router with the intake
//! endpoint and health probes, figment-layered configuration, and the
//! shared request state.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::sync::Arc;

use leadrelay_core::Clock;
use leadrelay_delivery::ForwardClient;

pub mod config;
pub mod handlers;
pub mod server;

pub use config::Config;
pub use server::{create_router, start_server};

/// Shared state handed to every request handler.
///
/// Everything here is immutable per-process; handlers never hold
/// cross-request mutable state.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration.
    pub config: Arc<Config>,
    /// Client for the outbound forwarding hop.
    pub forwarder: ForwardClient,
    /// Source of outbound timestamps.
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Builds the state from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the forwarding client cannot be constructed.
    pub fn new(config: Config, clock: Arc<dyn Clock>) -> anyhow::Result<Self> {
        let forwarder = ForwardClient::new(config.to_client_config())?;
        Ok(Self { config: Arc::new(config), forwarder, clock })
    }
}
