//! Health probes for service monitoring.
//!
//! The relay has no external dependencies to check at probe time (the
//! downstream hop is fire-and-forget), so both probes are constant-time:
//! a plain liveness string and a JSON status snapshot of the running
//! configuration.

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::AppState;

/// Health status response structure.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status; always "healthy" while the process serves.
    pub status: &'static str,
    /// Timestamp when the probe was answered.
    pub timestamp: DateTime<Utc>,
    /// Configured downstream automation endpoint.
    pub downstream_url: String,
    /// Configured bind host.
    pub host: String,
    /// Configured bind port.
    pub port: u16,
    /// Configured debug flag.
    pub debug: bool,
}

/// Liveness probe returning a fixed string.
#[instrument(name = "ping")]
pub async fn ping() -> &'static str {
    "Webhook is live and ready to receive POSTs."
}

/// Health status probe returning the running configuration.
///
/// Designed to be called frequently by orchestration systems, so it
/// performs no outbound work.
#[instrument(name = "health_status", skip(state))]
pub async fn health_status(State(state): State<AppState>) -> Json<HealthResponse> {
    debug!("Answering health probe");

    Json(HealthResponse {
        status: "healthy",
        timestamp: state.clock.now_utc(),
        downstream_url: state.config.downstream_url.clone(),
        host: state.config.host.clone(),
        port: state.config.port,
        debug: state.config.debug,
    })
}
