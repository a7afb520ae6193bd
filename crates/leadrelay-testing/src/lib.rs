//! Test infrastructure and fixtures for the lead intake relay.
//!
//! Provides a mock downstream endpoint, a pinned clock, and canned
//! payloads/transcripts so integration tests across the workspace stay
//! deterministic and free of external dependencies.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use anyhow::Result;
use chrono::DateTime;
use leadrelay_core::TestClock;
use serde_json::Value;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

pub mod fixtures;

/// Instant every test clock is pinned to.
pub const FROZEN_TIME: &str = "2025-01-15T10:30:00Z";

/// A clock pinned to [`FROZEN_TIME`].
pub fn frozen_clock() -> TestClock {
    TestClock::at(
        DateTime::parse_from_rfc3339(FROZEN_TIME)
            .expect("frozen time is valid RFC 3339")
            .to_utc(),
    )
}

/// Test environment with a mock downstream automation endpoint.
///
/// By default the downstream accepts every POST with `200 OK`; use
/// [`TestEnv::with_downstream_status`] to simulate failures. Received
/// payloads can be replayed for assertions.
pub struct TestEnv {
    /// Mock downstream endpoint standing in for the automation hook.
    pub downstream: MockServer,
}

impl TestEnv {
    /// Creates an environment whose downstream accepts everything.
    pub async fn new() -> Result<Self> {
        Self::with_downstream_status(200).await
    }

    /// Creates an environment whose downstream answers every POST with
    /// the given status.
    pub async fn with_downstream_status(status: u16) -> Result<Self> {
        let downstream = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(status).set_body_string("received"))
            .mount(&downstream)
            .await;

        Ok(Self { downstream })
    }

    /// URL of the mock downstream endpoint.
    pub fn downstream_url(&self) -> String {
        self.downstream.uri()
    }

    /// A clock pinned to [`FROZEN_TIME`].
    pub fn clock(&self) -> TestClock {
        frozen_clock()
    }

    /// JSON bodies of every payload the downstream has received.
    pub async fn received_payloads(&self) -> Vec<Value> {
        self.downstream
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter_map(|request| serde_json::from_slice(&request.body).ok())
            .collect()
    }
}
