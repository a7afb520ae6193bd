//! HTTP client for forwarding normalized records downstream.
//!
//! Handles request construction, response capture, and error
//! categorization. The connection pool is shared across requests via the
//! underlying `reqwest::Client`, so one `ForwardClient` serves the whole
//! process.

use std::time::Duration;

use serde::Serialize;
use tracing::{info_span, Instrument};

use crate::error::{DeliveryError, Result};
use crate::DEFAULT_TIMEOUT_SECONDS;

/// Configuration for the forwarding client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Timeout applied to the whole request.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            user_agent: "Leadrelay/1.0".to_string(),
        }
    }
}

/// HTTP client for the single outbound hop.
///
/// Cheap to clone; clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct ForwardClient {
    client: reqwest::Client,
    config: ClientConfig,
}

/// Response from a forwarding attempt.
///
/// Captured for logging; the relay takes no action on the status beyond
/// recording it.
#[derive(Debug, Clone)]
pub struct ForwardResponse {
    /// HTTP status code returned by the downstream endpoint.
    pub status_code: u16,
    /// Response body, truncated for logging.
    pub body: String,
    /// Total duration of the request.
    pub duration: Duration,
    /// Whether the response was a 2xx.
    pub is_success: bool,
}

impl ForwardClient {
    /// Creates a new forwarding client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `DeliveryError::Configuration` if the HTTP client cannot
    /// be built with the provided settings.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| {
                DeliveryError::configuration(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    /// Creates a new forwarding client with default configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Posts a JSON payload to the downstream endpoint.
    ///
    /// Any HTTP status is a successful forward; the status and body come
    /// back in the [`ForwardResponse`] for the caller to log.
    ///
    /// # Errors
    ///
    /// - `Timeout` when the configured deadline elapses
    /// - `Network` for connection-level failures
    pub async fn forward<T: Serialize + ?Sized>(
        &self,
        url: &str,
        payload: &T,
    ) -> Result<ForwardResponse> {
        let start_time = std::time::Instant::now();

        let span = info_span!("forward_record", url = %url);

        async move {
            tracing::debug!("Forwarding record downstream");

            let response = match self.client.post(url).json(payload).send().await {
                Ok(response) => response,
                Err(e) => {
                    let duration = start_time.elapsed();
                    tracing::warn!(duration_ms = duration.as_millis(), "Request failed: {}", e);

                    if e.is_timeout() {
                        return Err(DeliveryError::timeout(self.config.timeout.as_secs()));
                    }
                    if e.is_connect() {
                        return Err(DeliveryError::network(format!("connection failed: {e}")));
                    }
                    return Err(DeliveryError::network(e.to_string()));
                }
            };

            let duration = start_time.elapsed();
            let status_code = response.status().as_u16();
            let is_success = response.status().is_success();

            let body = match response.text().await {
                Ok(text) => truncate_body(&text),
                Err(e) => {
                    tracing::warn!("Failed to read response body: {}", e);
                    format!("[failed to read response body: {e}]")
                }
            };

            match status_code {
                200..=299 => tracing::info!(
                    status = status_code,
                    duration_ms = duration.as_millis(),
                    "Record forwarded"
                ),
                _ => tracing::warn!(
                    status = status_code,
                    duration_ms = duration.as_millis(),
                    body = %body,
                    "Downstream returned error status"
                ),
            }

            Ok(ForwardResponse { status_code, body, duration, is_success })
        }
        .instrument(span)
        .await
    }
}

/// Caps the captured response body for logging.
fn truncate_body(text: &str) -> String {
    const MAX_BODY_SIZE: usize = 1024;

    if text.len() > MAX_BODY_SIZE {
        let suffix = "... (truncated)";
        let cut: String = text.chars().take(MAX_BODY_SIZE - suffix.len()).collect();
        format!("{cut}{suffix}")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn successful_forward() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/hook"))
            .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
            .mount(&mock_server)
            .await;

        let client = ForwardClient::with_defaults().unwrap();
        let payload = json!({ "Full Name": "Jane Roe" });

        let response =
            client.forward(&format!("{}/hook", mock_server.uri()), &payload).await.unwrap();

        assert_eq!(response.status_code, 200);
        assert!(response.is_success);
        assert_eq!(response.body, "OK");
    }

    #[tokio::test]
    async fn payload_is_sent_as_json() {
        let mock_server = MockServer::start().await;
        let payload = json!({ "Practice Area": "Family Law", "Case Type": "Family Law" });

        Mock::given(method("POST"))
            .and(header("content-type", "application/json"))
            .and(body_json(&payload))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let client = ForwardClient::with_defaults().unwrap();
        let response = client.forward(&mock_server.uri(), &payload).await.unwrap();
        assert!(response.is_success);
    }

    #[tokio::test]
    async fn error_status_is_still_a_forward() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&mock_server)
            .await;

        let client = ForwardClient::with_defaults().unwrap();
        let response = client.forward(&mock_server.uri(), &json!({})).await.unwrap();

        assert_eq!(response.status_code, 500);
        assert_eq!(response.body, "Internal Server Error");
        assert!(!response.is_success);
    }

    #[tokio::test]
    async fn connection_failure_is_a_network_error() {
        // Port 9 (discard) is a safe dead endpoint.
        let client = ForwardClient::with_defaults().unwrap();
        let result = client.forward("http://127.0.0.1:9/hook", &json!({})).await;

        assert!(matches!(
            result,
            Err(DeliveryError::Network { .. } | DeliveryError::Timeout { .. })
        ));
    }

    #[tokio::test]
    async fn slow_downstream_times_out() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&mock_server)
            .await;

        let config =
            ClientConfig { timeout: Duration::from_millis(200), ..ClientConfig::default() };
        let client = ForwardClient::new(config).unwrap();

        let result = client.forward(&mock_server.uri(), &json!({})).await;
        assert!(matches!(result, Err(DeliveryError::Timeout { .. })));
    }

    #[test]
    fn long_response_bodies_are_truncated() {
        let long = "x".repeat(5000);
        let truncated = truncate_body(&long);

        assert!(truncated.len() <= 1024);
        assert!(truncated.ends_with("... (truncated)"));
    }
}
