//! End-to-end tests over a real TCP listener.
//!
//! Boots the full router on an ephemeral port, posts intake payloads
//! with a real HTTP client, and asserts on what the mock downstream
//! endpoint receives.

use std::net::SocketAddr;
use std::sync::Arc;

use leadrelay_api::{create_router, AppState, Config};
use leadrelay_testing::{fixtures, frozen_clock, TestEnv};
use serde_json::json;

/// Spawns the relay on an ephemeral port and returns its address.
async fn spawn_relay(env: &TestEnv) -> SocketAddr {
    let config = Config {
        downstream_url: env.downstream_url(),
        host: "127.0.0.1".to_string(),
        port: 5000,
        debug: false,
        delivery_timeout_seconds: 2,
    };
    let state = AppState::new(config, Arc::new(frozen_clock())).expect("state should build");

    let listener =
        tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("failed to bind test listener");
    let addr = listener.local_addr().expect("failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, create_router(state)).await.expect("server failed");
    });

    addr
}

#[tokio::test]
async fn slip_and_fall_payload_round_trips() {
    let env = TestEnv::new().await.expect("failed to create test environment");
    let addr = spawn_relay(&env).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/"))
        .json(&json!({
            "phone": "5551234567",
            "case_description": "I was hurt in a slip and fall",
        }))
        .send()
        .await
        .expect("request should complete");

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.expect("body should read"), "OK");

    let payloads = env.received_payloads().await;
    assert_eq!(payloads.len(), 1);

    let record = &payloads[0];
    assert_eq!(record["Phone"], "(555) 123-4567");
    assert_eq!(record["Practice Area"], "Personal Injury");
    assert_eq!(record["Case Type"], "Personal Injury");
    assert_eq!(record["Source"], "GoHighLevel");
}

#[tokio::test]
async fn voice_lead_with_bold_markers_round_trips() {
    let env = TestEnv::new().await.expect("failed to create test environment");
    let addr = spawn_relay(&env).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/"))
        .json(&json!({
            "contact_id": "ghl-contact-12",
            "customData": { "transcription": fixtures::bold_marker_transcript() },
        }))
        .send()
        .await
        .expect("request should complete");

    assert_eq!(response.status(), 200);

    let payloads = env.received_payloads().await;
    let record = &payloads[0];
    assert_eq!(record["Full Name"], "Maria Santos");
    assert_eq!(record["Practice Area"], "Family Law");
    assert_eq!(record["Contact ID"], "ghl-contact-12");
    assert_eq!(record["Has Transcript"], true);
}

#[tokio::test]
async fn probes_respond_alongside_traffic() {
    let env = TestEnv::new().await.expect("failed to create test environment");
    let addr = spawn_relay(&env).await;
    let client = reqwest::Client::new();

    let ping = client
        .get(format!("http://{addr}/ping"))
        .send()
        .await
        .expect("ping should complete");
    assert_eq!(ping.status(), 200);

    let health = client
        .get(format!("http://{addr}/health"))
        .send()
        .await
        .expect("health should complete");
    assert_eq!(health.status(), 200);

    let body: serde_json::Value = health.json().await.expect("health should be JSON");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["downstream_url"], env.downstream_url());
}
