//! Lead intake handler: parse, enrich, forward.
//!
//! The caller of this endpoint only ever sees plain `"OK"` or `"ERROR"`.
//! A body that fails to parse is treated as an empty payload and still
//! produces a (maximally generic) outbound record; only transport
//! failures on the forwarding hop surface as `"ERROR"`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use leadrelay_core::{build_outbound, IntakeRecord};
use serde_json::Value;
use tracing::{error, info, instrument, warn};

use crate::AppState;

/// Banner shown for GET requests to the root path.
pub async fn banner() -> &'static str {
    "Webhook bridge is running. POST JSON here or visit /health or /ping."
}

/// Accepts a lead intake payload and forwards the normalized record.
///
/// Always replies with a plain-text `"OK"` (200) or `"ERROR"` (500);
/// no structured error body, no distinction between failure causes.
#[instrument(name = "submit_lead", skip(state, body), fields(body_bytes = body.len()))]
pub async fn submit_lead(State(state): State<AppState>, body: Bytes) -> Response {
    let payload: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "Unparseable payload, continuing with empty record");
            Value::Null
        }
    };

    if let Some(object) = payload.as_object() {
        info!(keys = ?object.keys().collect::<Vec<_>>(), "Incoming webhook payload");
    }

    let record = IntakeRecord::from_value(&payload);
    let outbound = build_outbound(&record, state.clock.as_ref());

    info!(
        practice_area = %outbound.practice_area,
        has_transcript = outbound.has_transcript,
        contact_id = %outbound.contact_id,
        "Forwarding normalized record"
    );

    match state.forwarder.forward(&state.config.downstream_url, &outbound).await {
        Ok(response) => {
            info!(
                status = response.status_code,
                body = %response.body,
                "Downstream response"
            );
            (StatusCode::OK, "OK").into_response()
        }
        Err(e) => {
            error!(error = %e, "Lead processing failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "ERROR").into_response()
        }
    }
}
