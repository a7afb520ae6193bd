//! Outbound forwarding for normalized lead records.
//!
//! This crate owns the single outbound hop: one HTTP POST of the
//! normalized payload to the configured automation endpoint. Delivery is
//! fire-and-forget — the response status and body are surfaced for
//! logging but nothing is retried, queued, or persisted.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod error;

pub use client::{ClientConfig, ForwardClient, ForwardResponse};
pub use error::{DeliveryError, Result};

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
