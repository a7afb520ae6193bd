//! Core domain models and the lead-enrichment pipeline.
//!
//! Provides the intake record model, the practice-area classifier, the
//! transcript extraction and summarization heuristics, and the payload
//! builder that assembles the normalized outbound record. Everything in
//! this crate is pure and synchronous; the HTTP plumbing lives in the
//! `leadrelay-api` and `leadrelay-delivery` crates.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod classify;
pub mod extract;
pub mod intake;
pub mod models;
pub mod phone;
pub mod summarize;
pub mod time;

pub use classify::classify;
pub use extract::extract_caller_info;
pub use intake::{apply_traffic_override, build_outbound};
pub use models::{CallerInfo, IntakeRecord, OutboundRecord, PracticeArea};
pub use phone::format_phone;
pub use summarize::summarize_transcript;
pub use time::{Clock, RealClock, TestClock};
