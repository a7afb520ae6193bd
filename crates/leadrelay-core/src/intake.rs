//! Outbound record assembly.
//!
//! Orchestrates the enrichment pipeline: phone formatting, transcript
//! extraction and summarization for fields the payload left empty, the
//! practice-area classifier, and the traffic override policy.

use tracing::debug;

use crate::classify::classify;
use crate::extract::extract_caller_info;
use crate::models::{IntakeRecord, OutboundRecord, PracticeArea};
use crate::phone::format_phone;
use crate::summarize::{summarize_transcript, DEFAULT_MAX_LEN};
use crate::time::Clock;

/// Source tag stamped on every outbound record.
pub const SOURCE: &str = "GoHighLevel";

/// Description used when every fallback comes up empty.
pub const DEFAULT_DESCRIPTION: &str = "Legal consultation request";

/// Driving-related terms that trigger the traffic override.
///
/// Deliberately broader than the classifier's Traffic Law keywords:
/// descriptions like "arrested while driving on a suspended license"
/// classify as Criminal Law because no Traffic Law keyword matches, and
/// this policy pulls them back. Kept at the orchestration layer rather
/// than folded into classifier order so classifier behavior stays
/// byte-compatible.
const DRIVING_TERMS: &[&str] = &["driving", "speeding", "traffic", "ticket", "license", "pulled over"];

/// Forces Traffic Law for driving-related descriptions the classifier
/// routed elsewhere.
///
/// DUI/DWI results are left alone; a DUI is driving-related by
/// definition and must not be downgraded.
pub fn apply_traffic_override(description: &str, area: PracticeArea) -> PracticeArea {
    if matches!(area, PracticeArea::TrafficLaw | PracticeArea::DuiDwi) {
        return area;
    }

    let lowered = description.to_lowercase();
    if DRIVING_TERMS.iter().any(|term| lowered.contains(term)) {
        debug!(original = %area, "Driving term present, overriding to Traffic Law");
        return PracticeArea::TrafficLaw;
    }
    area
}

/// Builds the normalized outbound record from a raw intake record.
///
/// Contact fields missing from the payload are recovered from the
/// transcript where possible; the description falls back through
/// transcript summary, then tags, then [`DEFAULT_DESCRIPTION`]. The
/// phone number is formatted unconditionally.
pub fn build_outbound(record: &IntakeRecord, clock: &dyn Clock) -> OutboundRecord {
    let mut full_name = record.full_name.clone();
    let mut email = record.email.clone();
    let mut phone = format_phone(&record.phone);
    let mut description = record.case_description.clone();

    let transcript = record.transcript.as_str();
    if !transcript.is_empty() {
        let caller = extract_caller_info(transcript);
        debug!(
            found_name = caller.name.is_some(),
            found_phone = caller.phone.is_some(),
            found_email = caller.email.is_some(),
            "Transcript extraction finished"
        );

        if full_name.is_empty() {
            full_name = caller.name.unwrap_or_default();
        }
        if phone.is_empty() {
            phone = caller.phone.unwrap_or_default();
        }
        if email.is_empty() {
            email = caller.email.unwrap_or_default();
        }
        if description.is_empty() {
            description = summarize_transcript(transcript, DEFAULT_MAX_LEN);
        }
    }

    if description.is_empty() {
        description = record.tags.clone();
    }
    if description.is_empty() {
        description = DEFAULT_DESCRIPTION.to_string();
    }

    let practice_area = apply_traffic_override(&description, classify(&description));

    OutboundRecord {
        full_name,
        email,
        phone,
        case_description: description,
        practice_area,
        case_type: practice_area,
        contact_id: record.contact_id.clone(),
        city: record.city.clone(),
        state: record.state.clone(),
        source: SOURCE,
        timestamp: clock.now_utc(),
        has_transcript: !transcript.is_empty(),
        transcript_length: transcript.chars().count(),
    }
}
