//! Domain models for lead intake and the normalized outbound record.
//!
//! `IntakeRecord` is a best-effort view over whatever JSON the CRM sends;
//! no field is required and absence is represented by the empty string.
//! `OutboundRecord` is the normalized payload forwarded downstream, built
//! once per request and never persisted.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Legal practice area assigned to a lead.
///
/// Closed set; every description maps to exactly one label. `General` is
/// the catch-all for text that matches no keyword group, `Other` is
/// reserved for empty input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PracticeArea {
    /// Accidents and injury claims.
    #[serde(rename = "Personal Injury")]
    PersonalInjury,
    /// Divorce, custody, and support matters.
    #[serde(rename = "Family Law")]
    FamilyLaw,
    /// Impaired driving charges.
    #[serde(rename = "DUI/DWI")]
    DuiDwi,
    /// Citations and moving violations.
    #[serde(rename = "Traffic Law")]
    TrafficLaw,
    /// Criminal defense.
    #[serde(rename = "Criminal Law")]
    CriminalLaw,
    /// Wills, trusts, and estates.
    #[serde(rename = "Estate Planning")]
    EstatePlanning,
    /// Consumer and business bankruptcy.
    #[serde(rename = "Bankruptcy")]
    Bankruptcy,
    /// Property transactions and disputes.
    #[serde(rename = "Real Estate")]
    RealEstate,
    /// Contracts and business formation.
    #[serde(rename = "Business Law")]
    BusinessLaw,
    /// Visas, green cards, and status matters.
    #[serde(rename = "Immigration")]
    Immigration,
    /// SSDI/SSI benefit claims.
    #[serde(rename = "Social Security Disability")]
    SocialSecurityDisability,
    /// Workplace injury claims.
    #[serde(rename = "Workers' Compensation")]
    WorkersCompensation,
    /// Civil rights violations.
    #[serde(rename = "Civil Rights")]
    CivilRights,
    /// IRS and tax disputes.
    #[serde(rename = "Tax Law")]
    TaxLaw,
    /// Matched no keyword group.
    #[serde(rename = "General")]
    General,
    /// Empty or absent description.
    #[serde(rename = "Other")]
    Other,
}

impl PracticeArea {
    /// Returns the human-readable label used in the outbound payload.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PersonalInjury => "Personal Injury",
            Self::FamilyLaw => "Family Law",
            Self::DuiDwi => "DUI/DWI",
            Self::TrafficLaw => "Traffic Law",
            Self::CriminalLaw => "Criminal Law",
            Self::EstatePlanning => "Estate Planning",
            Self::Bankruptcy => "Bankruptcy",
            Self::RealEstate => "Real Estate",
            Self::BusinessLaw => "Business Law",
            Self::Immigration => "Immigration",
            Self::SocialSecurityDisability => "Social Security Disability",
            Self::WorkersCompensation => "Workers' Compensation",
            Self::CivilRights => "Civil Rights",
            Self::TaxLaw => "Tax Law",
            Self::General => "General",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for PracticeArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw lead intake fields pulled from the inbound JSON payload.
///
/// Built with [`IntakeRecord::from_value`]. Top-level keys win; the nested
/// `customData` object is consulted for any field the top level leaves
/// empty. Absent or non-string values collapse to the empty string so the
/// rest of the pipeline never deals with missing keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeRecord {
    /// Caller's full name.
    pub full_name: String,
    /// Caller's email address.
    pub email: String,
    /// Caller's phone number, in whatever format the CRM sent.
    pub phone: String,
    /// Free-text case description.
    pub case_description: String,
    /// Tag field, used as a description fallback.
    pub tags: String,
    /// Full conversation transcript, if the lead came from a call.
    pub transcript: String,
    /// Caller's city.
    pub city: String,
    /// Caller's state.
    pub state: String,
    /// CRM contact identifier.
    pub contact_id: String,
}

impl IntakeRecord {
    /// Builds an intake record from an arbitrary JSON value.
    ///
    /// A non-object value (including `null` from an unparseable body)
    /// yields the all-empty record; processing continues downstream with
    /// a maximally generic result rather than an error.
    pub fn from_value(value: &Value) -> Self {
        let custom = value.get("customData");

        let field = |key: &str| -> String {
            let top = str_field(Some(value), key);
            if top.is_empty() {
                str_field(custom, key)
            } else {
                top
            }
        };

        Self {
            full_name: field("full_name"),
            email: field("email"),
            phone: field("phone"),
            case_description: field("case_description"),
            tags: tags_field(value).or_else(|| custom.and_then(tags_field)).unwrap_or_default(),
            transcript: transcript_field(value, custom),
            city: field("city"),
            state: field("state"),
            contact_id: field("contact_id"),
        }
    }

    /// True when every field is empty.
    pub fn is_empty(&self) -> bool {
        self.full_name.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty()
            && self.case_description.is_empty()
            && self.tags.is_empty()
            && self.transcript.is_empty()
            && self.city.is_empty()
            && self.state.is_empty()
            && self.contact_id.is_empty()
    }
}

/// Caller contact details recovered from a transcript.
///
/// Each field is independently optional; extraction failure is not an
/// error, it just leaves the field unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallerInfo {
    /// Extracted caller name, title-cased.
    pub name: Option<String>,
    /// Extracted phone number in `(AAA) BBB-CCCC` form.
    pub phone: Option<String>,
    /// Extracted email address, lower-cased.
    pub email: Option<String>,
}

/// Normalized record forwarded to the downstream automation endpoint.
///
/// Field names match the downstream contract verbatim, including the
/// duplicated practice-area/case-type pair.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundRecord {
    /// Caller's full name.
    #[serde(rename = "Full Name")]
    pub full_name: String,
    /// Caller's email address.
    #[serde(rename = "Email")]
    pub email: String,
    /// Formatted phone number.
    #[serde(rename = "Phone")]
    pub phone: String,
    /// Final case description after all fallbacks.
    #[serde(rename = "Case Description")]
    pub case_description: String,
    /// Classified practice area.
    #[serde(rename = "Practice Area")]
    pub practice_area: PracticeArea,
    /// Duplicate of the practice area, kept for the downstream contract.
    #[serde(rename = "Case Type")]
    pub case_type: PracticeArea,
    /// CRM contact identifier, passed through.
    #[serde(rename = "Contact ID")]
    pub contact_id: String,
    /// Caller's city, passed through.
    #[serde(rename = "City")]
    pub city: String,
    /// Caller's state, passed through.
    #[serde(rename = "State")]
    pub state: String,
    /// Constant source tag identifying the CRM.
    #[serde(rename = "Source")]
    pub source: &'static str,
    /// When the record was assembled (UTC).
    #[serde(rename = "Timestamp")]
    pub timestamp: DateTime<Utc>,
    /// Whether the inbound payload carried a transcript.
    #[serde(rename = "Has Transcript")]
    pub has_transcript: bool,
    /// Transcript length in characters.
    #[serde(rename = "Transcript Length")]
    pub transcript_length: usize,
}

/// Pulls a trimmed string field out of an optional JSON object.
fn str_field(value: Option<&Value>, key: &str) -> String {
    value
        .and_then(|v| v.get(key))
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or_default()
        .to_string()
}

/// Reads the tag field, accepting a string or an array of strings.
///
/// The CRM emits both shapes; for arrays the first entry is used.
fn tags_field(value: &Value) -> Option<String> {
    match value.get("tags") {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Array(items)) => items
            .iter()
            .find_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from),
        _ => None,
    }
}

/// Resolves the transcript from its aliases, top level first.
fn transcript_field(value: &Value, custom: Option<&Value>) -> String {
    for key in ["transcription", "transcript"] {
        let text = str_field(Some(value), key);
        if !text.is_empty() {
            return text;
        }
    }
    for key in ["transcription", "transcript", "case_transcript"] {
        let text = str_field(custom, key);
        if !text.is_empty() {
            return text;
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn practice_area_labels_round_trip_through_serde() {
        let label = serde_json::to_value(PracticeArea::SocialSecurityDisability).unwrap();
        assert_eq!(label, json!("Social Security Disability"));
        assert_eq!(PracticeArea::DuiDwi.to_string(), "DUI/DWI");
    }

    #[test]
    fn from_value_reads_top_level_fields() {
        let payload = json!({
            "full_name": "Jane Roe",
            "email": "jane@example.com",
            "phone": "5551234567",
            "case_description": "slip and fall",
            "city": "Denver",
            "state": "CO",
            "contact_id": "abc-123",
        });

        let record = IntakeRecord::from_value(&payload);
        assert_eq!(record.full_name, "Jane Roe");
        assert_eq!(record.case_description, "slip and fall");
        assert_eq!(record.contact_id, "abc-123");
    }

    #[test]
    fn custom_data_fills_missing_fields_only() {
        let payload = json!({
            "full_name": "Jane Roe",
            "customData": {
                "full_name": "Should Not Win",
                "phone": "5559876543",
                "case_transcript": "Caller: hello",
            },
        });

        let record = IntakeRecord::from_value(&payload);
        assert_eq!(record.full_name, "Jane Roe");
        assert_eq!(record.phone, "5559876543");
        assert_eq!(record.transcript, "Caller: hello");
    }

    #[test]
    fn transcript_aliases_resolve_in_order() {
        let payload = json!({
            "transcript": "Caller: from alias",
            "customData": { "transcription": "Caller: ignored" },
        });
        assert_eq!(IntakeRecord::from_value(&payload).transcript, "Caller: from alias");
    }

    #[test]
    fn tags_accept_string_or_array() {
        let as_string = json!({ "tags": "divorce lead" });
        assert_eq!(IntakeRecord::from_value(&as_string).tags, "divorce lead");

        let as_array = json!({ "tags": ["dui lead", "priority"] });
        assert_eq!(IntakeRecord::from_value(&as_array).tags, "dui lead");
    }

    #[test]
    fn malformed_payload_collapses_to_empty_record() {
        assert!(IntakeRecord::from_value(&Value::Null).is_empty());
        assert!(IntakeRecord::from_value(&json!("just a string")).is_empty());
        assert!(IntakeRecord::from_value(&json!({ "phone": 5551234567u64 })).is_empty());
    }
}
