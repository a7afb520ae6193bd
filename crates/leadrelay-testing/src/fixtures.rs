//! Canned payloads and transcripts for integration tests.

use serde_json::{json, Value};

/// A complete intake payload with every contact field populated.
pub fn full_intake_payload() -> Value {
    json!({
        "full_name": "Jane Roe",
        "email": "jane.roe@example.com",
        "phone": "5551234567",
        "case_description": "I was hurt in a slip and fall",
        "city": "Denver",
        "state": "CO",
        "contact_id": "ghl-contact-42",
    })
}

/// A payload whose contact fields only exist under `customData`.
pub fn custom_data_payload() -> Value {
    json!({
        "contact_id": "ghl-contact-77",
        "customData": {
            "full_name": "Omar Haddad",
            "phone": "555.987.6543",
            "case_description": "filed chapter 7 last month",
        },
    })
}

/// A voice-platform payload carrying only a transcript.
pub fn transcript_only_payload() -> Value {
    json!({
        "contact_id": "ghl-contact-99",
        "customData": { "case_transcript": dictated_contact_transcript() },
    })
}

/// A transcript where the caller dictates name, number, and email.
pub fn dictated_contact_transcript() -> String {
    [
        "Agent: Thank you for calling the firm, how can I help you today?",
        "Caller: My name is David Glick",
        "Caller: I was in a car accident last week. The other driver ran a red light.",
        "Agent: I'm sorry to hear that. What is the best number to reach you?",
        "Caller: five five five one two three four five six seven",
        "Agent: And an email address for the intake paperwork?",
        "Caller: it's david at gmail dot com",
        "Agent: Perfect, an attorney will call you back shortly.",
    ]
    .join("\n")
}

/// A transcript using the bold marker style some platforms emit.
pub fn bold_marker_transcript() -> String {
    [
        "**Agent:** This call may be recorded. Who do I have the pleasure of speaking with?",
        "**Caller:** This is Maria Santos, calling about a divorce",
        "**Caller:** My husband and I separated in March and I need help with custody.",
        "**Agent:** We can absolutely help with that.",
    ]
    .join("\n")
}
