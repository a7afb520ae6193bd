//! Transcript summarization into a short case description.
//!
//! Only caller utterances feed the summary. Three layers run in order:
//! issue-sentence patterns over the caller text, a keyword-to-phrase
//! table, and finally a raw prefix of the caller text. Administrative
//! sentences (name/phone/email exchanges) are skipped so the summary
//! describes the legal issue, not the intake ceremony.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::caller_lines;

/// Default maximum summary length in characters.
pub const DEFAULT_MAX_LEN: usize = 200;

/// Issue-sentence starters, tried in order; each captures up to the
/// first sentence-ending punctuation.
static ISSUE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\b(i need help with [^.!?]+)",
        r"(?i)\b(i want to [^.!?]+)",
        r"(?i)\b(i was [^.!?]+)",
        r"(?i)\b(i have been [^.!?]+)",
        r"(?i)\b(my [^.!?]*? and i [^.!?]+)",
        r"(?i)\b(my [^.!?]+)",
        r"(?i)\b(there was [^.!?]+)",
        r"(?i)\b(someone [^.!?]+)",
        r"(?i)\b(i got [^.!?]+)",
        r"(?i)\b(i am [^.!?]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Markers that flag a captured sentence as administrative rather than a
/// description of the issue.
const ADMIN_MARKERS: &[&str] =
    &["name is", "phone number", "email", "address", "calling about", "contact"];

/// Keyword-to-phrase fallback table, first hit wins.
const KEYWORD_SUMMARIES: &[(&str, &str)] = &[
    ("divorce", "Divorce and family law matter"),
    ("custody", "Child custody dispute"),
    ("accident", "Vehicle accident injury claim"),
    ("injury", "Personal injury claim"),
    ("dui", "DUI arrest and defense"),
    ("arrest", "Criminal defense matter"),
    ("ticket", "Traffic ticket dispute"),
    ("bankruptcy", "Bankruptcy filing consultation"),
    ("estate", "Estate planning consultation"),
    ("will", "Will preparation and estate matter"),
    ("evict", "Landlord tenant dispute"),
    ("immigration", "Immigration case consultation"),
    ("workers comp", "Workers compensation claim"),
    ("disability", "Disability benefits claim"),
];

/// Fallback prefix length when no pattern or keyword matches.
const RAW_PREFIX_LEN: usize = 100;

/// Summary used when the transcript has no caller text at all.
const EMPTY_SUMMARY: &str = "Legal consultation request";

/// Reduces a transcript to a short case-description string.
///
/// A transcript that is empty or already within `max_len` characters is
/// returned unchanged, so callers are responsible for their own
/// empty-input fallback. The final summary never exceeds `max_len`;
/// over-long picks are truncated to `max_len - 3` characters with an
/// ellipsis appended.
pub fn summarize_transcript(transcript: &str, max_len: usize) -> String {
    if transcript.is_empty() || transcript.chars().count() <= max_len {
        return transcript.to_string();
    }

    let human_text = caller_lines(transcript).join(" ");
    let summary = issue_sentence(&human_text)
        .or_else(|| keyword_summary(&human_text))
        .unwrap_or_else(|| {
            if human_text.is_empty() {
                EMPTY_SUMMARY.to_string()
            } else {
                human_text.chars().take(RAW_PREFIX_LEN).collect()
            }
        });

    truncate_with_ellipsis(&summary, max_len)
}

/// Finds the first issue sentence that is not administrative.
///
/// Patterns are walked in priority order; within a pattern, later
/// matches are still considered when earlier ones are administrative.
fn issue_sentence(human_text: &str) -> Option<String> {
    for pattern in ISSUE_PATTERNS.iter() {
        for captures in pattern.captures_iter(human_text) {
            let Some(sentence) = captures.get(1) else { continue };
            let sentence = sentence.as_str().trim();

            let lowered = sentence.to_lowercase();
            if ADMIN_MARKERS.iter().any(|marker| lowered.contains(marker)) {
                continue;
            }
            return Some(sentence.to_string());
        }
    }
    None
}

/// Maps the caller text to a canned phrase by keyword.
fn keyword_summary(human_text: &str) -> Option<String> {
    let lowered = human_text.to_lowercase();
    KEYWORD_SUMMARIES
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, phrase)| (*phrase).to_string())
}

/// Truncates to `max_len` characters, appending `...` when cut.
fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_len.saturating_sub(3)).collect();
    format!("{cut}...")
}
