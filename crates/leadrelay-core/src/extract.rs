//! Caller contact extraction from call transcripts.
//!
//! Transcripts arrive as marker-prefixed lines (`Caller:`, `Human:`,
//! `**Caller:**` and friends). Names are only trusted when spoken by the
//! caller; phone numbers and emails are searched across the whole
//! transcript because agents frequently read them back. Each pass is an
//! ordered chain of patterns and the first accepted candidate wins.
//! Nothing here errors: a pattern that finds nothing leaves its field
//! unset.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::CallerInfo;
use crate::phone::format_phone;

/// Caller marker at the start of a line, with optional asterisks on
/// either side of the colon.
static CALLER_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*\**\s*(?:caller|human)\s*:\**\s*").unwrap());

/// Bold caller marker embedded mid-line, e.g. after a timestamp.
static INLINE_CALLER_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\*\*\s*(?:caller|human)\s*:\*\*\s*").unwrap());

/// Naming patterns tried in order against each caller utterance.
///
/// Captures run to the end of the clause: a comma, sentence punctuation,
/// a conjunction, or end of line.
static NAME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    const CLAUSE: &str = r"([a-z][a-z' -]{0,40}?)(?:,|\.|!|\?|$|\s+and\b|\s+but\b)";
    let patterns = [
        format!(r"(?i)\bmy name is\s+{CLAUSE}"),
        format!(r"(?i)\bit'?s\s+{CLAUSE}"),
        format!(r"(?i)\bthis is\s+{CLAUSE}"),
        format!(r"(?i)\b(?:i'm|i am)\s+{CLAUSE}"),
        format!(r"(?i)\bcall me\s+{CLAUSE}"),
        // A bare capitalized two-word line, as a last resort.
        String::from(r"^\s*([A-Z][a-z'-]+\s+[A-Z][a-z'-]+)\s*$"),
    ];
    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
});

/// Phrases that disqualify a name candidate.
///
/// These are the acknowledgements, hedges, and greetings that the naming
/// patterns above routinely capture ("I'm calling about...", "it's
/// regarding...").
const NAME_BLOCKLIST: &[&str] = &[
    "okay",
    "yeah",
    "sure",
    "not sure",
    "uh huh",
    "hello",
    "good morning",
    "good afternoon",
    "good evening",
    "thank",
    "sorry",
    "about",
    "regarding",
    "calling",
    "speaking",
    "trying",
    "looking",
    "hoping",
    "wondering",
    "interested",
    "a lawyer",
    "an attorney",
    "the office",
    "here",
];

/// Trailing words dropped from a name candidate before validation.
const NAME_TRAILING_STOPWORDS: &[&str] = &["and", "but", "so", "um", "uh"];

/// Digit-based phone patterns, tried in order across the whole
/// transcript.
static PHONE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\(\d{3}\)\s*\d{3}[-.\s]?\d{4}",
        r"(?:\+?1[-.\s]?)?\d{3}[-.\s]\d{3}[-.\s]\d{4}",
        r"\b1?\d{10}\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Literal email address pattern.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}\b").unwrap());

/// Spoken email of the shape `<local> at <domain words> dot <ext>`.
///
/// The domain is limited to one to three letter-only words so the lazy
/// match cannot swallow an unrelated "me at ..." phrase earlier in the
/// line.
static SPOKEN_EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b([a-z0-9._-]+)\s+(?:at|@)\s+([a-z]+(?:\s[a-z]+){0,2}?)\s+dot\s+([a-z]{2,6})\b")
        .unwrap()
});

/// Spoken domain fragments mapped to canonical domains.
const SPOKEN_DOMAINS: &[(&str, &str)] = &[
    ("g mail", "gmail.com"),
    ("gmail", "gmail.com"),
    ("google mail", "gmail.com"),
    ("googlemail", "googlemail.com"),
    ("yahoo", "yahoo.com"),
    ("hotmail", "hotmail.com"),
    ("outlook", "outlook.com"),
    ("aol", "aol.com"),
    ("i cloud", "icloud.com"),
    ("icloud", "icloud.com"),
    ("proton mail", "protonmail.com"),
    ("protonmail", "protonmail.com"),
    ("comcast", "comcast.net"),
    ("verizon", "verizon.net"),
];

/// Extracts caller name, phone, and email from a transcript.
///
/// Best effort on every field; an empty transcript yields an empty
/// [`CallerInfo`].
pub fn extract_caller_info(transcript: &str) -> CallerInfo {
    CallerInfo {
        name: extract_name(transcript),
        phone: extract_phone(transcript),
        email: extract_email(transcript),
    }
}

/// Returns caller utterances with their markers stripped.
///
/// Shared with the summarizer, which concatenates these into the "human
/// text" blob.
pub(crate) fn caller_lines(transcript: &str) -> Vec<&str> {
    transcript
        .lines()
        .filter_map(|line| {
            if let Some(m) = CALLER_MARKER.find(line) {
                Some(line[m.end()..].trim())
            } else {
                INLINE_CALLER_MARKER.find(line).map(|m| line[m.end()..].trim())
            }
        })
        .filter(|content| !content.is_empty())
        .collect()
}

/// Scans caller utterances for a spoken name.
fn extract_name(transcript: &str) -> Option<String> {
    for line in caller_lines(transcript) {
        for pattern in NAME_PATTERNS.iter() {
            let Some(captures) = pattern.captures(line) else { continue };
            let Some(candidate) = captures.get(1) else { continue };
            if let Some(name) = clean_name(candidate.as_str()) {
                return Some(name);
            }
        }
    }
    None
}

/// Validates and normalizes a raw name capture.
///
/// Cuts at the first comma, drops trailing stopwords and punctuation,
/// rejects blocklisted filler and single-character captures, and
/// title-cases the rest.
fn clean_name(raw: &str) -> Option<String> {
    let clause = raw.split(',').next().unwrap_or_default();
    let mut words: Vec<&str> =
        clause.split_whitespace().map(|w| w.trim_matches(|c: char| c == '.' || c == '!')).collect();

    while let Some(last) = words.last() {
        if NAME_TRAILING_STOPWORDS.contains(&last.to_lowercase().as_str()) {
            words.pop();
        } else {
            break;
        }
    }

    let candidate = words.join(" ");
    if candidate.len() <= 1 {
        return None;
    }

    let lowered = candidate.to_lowercase();
    if NAME_BLOCKLIST.iter().any(|phrase| lowered.contains(phrase)) {
        return None;
    }

    Some(title_case(&candidate))
}

/// Uppercases the first letter of each word, lowercasing the rest.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Finds a phone number anywhere in the transcript.
///
/// Digit patterns run first in a fixed order; a spoken-digit pass only
/// runs when no digit pattern produces a valid ten-digit number.
fn extract_phone(transcript: &str) -> Option<String> {
    for pattern in PHONE_PATTERNS.iter() {
        for m in pattern.find_iter(transcript) {
            if let Some(formatted) = normalize_digits(m.as_str()) {
                return Some(formatted);
            }
        }
    }
    spoken_phone(transcript)
}

/// Strips a candidate to digits and formats it if exactly ten remain.
fn normalize_digits(candidate: &str) -> Option<String> {
    let mut digits: String = candidate.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 11 && digits.starts_with('1') {
        digits.remove(0);
    }
    if digits.len() == 10 {
        Some(format_phone(&digits))
    } else {
        None
    }
}

/// Converts a dictated phone number ("five five five one two...").
///
/// Looks for a run of exactly ten number-words; an eleven-word run
/// starting with "one" is treated as country-code-prefixed. Punctuation
/// between words does not break a run, any other word does.
fn spoken_phone(transcript: &str) -> Option<String> {
    let lowered = transcript.to_lowercase();

    let mut run = String::new();
    for word in lowered.split(|c: char| !c.is_ascii_alphanumeric()).filter(|w| !w.is_empty()) {
        match word_digit(word) {
            Some(digit) => run.push(digit),
            None => {
                if let Some(formatted) = digit_run_to_phone(&run) {
                    return Some(formatted);
                }
                run.clear();
            }
        }
    }
    digit_run_to_phone(&run)
}

/// Validates a completed run of spoken digits.
fn digit_run_to_phone(run: &str) -> Option<String> {
    match run.len() {
        10 => Some(format_phone(run)),
        11 if run.starts_with('1') => Some(format_phone(&run[1..])),
        _ => None,
    }
}

/// Maps a spoken number-word to its digit. "oh" is accepted for zero.
fn word_digit(word: &str) -> Option<char> {
    let digit = match word {
        "zero" | "oh" => '0',
        "one" => '1',
        "two" => '2',
        "three" => '3',
        "four" => '4',
        "five" => '5',
        "six" => '6',
        "seven" => '7',
        "eight" => '8',
        "nine" => '9',
        _ => return None,
    };
    Some(digit)
}

/// Finds an email anywhere in the transcript, literal form first.
fn extract_email(transcript: &str) -> Option<String> {
    if let Some(m) = EMAIL_PATTERN.find(transcript) {
        return Some(m.as_str().to_lowercase());
    }
    spoken_email(transcript)
}

/// Reconstructs a dictated email ("john at gmail dot com").
fn spoken_email(transcript: &str) -> Option<String> {
    let captures = SPOKEN_EMAIL_PATTERN.captures(transcript)?;
    let local = captures.get(1)?.as_str().to_lowercase();
    let domain_words = captures.get(2)?.as_str().trim().to_lowercase();
    let extension = captures.get(3)?.as_str().to_lowercase();

    let domain = SPOKEN_DOMAINS
        .iter()
        .find(|(spoken, _)| *spoken == domain_words)
        .map(|(_, canonical)| (*canonical).to_string())
        .unwrap_or_else(|| format!("{}.{extension}", domain_words.replace(' ', "")));

    if local.is_empty() || !domain.contains('.') {
        return None;
    }
    Some(format!("{local}@{domain}"))
}
