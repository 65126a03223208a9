//! Keyword and label extractors
//!
//! Every function here is total: when nothing matches it returns the field's
//! documented default instead of failing. Matching is first-match, so the
//! order of alternatives decides the result.

use crate::config::ModeKeywords;
use freightmail_domain::{Incoterm, Parties, ServiceType, TransportMode, UNKNOWN_READY_DATE};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Subject used when the text has no `Subject:` line
pub const NO_SUBJECT: &str = "No subject";

// CRLF mode: the subject is read before normalization, so `\r` must end a line too
static SUBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?imR)^Subject:\s*(.+)$").expect("subject pattern"));

static SERVICE_PATTERNS: LazyLock<Vec<(Regex, ServiceType)>> = LazyLock::new(|| {
    [
        (r"(?i)\bfcl\b", ServiceType::Fcl),
        (r"(?i)\blcl\b", ServiceType::Lcl),
        (r"(?i)\bair\b", ServiceType::Air),
        (r"(?i)\bairfreight\b", ServiceType::Air),
    ]
    .into_iter()
    .map(|(pattern, service)| (Regex::new(pattern).expect("service pattern"), service))
    .collect()
});

static INCOTERM_PATTERNS: LazyLock<Vec<(Regex, Incoterm)>> = LazyLock::new(|| {
    Incoterm::PRIORITY
        .into_iter()
        .map(|term| {
            let pattern = format!(r"\b{}\b", term.as_str());
            (Regex::new(&pattern).expect("incoterm pattern"), term)
        })
        .collect()
});

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{4}-[0-9]{2}-[0-9]{2})").expect("iso date pattern"));

static DATE_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:ready\s+date|available)[:\s]+(.+?)(?:\n|$)").expect("date label pattern")
});

static SHIPPER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)shipper[:\s]+(.+?)(?:\n|consignee|$)").expect("shipper pattern")
});

static CONSIGNEE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)consignee[:\s]+(.+?)(?:\n|shipper|$)").expect("consignee pattern")
});

static COMMODITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)commodity[:\s]+(.+?)(?:\n|$)").expect("commodity pattern")
});

/// First capture group of the first match, trimmed
fn capture(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Extract the subject line from the raw (un-normalized) text
pub fn extract_subject(raw_text: &str) -> String {
    capture(&SUBJECT, raw_text).unwrap_or_else(|| NO_SUBJECT.to_string())
}

/// Classify the transport mode with the default keyword sets
pub fn extract_mode(text: &str) -> TransportMode {
    classify_mode(text, &ModeKeywords::default())
}

/// Classify the transport mode with the given keyword sets
///
/// Ocean is checked first, then air, then ground. There is no scoring: a
/// single ocean keyword beats any number of air keywords.
pub fn classify_mode(text: &str, keywords: &ModeKeywords) -> TransportMode {
    let lower = text.to_lowercase();
    let categories = [
        (&keywords.ocean, TransportMode::Ocean),
        (&keywords.air, TransportMode::Air),
        (&keywords.ground, TransportMode::Ground),
    ];

    for (words, mode) in categories {
        if let Some(hit) = words.iter().find(|w| lower.contains(&w.to_lowercase())) {
            debug!("Mode {} from keyword '{}'", mode, hit);
            return mode;
        }
    }

    TransportMode::Unknown
}

/// Extract the service type from whole-word service vocabulary
pub fn extract_service(text: &str) -> ServiceType {
    SERVICE_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, service)| *service)
        .unwrap_or(ServiceType::Unknown)
}

/// Extract the incoterm; earlier terms in [`Incoterm::PRIORITY`] win
pub fn extract_incoterm(text: &str) -> Incoterm {
    let upper = text.to_uppercase();
    INCOTERM_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(&upper))
        .map(|(_, term)| *term)
        .unwrap_or(Incoterm::Unknown)
}

/// Extract the ready date
///
/// An ISO date anywhere in the text wins. Otherwise the text after a
/// `Ready date:` / `Available:` label is returned verbatim, which keeps
/// relative phrases such as "next week" for the validator to flag. Falls back
/// to `"unknown"`.
pub fn extract_ready_date(text: &str) -> String {
    if let Some(date) = capture(&ISO_DATE, text) {
        return date;
    }

    capture(&DATE_LABEL, text).unwrap_or_else(|| UNKNOWN_READY_DATE.to_string())
}

/// Extract shipper and consignee independently
pub fn extract_parties(text: &str) -> Parties {
    Parties {
        shipper: capture(&SHIPPER, text).unwrap_or_default(),
        consignee: capture(&CONSIGNEE, text).unwrap_or_default(),
    }
}

/// Extract the commodity description
pub fn extract_commodity(text: &str) -> String {
    capture(&COMMODITY, text).unwrap_or_default()
}
