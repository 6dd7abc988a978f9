//! Candidate venue extraction from free-text comments.
//!
//! Two independent pattern families, each exposed as its own lazy iterator so
//! they can be tested in isolation:
//!
//! 1. Phrase spans: "accepted at/in/to/by/for", "published at/in/to",
//!    "to appear in/at", "to be published in" (case-insensitive), capturing
//!    the text up to the next sentence delimiter.
//! 2. Glued abbreviation-year tokens: an upper-case letter run of length >= 2
//!    immediately followed by a 4-digit year, e.g. "CVPR2025".

use once_cell::sync::Lazy;
use regex::Regex;

/// Phrase forms that introduce a venue mention. The captured span runs to the
/// next period, comma, or semicolon, or to the end of the string. An optional
/// leading "the " is stripped from the span.
static PHRASE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:accepted\s+(?:at|in|to|by|for)|published\s+(?:at|in|to)|to\s+appear\s+(?:in|at)|to\s+be\s+published\s+in)\s+(?:the\s+)?([^.,;]+)",
    )
    .unwrap()
});

/// Upper-case abbreviation glued to a 4-digit year with no whitespace.
/// Deliberately not `(?i)`: lowercase runs are not conference abbreviations.
static GLUED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b([A-Z]{2,})(\d{4})\b").unwrap());

/// Candidate venue-name spans following an acceptance/publication phrase, in
/// left-to-right order. Spans too short to name a venue, or made only of
/// digits, are discarded. An empty iterator is valid output, not an error.
pub fn phrase_candidates(text: &str) -> impl Iterator<Item = &str> + '_ {
    PHRASE_RE
        .captures_iter(text)
        .map(|caps| caps.get(1).unwrap().as_str().trim())
        .filter(|span| span.len() > 2 && !span.chars().all(|c| c.is_ascii_digit()))
}

/// `(abbreviation, year)` pairs for glued tokens like "CVPR2025", in
/// left-to-right order.
pub fn glued_abbreviations(text: &str) -> impl Iterator<Item = (&str, &str)> + '_ {
    GLUED_RE.captures_iter(text).map(|caps| {
        (
            caps.get(1).unwrap().as_str(),
            caps.get(2).unwrap().as_str(),
        )
    })
}
