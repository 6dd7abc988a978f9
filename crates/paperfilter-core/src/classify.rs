//! The four-tier venue classification cascade.
//!
//! Tiers are tried strictly in order and the first success wins; each tier is
//! a pure function over the comment text and the [`ReferenceIndex`]:
//!
//! 1. Full-name containment (case-insensitive, longest name wins)
//! 2. Standalone upper-case short name (case-sensitive)
//! 3. Glued abbreviation-year token ("CVPR2025")
//! 4. Acceptance-phrase spans checked against the conference map
//!
//! A comment that passes no tier yields `None`; that is the expected outcome
//! for most records, not an error.

use std::fmt;

use crate::ReferenceVenue;
use crate::extract::{glued_abbreviations, phrase_candidates};
use crate::index::ReferenceIndex;
use crate::text::{contains_ci, contains_word, contains_word_ci};

/// Which cascade tier produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    FullName,
    ShortName,
    ShortNameWithYear,
    ConferenceName,
    ConferenceAbbr,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::FullName => "Exact Full Name",
            MatchKind::ShortName => "Exact Short Name",
            MatchKind::ShortNameWithYear => "Short Name with Year",
            MatchKind::ConferenceName => "Conference Name Match",
            MatchKind::ConferenceAbbr => "Conference Abbr Match",
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified comment: the venue it names and the tier that found it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueMatch {
    pub venue: ReferenceVenue,
    pub kind: MatchKind,
}

/// Classify one comment string against the reference index.
///
/// Only comments carrying the literal "Comments" metadata marker are
/// candidates; everything else is `None` without evaluating any tier.
pub fn classify(comment: &str, index: &ReferenceIndex) -> Option<VenueMatch> {
    if !comment.contains("Comments") {
        return None;
    }
    try_full_name(comment, index)
        .or_else(|| try_short_name(comment, index))
        .or_else(|| try_short_name_with_year(comment, index))
        .or_else(|| try_conference_phrase(comment, index))
}

/// Tier 1: case-insensitive containment of a full venue name. The longest
/// matching name wins so e.g. "Neural Networks" cannot shadow
/// "International Joint Conference on Neural Networks"; ties keep the entry
/// that was constructed first.
fn try_full_name(comment: &str, index: &ReferenceIndex) -> Option<VenueMatch> {
    let lowered = comment.to_lowercase();
    let mut best: Option<&ReferenceVenue> = None;
    let mut best_len = 0;
    for (full_lower, venue) in index.full_name_entries() {
        if full_lower.len() > best_len && lowered.contains(full_lower) {
            best = Some(venue);
            best_len = full_lower.len();
        }
    }
    best.map(|venue| VenueMatch {
        venue: venue.clone(),
        kind: MatchKind::FullName,
    })
}

/// Tier 2: case-sensitive standalone occurrence of an all-upper-case
/// taxonomy short name.
fn try_short_name(comment: &str, index: &ReferenceIndex) -> Option<VenueMatch> {
    for (short, venue) in index.short_name_entries() {
        if contains_word(comment, short) {
            return Some(VenueMatch {
                venue: venue.clone(),
                kind: MatchKind::ShortName,
            });
        }
    }
    None
}

/// Tier 3: glued abbreviation-year tokens. The extracted abbreviation must
/// case-sensitively equal a known taxonomy short name.
fn try_short_name_with_year(comment: &str, index: &ReferenceIndex) -> Option<VenueMatch> {
    for (abbr, _year) in glued_abbreviations(comment) {
        if let Some(venue) = index.lookup_short(abbr) {
            return Some(VenueMatch {
                venue: venue.clone(),
                kind: MatchKind::ShortNameWithYear,
            });
        }
    }
    None
}

/// Tier 4: acceptance/publication phrase spans checked against the
/// conference map. For each candidate span, a case-insensitive containment
/// of a full conference name beats a standalone occurrence of an
/// abbreviation; the first span satisfying either test wins.
fn try_conference_phrase(comment: &str, index: &ReferenceIndex) -> Option<VenueMatch> {
    for candidate in phrase_candidates(comment) {
        for entry in index.conferences().iter() {
            if contains_ci(candidate, &entry.full_name)
                && let Some(venue) = index.lookup_full_name(&entry.full_name)
            {
                return Some(VenueMatch {
                    venue: venue.clone(),
                    kind: MatchKind::ConferenceName,
                });
            }
        }
        for entry in index.conferences().iter() {
            if contains_word_ci(candidate, &entry.abbreviation)
                && let Some(venue) = index.lookup_full_name(&entry.full_name)
            {
                return Some(VenueMatch {
                    venue: venue.clone(),
                    kind: MatchKind::ConferenceAbbr,
                });
            }
        }
    }
    None
}
