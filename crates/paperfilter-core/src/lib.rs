pub mod classify;
pub mod conferences;
pub mod config_file;
pub mod extract;
pub mod index;
pub mod keywords;
pub mod pipeline;
pub mod text;

// Re-export for convenience
pub use classify::{MatchKind, VenueMatch, classify};
pub use conferences::{ConferenceEntry, ConferenceMap};
pub use index::ReferenceIndex;
pub use keywords::{Keyword, KeywordHit, tag_title};
pub use pipeline::{MatchedPaper, PipelineOutput, RunStats, run_pipeline};

/// One row of the paper workbook: title, authors, the free-text comment
/// annotation, and a link to the PDF. Created by the ingest layer; the core
/// never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperRecord {
    pub title: String,
    pub authors: String,
    pub comment: String,
    pub pdf_url: String,
}

/// Whether a venue entry names a journal or a conference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VenueType {
    Journal,
    Conference,
    Unknown,
}

impl VenueType {
    /// Parse a taxonomy "Type" cell. Unrecognized values become `Unknown`.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.eq_ignore_ascii_case("journal") {
            VenueType::Journal
        } else if s.eq_ignore_ascii_case("conference") {
            VenueType::Conference
        } else {
            VenueType::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VenueType::Journal => "Journal",
            VenueType::Conference => "Conference",
            VenueType::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for VenueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entry of the venue taxonomy, or a synthetic entry derived from the
/// conference map. Read-only for the lifetime of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceVenue {
    pub short_name: String,
    pub full_name: String,
    /// Quality grade: "A", "B", "C", or empty for unranked venues.
    pub category: String,
    pub venue_type: VenueType,
}
