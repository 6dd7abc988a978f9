//! Drives classification and tagging over the full record stream.
//!
//! Purely sequential and synchronous: each record is fully classified and,
//! if matched, tagged before the next record is considered. Output order
//! always follows input order, so identical inputs produce identical
//! outputs.

use tracing::debug;

use crate::classify::{MatchKind, classify};
use crate::index::ReferenceIndex;
use crate::keywords::{Keyword, KeywordHit, tag_title};
use crate::{PaperRecord, ReferenceVenue};

/// A paper whose comment was classified to a venue. Produced at most once
/// per input record; unmatched records are dropped from all downstream
/// stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedPaper {
    pub paper: PaperRecord,
    pub venue: ReferenceVenue,
    pub kind: MatchKind,
}

/// Summary counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub total: usize,
    pub matched: usize,
    pub with_keyword_hits: usize,
}

/// The two ordered result collections handed to reporting, plus counters.
/// `matches` and `keyword_hits` are parallel: entry `i` of each describes
/// the same paper.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineOutput {
    pub matches: Vec<MatchedPaper>,
    pub keyword_hits: Vec<KeywordHit>,
    pub stats: RunStats,
}

/// Classify every record and tag the titles of the matched ones.
pub fn run_pipeline(
    records: &[PaperRecord],
    index: &ReferenceIndex,
    keywords: &[Keyword],
) -> PipelineOutput {
    let mut out = PipelineOutput::default();
    out.stats.total = records.len();

    for record in records {
        let Some(m) = classify(&record.comment, index) else {
            debug!(title = %record.title, "no venue match");
            continue;
        };
        debug!(
            title = %record.title,
            venue = %m.venue.full_name,
            kind = %m.kind,
            "venue matched"
        );

        let hits: Vec<Keyword> = tag_title(&record.title, keywords)
            .into_iter()
            .cloned()
            .collect();
        if !hits.is_empty() {
            out.stats.with_keyword_hits += 1;
        }

        out.matches.push(MatchedPaper {
            paper: record.clone(),
            venue: m.venue,
            kind: m.kind,
        });
        out.keyword_hits.push(KeywordHit {
            paper: record.clone(),
            matched_keywords: hits,
        });
    }

    out.stats.matched = out.matches.len();
    out
}
