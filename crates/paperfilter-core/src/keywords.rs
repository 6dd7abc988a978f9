//! Keyword tagging of matched paper titles.

use crate::PaperRecord;
use crate::text::contains_word_ci;

/// A research keyword, case-preserved as supplied and compared
/// case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    pub term: String,
}

impl Keyword {
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into() }
    }
}

/// The keyword hits for one matched paper. `matched_keywords` may be empty;
/// a hit record is still produced for every matched paper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordHit {
    pub paper: PaperRecord,
    pub matched_keywords: Vec<Keyword>,
}

/// Keywords that occur in `title` as a standalone word, case-insensitively.
///
/// Hits come back in keyword-list order, not in order of appearance in the
/// title. Partial matches inside longer words never count ("AI" does not hit
/// "Main").
pub fn tag_title<'a>(title: &str, keywords: &'a [Keyword]) -> Vec<&'a Keyword> {
    keywords
        .iter()
        .filter(|kw| contains_word_ci(title, &kw.term))
        .collect()
}
