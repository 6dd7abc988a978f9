//! The conference abbreviation map.
//!
//! An immutable mapping from conference abbreviations ("CVPR") to full
//! conference names, carried alongside the venue taxonomy. It is injected
//! into [`crate::ReferenceIndex::build`] rather than read from a global, so
//! tests and callers can substitute alternate mappings.

use crate::{ReferenceVenue, VenueType};

/// One conference known to the abbreviation map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConferenceEntry {
    pub abbreviation: String,
    pub full_name: String,
    /// CCF-style grade ("A", "B", "C") or empty for unranked conferences.
    pub level: String,
}

/// Insertion-ordered map of conference abbreviations to full names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConferenceMap {
    entries: Vec<ConferenceEntry>,
}

impl ConferenceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mapping with an empty grade. The first insertion of an
    /// abbreviation wins; later duplicates are ignored.
    pub fn insert(&mut self, abbreviation: impl Into<String>, full_name: impl Into<String>) {
        self.insert_with_level(abbreviation, full_name, "");
    }

    pub fn insert_with_level(
        &mut self,
        abbreviation: impl Into<String>,
        full_name: impl Into<String>,
        level: impl Into<String>,
    ) {
        let abbreviation = abbreviation.into();
        if self.get(&abbreviation).is_some() {
            return;
        }
        self.entries.push(ConferenceEntry {
            abbreviation,
            full_name: full_name.into(),
            level: level.into(),
        });
    }

    /// Case-sensitive lookup by abbreviation.
    pub fn get(&self, abbreviation: &str) -> Option<&ConferenceEntry> {
        self.entries.iter().find(|e| e.abbreviation == abbreviation)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConferenceEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A synthetic taxonomy entry for a conference, used when the venue list
    /// itself does not carry the conference.
    pub(crate) fn synthetic_venue(entry: &ConferenceEntry) -> ReferenceVenue {
        ReferenceVenue {
            short_name: entry.abbreviation.clone(),
            full_name: entry.full_name.clone(),
            category: entry.level.clone(),
            venue_type: VenueType::Conference,
        }
    }

    /// The built-in map of machine-learning and NLP conferences, with CCF
    /// grades. Extended only by shipping a new release, never at runtime.
    pub fn builtin() -> Self {
        let mut map = Self::new();
        map.insert_with_level(
            "IJCNN",
            "International Joint Conference on Neural Networks",
            "C",
        );
        map.insert_with_level(
            "NAACL",
            "Annual Meeting of the North American Chapter of the Association for Computational Linguistics",
            "B",
        );
        map.insert_with_level(
            "ACL",
            "Annual Meeting of the Association for Computational Linguistics",
            "A",
        );
        map.insert_with_level("ICCV", "International Conference on Computer Vision", "A");
        map.insert_with_level(
            "CVPR",
            "IEEE/CVF Conference on Computer Vision and Pattern Recognition",
            "A",
        );
        map.insert_with_level(
            "EMNLP",
            "Conference on Empirical Methods in Natural Language Processing",
            "B",
        );
        map.insert_with_level("ICML", "International Conference on Machine Learning", "A");
        map.insert_with_level(
            "NeurIPS",
            "Annual Conference on Neural Information Processing Systems",
            "A",
        );
        map.insert_with_level(
            "AICCSA",
            "ACS/IEEE International Conference on Computer Systems and Applications",
            "",
        );
        map
    }
}
