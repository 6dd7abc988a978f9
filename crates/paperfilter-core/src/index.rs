//! Lookup structures over the venue taxonomy.
//!
//! Built once per run from the raw taxonomy entries and the injected
//! [`ConferenceMap`]; read-only afterwards.

use crate::conferences::ConferenceMap;
use crate::ReferenceVenue;

/// The reference index consulted by the classifier cascade.
///
/// Three structures, per the matching tiers that consume them:
/// - full names (lowercased, construction order) for containment tests,
///   including synthetic entries for conferences the taxonomy lacks;
/// - taxonomy short names restricted to entries that are entirely upper-case
///   ASCII letters (mixed-case short names never participate in the
///   short-name tiers);
/// - the conference map itself, for the phrase-based fallback tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceIndex {
    venues: Vec<ReferenceVenue>,
    /// (lowercased full name, index into `venues`), construction order.
    full_names: Vec<(String, usize)>,
    /// (short name, index into `venues`), construction order.
    short_names: Vec<(String, usize)>,
    conferences: ConferenceMap,
}

fn is_upper_ascii(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_uppercase())
}

impl ReferenceIndex {
    /// Build the index from taxonomy entries and a conference map.
    ///
    /// Conferences whose full name is not already covered by the taxonomy are
    /// appended as synthetic entries, so they participate in full-name
    /// matching and carry type/grade into results. Synthetic entries never
    /// enter the short-name structure; conference abbreviations are handled
    /// by the phrase-based tier instead.
    pub fn build(venues: Vec<ReferenceVenue>, conferences: ConferenceMap) -> Self {
        let taxonomy_len = venues.len();
        let mut all = venues;
        for entry in conferences.iter() {
            let covered = all[..taxonomy_len]
                .iter()
                .any(|v| v.full_name.eq_ignore_ascii_case(&entry.full_name));
            if !covered {
                all.push(ConferenceMap::synthetic_venue(entry));
            }
        }

        let full_names = all
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.full_name.is_empty())
            .map(|(i, v)| (v.full_name.to_lowercase(), i))
            .collect();

        let short_names = all[..taxonomy_len]
            .iter()
            .enumerate()
            .filter(|(_, v)| is_upper_ascii(&v.short_name))
            .map(|(i, v)| (v.short_name.clone(), i))
            .collect();

        Self {
            venues: all,
            full_names,
            short_names,
            conferences,
        }
    }

    /// Lowercased full names with their venues, in construction order.
    pub fn full_name_entries(&self) -> impl Iterator<Item = (&str, &ReferenceVenue)> {
        self.full_names
            .iter()
            .map(|(name, i)| (name.as_str(), &self.venues[*i]))
    }

    /// Upper-case taxonomy short names with their venues, in construction
    /// order.
    pub fn short_name_entries(&self) -> impl Iterator<Item = (&str, &ReferenceVenue)> {
        self.short_names
            .iter()
            .map(|(name, i)| (name.as_str(), &self.venues[*i]))
    }

    /// Case-sensitive short-name lookup (taxonomy entries only).
    pub fn lookup_short(&self, short_name: &str) -> Option<&ReferenceVenue> {
        self.short_names
            .iter()
            .find(|(name, _)| name == short_name)
            .map(|(_, i)| &self.venues[*i])
    }

    /// Case-insensitive full-name lookup, used to resolve a conference-map
    /// hit back to its (possibly synthetic) venue entry.
    pub fn lookup_full_name(&self, full_name: &str) -> Option<&ReferenceVenue> {
        let lowered = full_name.to_lowercase();
        self.full_names
            .iter()
            .find(|(name, _)| *name == lowered)
            .map(|(_, i)| &self.venues[*i])
    }

    pub fn conferences(&self) -> &ConferenceMap {
        &self.conferences
    }

    pub fn venues(&self) -> &[ReferenceVenue] {
        &self.venues
    }
}
