//! End-to-end runs of the classification and tagging pipeline.

use paperfilter_core::{
    ConferenceMap, Keyword, MatchKind, PaperRecord, ReferenceIndex, ReferenceVenue, VenueType,
    run_pipeline,
};

fn taxonomy() -> Vec<ReferenceVenue> {
    vec![
        ReferenceVenue {
            short_name: "TPAMI".to_string(),
            full_name: "IEEE Transactions on Pattern Analysis and Machine Intelligence".to_string(),
            category: "A".to_string(),
            venue_type: VenueType::Journal,
        },
        ReferenceVenue {
            short_name: "NN".to_string(),
            full_name: "Neural Networks".to_string(),
            category: "B".to_string(),
            venue_type: VenueType::Journal,
        },
    ]
}

fn record(title: &str, comment: &str) -> PaperRecord {
    PaperRecord {
        title: title.to_string(),
        authors: "A. Author, B. Author".to_string(),
        comment: comment.to_string(),
        pdf_url: "https://arxiv.org/pdf/2501.00001".to_string(),
    }
}

#[test]
fn accepted_at_cvpr_with_space_falls_through_to_conference_abbr() {
    let index = ReferenceIndex::build(taxonomy(), ConferenceMap::builtin());
    let records = vec![record(
        "Scene Understanding at Scale",
        "Comments: Accepted at CVPR 2025 main conference",
    )];

    let out = run_pipeline(&records, &index, &[]);
    assert_eq!(out.matches.len(), 1);
    assert_eq!(out.matches[0].kind, MatchKind::ConferenceAbbr);
    assert_eq!(
        out.matches[0].venue.full_name,
        "IEEE/CVF Conference on Computer Vision and Pattern Recognition"
    );
}

#[test]
fn accepted_to_tpami_full_name_matches_tier_one() {
    let index = ReferenceIndex::build(taxonomy(), ConferenceMap::builtin());
    let records = vec![record(
        "Robust Tracking",
        "Comments: Accepted to IEEE Transactions on Pattern Analysis and Machine Intelligence",
    )];

    let out = run_pipeline(&records, &index, &[]);
    assert_eq!(out.matches.len(), 1);
    assert_eq!(out.matches[0].kind, MatchKind::FullName);
    assert_eq!(out.matches[0].venue.short_name, "TPAMI");
}

#[test]
fn keyword_hits_follow_keyword_list_order() {
    let index = ReferenceIndex::build(taxonomy(), ConferenceMap::builtin());
    let keywords = vec![
        Keyword::new("neural"),
        Keyword::new("pruning"),
        Keyword::new("vision"),
    ];
    let records = vec![record(
        "A Study of Neural Network Pruning",
        "Comments: TPAMI, camera ready",
    )];

    let out = run_pipeline(&records, &index, &keywords);
    assert_eq!(out.keyword_hits.len(), 1);
    let hit_terms: Vec<&str> = out.keyword_hits[0]
        .matched_keywords
        .iter()
        .map(|kw| kw.term.as_str())
        .collect();
    assert_eq!(hit_terms, vec!["neural", "pruning"]);
}

#[test]
fn comments_gate_excludes_everything_else() {
    let index = ReferenceIndex::build(taxonomy(), ConferenceMap::builtin());
    let records = vec![
        record("Gated Out", "Accepted at CVPR 2025"),
        record("Gated Out Too", "TPAMI camera ready"),
    ];

    let out = run_pipeline(&records, &index, &[]);
    assert!(out.matches.is_empty());
    assert!(out.keyword_hits.is_empty());
    assert_eq!(out.stats.total, 2);
}

#[test]
fn pipeline_is_idempotent() {
    let index = ReferenceIndex::build(taxonomy(), ConferenceMap::builtin());
    let keywords = vec![Keyword::new("neural"), Keyword::new("tracking")];
    let records = vec![
        record("Neural Pruning", "Comments: Accepted at CVPR 2025"),
        record("Tracking Survey", "Comments: published in Neural Networks"),
        record("Unmatched", "Comments: 10 pages"),
        record("Glued Token", "Comments: TPAMI2026 camera ready"),
    ];

    let first = run_pipeline(&records, &index, &keywords);
    let second = run_pipeline(&records, &index, &keywords);
    assert_eq!(first, second);

    // Order preserved, unmatched record dropped
    let titles: Vec<&str> = first.matches.iter().map(|m| m.paper.title.as_str()).collect();
    assert_eq!(titles, vec!["Neural Pruning", "Tracking Survey", "Glued Token"]);
    assert_eq!(first.matches[2].kind, MatchKind::ShortNameWithYear);
}

#[test]
fn substituted_conference_map_is_honored() {
    // The map is injected, not a process-wide singleton
    let mut map = ConferenceMap::new();
    map.insert("WXYZ", "Workshop on X, Y and Z");
    let index = ReferenceIndex::build(taxonomy(), map);

    let records = vec![
        record("Custom Venue", "Comments: accepted at WXYZ 2030"),
        record("Builtin Gone", "Comments: accepted at CVPR 2025"),
    ];

    let out = run_pipeline(&records, &index, &[]);
    assert_eq!(out.matches.len(), 1);
    assert_eq!(out.matches[0].paper.title, "Custom Venue");
    assert_eq!(out.matches[0].kind, MatchKind::ConferenceAbbr);
    assert_eq!(out.matches[0].venue.full_name, "Workshop on X, Y and Z");
}
