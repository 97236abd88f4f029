//! Tier selection and fallback order.

use crate::common::{dutch_query, engine, highlights, snippet, BULLETIN_PAGE, TWO_PARAGRAPHS};
use ocrsnip::{SnippetError, Tier, TierMatcher};

#[test]
fn test_exact_sequence_finds_every_occurrence() {
    let text = "Over lager onderwijs, en later weer lager - onderwijs.";
    let html = snippet("lager onderwijs", text, 70).unwrap();
    assert_eq!(highlights(&html), vec!["lager onderwijs", "lager - onderwijs"]);
}

#[test]
fn test_exact_sequence_spans_double_spaces_from_ocr() {
    let found = engine()
        .find_snippet("uitgebreid lager onderwijs", BULLETIN_PAGE, 10)
        .unwrap()
        .unwrap();
    assert_eq!(found.tier, Tier::ExactSequence);
    assert_eq!(highlights(&found.html), vec!["uitgebreid lager  onderwijs"]);
}

#[test]
fn test_exact_sequence_short_circuits_later_tiers() {
    let text = "water hier. En de bron. Verderop: water bron.";
    let html = snippet("water bron", text, 70).unwrap();
    assert_eq!(highlights(&html), vec!["water bron"]);
}

#[test]
fn test_paragraph_with_most_query_words_wins() {
    let found = engine()
        .find_snippet("vriend water", TWO_PARAGRAPHS, 70)
        .unwrap()
        .unwrap();
    assert_eq!(found.tier, Tier::Paragraph);
    assert_eq!(highlights(&found.html), vec!["water", "vriend"]);
    // The first paragraph's "vriend" may show as context, never highlighted.
    assert!(found.html.contains("De vriend kwam"));
}

#[test]
fn test_prefix_tier_matches_word_start() {
    let found = engine()
        .find_snippet("vernieuw", BULLETIN_PAGE, 20)
        .unwrap()
        .unwrap();
    assert_eq!(found.tier, Tier::Prefix);
    assert_eq!(highlights(&found.html), vec!["vernieuwd"]);
}

#[test]
fn test_substring_tier_matches_inside_word() {
    let found = engine()
        .find_snippet("leiding", BULLETIN_PAGE, 20)
        .unwrap()
        .unwrap();
    assert_eq!(found.tier, Tier::Substring);
    assert_eq!(highlights(&found.html), vec!["waterleiding"]);
}

#[test]
fn test_source_casing_is_preserved() {
    let html = snippet("BENNEKOM", BULLETIN_PAGE, 10).unwrap();
    assert_eq!(highlights(&html), vec!["Bennekom"]);
}

#[test]
fn test_single_match_context_window() {
    assert_eq!(
        snippet("water", "abc WATER def", 3).as_deref(),
        Some("bc <em>WATER</em> de")
    );
}

#[test]
fn test_multibyte_query_and_text() {
    let html = snippet("café", "Het café ’t Hoekje aan de markt", 4).unwrap();
    assert_eq!(html, "Het <em>café</em> ’t ");
}

#[test]
fn test_stopword_only_query_still_matches_exactly() {
    let found = engine().find_snippet("de", "zie de brug", 3).unwrap().unwrap();
    assert_eq!(found.tier, Tier::ExactSequence);
    assert_eq!(highlights(&found.html), vec!["de"]);
}

#[test]
fn test_absent_words_give_no_snippet() {
    assert_eq!(snippet("het zwembad", BULLETIN_PAGE, 70), None);
}

#[test]
fn test_blank_queries_are_rejected() {
    for raw in ["", "   ", "\"\"", "\t\n"] {
        let err = ocrsnip::find_snippet(raw, BULLETIN_PAGE, 70).unwrap_err();
        assert!(matches!(err, SnippetError::InvalidQuery), "{:?}", raw);
    }
}

#[test]
fn test_explain_reports_each_tier() {
    let query = dutch_query("vernieuw");
    let report = TierMatcher::new(&query).explain(BULLETIN_PAGE).unwrap();
    let fired: Vec<Tier> = report
        .iter()
        .filter(|(_, candidates)| candidates.is_some())
        .map(|(tier, _)| *tier)
        .collect();
    assert_eq!(fired, vec![Tier::Prefix, Tier::Substring]);
}
