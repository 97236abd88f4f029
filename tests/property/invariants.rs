//! Output invariants: the cap, tag balance, escaping, tier 1 completeness.

use crate::common::{assert_well_formed, highlights, MAX_LEN};
use ocrsnip::contracts::highlights_balanced;
use ocrsnip::snippet::markup::truncate_tag_safe;
use ocrsnip::{find_snippet, Snippeter, Tier};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Noisy page text: markup characters, quotes, punctuation, line breaks.
/// No `e` or `m`, so the page never spells out a highlight marker itself.
fn noisy_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-dA-D <>&\"'.,\n]{0,600}").unwrap()
}

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-d]{1,5}").unwrap()
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 1..4).prop_map(|words| words.join(" "))
}

/// Text with non-word characters only between words.
fn separator_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ .,;:\n-]{1,3}").unwrap()
}

/// Multi-byte text for boundary handling.
fn unicode_text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!["café", "één", "zeeën", "ü", "’t", "naïef", "ab", " ", "\n"]),
        0..120,
    )
    .prop_map(|parts| parts.concat())
}

/// Page text with literal tags and entities that OCR cleanup missed.
/// Short enough that the escaped snippet never reaches the cap.
fn marked_up_page_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "<em>", "</em>", "<b>", "&", "&amp;", "water", "Water", " ", "x", "\n",
        ]),
        0..20,
    )
    .prop_map(|parts| parts.concat())
}

/// Marker-only markup around plain text, as the assembler builds it.
fn assembled_strategy() -> impl Strategy<Value = String> {
    let plain = || prop::string::string_regex("[a-zA-Z0-9 .,\n]{0,30}").unwrap();
    prop::collection::vec((plain(), plain()), 0..6).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(before, hit)| format!("{}<em>{}</em>", before, hit))
            .collect()
    })
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_snippets_are_capped_and_balanced(
        text in noisy_text_strategy(),
        query in query_strategy(),
        context in 0usize..120,
    ) {
        if let Some(html) = find_snippet(&query, &text, context).unwrap() {
            prop_assert!(html.chars().count() <= MAX_LEN);
            prop_assert!(highlights_balanced(&html), "unbalanced: {:?}", html);
            prop_assert!(!html.is_empty());
        }
    }

    #[test]
    fn prop_unicode_text_never_panics(
        text in unicode_text_strategy(),
        query in prop::sample::select(vec!["café", "een", "zee", "naï", "t", "ab"]),
        context in 0usize..80,
    ) {
        if let Some(html) = find_snippet(query, &text, context).unwrap() {
            assert_well_formed(&html);
        }
    }

    #[test]
    fn prop_page_markup_never_becomes_a_highlight(
        text in marked_up_page_strategy(),
        context in 0usize..120,
    ) {
        if let Some(html) = find_snippet("water", &text, context).unwrap() {
            prop_assert!(highlights_balanced(&html), "unbalanced: {:?}", html);
            for hit in highlights(&html) {
                prop_assert!(hit.to_lowercase().contains("water"), "{:?} in {:?}", hit, html);
                prop_assert!(!hit.contains('<') && !hit.contains('&'), "{:?}", hit);
            }
            let bare = html.replace("<em>", "").replace("</em>", "");
            prop_assert!(!bare.contains('<') && !bare.contains('>'), "{:?}", html);
        }
    }

    #[test]
    fn prop_truncation_respects_any_cap(s in assembled_strategy(), max in 10usize..200) {
        let out = truncate_tag_safe(&s, max);
        prop_assert!(out.chars().count() <= max);
        prop_assert!(highlights_balanced(&out));
    }

    #[test]
    fn prop_in_order_words_hit_exact_sequence_tier(
        words in prop::collection::vec(word_strategy(), 1..4),
        separators in prop::collection::vec(separator_strategy(), 3),
        prefix in prop::string::string_regex("[A-D ]{0,40}").unwrap(),
    ) {
        let mut phrase = words[0].clone();
        for (i, word) in words.iter().enumerate().skip(1) {
            phrase.push_str(&separators[i % separators.len()]);
            phrase.push_str(word);
        }
        let text = format!("{} {} tail", prefix, phrase.to_uppercase());

        let found = Snippeter::dutch()
            .find_snippet(&words.join(" "), &text, 10)
            .unwrap();
        let found = found.expect("phrase present in text");
        prop_assert_eq!(found.tier, Tier::ExactSequence);
        prop_assert!(!highlights(&found.html).is_empty());
    }
}
