//! Rendering: gaps, caps, escaping and layout config.

use crate::common::{assert_well_formed, highlights, snippet, MAX_LEN};
use ocrsnip::{ConfigError, SnippetConfig, Snippeter, StopwordSet};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_distant_matches_are_folded() {
    let text = format!("water {}water", "abc ".repeat(50));
    let html = snippet("water", &text, 70).unwrap();

    let (left, right) = html.split_once(" [...] ").unwrap();
    let left_context = left.rsplit_once("</em>").unwrap().1;
    let right_context = right.split_once("<em>").unwrap().0;
    assert!(left_context.chars().count() <= 70);
    assert!(right_context.chars().count() <= 70);
    assert_eq!(highlights(&html), vec!["water", "water"]);
}

#[test]
fn test_close_matches_are_not_folded() {
    let html = snippet("water", "water en nog meer water", 70).unwrap();
    assert!(!html.contains("[...]"));
    assert_eq!(highlights(&html).len(), 2);
}

#[test]
fn test_many_occurrences_are_capped() {
    let text = "water ".repeat(200);
    let html = snippet("water", &text, 70).unwrap();
    assert_well_formed(&html);
    assert!(html.ends_with("</em>") || html.ends_with(' '));
}

#[test]
fn test_page_markup_is_escaped() {
    let html = snippet("water", "prijs < 5 & \"goed\" water", 70).unwrap();
    assert_eq!(
        html,
        "prijs &lt; 5 &amp; &quot;goed&quot; <em>water</em>"
    );
}

#[test]
fn test_stray_close_marker_in_page_stays_text() {
    let html = snippet("water", "a </em> water", 70).unwrap();
    assert_well_formed(&html);
    assert_eq!(html, "a &lt;/em&gt; <em>water</em>");
}

#[test]
fn test_literal_open_marker_in_page_stays_text() {
    let html = snippet("water", "a <em> b water c", 70).unwrap();
    assert_well_formed(&html);
    assert_eq!(html, "a &lt;em&gt; b <em>water</em> c");
}

#[test]
fn test_large_context_keeps_highlight_inside_cap() {
    let text = format!("{} water {}", "links ".repeat(100), "rechts ".repeat(100));
    let html = snippet("water", &text, 500).unwrap();
    assert_well_formed(&html);
    assert_eq!(html.chars().count(), MAX_LEN);
    assert_eq!(highlights(&html), vec!["water"]);
}

#[test]
fn test_large_context_at_end_of_page() {
    let text = format!("{} water", "x".repeat(400));
    let html = snippet("water", &text, 500).unwrap();
    assert_eq!(html, format!("{} <em>water</em>", "x".repeat(149)));
}

#[test]
fn test_custom_layout() {
    let config = SnippetConfig {
        gap_threshold: 20,
        gap_context: 5,
        ellipsis: " ~ ".to_string(),
        ..SnippetConfig::default()
    };
    let engine = Snippeter::new(StopwordSet::dutch(), config);
    let text = format!("water {} water", "b".repeat(30));
    let found = engine.find_snippet("water", &text, 0).unwrap().unwrap();
    assert_eq!(found.html, "<em>water</em> bbbb ~ bbbb <em>water</em>");
    assert_eq!(found.match_count, 2);
}

#[test]
fn test_config_file_fills_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"max_len": 50, "context_chars": 20}}"#).unwrap();

    let config = SnippetConfig::from_file(file.path()).unwrap();
    assert_eq!(config.max_len, 50);
    assert_eq!(config.context_chars, 20);
    assert_eq!(config.gap_threshold, SnippetConfig::default().gap_threshold);
}

#[test]
fn test_config_file_rejects_bad_values() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"max_len": 3}}"#).unwrap();
    assert!(matches!(
        SnippetConfig::from_file(file.path()),
        Err(ConfigError::Invalid(_))
    ));

    let mut unknown = NamedTempFile::new().unwrap();
    write!(unknown, r#"{{"maxlen": 300}}"#).unwrap();
    assert!(matches!(
        SnippetConfig::from_file(unknown.path()),
        Err(ConfigError::Parse { .. })
    ));
}
