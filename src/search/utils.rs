// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared helpers for the tiers: pattern construction, tokenizing, and
//! paragraph splitting.
//!
//! Every pattern is case-insensitive and Unicode-aware (`\w`, `\b`, `\W`
//! follow Unicode word rules). Query words are always `regex::escape`d, so
//! OCR noise in a query can't turn into regex syntax.

use crate::types::{Match, MatchGroup};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static WORD_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("word token pattern is valid"));

/// `\bw1\W+w2\W+…wn\b`: words in order, any run of non-word characters
/// (OCR punctuation noise like `van. het`) between them.
pub fn sequence_pattern(words: &[String]) -> Result<Regex, regex::Error> {
    let body = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join(r"\W+");
    Regex::new(&format!(r"(?i)\b{}\b", body))
}

/// `\bword\b`: the word as a complete token.
pub fn whole_word_pattern(word: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(word)))
}

/// `\bword\w*`: the word starts a token, which may run on. The leading
/// `\b` keeps this tier from finding what the substring tier finds.
pub fn prefix_pattern(word: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?i)\b{}\w*", regex::escape(word)))
}

/// `\w*word\w*`: the word anywhere inside a token, extended to the whole token.
pub fn substring_pattern(word: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?i)\w*{}\w*", regex::escape(word)))
}

/// Lower-cased word tokens (`\w+`) of `text`.
pub fn word_tokens(text: &str) -> HashSet<String> {
    let lowered = text.to_lowercase();
    WORD_TOKEN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// First hit per word, in word order. Words without a hit are skipped.
pub fn first_hits<F>(words: &[String], text: &str, pattern: F) -> Result<MatchGroup, regex::Error>
where
    F: Fn(&str) -> Result<Regex, regex::Error>,
{
    let mut matches = Vec::with_capacity(words.len());
    for word in words {
        if let Some(m) = pattern(word)?.find(text) {
            matches.push(Match::from_regex(m, 0));
        }
    }
    Ok(MatchGroup::new(matches))
}

/// One newline-delimited block of page text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paragraph<'a> {
    /// Byte offset of the paragraph's first character in the page.
    pub offset: usize,
    pub text: &'a str,
}

/// Split on `\n`, carrying each paragraph's own offset. Empty paragraphs
/// (runs of newlines) are dropped.
pub fn split_paragraphs(text: &str) -> Vec<Paragraph<'_>> {
    let mut paragraphs = Vec::new();
    let mut offset = 0;
    for line in text.split('\n') {
        if !line.is_empty() {
            paragraphs.push(Paragraph { offset, text: line });
        }
        offset += line.len() + 1;
    }
    paragraphs
}
