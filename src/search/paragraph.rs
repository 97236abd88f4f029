// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Paragraph co-occurrence ranking (tier 2).
//!
//! Each paragraph scores by how many distinct query words it contains. A
//! paragraph contributes one group: the first whole-word hit of every
//! overlapping word, at page-absolute offsets. Groups are ranked by size,
//! largest first; equal sizes keep paragraph order.

use super::utils::{split_paragraphs, whole_word_pattern, word_tokens, Paragraph};
use crate::types::{CandidateSet, Match, MatchGroup};

/// Group for one paragraph, or `None` when it shares no word with the query
/// or an overlapping word has no whole-word hit.
pub fn paragraph_group(
    paragraph: &Paragraph<'_>,
    effective_words: &[String],
) -> Result<Option<MatchGroup>, regex::Error> {
    let tokens = word_tokens(paragraph.text);
    let overlap: Vec<&String> = effective_words
        .iter()
        .filter(|w| tokens.contains(w.as_str()))
        .collect();
    if overlap.is_empty() {
        return Ok(None);
    }

    let mut matches = Vec::with_capacity(overlap.len());
    for word in &overlap {
        match whole_word_pattern(word)?.find(paragraph.text) {
            Some(m) => matches.push(Match::from_regex(m, paragraph.offset)),
            None => return Ok(None),
        }
    }
    Ok(Some(MatchGroup::new(matches)))
}

/// Rank every qualifying paragraph of `text`.
pub fn rank_paragraphs(
    text: &str,
    effective_words: &[String],
) -> Result<Option<CandidateSet>, regex::Error> {
    if effective_words.is_empty() {
        return Ok(None);
    }

    let mut groups = Vec::new();
    for paragraph in split_paragraphs(text) {
        if let Some(group) = paragraph_group(&paragraph, effective_words)? {
            groups.push(group);
        }
    }

    // Stable: ties stay in paragraph order.
    groups.sort_by(|a, b| b.len().cmp(&a.len()));
    Ok(CandidateSet::from_ranked(groups))
}
