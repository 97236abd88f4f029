// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a snippet.
//!
//! A tier finds `Match`es, bundles them into `MatchGroup`s, and hands back a
//! `CandidateSet`. Only the front group of the winning set is ever rendered.
//!
//! | Type           | Purpose                                         |
//! |----------------|-------------------------------------------------|
//! | `Span`         | Byte range into the page text                   |
//! | `Match`        | Source text at a span, original casing          |
//! | `MatchGroup`   | Matches rendered together in one snippet        |
//! | `CandidateSet` | Ranked groups produced by one tier              |
//! | `Tier`         | Which strategy produced the winning set         |
//! | `Snippet`      | Finished, escaped, length-capped HTML           |
//!
//! # Invariants
//!
//! - **Span**: `start <= end`, both on UTF-8 char boundaries of the page text
//!   they were produced against. Offsets are bytes, not characters.
//! - **CandidateSet**: never empty. A tier with nothing to report returns
//!   `None` instead.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-open byte range `[start, end)` into a page's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {} past end {}", start, end);
        Self { start, end }
    }

    /// Shift both ends by `offset` (paragraph-local → page-absolute).
    #[inline]
    pub fn offset_by(self, offset: usize) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// One hit: the exact source text at `span`, in its original casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub text: String,
    pub span: Span,
}

impl Match {
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }

    /// Build a match from a regex hit, adding `offset` to its position.
    pub(crate) fn from_regex(m: regex::Match<'_>, offset: usize) -> Self {
        Self {
            text: m.as_str().to_string(),
            span: Span::new(m.start(), m.end()).offset_by(offset),
        }
    }
}

/// Matches that belong together in one rendered snippet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchGroup {
    pub matches: Vec<Match>,
}

impl MatchGroup {
    pub fn new(matches: Vec<Match>) -> Self {
        Self { matches }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Smallest start offset in the group.
    pub fn first_start(&self) -> Option<usize> {
        self.matches.iter().map(|m| m.span.start).min()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Match> {
        self.matches.iter()
    }
}

impl FromIterator<Match> for MatchGroup {
    fn from_iter<I: IntoIterator<Item = Match>>(iter: I) -> Self {
        Self {
            matches: iter.into_iter().collect(),
        }
    }
}

/// Ranked groups from a single tier. Front group wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSet {
    groups: Vec<MatchGroup>,
}

impl CandidateSet {
    /// Wrap ranked groups, dropping empty ones. `None` if nothing remains.
    pub fn from_ranked(groups: Vec<MatchGroup>) -> Option<Self> {
        let groups: Vec<MatchGroup> = groups.into_iter().filter(|g| !g.is_empty()).collect();
        if groups.is_empty() {
            None
        } else {
            Some(Self { groups })
        }
    }

    /// Single-group set, `None` for an empty group.
    pub fn single(group: MatchGroup) -> Option<Self> {
        Self::from_ranked(vec![group])
    }

    /// The group that gets rendered.
    pub fn best(&self) -> &MatchGroup {
        &self.groups[0]
    }

    pub fn groups(&self) -> &[MatchGroup] {
        &self.groups
    }

    pub fn into_best(self) -> MatchGroup {
        self.groups.into_iter().next().unwrap_or_default()
    }
}

/// Matching strategies in strict priority order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Query words in order, non-word noise allowed between them.
    ExactSequence,
    /// Paragraph with the most distinct query words.
    Paragraph,
    /// First whole-word hit per query word.
    SingleWord,
    /// Query word as the start of a longer token.
    Prefix,
    /// Query word anywhere inside a token.
    Substring,
}

impl Tier {
    /// Evaluation order. First tier with a candidate wins.
    pub const ALL: [Tier; 5] = [
        Tier::ExactSequence,
        Tier::Paragraph,
        Tier::SingleWord,
        Tier::Prefix,
        Tier::Substring,
    ];

    /// 1-based tier number, as shown in logs and CLI output.
    pub fn number(self) -> u8 {
        match self {
            Tier::ExactSequence => 1,
            Tier::Paragraph => 2,
            Tier::SingleWord => 3,
            Tier::Prefix => 4,
            Tier::Substring => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tier::ExactSequence => "exact_sequence",
            Tier::Paragraph => "paragraph",
            Tier::SingleWord => "single_word",
            Tier::Prefix => "prefix",
            Tier::Substring => "substring",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A finished snippet: HTML-safe, `<em>`-highlighted, length-capped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub html: String,
    /// Tier whose candidate set produced this snippet.
    pub tier: Tier,
    /// Number of highlighted matches before coalescing and truncation.
    pub match_count: usize,
}

impl Snippet {
    pub fn into_html(self) -> String {
        self.html
    }
}

impl fmt::Display for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html)
    }
}

/// Snippet found in a multi-page document, with its 0-based page index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSnippet {
    pub page: usize,
    pub snippet: Snippet,
}
