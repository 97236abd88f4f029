// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The five-tier match core: exact sequence → paragraph → single word →
//! prefix → substring.
//!
//! Tiers run in strict priority order and the first one that finds anything
//! wins; later tiers never run. Tier 1 looks for the whole query in order and
//! keeps every occurrence. Tier 2 finds the paragraph that mentions the most
//! query words. Tiers 3 to 5 fall back to one hit per word, each loosening
//! what counts as a hit: whole token, token prefix, anywhere in a token.
//!
//! Tiers 2 to 5 only see the stopword-pruned words. A query made entirely
//! of stopwords can still hit tier 1 and otherwise finds nothing.
//!
//! ```text
//!   words ──▶ T1 exact sequence ──(none)──▶ T2 paragraph ──(none)──▶ T3 word
//!                  │                             │                     │
//!                  ▼                             ▼                     ▼
//!            all occurrences              ranked paragraphs      first hit/word
//!                                                                      │
//!                                         T5 substring ◀──(none)── T4 prefix
//! ```

use super::paragraph::rank_paragraphs;
use super::utils::{
    first_hits, prefix_pattern, sequence_pattern, substring_pattern, whole_word_pattern,
};
use crate::error::SnippetError;
use crate::query::Query;
use crate::types::{CandidateSet, Match, MatchGroup, Tier};
use tracing::{debug, trace};

/// Result of one tier: `Ok(None)` means "nothing here, try the next tier".
pub type TierResult = Result<Option<CandidateSet>, SnippetError>;

/// The winning tier and its candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub tier: Tier,
    pub candidates: CandidateSet,
}

/// Runs the tiers for one query against any number of pages.
#[derive(Debug, Clone, Copy)]
pub struct TierMatcher<'q> {
    query: &'q Query,
}

impl<'q> TierMatcher<'q> {
    pub fn new(query: &'q Query) -> Self {
        Self { query }
    }

    pub fn query(&self) -> &Query {
        self.query
    }

    /// Tier 1: every non-overlapping occurrence of the full word sequence,
    /// all in one group.
    pub fn tier1_exact_sequence(&self, text: &str) -> TierResult {
        let pattern = sequence_pattern(&self.query.words)?;
        let group: MatchGroup = pattern
            .find_iter(text)
            .map(|m| Match::from_regex(m, 0))
            .collect();
        Ok(CandidateSet::single(group))
    }

    /// Tier 2: paragraphs ranked by distinct query words.
    pub fn tier2_paragraph(&self, text: &str) -> TierResult {
        Ok(rank_paragraphs(text, &self.query.effective_words)?)
    }

    /// Tier 3: first whole-word hit per word.
    pub fn tier3_single_word(&self, text: &str) -> TierResult {
        self.per_word(text, whole_word_pattern)
    }

    /// Tier 4: first hit of each word as a token prefix.
    pub fn tier4_prefix(&self, text: &str) -> TierResult {
        self.per_word(text, prefix_pattern)
    }

    /// Tier 5: first hit of each word anywhere inside a token.
    pub fn tier5_substring(&self, text: &str) -> TierResult {
        self.per_word(text, substring_pattern)
    }

    fn per_word(
        &self,
        text: &str,
        pattern: fn(&str) -> Result<regex::Regex, regex::Error>,
    ) -> TierResult {
        if !self.query.has_effective_words() {
            return Ok(None);
        }
        let group = first_hits(&self.query.effective_words, text, pattern)?;
        Ok(CandidateSet::single(group))
    }

    /// Run a single tier in isolation.
    pub fn run(&self, tier: Tier, text: &str) -> TierResult {
        match tier {
            Tier::ExactSequence => self.tier1_exact_sequence(text),
            Tier::Paragraph => self.tier2_paragraph(text),
            Tier::SingleWord => self.tier3_single_word(text),
            Tier::Prefix => self.tier4_prefix(text),
            Tier::Substring => self.tier5_substring(text),
        }
    }

    /// Try tiers in priority order, stopping at the first with candidates.
    pub fn resolve(&self, text: &str) -> Result<Option<Resolution>, SnippetError> {
        for tier in Tier::ALL {
            trace!(tier = tier.number(), name = %tier, "trying tier");
            if let Some(candidates) = self.run(tier, text)? {
                debug!(
                    tier = tier.number(),
                    name = %tier,
                    groups = candidates.groups().len(),
                    matches = candidates.best().len(),
                    "tier matched"
                );
                return Ok(Some(Resolution { tier, candidates }));
            }
        }
        debug!(words = ?self.query.words, "no tier matched");
        Ok(None)
    }

    /// Run every tier independently, ignoring priority. Diagnostic only.
    pub fn explain(&self, text: &str) -> Result<Vec<(Tier, Option<CandidateSet>)>, SnippetError> {
        let mut report = Vec::with_capacity(Tier::ALL.len());
        for tier in Tier::ALL {
            report.push((tier, self.run(tier, text)?));
        }
        Ok(report)
    }
}
