// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query normalization.
//!
//! Raw user input becomes a `Query`: lower-cased words in order, plus the
//! subset that survives stopword pruning. The exact-sequence tier uses
//! `words`; every fallback tier uses `effective_words`.

use crate::error::SnippetError;
use crate::stopwords::StopwordSet;
use serde::Serialize;

/// A normalized query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    /// The input was wrapped in one pair of double quotes.
    pub is_phrase: bool,
    /// Lower-cased words in input order. Never empty.
    pub words: Vec<String>,
    /// `words` minus stopwords and duplicates, first-seen order kept.
    /// May be empty, in which case the fallback tiers find nothing.
    pub effective_words: Vec<String>,
}

impl Query {
    /// Normalize `raw` against `stopwords`.
    ///
    /// # Example
    ///
    /// ```
    /// use ocrsnip::{Query, StopwordSet};
    ///
    /// let q = Query::parse("\"Uitgebreid Lager Onderwijs\"", &StopwordSet::dutch()).unwrap();
    /// assert!(q.is_phrase);
    /// assert_eq!(q.words, vec!["uitgebreid", "lager", "onderwijs"]);
    /// ```
    pub fn parse(raw: &str, stopwords: &StopwordSet) -> Result<Self, SnippetError> {
        let (body, is_phrase) = strip_quotes(raw.trim());

        let lowered = body.to_lowercase();
        // `*` wildcards are implied by the fallback tiers, so they are dropped.
        let words: Vec<String> = lowered
            .split_whitespace()
            .map(|w| w.trim_matches('*'))
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();
        if words.is_empty() {
            return Err(SnippetError::InvalidQuery);
        }

        let mut effective_words: Vec<String> = Vec::with_capacity(words.len());
        for word in &words {
            if !stopwords.contains(word) && !effective_words.contains(word) {
                effective_words.push(word.clone());
            }
        }

        Ok(Self {
            is_phrase,
            words,
            effective_words,
        })
    }

    /// Fallback tiers have something to look for.
    pub fn has_effective_words(&self) -> bool {
        !self.effective_words.is_empty()
    }
}

/// Strip one enclosing pair of `"`; stray quotes at either end are trimmed
/// without marking the query as a phrase.
fn strip_quotes(s: &str) -> (&str, bool) {
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        (&s[1..s.len() - 1], true)
    } else {
        (s.trim_matches('"'), false)
    }
}
