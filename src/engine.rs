// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The public entry points: one page, or a whole document page by page.
//!
//! A `Snippeter` owns its stopwords and layout config and is otherwise
//! stateless, so one instance can serve any number of threads. Documents
//! short-circuit: the first page with a snippet wins and later pages are
//! never searched.

use crate::config::SnippetConfig;
use crate::error::SnippetError;
use crate::query::Query;
use crate::search::TierMatcher;
use crate::snippet::SnippetAssembler;
use crate::stopwords::StopwordSet;
use crate::types::{CandidateSet, PageSnippet, Snippet, Tier};
use std::sync::OnceLock;
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

static DEFAULT_SNIPPETER: OnceLock<Snippeter> = OnceLock::new();

/// Find a snippet for `query` in one page, with the built-in Dutch stopwords
/// and default layout.
///
/// Returns `Ok(None)` when nothing on the page matches.
///
/// # Example
///
/// ```
/// let html = ocrsnip::find_snippet("water", "abc WATER def", 3).unwrap();
/// assert_eq!(html.as_deref(), Some("bc <em>WATER</em> de"));
/// ```
pub fn find_snippet(
    query: &str,
    page_text: &str,
    context_chars: usize,
) -> Result<Option<String>, SnippetError> {
    Ok(Snippeter::shared()
        .find_snippet(query, page_text, context_chars)?
        .map(Snippet::into_html))
}

/// Snippet engine with explicit stopwords and layout.
#[derive(Debug, Clone)]
pub struct Snippeter {
    stopwords: StopwordSet,
    config: SnippetConfig,
}

impl Default for Snippeter {
    fn default() -> Self {
        Self::dutch()
    }
}

impl Snippeter {
    pub fn new(stopwords: StopwordSet, config: SnippetConfig) -> Self {
        Self { stopwords, config }
    }

    /// Dutch stopwords, default config.
    pub fn dutch() -> Self {
        Self::new(StopwordSet::default_shared().clone(), SnippetConfig::default())
    }

    /// Process-wide Dutch engine, built on first use.
    pub fn shared() -> &'static Snippeter {
        DEFAULT_SNIPPETER.get_or_init(Self::dutch)
    }

    pub fn config(&self) -> &SnippetConfig {
        &self.config
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn parse_query(&self, raw: &str) -> Result<Query, SnippetError> {
        Query::parse(raw, &self.stopwords)
    }

    /// Snippet for one page.
    pub fn find_snippet(
        &self,
        query: &str,
        page_text: &str,
        context_chars: usize,
    ) -> Result<Option<Snippet>, SnippetError> {
        let query = self.parse_query(query)?;
        self.snippet_for(&query, page_text, context_chars)
    }

    /// Snippet for one page with an already parsed query.
    pub fn snippet_for(
        &self,
        query: &Query,
        page_text: &str,
        context_chars: usize,
    ) -> Result<Option<Snippet>, SnippetError> {
        let Some(resolution) = TierMatcher::new(query).resolve(page_text)? else {
            return Ok(None);
        };

        let group = resolution.candidates.into_best();
        let html = SnippetAssembler::new(&self.config).assemble(&group, page_text, context_chars)?;
        Ok(Some(Snippet {
            html,
            tier: resolution.tier,
            match_count: group.len(),
        }))
    }

    /// First page with a snippet. The query is validated before any page is
    /// searched, so an invalid query fails even for an empty document.
    #[instrument(level = "debug", skip(self, pages))]
    pub fn find_document_snippet<'p, I>(
        &self,
        query: &str,
        pages: I,
        context_chars: usize,
    ) -> Result<Option<PageSnippet>, SnippetError>
    where
        I: IntoIterator<Item = &'p str>,
    {
        let query = self.parse_query(query)?;
        for (page, text) in pages.into_iter().enumerate() {
            if let Some(snippet) = self.snippet_for(&query, text, context_chars)? {
                debug!(page, tier = %snippet.tier, "snippet found");
                return Ok(Some(PageSnippet { page, snippet }));
            }
        }
        debug!("no page matched");
        Ok(None)
    }

    /// Like `find_document_snippet`, with pages searched in parallel. Still
    /// returns the earliest matching page.
    #[cfg(feature = "parallel")]
    pub fn find_document_snippet_parallel<S>(
        &self,
        query: &str,
        pages: &[S],
        context_chars: usize,
    ) -> Result<Option<PageSnippet>, SnippetError>
    where
        S: AsRef<str> + Sync,
    {
        let query = self.parse_query(query)?;
        pages
            .par_iter()
            .enumerate()
            .map(|(page, text)| {
                self.snippet_for(&query, text.as_ref(), context_chars)
                    .map(|found| found.map(|snippet| PageSnippet { page, snippet }))
            })
            .find_map_first(Result::transpose)
            .transpose()
    }

    /// Every tier's candidates for one page, priority ignored.
    pub fn explain(
        &self,
        query: &Query,
        page_text: &str,
    ) -> Result<Vec<(Tier, Option<CandidateSet>)>, SnippetError> {
        TierMatcher::new(query).explain(page_text)
    }
}
