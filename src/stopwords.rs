// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stopword sets used to prune queries before the fallback tiers.
//!
//! The built-in list is Dutch, matching the archive material this crate was
//! written for. The exact-sequence tier ignores stopwords entirely; every
//! later tier only looks at the words that survive this filter.

use crate::error::ConfigError;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Common Dutch function words.
pub const DUTCH_STOPWORDS: &[&str] = &[
    "de", "en", "van", "ik", "te", "dat", "die", "in", "een", "hij", "het", "niet", "zijn", "is",
    "was", "op", "aan", "met", "als", "voor", "had", "er", "maar", "om", "hem", "dan", "zou", "of",
    "wat", "mijn", "men", "dit", "zo", "door", "over", "ze", "zich", "bij", "ook", "tot", "je",
    "mij", "uit", "der", "daar", "haar", "naar", "heb", "hoe", "heeft", "hebben", "deze", "u",
    "want", "nog", "zal", "me", "zij", "nu", "ge", "geen", "omdat", "iets", "worden", "toch", "al",
    "waren", "veel", "meer", "doen", "toen", "moet", "ben", "zonder", "kan", "hun", "dus", "alles",
    "onder", "ja", "eens", "hier", "wie", "werd", "altijd", "doch", "wordt", "wezen", "kunnen",
    "ons", "zelf", "tegen", "na", "reeds", "wil", "kon", "niets", "uw", "iemand", "geweest",
    "andere",
];

static SHARED_DUTCH: OnceLock<StopwordSet> = OnceLock::new();

/// Immutable set of lower-cased stopwords.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Build a set from arbitrary words. Entries are trimmed and lower-cased;
    /// blank entries are ignored.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// The built-in Dutch list.
    pub fn dutch() -> Self {
        Self::from_words(DUTCH_STOPWORDS)
    }

    /// Process-wide Dutch set, built on first use and shared read-only.
    pub fn default_shared() -> &'static StopwordSet {
        SHARED_DUTCH.get_or_init(Self::dutch)
    }

    /// Set without any stopwords; every query word survives.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load one word per line. Blank lines and `#` comments are skipped.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse_list(&raw))
    }

    fn parse_list(raw: &str) -> Self {
        Self::from_words(
            raw.lines()
                .map(|line| line.split('#').next().unwrap_or(""))
                .filter(|line| !line.trim().is_empty()),
        )
    }

    /// `word` is expected to be lower-cased already.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
