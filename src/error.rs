// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for snippet resolution and configuration loading.
//!
//! "No match" is not in here. A page without the query is an ordinary
//! `Ok(None)`; these variants are reserved for caller mistakes and broken
//! invariants.

use std::path::PathBuf;

/// Errors raised while resolving a snippet.
#[derive(Debug, thiserror::Error)]
pub enum SnippetError {
    /// The query normalized to zero words (empty, whitespace, or bare quotes).
    #[error("query is empty after normalization")]
    InvalidQuery,

    /// A match span handed to the assembler does not fit the page text.
    ///
    /// The matcher never produces these; seeing one means a caller built a
    /// `MatchGroup` by hand against a different text.
    #[error("match span {start}..{end} is out of bounds for text of {len} bytes")]
    SpanOutOfBounds { start: usize, end: usize, len: usize },

    /// The assembler was handed a group without matches.
    #[error("cannot assemble a snippet from an empty match group")]
    EmptyGroup,

    /// A tier pattern failed to compile.
    #[error("invalid match pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Errors raised while loading configuration or stopword files.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
