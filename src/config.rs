// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snippet layout configuration.
//!
//! Defaults reproduce the archive search UI: 70 characters of context,
//! 300-character snippets, long gaps between highlights folded to 70
//! characters on each side of a ` [...] ` marker. A JSON file may override
//! any subset of fields.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default characters of context on each side of a match.
pub const DEFAULT_CONTEXT_CHARS: usize = 70;
/// Hard cap on the rendered snippet, tags and entities included.
pub const DEFAULT_MAX_LEN: usize = 300;
/// Gaps longer than this between two highlights get folded.
pub const DEFAULT_GAP_THRESHOLD: usize = 140;
/// Characters kept on each side of a folded gap.
pub const DEFAULT_GAP_CONTEXT: usize = 70;
/// Characters kept after the last highlight in a multi-match snippet.
pub const DEFAULT_TRAILING_CONTEXT: usize = 100;
pub const DEFAULT_ELLIPSIS: &str = " [...] ";

/// Smallest cap that still fits `<em>x</em>`.
const MIN_MAX_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SnippetConfig {
    pub context_chars: usize,
    pub max_len: usize,
    pub gap_threshold: usize,
    pub gap_context: usize,
    pub trailing_context: usize,
    pub ellipsis: String,
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            context_chars: DEFAULT_CONTEXT_CHARS,
            max_len: DEFAULT_MAX_LEN,
            gap_threshold: DEFAULT_GAP_THRESHOLD,
            gap_context: DEFAULT_GAP_CONTEXT,
            trailing_context: DEFAULT_TRAILING_CONTEXT,
            ellipsis: DEFAULT_ELLIPSIS.to_string(),
        }
    }
}

impl SnippetConfig {
    /// Load from a JSON file, falling back to defaults for missing fields.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the layout constants are consistent with each other.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_len < MIN_MAX_LEN {
            return Err(ConfigError::Invalid(format!(
                "max_len must be at least {}, got {}",
                MIN_MAX_LEN, self.max_len
            )));
        }
        if self.gap_context * 2 > self.gap_threshold {
            return Err(ConfigError::Invalid(format!(
                "gap_context ({}) on both sides exceeds gap_threshold ({})",
                self.gap_context, self.gap_threshold
            )));
        }
        if self.ellipsis.contains('<') || self.ellipsis.contains('>') {
            return Err(ConfigError::Invalid(
                "ellipsis must not contain markup".to_string(),
            ));
        }
        Ok(())
    }

    /// Same layout with a different context width, as `-c` sets it.
    pub fn with_context(mut self, context_chars: usize) -> Self {
        self.context_chars = context_chars;
        self
    }
}
