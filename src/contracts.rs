// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for assembled snippets.
//!
//! Debug-mode assertions over the output invariants. They cost nothing in
//! release builds; the predicates are public so tests can check the same
//! properties directly.
//!
//! | Contract                     | Property                                     |
//! |------------------------------|----------------------------------------------|
//! | `check_snippet_well_formed`  | length cap holds, `<em>` tags balanced, flat |
//!
//! # Usage
//!
//! ```ignore
//! use ocrsnip::contracts::*;
//!
//! // In debug builds, this panics if the snippet is malformed
//! check_snippet_well_formed(&html, 300);
//! ```

use crate::snippet::markup::{CLOSE_TAG, OPEN_TAG};

/// Every `<em>` is closed before the next one opens, and nothing closes
/// that was not opened.
pub fn highlights_balanced(html: &str) -> bool {
    let mut open = false;
    let mut rest = html;
    while let Some(idx) = rest.find('<') {
        let tail = &rest[idx..];
        if tail.starts_with(OPEN_TAG) {
            if open {
                return false;
            }
            open = true;
            rest = &tail[OPEN_TAG.len()..];
        } else if tail.starts_with(CLOSE_TAG) {
            if !open {
                return false;
            }
            open = false;
            rest = &tail[CLOSE_TAG.len()..];
        } else {
            // Escaping leaves no other `<` in the output.
            return false;
        }
    }
    !open
}

/// Length in characters, tags and entities included.
#[inline]
pub fn rendered_len(html: &str) -> usize {
    html.chars().count()
}

/// Check that an assembled snippet respects the cap and tag balance.
///
/// # Panics (debug builds only)
/// Panics if the snippet exceeds `max_len` characters or its highlight
/// tags are unbalanced or nested.
#[inline]
pub fn check_snippet_well_formed(html: &str, max_len: usize) {
    debug_assert!(
        rendered_len(html) <= max_len,
        "snippet of {} chars exceeds cap {}",
        rendered_len(html),
        max_len
    );
    debug_assert!(
        highlights_balanced(html),
        "snippet has unbalanced highlight tags: {:?}",
        html
    );
}
