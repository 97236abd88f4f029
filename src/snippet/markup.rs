// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTML handling for assembled snippets.
//!
//! Page text is escaped piece by piece while the snippet is built, and the
//! only tags in the result are the highlight markers the assembler inserts
//! itself. Cutting to length comes last, so the cap is measured on what the
//! browser receives, entities and tags included.

use crate::contracts::{highlights_balanced, rendered_len};
use std::borrow::Cow;

pub const OPEN_TAG: &str = "<em>";
pub const CLOSE_TAG: &str = "</em>";

const ESCAPED_OPEN: &str = "&lt;em&gt;";
const ESCAPED_CLOSE: &str = "&lt;/em&gt;";

/// Longest entity `html-escape` emits (`&quot;`, `&#x27;`), with slack.
const MAX_ENTITY_LEN: usize = 10;

/// Append `raw` to `out` with `&`, `<`, `>`, `"` and `'` escaped.
pub fn push_escaped(out: &mut String, raw: &str) {
    out.push_str(&html_escape::encode_quoted_attribute(raw));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece {
    Open,
    Close,
    Text,
}

/// Next indivisible piece of `s`: a marker, an entity, or one character.
fn next_piece(s: &str) -> (Piece, &str) {
    if s.starts_with(OPEN_TAG) {
        return (Piece::Open, &s[..OPEN_TAG.len()]);
    }
    if s.starts_with(CLOSE_TAG) {
        return (Piece::Close, &s[..CLOSE_TAG.len()]);
    }
    if s.starts_with('&') {
        let window = &s.as_bytes()[..s.len().min(MAX_ENTITY_LEN)];
        if let Some(semi) = window.iter().position(|&b| b == b';') {
            return (Piece::Text, &s[..=semi]);
        }
    }
    let width = s.chars().next().map_or(0, char::len_utf8);
    (Piece::Text, &s[..width])
}

/// Cap `html` at `max_chars` characters without splitting a marker or an
/// entity. A highlight left open by the cut is closed inside the cap; one
/// left empty is dropped. Markers that would nest or close nothing are
/// re-escaped, so the result is always balanced.
pub fn truncate_tag_safe(html: &str, max_chars: usize) -> Cow<'_, str> {
    if rendered_len(html) <= max_chars && highlights_balanced(html) {
        return Cow::Borrowed(html);
    }

    let close_len = CLOSE_TAG.len();
    let mut out = String::with_capacity(max_chars);
    let mut used = 0;
    let mut open = false;
    let mut rest = html;

    while !rest.is_empty() {
        let (kind, raw_piece) = next_piece(rest);
        let (piece, open_after) = match kind {
            Piece::Open if open => (ESCAPED_OPEN, open),
            Piece::Close if !open => (ESCAPED_CLOSE, open),
            Piece::Open => (raw_piece, true),
            Piece::Close => (raw_piece, false),
            Piece::Text => (raw_piece, open),
        };
        let reserve = if open_after { close_len } else { 0 };
        let width = piece.chars().count();
        if used + width + reserve > max_chars {
            break;
        }
        out.push_str(piece);
        used += width;
        open = open_after;
        rest = &rest[raw_piece.len()..];
    }

    if open {
        if out.ends_with(OPEN_TAG) {
            out.truncate(out.len() - OPEN_TAG.len());
        } else {
            out.push_str(CLOSE_TAG);
        }
    }
    Cow::Owned(out)
}

/// Final pass over assembled HTML: cap it at `max_chars`.
pub fn finish(html: &str, max_chars: usize) -> String {
    truncate_tag_safe(html, max_chars).into_owned()
}
