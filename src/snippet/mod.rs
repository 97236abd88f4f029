// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snippet assembly: from a winning match group to display HTML.
//!
//! One match gets a plain context window on both sides. Several matches get
//! walked left to right, with long stretches between two highlights folded
//! into ` [...] ` so every highlight keeps its local context without dragging
//! whole paragraphs along.
//!
//! All offsets are bytes into the page text; all lengths (context, gaps,
//! caps) are characters. Windows are always moved by whole characters, so
//! multi-byte OCR output never splits.
//!
//! Page text is escaped as it is copied in. Only the assembler writes
//! `<em>` and `</em>`, so markup in the OCR text always stays text.

pub mod markup;

use crate::config::SnippetConfig;
use crate::contracts::check_snippet_well_formed;
use crate::error::SnippetError;
use crate::types::{MatchGroup, Span};
use markup::{finish, push_escaped, CLOSE_TAG, OPEN_TAG};
use tracing::warn;

/// Renders match groups against the page they were found in.
#[derive(Debug, Clone, Copy)]
pub struct SnippetAssembler<'c> {
    config: &'c SnippetConfig,
}

impl<'c> SnippetAssembler<'c> {
    pub fn new(config: &'c SnippetConfig) -> Self {
        Self { config }
    }

    /// Render `group` with `context_chars` of surrounding text.
    pub fn assemble(
        &self,
        group: &MatchGroup,
        text: &str,
        context_chars: usize,
    ) -> Result<String, SnippetError> {
        validate_spans(group, text)?;

        let html = match group.matches.as_slice() {
            [] => return Err(SnippetError::EmptyGroup),
            [only] => self.render_single(only.span, text, context_chars),
            _ => self.render_multiple(group, text, context_chars),
        };

        let html = finish(&html, self.config.max_len);
        check_snippet_well_formed(&html, self.config.max_len);
        Ok(html)
    }

    /// Context before the first highlight: at most half the cap.
    fn leading_context(&self, context_chars: usize) -> usize {
        context_chars.min(self.config.max_len / 2)
    }

    fn render_single(&self, span: Span, text: &str, context_chars: usize) -> String {
        let start = chars_back(text, span.start, self.leading_context(context_chars));
        let end = chars_forward(text, span.end, context_chars);

        let mut html = String::with_capacity(end - start + OPEN_TAG.len() + CLOSE_TAG.len());
        push_escaped(&mut html, &text[start..span.start]);
        push_highlight(&mut html, &text[span.start..span.end]);
        push_escaped(&mut html, &text[span.end..end]);
        html
    }

    fn render_multiple(&self, group: &MatchGroup, text: &str, context_chars: usize) -> String {
        let spans = coalesce(group);
        let config = self.config;

        let mut html = String::new();
        let mut cursor = chars_back(text, spans[0].start, self.leading_context(context_chars));

        for (i, span) in spans.iter().enumerate() {
            if i > 0 && text[cursor..span.start].chars().count() > config.gap_threshold {
                let keep = chars_forward(text, cursor, config.gap_context);
                push_escaped(&mut html, &text[cursor..keep]);
                push_escaped(&mut html, &config.ellipsis);
                cursor = chars_back(text, span.start, config.gap_context);
            }
            push_escaped(&mut html, &text[cursor..span.start]);
            push_highlight(&mut html, &text[span.start..span.end]);
            cursor = span.end;
        }

        let tail = chars_forward(text, cursor, config.trailing_context);
        push_escaped(&mut html, &text[cursor..tail]);
        html
    }
}

fn push_highlight(html: &mut String, matched: &str) {
    html.push_str(OPEN_TAG);
    push_escaped(html, matched);
    html.push_str(CLOSE_TAG);
}

/// Every span must lie inside `text` on char boundaries. Violations are
/// reported, never clamped.
fn validate_spans(group: &MatchGroup, text: &str) -> Result<(), SnippetError> {
    for m in group.iter() {
        let Span { start, end } = m.span;
        let valid = start <= end
            && end <= text.len()
            && text.is_char_boundary(start)
            && text.is_char_boundary(end);
        if !valid {
            warn!(start, end, len = text.len(), "match span outside page text");
            return Err(SnippetError::SpanOutOfBounds {
                start,
                end,
                len: text.len(),
            });
        }
    }
    Ok(())
}

/// Spans sorted by start, overlapping ones merged.
fn coalesce(group: &MatchGroup) -> Vec<Span> {
    let mut spans: Vec<Span> = group.iter().map(|m| m.span).collect();
    spans.sort_unstable();

    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if span.start < last.end => {
                last.end = last.end.max(span.end);
            }
            _ => merged.push(span),
        }
    }
    merged
}

/// Byte offset `n` characters before `idx`, stopping at 0.
pub(crate) fn chars_back(text: &str, idx: usize, n: usize) -> usize {
    if n == 0 {
        return idx;
    }
    text[..idx]
        .char_indices()
        .rev()
        .take(n)
        .last()
        .map_or(idx, |(i, _)| i)
}

/// Byte offset `n` characters after `idx`, stopping at `text.len()`.
pub(crate) fn chars_forward(text: &str, idx: usize, n: usize) -> usize {
    text[idx..]
        .char_indices()
        .nth(n)
        .map_or(text.len(), |(i, _)| idx + i)
}
