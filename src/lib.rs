// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlighted search snippets for noisy OCR text.
//!
//! Given a query and the text of one scanned page, find where the query
//! occurs and render a short HTML fragment with every hit wrapped in
//! `<em>`. OCR output is full of broken words, stray punctuation and split
//! lines, so matching falls through five tiers, strictest first, and the
//! first tier that finds anything wins.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────┐     ┌──────────────────┐
//! │  query.rs   │────▶│ search/tiered.rs │────▶│   snippet/       │
//! │  (Query,    │     │  (TierMatcher,   │     │ (SnippetAssembler│
//! │ stopwords)  │     │   5 tiers)       │     │  markup, caps)   │
//! └─────────────┘     └──────────────────┘     └──────────────────┘
//!        │                     │                        │
//!        ▼                     ▼                        ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        engine.rs                              │
//! │   (Snippeter: one page, or a document page by page)           │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Tiers
//!
//! | Tier | Name             | Finds                                         |
//! |------|------------------|-----------------------------------------------|
//! | 1    | `exact_sequence` | all query words in order, any non-word gaps   |
//! | 2    | `paragraph`      | the line holding most of the query words      |
//! | 3    | `single_word`    | first whole-word hit of each query word       |
//! | 4    | `prefix`         | first word starting with each query word      |
//! | 5    | `substring`      | first word containing each query word         |
//!
//! Tier 1 uses every query word. Tiers 2 to 5 skip stopwords.
//!
//! # Usage
//!
//! ```
//! let html = ocrsnip::find_snippet("lager onderwijs", "Het lager  onderwijs in 1950", 10)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(html, "Het <em>lager  onderwijs</em> in 1950");
//! ```

pub mod config;
pub mod contracts;
pub mod engine;
pub mod error;
pub mod query;
pub mod search;
pub mod snippet;
pub mod stopwords;
pub mod types;

pub use config::SnippetConfig;
pub use engine::{find_snippet, Snippeter};
pub use error::{ConfigError, SnippetError};
pub use query::Query;
pub use search::{Resolution, TierMatcher, TierResult};
pub use snippet::SnippetAssembler;
pub use stopwords::{StopwordSet, DUTCH_STOPWORDS};
pub use types::{CandidateSet, Match, MatchGroup, PageSnippet, Snippet, Span, Tier};
