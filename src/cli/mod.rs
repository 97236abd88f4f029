// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the ocrsnip command-line interface.
//!
//! Two subcommands: `snippet` to print the highlighted snippet for a query,
//! and `explain` to show what every tier finds on a page. Input is a text
//! file (or stdin) with pages separated by form feeds, the way `pdftotext`
//! writes them.

pub mod display;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ocrsnip",
    about = "Highlighted search snippets for noisy OCR text",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    ///
    /// Ignored when OCRSNIP_LOG is set, which takes a full tracing filter.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the snippet for the first page that matches
    Snippet {
        /// Search query; wrap in double quotes to mark a phrase
        #[arg(short, long)]
        query: String,

        /// Characters of context around a highlight
        ///
        /// Defaults to the config file's `context_chars`, or 70.
        #[arg(short, long)]
        context: Option<usize>,

        /// JSON layout config (max_len, gap_threshold, ellipsis, ...)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Stopword list, one word per line, replacing the Dutch defaults
        #[arg(long)]
        stopwords: Option<PathBuf>,

        /// Print {"html", "page", "tier"} as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Page text; `-` or omitted reads stdin
        file: Option<PathBuf>,
    },

    /// Show the normalized query and every tier's candidates for the first page
    Explain {
        /// Search query
        #[arg(short, long)]
        query: String,

        /// Stopword list, one word per line, replacing the Dutch defaults
        #[arg(long)]
        stopwords: Option<PathBuf>,

        /// Page text; `-` or omitted reads stdin
        file: Option<PathBuf>,
    },
}
