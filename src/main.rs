// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ocrsnip::{
    CandidateSet, PageSnippet, Query, SnippetConfig, SnippetError, Snippeter, StopwordSet, Tier,
};

mod cli;
use cli::display::{
    render_snippet, row, section_bot, section_mid, section_top, themed, tier_label, DIM, GRAY,
};
use cli::{Cli, Commands};

/// Pages in extracted text are separated by form feeds.
const PAGE_SEPARATOR: char = '\x0c';

/// Exit status for a query with no words in it.
const EXIT_INVALID_QUERY: u8 = 2;

#[derive(Serialize)]
struct JsonSnippet<'a> {
    html: Option<&'a str>,
    page: Option<usize>,
    tier: Option<Tier>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            if matches!(
                e.downcast_ref::<SnippetError>(),
                Some(SnippetError::InvalidQuery)
            ) {
                ExitCode::from(EXIT_INVALID_QUERY)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "ocrsnip=warn",
        1 => "ocrsnip=info",
        2 => "ocrsnip=debug",
        _ => "ocrsnip=trace",
    };
    let filter =
        EnvFilter::try_from_env("OCRSNIP_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Snippet {
            query,
            context,
            config,
            stopwords,
            json,
            file,
        } => {
            let mut config = match config {
                Some(path) => SnippetConfig::from_file(path)?,
                None => SnippetConfig::default(),
            };
            if let Some(context) = context {
                config = config.with_context(context);
            }
            let context = config.context_chars;
            let engine = Snippeter::new(load_stopwords(stopwords.as_deref())?, config);

            let text = read_input(file.as_deref())?;
            let pages: Vec<&str> = text.split(PAGE_SEPARATOR).collect();
            info!(pages = pages.len(), "searching document");

            let found = search_pages(&engine, &query, &pages, context)?;
            if json {
                print_json(found.as_ref())
            } else {
                print_snippet(found.as_ref());
                Ok(())
            }
        }
        Commands::Explain {
            query,
            stopwords,
            file,
        } => {
            let engine = Snippeter::new(
                load_stopwords(stopwords.as_deref())?,
                SnippetConfig::default(),
            );
            let query = engine.parse_query(&query)?;
            let text = read_input(file.as_deref())?;
            let first_page = text.split(PAGE_SEPARATOR).next().unwrap_or_default();

            let report = engine.explain(&query, first_page)?;
            print_explain(&query, &report);
            Ok(())
        }
    }
}

fn load_stopwords(path: Option<&Path>) -> Result<StopwordSet> {
    Ok(match path {
        Some(path) => StopwordSet::from_file(path)?,
        None => StopwordSet::default_shared().clone(),
    })
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read stdin")?;
            Ok(raw)
        }
    }
}

#[cfg(feature = "parallel")]
fn search_pages(
    engine: &Snippeter,
    query: &str,
    pages: &[&str],
    context: usize,
) -> Result<Option<PageSnippet>, SnippetError> {
    engine.find_document_snippet_parallel(query, pages, context)
}

#[cfg(not(feature = "parallel"))]
fn search_pages(
    engine: &Snippeter,
    query: &str,
    pages: &[&str],
    context: usize,
) -> Result<Option<PageSnippet>, SnippetError> {
    engine.find_document_snippet(query, pages.iter().copied(), context)
}

fn print_json(found: Option<&PageSnippet>) -> Result<()> {
    let out = JsonSnippet {
        html: found.map(|f| f.snippet.html.as_str()),
        page: found.map(|f| f.page),
        tier: found.map(|f| f.snippet.tier),
    };
    println!("{}", serde_json::to_string(&out).context("serialize snippet")?);
    Ok(())
}

fn print_snippet(found: Option<&PageSnippet>) {
    match found {
        Some(found) => {
            println!("{}", render_snippet(&found.snippet.html));
            eprintln!(
                "{}",
                themed(
                    GRAY,
                    &[DIM],
                    &format!(
                        "page {}, {} {}",
                        found.page + 1,
                        found.snippet.tier.name(),
                        tier_label(found.snippet.tier.number())
                    )
                )
            );
        }
        None => eprintln!("{}", themed(GRAY, &[DIM], "no match")),
    }
}

fn print_explain(query: &Query, report: &[(Tier, Option<CandidateSet>)]) {
    section_top("QUERY");
    row(&format!(" words:     {}", query.words.join(" ")));
    row(&format!(" effective: {}", query.effective_words.join(" ")));
    row(&format!(" phrase:    {}", query.is_phrase));

    for (tier, candidates) in report {
        section_mid(&format!("{} {}", tier_label(tier.number()), tier.name()));
        let Some(candidates) = candidates else {
            row(&themed(GRAY, &[], " no match"));
            continue;
        };
        for (rank, group) in candidates.groups().iter().enumerate() {
            let hits: Vec<String> = group
                .iter()
                .map(|m| format!("{}@{}", m.text, m.span.start))
                .collect();
            row(&format!(" #{:<2} {}", rank + 1, hits.join(", ")));
        }
    }
    section_bot();
}
