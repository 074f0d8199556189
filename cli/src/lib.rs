pub mod report;

use anyhow::{Context, Result};
use clap::Parser;
use docsearch_core::input::read_lines;
use docsearch_core::{QueryResult, SearchEngine, SearchOptions};
use report::{write_report, OutputFormat};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "docsearch")]
#[command(about = "Boolean AND search over a line-per-document file, ranked by vector angle", long_about = None)]
pub struct Cli {
    /// Documents file, one document per line
    #[arg(long, default_value = "docs.txt")]
    pub docs: PathBuf,
    /// Queries file, one query per line
    #[arg(long, default_value = "queries.txt")]
    pub queries: PathBuf,
    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Keep only the best N ranked documents per query
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Load both inputs, run every query and write the report to `out`.
/// Nothing is written if either input cannot be read.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<Vec<QueryResult>> {
    let documents = read_lines(&cli.docs).context("loading documents")?;
    let queries = read_lines(&cli.queries).context("loading queries")?;
    tracing::info!(num_docs = documents.len(), num_queries = queries.len(), "inputs loaded");

    let engine = SearchEngine::with_options(&documents, SearchOptions { limit: cli.limit })?;
    let results: Vec<QueryResult> = queries.iter().map(|q| engine.query(q)).collect();
    write_report(out, cli.format, engine.vocabulary().len(), &results)?;
    Ok(results)
}
