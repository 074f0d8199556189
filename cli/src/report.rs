use anyhow::Result;
use clap::ValueEnum;
use docsearch_core::QueryResult;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text report, one block per query
    #[default]
    Text,
    /// One JSON object per query, one per line
    Json,
}

/// Write the vocabulary size once, then every query's block.
pub fn write_report<W: Write>(out: &mut W, format: OutputFormat, vocabulary_size: usize, results: &[QueryResult]) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "Total words: {vocabulary_size}")?;
            for r in results {
                write_text_block(out, r)?;
            }
        }
        OutputFormat::Json => {
            for r in results {
                serde_json::to_writer(&mut *out, r)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn write_text_block<W: Write>(out: &mut W, r: &QueryResult) -> Result<()> {
    writeln!(out, "Search query: {}", r.query)?;
    write!(out, "Potential matches:")?;
    for id in &r.candidate_ids {
        write!(out, " {id}")?;
    }
    writeln!(out)?;
    for s in &r.ranked {
        writeln!(out, "{} {:.2}", s.doc_id, s.angle)?;
    }
    writeln!(out)?;
    Ok(())
}
