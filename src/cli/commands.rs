//! Command implementations

use super::{Cli, OutputFormat};
use crate::config::ExtractorConfig;
use crate::error::ExtractError;
use crate::pipeline::{DocumentOutcome, Pipeline, RunStatistics};
use crate::storage::SavedBlock;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Outcome of one input, as reported to the user
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DocumentReport {
    Extracted {
        source: String,
        topic: String,
        blocks: Vec<SavedBlock>,
        metadata_file: String,
    },
    NoBlocks {
        source: String,
    },
    NotFound {
        source: String,
    },
    Failed {
        source: String,
        error: String,
    },
}

impl DocumentReport {
    fn from_result(path: &Path, result: &std::result::Result<DocumentOutcome, ExtractError>) -> Self {
        let source = path.display().to_string();
        match result {
            Ok(DocumentOutcome::Extracted(extracted)) => DocumentReport::Extracted {
                source,
                topic: extracted.topic.clone(),
                blocks: extracted.blocks.clone(),
                metadata_file: extracted.manifest_path.display().to_string(),
            },
            Ok(DocumentOutcome::NoBlocks { .. }) => DocumentReport::NoBlocks { source },
            Err(e) if e.is_not_found() => DocumentReport::NotFound { source },
            Err(e) => DocumentReport::Failed {
                source,
                error: e.to_string(),
            },
        }
    }
}

/// Everything one invocation produced
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub documents: Vec<DocumentReport>,
    pub summary: RunStatistics,
}

/// Run the extractor as described by the parsed command line
pub fn run(cli: &Cli) -> Result<RunReport> {
    let mut config = ExtractorConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(ref output) = cli.output {
        config = config.with_output_dir(output);
    }

    let report = extract(&cli.files, &config, cli.verbose, cli.format);

    match cli.format {
        OutputFormat::Json => print_report_json(&report)?,
        OutputFormat::Text => print_summary_text(&report.summary),
    }

    Ok(report)
}

/// Process each file in turn; one failing file never stops the others
pub fn extract(
    files: &[PathBuf],
    config: &ExtractorConfig,
    verbose: bool,
    format: OutputFormat,
) -> RunReport {
    let pipeline = Pipeline::new(config);
    let mut stats = RunStatistics::new();
    let mut documents = Vec::with_capacity(files.len());

    for path in files {
        if verbose && format == OutputFormat::Text && path.exists() {
            println!("Processing: {}", path.display());
        }

        let result = pipeline.process(path, &stats);
        match &result {
            Ok(outcome) => stats.record(outcome),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "document skipped"),
        }

        let report = DocumentReport::from_result(path, &result);
        if format == OutputFormat::Text {
            print_document_text(&report, verbose);
        }
        documents.push(report);
    }

    RunReport {
        documents,
        summary: stats,
    }
}

/// Print one document's result line(s)
pub fn print_document_text(report: &DocumentReport, verbose: bool) {
    match report {
        DocumentReport::Extracted {
            source,
            topic,
            blocks,
            ..
        } => {
            println!("✓ {} -> {} ({} code blocks)", source, topic, blocks.len());
            if verbose {
                for block in blocks {
                    println!("  - {} ({}, {} lines)", block.path, block.language, block.lines);
                }
            }
        }
        DocumentReport::NoBlocks { source } => println!("{}: No code blocks found", source),
        DocumentReport::NotFound { source } => println!("Error: File not found: {}", source),
        DocumentReport::Failed { source, error } => {
            println!("Error processing {}: {}", source, error)
        }
    }
}

/// Print the end-of-run summary
pub fn print_summary_text(stats: &RunStatistics) {
    let languages: Vec<&str> = stats.languages_detected.iter().map(String::as_str).collect();

    println!("\n--- Processing Summary ---");
    println!("Files processed: {}", stats.files_processed);
    println!("Code blocks found: {}", stats.code_blocks_found);
    println!("Topics created: {}", stats.topic_count());
    println!("Languages detected: {}", languages.join(", "));
}

/// Print the whole run in JSON format
pub fn print_report_json(report: &RunReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{}", json);
    Ok(())
}
