//! Per-document extraction
//!
//! Reads one document, runs the block extractor, names the topic and saves
//! the blocks plus a manifest. Statistics are never touched here: the caller
//! folds each successful outcome into its own `RunStatistics`.

mod stats;

pub use stats::RunStatistics;

use crate::config::{ExtractorConfig, Thresholds};
use crate::error::{ExtractError, Result};
use crate::extract::BlockExtractor;
use crate::storage::{Manifest, SavedBlock, TopicStore};
use crate::topic::topic_name;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Blocks saved for one document
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResult {
    /// Input document
    pub source: PathBuf,
    /// Topic directory name the blocks were saved under
    pub topic: String,
    /// Saved blocks, in merged order
    pub blocks: Vec<SavedBlock>,
    /// Location of `metadata.json`
    pub manifest_path: PathBuf,
}

/// What happened to a document that was read successfully
#[derive(Debug, Clone)]
pub enum DocumentOutcome {
    Extracted(ExtractionResult),
    NoBlocks { source: PathBuf },
}

/// Drives extraction and persistence for documents
pub struct Pipeline {
    extractor: BlockExtractor,
    store: TopicStore,
    thresholds: Thresholds,
}

impl Pipeline {
    /// Build a pipeline from configuration
    pub fn new(config: &ExtractorConfig) -> Self {
        Self {
            extractor: BlockExtractor::new().with_thresholds(config.thresholds),
            store: TopicStore::new(&config.output_dir),
            thresholds: config.thresholds,
        }
    }

    /// Read and process a document
    pub fn process(&self, path: &Path, stats: &RunStatistics) -> Result<DocumentOutcome> {
        if !path.exists() {
            return Err(ExtractError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|source| ExtractError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        self.process_content(path, &content, stats)
    }

    /// Process already-loaded document text
    ///
    /// `stats` is only read, to keep topic directories of different sources
    /// apart.
    pub fn process_content(
        &self,
        source: &Path,
        content: &str,
        stats: &RunStatistics,
    ) -> Result<DocumentOutcome> {
        let blocks = self.extractor.extract(content);

        if blocks.is_empty() {
            tracing::debug!(source = %source.display(), "no code blocks found");
            return Ok(DocumentOutcome::NoBlocks {
                source: source.to_path_buf(),
            });
        }

        let slug = topic_name(source, content, self.thresholds.topic_max_len);
        let topic = stats.resolve_topic(&slug, source);
        if topic != slug {
            tracing::debug!(slug, topic, "topic already used by another source");
        }

        let saved = blocks
            .iter()
            .enumerate()
            .map(|(i, block)| self.store.save_block(&topic, i + 1, block))
            .collect::<Result<Vec<_>>>()?;

        let manifest = Manifest::new(&source.to_string_lossy(), &topic, saved.clone());
        let manifest_path = self.store.save_manifest(&topic, &manifest)?;

        tracing::debug!(
            source = %source.display(),
            topic,
            blocks = saved.len(),
            "extracted code blocks"
        );

        Ok(DocumentOutcome::Extracted(ExtractionResult {
            source: source.to_path_buf(),
            topic,
            blocks: saved,
            manifest_path,
        }))
    }
}
