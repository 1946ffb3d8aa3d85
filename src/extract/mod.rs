//! Code block extraction module
//!
//! Finds candidate code in free-form text using two independent detectors:
//! - Fenced blocks delimited by triple backticks
//! - Indented blocks recognised by leading whitespace
//!
//! Indented detections that repeat a nearby fenced block are dropped by the
//! merger.

pub mod fenced;
pub mod indented;
pub mod language;
pub mod merge;

pub use language::{looks_like_code, Language, SignatureTable};

use crate::config::Thresholds;
use sha2::{Digest, Sha256};

/// Number of hex characters kept from the content hash
pub const FINGERPRINT_LEN: usize = 8;

/// Compute a stable hash for content
pub fn content_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

/// Short content hash used in filenames
pub fn fingerprint(content: &str) -> String {
    let mut hash = content_hash(content);
    hash.truncate(FINGERPRINT_LEN);
    hash
}

/// A detected span of candidate code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Trimmed text of the span
    pub content: String,
    /// Declared or inferred language
    pub language: Language,
    /// 0-based line where the span begins
    pub start_line: usize,
    /// Short hash of `content`
    pub fingerprint: String,
}

impl CodeBlock {
    /// Create a new code block; `content` is trimmed before hashing
    pub fn new(content: &str, language: Language, start_line: usize) -> Self {
        let content = content.trim().to_string();
        let fingerprint = fingerprint(&content);

        Self {
            content,
            language,
            start_line,
            fingerprint,
        }
    }

    /// Number of lines in the content
    pub fn line_count(&self) -> usize {
        self.content.split('\n').count()
    }

    /// Filename for this block at the given 1-based position
    ///
    /// `code_01_python_1a2b3c4d.py`, or `code_01_1a2b3c4d.txt` for the
    /// plain text fallback.
    pub fn file_name(&self, index: usize) -> String {
        if self.language.is_fallback() {
            format!(
                "code_{:02}_{}{}",
                index,
                self.fingerprint,
                self.language.extension()
            )
        } else {
            format!(
                "code_{:02}_{}_{}{}",
                index,
                self.language,
                self.fingerprint,
                self.language.extension()
            )
        }
    }
}

/// Runs both detectors and the merger over a document
#[derive(Debug, Clone)]
pub struct BlockExtractor {
    table: SignatureTable,
    thresholds: Thresholds,
}

impl BlockExtractor {
    /// Create an extractor with the built-in signature table
    pub fn new() -> Self {
        Self {
            table: SignatureTable::builtin().clone(),
            thresholds: Thresholds::default(),
        }
    }

    /// Use a custom signature table
    pub fn with_table(mut self, table: SignatureTable) -> Self {
        self.table = table;
        self
    }

    /// Set detector thresholds
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Signature table used for classification
    pub fn table(&self) -> &SignatureTable {
        &self.table
    }

    /// All code blocks in `content`: fenced first, then surviving indented ones
    pub fn extract(&self, content: &str) -> Vec<CodeBlock> {
        let fenced = fenced::detect(content, &self.table, self.thresholds.fenced_min_chars);
        let indented = indented::detect(content, &self.table, &self.thresholds);

        tracing::debug!(
            fenced = fenced.len(),
            indented = indented.len(),
            "detected candidate blocks"
        );

        merge::merge_blocks(fenced, indented, self.thresholds.duplicate_line_window)
    }
}

impl Default for BlockExtractor {
    fn default() -> Self {
        Self::new()
    }
}
