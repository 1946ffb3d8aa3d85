//! `metadata.json` schema
//!
//! Field names are part of the on-disk contract and must not change.

use serde::{Deserialize, Serialize};

/// File name of the per-topic manifest
pub const MANIFEST_FILE: &str = "metadata.json";

/// Description of one saved code block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedBlock {
    /// Path of the written file
    pub path: String,
    /// Language tag
    pub language: String,
    /// Number of lines in the block
    pub lines: usize,
    /// Content fingerprint
    pub hash: String,
}

/// Manifest describing one topic directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Input document the blocks came from
    pub source_file: String,
    /// Topic directory name
    pub topic: String,
    /// Number of entries in `code_files`
    pub total_blocks: usize,
    /// Saved blocks, in merged order
    pub code_files: Vec<SavedBlock>,
    /// RFC 3339 timestamp of when the manifest was written
    pub processed_at: String,
}

impl Manifest {
    /// Build a manifest stamped with the current time
    pub fn new(source_file: &str, topic: &str, code_files: Vec<SavedBlock>) -> Self {
        Self {
            source_file: source_file.to_string(),
            topic: topic.to_string(),
            total_blocks: code_files.len(),
            code_files,
            processed_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
