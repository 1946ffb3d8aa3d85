//! Run-wide statistics

use super::DocumentOutcome;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Totals across every document of one invocation
///
/// Only successful outcomes are recorded; a failed document leaves the
/// statistics untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStatistics {
    /// Documents read successfully, with or without blocks
    pub files_processed: usize,
    /// Blocks saved across all documents
    pub code_blocks_found: usize,
    /// Distinct language tags seen
    pub languages_detected: BTreeSet<String>,
    /// Topic slug → source document that claimed it
    pub topics_created: BTreeMap<String, String>,
}

impl RunStatistics {
    /// Empty statistics for a new run
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one document's outcome into the totals
    pub fn record(&mut self, outcome: &DocumentOutcome) {
        self.files_processed += 1;

        if let DocumentOutcome::Extracted(result) = outcome {
            self.code_blocks_found += result.blocks.len();
            self.languages_detected
                .extend(result.blocks.iter().map(|b| b.language.clone()));
            self.topics_created
                .insert(result.topic.clone(), result.source.to_string_lossy().to_string());
        }
    }

    /// Number of distinct topics
    pub fn topic_count(&self) -> usize {
        self.topics_created.len()
    }

    /// Pick the directory name for `slug` coming from `source`
    ///
    /// A slug already claimed by a different source this run gets a numeric
    /// suffix (`slug_2`, `slug_3`, ...). The same source keeps its slug.
    pub fn resolve_topic(&self, slug: &str, source: &Path) -> String {
        let source = source.to_string_lossy();
        let mut candidate = slug.to_string();
        let mut n = 1;

        while let Some(owner) = self.topics_created.get(&candidate) {
            if *owner == source {
                break;
            }
            n += 1;
            candidate = format!("{}_{}", slug, n);
        }

        candidate
    }
}
