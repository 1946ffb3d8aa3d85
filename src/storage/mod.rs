//! Filesystem storage for extracted code
//!
//! Layout under the output root:
//! - one directory per topic, created when its first block is saved
//! - one file per code block
//! - `metadata.json` describing the topic

mod manifest;

pub use manifest::{Manifest, SavedBlock, MANIFEST_FILE};

use crate::error::{ExtractError, Result};
use crate::extract::CodeBlock;
use std::path::{Path, PathBuf};

/// Writes code blocks and manifests below an output root
#[derive(Debug, Clone)]
pub struct TopicStore {
    root: PathBuf,
}

impl TopicStore {
    /// Create a store rooted at `root`; nothing is created until a block is saved
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Directory for a topic
    pub fn topic_dir(&self, topic: &str) -> PathBuf {
        self.root.join(topic)
    }

    /// Write a block's content verbatim as the `index`-th file of `topic`
    pub fn save_block(&self, topic: &str, index: usize, block: &CodeBlock) -> Result<SavedBlock> {
        let dir = self.topic_dir(topic);
        std::fs::create_dir_all(&dir).map_err(|source| ExtractError::Write {
            path: dir.clone(),
            source,
        })?;

        let path = dir.join(block.file_name(index));
        std::fs::write(&path, block.content.as_bytes()).map_err(|source| ExtractError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), language = %block.language, "saved code block");

        Ok(SavedBlock {
            path: path.to_string_lossy().to_string(),
            language: block.language.to_string(),
            lines: block.line_count(),
            hash: block.fingerprint.clone(),
        })
    }

    /// Write `metadata.json` for a topic and return its path
    pub fn save_manifest(&self, topic: &str, manifest: &Manifest) -> Result<PathBuf> {
        let dir = self.topic_dir(topic);
        std::fs::create_dir_all(&dir).map_err(|source| ExtractError::Write {
            path: dir.clone(),
            source,
        })?;

        let path = dir.join(MANIFEST_FILE);
        let json = serde_json::to_string_pretty(manifest).map_err(|source| ExtractError::Manifest {
            path: path.clone(),
            source,
        })?;

        std::fs::write(&path, json).map_err(|source| ExtractError::Write {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }

    /// Read a manifest back
    pub fn load_manifest(&self, topic: &str) -> Result<Manifest> {
        let path = self.topic_dir(topic).join(MANIFEST_FILE);
        let content = std::fs::read_to_string(&path).map_err(|source| ExtractError::Read {
            path: path.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ExtractError::Manifest { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::Language;

    #[test]
    fn test_save_block_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = TopicStore::new(dir.path());
        let block = CodeBlock::new("import os\n\nprint(os.name)  ", Language::Python, 0);

        let saved = store.save_block("Demo", 1, &block).unwrap();

        assert!(saved.path.ends_with(&format!("code_01_python_{}.py", block.fingerprint)));
        assert_eq!(saved.language, "python");
        assert_eq!(saved.lines, 3);
        assert_eq!(saved.hash, block.fingerprint);

        let written = std::fs::read(&saved.path).unwrap();
        assert_eq!(written, block.content.as_bytes());
    }

    #[test]
    fn test_manifest_fields() {
        let dir = tempfile::tempdir().unwrap();
        let store = TopicStore::new(dir.path());
        let block = CodeBlock::new("total = compute(alpha, beta)", Language::Text, 4);
        let saved = store.save_block("notes", 1, &block).unwrap();

        let manifest = Manifest::new("notes.txt", "notes", vec![saved.clone()]);
        let path = store.save_manifest("notes", &manifest).unwrap();
        assert_eq!(path, dir.path().join("notes").join(MANIFEST_FILE));

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["source_file"], "notes.txt");
        assert_eq!(raw["topic"], "notes");
        assert_eq!(raw["total_blocks"], 1);
        assert_eq!(raw["code_files"][0]["language"], "txt");
        assert_eq!(raw["code_files"][0]["lines"], 1);
        assert_eq!(raw["code_files"][0]["hash"], block.fingerprint.as_str());
        assert!(raw["processed_at"].is_string());

        let loaded = store.load_manifest("notes").unwrap();
        assert_eq!(loaded.code_files, vec![saved]);
    }

    #[test]
    fn test_write_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        // A file where the topic directory should go
        std::fs::write(dir.path().join("blocked"), "x").unwrap();
        let store = TopicStore::new(dir.path());
        let block = CodeBlock::new("total = compute(alpha, beta)", Language::Text, 0);

        let err = store.save_block("blocked", 1, &block).unwrap_err();
        assert!(matches!(err, ExtractError::Write { .. }));
    }
}
