//! Typed errors for the extraction library
//!
//! The binary wraps these in `anyhow` at the edge; everything below the CLI
//! returns `ExtractError` so per-document failures can be told apart.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while extracting code from a document
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Input path does not exist
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Input could not be opened or decoded as UTF-8
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A code block file or topic directory could not be written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The topic manifest could not be serialized
    #[error("failed to serialize manifest {}: {source}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A language signature failed to compile
    #[error("invalid signature for {language}: {source}")]
    Pattern {
        language: String,
        #[source]
        source: regex::Error,
    },

    /// Configuration file missing or malformed
    #[error("config error in {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },
}

impl ExtractError {
    /// Whether this error means the input never existed
    pub fn is_not_found(&self) -> bool {
        matches!(self, ExtractError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
