//! CodeHarvest - extract code blocks from free-form text
//!
//! This library finds fenced and indented code in conversation dumps and
//! notes, classifies its language, and saves each block to a per-topic
//! directory alongside a `metadata.json` manifest.

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod storage;
pub mod topic;

/// Re-export commonly used types
pub use config::{ExtractorConfig, Thresholds};
pub use error::ExtractError;
pub use extract::{BlockExtractor, CodeBlock, Language, SignatureTable};
pub use pipeline::{DocumentOutcome, ExtractionResult, Pipeline, RunStatistics};
pub use storage::TopicStore;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "codeharvest";
