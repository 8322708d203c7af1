//! Error types for the annotator.
//!
//! `AnnotatorError` wraps the failures of the outer layer (file access,
//! configuration and gold-file parsing) together with lexicon construction
//! errors from the engine.

use std::path::PathBuf;

use finnsyll_engine::EngineError;
use thiserror::Error;

/// Main error type for the annotator library.
#[derive(Debug, Error)]
pub enum AnnotatorError {
    /// Configuration file could not be found.
    #[error("Configuration file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Lexicon file exceeds the size limit.
    #[error("Lexicon file {} is too large: {size} bytes (max {max})", .path.display())]
    FileTooLarge { path: PathBuf, size: u64, max: u64 },

    /// Compound file without a separator line.
    #[error("Compound file {} has no separator line", .0.display())]
    MissingSeparator(PathBuf),

    /// Gold file could not be parsed.
    #[error("Malformed gold file {}: {source}", .path.display())]
    MalformedGold {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// Lexicon construction failed.
    #[error("Lexicon error: {0}")]
    Engine(#[from] EngineError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parsing failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for annotator operations.
pub type Result<T> = std::result::Result<T, AnnotatorError>;
