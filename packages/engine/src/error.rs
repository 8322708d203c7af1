//! Error types for the finnsyll engine
//!
//! The annotation pipeline itself is total and never returns an error. The
//! variants below cover lexicon construction and the coverage guard.

use thiserror::Error;

/// Main error type for engine operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A compound dictionary entry whose components do not spell its key
    #[error("Compound entry '{key}' does not match its components {components:?}")]
    CompoundMismatch { key: String, components: Vec<String> },

    /// Lexicon exceeds the configured entry limit
    #[error("Lexicon too large: {count} entries (max {max})")]
    LexiconTooLarge { count: usize, max: usize },

    /// The syllables of an annotation do not reconstruct its source text
    #[error("Coverage violation: expected '{expected}', syllables spell '{actual}'")]
    CoverageViolation { expected: String, actual: String },
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
