//! Lexicon configuration for the annotator.
//!
//! A YAML file names the four lexicon files:
//!
//! ```yaml
//! presyllabified: data/presyllabified.txt
//! initial: data/initial.txt
//! suffix: data/suffix.txt
//! compound: data/compound.txt
//! ```
//!
//! Relative paths resolve against the directory holding the configuration
//! file. Missing keys, and configured paths that do not exist, fall back to
//! the default file names in that directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AnnotatorError, Result};

/// Default exception table file name.
pub const DEFAULT_PRESYLLABIFIED: &str = "presyllabified.txt";

/// Default compound-initial word list file name.
pub const DEFAULT_INITIAL: &str = "initial.txt";

/// Default suffix list file name.
pub const DEFAULT_SUFFIX: &str = "suffix.txt";

/// Default compound dictionary file name.
pub const DEFAULT_COMPOUND: &str = "compound.txt";

/// Maximum size of a single lexicon or gold file in bytes (64 MB).
pub const MAX_LEXICON_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Lexicon file locations as written in the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LexiconConfig {
    #[serde(default)]
    pub presyllabified: Option<PathBuf>,
    #[serde(default)]
    pub initial: Option<PathBuf>,
    #[serde(default)]
    pub suffix: Option<PathBuf>,
    #[serde(default)]
    pub compound: Option<PathBuf>,
}

/// Resolved lexicon file locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconPaths {
    pub presyllabified: PathBuf,
    pub initial: PathBuf,
    pub suffix: PathBuf,
    pub compound: PathBuf,
}

impl LexiconPaths {
    /// Default file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            presyllabified: dir.join(DEFAULT_PRESYLLABIFIED),
            initial: dir.join(DEFAULT_INITIAL),
            suffix: dir.join(DEFAULT_SUFFIX),
            compound: dir.join(DEFAULT_COMPOUND),
        }
    }
}

impl LexiconConfig {
    /// Parse a configuration from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml_ng::from_str(text)?)
    }

    /// Read and parse a configuration file.
    ///
    /// # Errors
    /// `ConfigNotFound` if the file does not exist, `Yaml` if it is malformed.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(AnnotatorError::ConfigNotFound(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&text)?;
        tracing::debug!(path = %path.display(), "Loaded lexicon configuration");
        Ok(config)
    }

    /// Resolve every entry against `base_dir`.
    pub fn resolve(&self, base_dir: &Path) -> LexiconPaths {
        let defaults = LexiconPaths::in_dir(base_dir);
        LexiconPaths {
            presyllabified: resolve_entry(
                self.presyllabified.as_deref(),
                base_dir,
                defaults.presyllabified,
            ),
            initial: resolve_entry(self.initial.as_deref(), base_dir, defaults.initial),
            suffix: resolve_entry(self.suffix.as_deref(), base_dir, defaults.suffix),
            compound: resolve_entry(self.compound.as_deref(), base_dir, defaults.compound),
        }
    }
}

fn resolve_entry(configured: Option<&Path>, base_dir: &Path, default: PathBuf) -> PathBuf {
    let Some(configured) = configured else {
        return default;
    };
    let path = if configured.is_absolute() {
        configured.to_path_buf()
    } else {
        base_dir.join(configured)
    };
    if path.is_file() {
        path
    } else {
        tracing::warn!(
            configured = %path.display(),
            fallback = %default.display(),
            "Configured lexicon file not found, using default"
        );
        default
    }
}

/// Check a file against [`MAX_LEXICON_FILE_SIZE`].
///
/// # Errors
/// `FileTooLarge` if the file exceeds the limit, `Io` if it cannot be read.
pub fn check_file_size(path: &Path) -> Result<()> {
    let size = std::fs::metadata(path)?.len();
    if size > MAX_LEXICON_FILE_SIZE {
        return Err(AnnotatorError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            max: MAX_LEXICON_FILE_SIZE,
        });
    }
    Ok(())
}
