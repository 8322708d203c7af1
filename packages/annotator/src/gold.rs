//! Gold file loading.
//!
//! A gold file is a YAML list of words with their accepted
//! syllabifications. Records without `gold` are unverified:
//!
//! ```yaml
//! - word: kalakauppa
//!   gold: [ka.la.kaup.pa]
//! - word: taksi-auto
//!   gold: [tak.si.au.to]
//! - word: vaikuttaa
//! ```

use std::path::Path;

use finnsyll_engine::GoldRecord;

use crate::config::check_file_size;
use crate::error::{AnnotatorError, Result};

/// Parse gold records from YAML text.
pub fn parse_gold(text: &str) -> std::result::Result<Vec<GoldRecord>, serde_yaml_ng::Error> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yaml_ng::from_str(text)
}

/// Read and parse a gold file.
///
/// # Errors
/// * `Io` - the file cannot be read
/// * `FileTooLarge` - the file exceeds the size limit
/// * `MalformedGold` - the YAML is not a list of gold records
pub fn load_gold_file(path: &Path) -> Result<Vec<GoldRecord>> {
    check_file_size(path)?;
    let text = std::fs::read_to_string(path)?;
    let records = parse_gold(&text).map_err(|source| AnnotatorError::MalformedGold {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), records = records.len(), "Loaded gold file");
    Ok(records)
}
