//! Lexicon file loading.
//!
//! Three of the lexicon files are plain word lists, one entry per line. The
//! compound dictionary starts with a separator line, and every following
//! line is a compound with its boundaries marked by that separator:
//!
//! ```text
//! -
//! rauta-tie
//! lento-kone
//! ```
//!
//! A missing lexicon file is not an error: it is logged and read as empty.

use std::path::Path;

use finnsyll_engine::Lexicon;

use crate::config::{check_file_size, LexiconPaths};
use crate::error::{AnnotatorError, Result};

/// A compound dictionary entry: joined form and its components
pub type CompoundEntry = (String, Vec<String>);

/// Parse a word list: trimmed, lowercased, blank lines skipped.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Parse a compound dictionary.
///
/// Returns `None` when the text has no separator line. Entries are
/// lowercased; the key is the entry with its separators removed.
///
/// # Examples
/// ```
/// use finnsyll_annotator::loader::parse_compound_file;
///
/// let entries = parse_compound_file("-\nRauta-tie\n").unwrap();
/// assert_eq!(entries, vec![("rautatie".to_string(), vec!["rauta".to_string(), "tie".to_string()])]);
/// ```
pub fn parse_compound_file(text: &str) -> Option<Vec<CompoundEntry>> {
    let mut lines = text.lines();
    let separator = lines.next()?.trim_end_matches('\r');
    if separator.is_empty() {
        return None;
    }

    let entries = lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let entry = line.to_lowercase();
            let components: Vec<String> = entry.split(separator).map(str::to_string).collect();
            (entry.replace(separator, ""), components)
        })
        .collect();
    Some(entries)
}

/// Read a lexicon file, treating a missing file as empty.
fn read_optional(path: &Path) -> Result<Option<String>> {
    if !path.is_file() {
        tracing::warn!(path = %path.display(), "Lexicon file not found, using empty list");
        return Ok(None);
    }
    check_file_size(path)?;
    Ok(Some(std::fs::read_to_string(path)?))
}

fn load_word_list(path: &Path) -> Result<Vec<String>> {
    Ok(read_optional(path)?
        .map(|text| parse_word_list(&text))
        .unwrap_or_default())
}

fn load_compounds(path: &Path) -> Result<Vec<CompoundEntry>> {
    match read_optional(path)? {
        None => Ok(Vec::new()),
        Some(text) if text.trim().is_empty() => Ok(Vec::new()),
        Some(text) => parse_compound_file(&text)
            .ok_or_else(|| AnnotatorError::MissingSeparator(path.to_path_buf())),
    }
}

/// Load all four lexicon files and build a [`Lexicon`].
///
/// # Errors
/// * `FileTooLarge` - a file exceeds the size limit
/// * `MissingSeparator` - the compound file has no separator line
/// * `Engine` - a compound entry does not spell its key, or too many entries
pub fn load_lexicon(paths: &LexiconPaths) -> Result<Lexicon> {
    let presyllabified = load_word_list(&paths.presyllabified)?;
    let initial = load_word_list(&paths.initial)?;
    let suffixes = load_word_list(&paths.suffix)?;
    let compounds = load_compounds(&paths.compound)?;

    tracing::debug!(
        presyllabified = presyllabified.len(),
        initial = initial.len(),
        suffixes = suffixes.len(),
        compounds = compounds.len(),
        "Read lexicon files"
    );

    Ok(Lexicon::new(initial, suffixes, presyllabified, compounds)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn test_parse_word_list() {
        assert_eq!(
            parse_word_list("Kala\n\n  maa \r\nkauppa"),
            vec!["kala", "maa", "kauppa"]
        );
        assert!(parse_word_list("").is_empty());
    }

    #[test]
    fn test_parse_compound_file_with_custom_separator() {
        let entries = parse_compound_file("+\nlento+kone\nmaa+ilma\n").unwrap();
        assert_eq!(
            entries,
            vec![
                ("lentokone".to_string(), vec!["lento".to_string(), "kone".to_string()]),
                ("maailma".to_string(), vec!["maa".to_string(), "ilma".to_string()]),
            ]
        );
    }

    #[test]
    fn test_parse_compound_file_without_separator() {
        assert!(parse_compound_file("").is_none());
        assert!(parse_compound_file("\nrauta-tie").is_none());
    }

    #[test]
    fn test_load_lexicon_from_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("initial.txt"), "kala\n").unwrap();
        fs::write(dir.path().join("suffix.txt"), "kin\n").unwrap();
        fs::write(dir.path().join("compound.txt"), "-\nrauta-tie\n").unwrap();
        fs::write(dir.path().join("presyllabified.txt"), "ka.me.ra\n").unwrap();

        let lexicon = load_lexicon(&LexiconPaths::in_dir(dir.path())).unwrap();
        assert_eq!(lexicon.match_initial_compound("kalakauppa"), Some("kala"));
        assert_eq!(lexicon.match_suffix("talokin"), Some("kin"));
        assert!(lexicon.compound_components("rautatie").is_some());
        assert!(lexicon.presyllabified("kamera").is_some());
    }

    #[test]
    fn test_missing_files_give_empty_lexicon() {
        let dir = tempfile::tempdir().unwrap();
        let lexicon = load_lexicon(&LexiconPaths::in_dir(dir.path())).unwrap();
        assert!(lexicon.is_empty());
    }

    #[test]
    fn test_mismatched_compound_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("compound.txt"), "-\nrauta - tie\n").unwrap();
        let err = load_lexicon(&LexiconPaths::in_dir(dir.path()));
        assert!(matches!(err, Err(AnnotatorError::Engine(_))));
    }

    #[test]
    fn test_compound_file_without_separator_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("compound.txt"), "\nrauta-tie\n").unwrap();
        let err = load_lexicon(&LexiconPaths::in_dir(dir.path()));
        assert!(matches!(err, Err(AnnotatorError::MissingSeparator(_))));
    }
}
