//! Configuration constants for the finnsyll engine
//!
//! Centralized values used throughout the engine for:
//! - Orthographic markers (syllable separator, compound boundary)
//! - Resource limits on lexicons and rendered variants
//!
//! These are compile-time constants. Lexicon file locations are runtime
//! configuration and live in the annotator crate.

/// Separator placed between syllables in rendered syllabifications.
pub const SYLLABLE_SEPARATOR: char = '.';

/// The symbol in Finnish orthography marking compound boundaries.
pub const COMPOUND_MARKER: char = '-';

/// Diacritic placed before a syllable carrying primary stress.
pub const PRIMARY_STRESS_MARK: char = '´';

/// Diacritic placed before a syllable carrying secondary stress.
pub const SECONDARY_STRESS_MARK: char = '`';

/// Maximum number of stress candidates kept per annotation.
///
/// Candidate sets grow multiplicatively under compound composition and with
/// every optional stress placement inside a long segment. Enumeration and
/// composition stop once this many candidates exist.
pub const MAX_STRESS_CANDIDATES: usize = 1024;

/// Maximum number of entries across all lexicon tables.
///
/// Prevents memory exhaustion from runaway lexicon files. The largest
/// compound dictionaries in use hold a few hundred thousand entries.
pub const MAX_LEXICON_ENTRIES: usize = 2_000_000;

/// Maximum word length (in characters) that is segmented at all.
///
/// Longer inputs are syllabified as a single segment with their compound
/// markers removed; they are almost always tokenisation errors (URLs,
/// concatenated text) rather than words.
pub const MAX_WORD_CHARS: usize = 256;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_are_reasonable() {
        assert_ne!(SYLLABLE_SEPARATOR, COMPOUND_MARKER);
        assert_ne!(PRIMARY_STRESS_MARK, SECONDARY_STRESS_MARK);

        assert!(MAX_STRESS_CANDIDATES >= 16, "Should allow typical ambiguity");
        assert!(
            MAX_STRESS_CANDIDATES <= 4096,
            "Should not allow excessive candidates"
        );

        assert!(MAX_LEXICON_ENTRIES >= 100_000, "Should allow real lexicons");

        assert!(MAX_WORD_CHARS >= 64, "Should allow long compounds");
        assert!(MAX_WORD_CHARS <= 4096, "Should limit pathological input");
    }
}
