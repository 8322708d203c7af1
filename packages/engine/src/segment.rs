//! Compound and suffix segmentation
//!
//! Splits a word into ordered morpheme segments in four fixed stages, each
//! operating on the output of the previous one:
//!
//! 1. **Initial-compound peeling**: while the last segment starts with a
//!    lexicon compound-initial form, split it into `[prefix, remainder]`
//! 2. **Hyphen splitting**: split the last segment on the orthographic
//!    compound marker, discarding the marker
//! 3. **Suffix peeling**: split one lexicon suffix off the last segment
//! 4. **Dictionary expansion**: replace every segment found in the compound
//!    dictionary with its components
//!
//! Only stage 4 revisits non-final segments.

use crate::config::{COMPOUND_MARKER, MAX_WORD_CHARS};
use crate::lexicon::Lexicon;

/// Split a word into ordered segments.
///
/// An empty word yields no segments. A word that matches nothing yields
/// `[word]`. Pieces keep the casing of the input. A word longer than
/// [`MAX_WORD_CHARS`] is not segmented: it yields a single segment with its
/// compound markers removed.
///
/// # Example
///
/// ```
/// use finnsyll_engine::{segment, Lexicon};
///
/// let lexicon = Lexicon::builder().initial_compound("kala").build().unwrap();
/// assert_eq!(segment("kalakauppa", &lexicon), vec!["kala", "kauppa"]);
/// assert_eq!(segment("taksi-auto", &lexicon), vec!["taksi", "auto"]);
/// ```
pub fn segment(word: &str, lexicon: &Lexicon) -> Vec<String> {
    if word.is_empty() {
        return Vec::new();
    }

    let chars = word.chars().count();
    if chars > MAX_WORD_CHARS {
        tracing::debug!(
            chars,
            max = MAX_WORD_CHARS,
            "Word too long for segmentation"
        );
        let joined = word.replace(COMPOUND_MARKER, "");
        return if joined.is_empty() {
            Vec::new()
        } else {
            vec![joined]
        };
    }

    let mut segments = vec![word.to_string()];
    segments = peel_initial_compounds(segments, lexicon);
    segments = split_hyphens(segments);
    segments = peel_suffix(segments, lexicon);
    segments = expand_dictionary(segments, lexicon);

    tracing::debug!(word = %word, segments = segments.len(), "Segmented word");
    segments
}

/// Stage 1: repeatedly split a compound-initial form off the last segment.
///
/// Every peel strictly shortens the last segment, so the loop is bounded by
/// the word length.
pub fn peel_initial_compounds(mut segments: Vec<String>, lexicon: &Lexicon) -> Vec<String> {
    while let Some(last) = segments.last() {
        let Some(prefix) = lexicon.match_initial_compound(last) else {
            break;
        };
        let (head, tail) = split_at_char(last, prefix.chars().count());
        tracing::trace!(prefix = %head, rest = %tail, "Peeled initial compound");
        segments.pop();
        segments.push(head);
        segments.push(tail);
    }
    segments
}

/// Stage 2: split the last segment on the compound marker.
pub fn split_hyphens(mut segments: Vec<String>) -> Vec<String> {
    if let Some(last) = segments.pop() {
        segments.extend(last.split(COMPOUND_MARKER).map(str::to_string));
    }
    segments
}

/// Stage 3: split one lexicon suffix off the last segment (single pass).
pub fn peel_suffix(mut segments: Vec<String>, lexicon: &Lexicon) -> Vec<String> {
    let Some(last) = segments.last() else {
        return segments;
    };
    let Some(suffix) = lexicon.match_suffix(last) else {
        return segments;
    };
    let stem_len = last.chars().count() - suffix.chars().count();
    let (stem, tail) = split_at_char(last, stem_len);
    tracing::trace!(stem = %stem, suffix = %tail, "Peeled suffix");
    segments.pop();
    segments.push(stem);
    segments.push(tail);
    segments
}

/// Stage 4: expand every dictionary compound in place.
pub fn expand_dictionary(segments: Vec<String>, lexicon: &Lexicon) -> Vec<String> {
    let mut result = Vec::with_capacity(segments.len());
    for seg in segments {
        match lexicon.compound_components(&seg) {
            Some(components) => {
                let mut chars = seg.chars();
                // Re-cut the input text so casing survives expansion
                result.extend(
                    components
                        .iter()
                        .map(|c| chars.by_ref().take(c.chars().count()).collect::<String>()),
                );
            }
            None => result.push(seg),
        }
    }
    result
}

fn split_at_char(s: &str, chars: usize) -> (String, String) {
    let idx = s.char_indices().nth(chars).map_or(s.len(), |(i, _)| i);
    (s[..idx].to_string(), s[idx..].to_string())
}
