//! Annotation pipeline
//!
//! Runs the full pipeline for a word: normalization, segmentation,
//! per-segment syllabification and prosody, and left-to-right composition.
//!
//! # Example
//!
//! ```
//! use finnsyll_engine::{Annotator, Lexicon};
//!
//! let lexicon = Lexicon::builder().initial_compound("kala").build().unwrap();
//! let annotator = Annotator::new(&lexicon);
//!
//! let annotation = annotator.annotate_word("Kalakauppa");
//! assert_eq!(annotation.syllables, vec!["ka", "la", "kaup", "pa"]);
//! assert_eq!(annotator.syllabify("kalat"), "ka.lat");
//! ```

use rayon::prelude::*;
use unicode_normalization::UnicodeNormalization;

use crate::annotation::Annotation;
use crate::config::COMPOUND_MARKER;
use crate::lexicon::Lexicon;
use crate::render::render_plain;
use crate::rules::{FinnishRules, RuleTable};
use crate::segment::segment;

/// Annotates words against a shared, read-only lexicon.
///
/// The annotator holds no mutable state, so one instance can serve any
/// number of threads.
#[derive(Debug, Clone)]
pub struct Annotator<'a, R = FinnishRules> {
    lexicon: &'a Lexicon,
    rules: R,
}

impl<'a> Annotator<'a, FinnishRules> {
    /// Create an annotator with the default Finnish rule table.
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            lexicon,
            rules: FinnishRules,
        }
    }
}

impl<'a, R: RuleTable> Annotator<'a, R> {
    /// Create an annotator with a custom rule table.
    pub fn with_rules(lexicon: &'a Lexicon, rules: R) -> Self {
        Self { lexicon, rules }
    }

    pub fn lexicon(&self) -> &Lexicon {
        self.lexicon
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Annotate one word.
    ///
    /// The word is normalized first (see [`normalize`]). The pipeline is
    /// total: every input, including empty strings and non-words, yields an
    /// annotation whose syllables spell the normalized word without compound
    /// markers.
    pub fn annotate_word(&self, word: &str) -> Annotation {
        let base = normalize(word);
        let segments = segment(&base, self.lexicon);

        let annotation = Annotation::compose(
            segments
                .iter()
                .map(|seg| Annotation::from_segment(seg, self.lexicon, &self.rules)),
        );

        if let Err(e) = annotation.verify_coverage(&base.replace(COMPOUND_MARKER, "")) {
            tracing::error!(word = %base, error = %e, "Annotation does not cover the word");
        }
        tracing::debug!(
            word = %base,
            segments = annotation.segments,
            syllables = annotation.syllable_count(),
            candidates = annotation.stresses.len(),
            "Annotated word"
        );
        annotation
    }

    /// Annotate many words in parallel, keeping input order.
    pub fn annotate_batch<S>(&self, words: &[S]) -> Vec<Annotation>
    where
        S: AsRef<str> + Sync,
    {
        words
            .par_iter()
            .map(|w| self.annotate_word(w.as_ref()))
            .collect()
    }

    /// Plain dotted syllabification of a word, without stress marks.
    pub fn syllabify(&self, word: &str) -> String {
        render_plain(&self.annotate_word(word))
    }
}

/// Annotate a word with the default rule table.
pub fn annotate_word(word: &str, lexicon: &Lexicon) -> Annotation {
    Annotator::new(lexicon).annotate_word(word)
}

/// Base form consumed by the pipeline.
///
/// Composes decomposed diacritics (NFC), lowercases and trims surrounding
/// whitespace. Syllabifications do not preserve capitalization.
pub fn normalize(word: &str) -> String {
    word.trim().nfc().collect::<String>().to_lowercase()
}
