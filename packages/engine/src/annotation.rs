//! Word annotations and their composition
//!
//! An [`Annotation`] covers one segment or a whole composed word: its
//! syllables with aligned weight, sonority and stress information. Segment
//! annotations are folded left to right with [`Annotation::join`], which
//! demotes each joined segment's primary stress to secondary so that a
//! compound keeps a single primary stress on its first syllable.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::lexicon::Lexicon;
use crate::rules::RuleTable;
use crate::syllable::{Syllabification, SyllableRule};
use crate::types::{Sonority, StressCandidates, Weight};

/// Annotation of a segment or a whole word
///
/// Invariants:
/// - `weights`, `sonorities` and every stress candidate have one entry per
///   syllable
/// - the syllables concatenate to `word`
/// - `stresses` is never empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Text covered by this annotation
    pub word: String,
    /// Syllables in order
    pub syllables: Vec<String>,
    /// Weight class per syllable
    pub weights: Vec<Weight>,
    /// Sonority class per syllable
    pub sonorities: Vec<Sonority>,
    /// Candidate stress patterns
    pub stresses: StressCandidates,
    /// Syllabification rules that fired, in order of first application
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<SyllableRule>,
    /// Number of morphological segments composed into this annotation
    #[serde(default)]
    pub segments: usize,
}

impl Annotation {
    /// The identity element of composition: no text, no syllables.
    pub fn empty() -> Self {
        Self {
            word: String::new(),
            syllables: Vec::new(),
            weights: Vec::new(),
            sonorities: Vec::new(),
            stresses: StressCandidates::empty(),
            rules: Vec::new(),
            segments: 0,
        }
    }

    /// Annotate a single compound-free segment.
    ///
    /// A rule table whose syllables do not spell the segment is overruled:
    /// the segment becomes a single syllable.
    pub fn from_segment<R: RuleTable + ?Sized>(
        segment: &str,
        lexicon: &Lexicon,
        rules: &R,
    ) -> Self {
        let mut split = rules.split_segment(segment, lexicon);
        if split.syllables.concat() != segment {
            tracing::error!(
                segment = %segment,
                syllables = ?split.syllables,
                "Syllabification does not cover the segment, keeping it whole"
            );
            split = Syllabification::whole(segment);
        }

        let weights: Vec<Weight> = split
            .syllables
            .iter()
            .map(|s| rules.classify_weight(s))
            .collect();
        let sonorities = split
            .syllables
            .iter()
            .map(|s| rules.classify_sonority(s))
            .collect();
        let stresses = rules.compute_stress_candidates(&weights);

        Self {
            word: segment.to_string(),
            syllables: split.syllables,
            weights,
            sonorities,
            stresses,
            rules: split.rules,
            segments: usize::from(!segment.is_empty()),
        }
    }

    /// Compose two annotations, left then right.
    ///
    /// Text, syllables, weights and sonorities are concatenated. Stress
    /// candidates become the cross product of both sides with the right-hand
    /// primary stress demoted to secondary. A stress-less right side leaves
    /// the left stresses untouched, and a syllable-less left side adopts the
    /// right stresses unchanged.
    pub fn join(mut self, right: Annotation) -> Annotation {
        let left_has_syllables = !self.syllables.is_empty();

        self.word.push_str(&right.word);
        self.syllables.extend(right.syllables);
        self.weights.extend(right.weights);
        self.sonorities.extend(right.sonorities);
        for rule in right.rules {
            if !self.rules.contains(&rule) {
                self.rules.push(rule);
            }
        }
        self.segments += right.segments;

        if right.stresses.is_stressless() {
            return self;
        }
        self.stresses = if left_has_syllables {
            self.stresses.demoting_product(&right.stresses)
        } else {
            right.stresses
        };
        self
    }

    /// Fold segment annotations left to right into one annotation.
    pub fn compose<I>(annotations: I) -> Annotation
    where
        I: IntoIterator<Item = Annotation>,
    {
        annotations
            .into_iter()
            .fold(Annotation::empty(), Annotation::join)
    }

    /// Check that the syllables spell `expected` exactly.
    ///
    /// # Errors
    /// Returns `CoverageViolation` if characters were dropped or duplicated.
    pub fn verify_coverage(&self, expected: &str) -> Result<()> {
        let actual = self.syllables.concat();
        if actual == expected && actual == self.word {
            Ok(())
        } else {
            Err(EngineError::CoverageViolation {
                expected: expected.to_string(),
                actual,
            })
        }
    }

    /// Number of syllables
    pub fn syllable_count(&self) -> usize {
        self.syllables.len()
    }

    /// True when more than one segment was composed.
    pub fn is_compound(&self) -> bool {
        self.segments > 1
    }

    /// True when more than one stress pattern is legal.
    pub fn is_ambiguous(&self) -> bool {
        self.stresses.len() > 1
    }
}

impl Default for Annotation {
    fn default() -> Self {
        Self::empty()
    }
}
