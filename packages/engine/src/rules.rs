//! Pluggable phonotactic rule table
//!
//! Segmentation and composition depend only on the [`RuleTable`] trait, so a
//! new rule version can be swapped in without touching either. The
//! [`FinnishRules`] table is the default.

use crate::lexicon::Lexicon;
use crate::stress::stress_candidates;
use crate::syllable::{split_segment, Syllabification};
use crate::types::{Sonority, StressCandidates, Weight};
use crate::weight::{classify_sonority, classify_weight};

/// Capability interface for syllabification and prosody rules.
///
/// # Contract
///
/// - `split_segment` must return syllables that concatenate exactly to the
///   segment and must be deterministic (one syllabification per segment).
/// - `classify_weight` and `classify_sonority` are total; unknown shapes map
///   to a default class.
/// - `compute_stress_candidates` returns a non-empty set whose patterns all
///   have `weights.len()` entries, with primary stress at index 0 when there
///   is at least one syllable.
///
/// # Example Implementation
///
/// ```
/// use finnsyll_engine::{
///     FinnishRules, Lexicon, RuleTable, Sonority, StressCandidates, Syllabification, Weight,
/// };
///
/// /// Treats every segment as a single syllable.
/// struct WholeSegment;
///
/// impl RuleTable for WholeSegment {
///     fn split_segment(&self, segment: &str, _lexicon: &Lexicon) -> Syllabification {
///         Syllabification {
///             syllables: vec![segment.to_string()],
///             rules: Vec::new(),
///         }
///     }
///     fn classify_weight(&self, syllable: &str) -> Weight {
///         FinnishRules.classify_weight(syllable)
///     }
///     fn classify_sonority(&self, syllable: &str) -> Sonority {
///         FinnishRules.classify_sonority(syllable)
///     }
///     fn compute_stress_candidates(&self, weights: &[Weight]) -> StressCandidates {
///         FinnishRules.compute_stress_candidates(weights)
///     }
/// }
/// ```
pub trait RuleTable: Send + Sync {
    /// Split one compound-free segment into syllables.
    fn split_segment(&self, segment: &str, lexicon: &Lexicon) -> Syllabification;

    /// Weight class of one syllable.
    fn classify_weight(&self, syllable: &str) -> Weight;

    /// Sonority class of one syllable.
    fn classify_sonority(&self, syllable: &str) -> Sonority;

    /// All legal stress patterns for a segment's weight sequence.
    fn compute_stress_candidates(&self, weights: &[Weight]) -> StressCandidates;
}

/// Default Finnish rule table.
#[derive(Debug, Clone, Copy, Default)]
pub struct FinnishRules;

impl RuleTable for FinnishRules {
    fn split_segment(&self, segment: &str, lexicon: &Lexicon) -> Syllabification {
        split_segment(segment, lexicon)
    }

    fn classify_weight(&self, syllable: &str) -> Weight {
        classify_weight(syllable)
    }

    fn classify_sonority(&self, syllable: &str) -> Sonority {
        classify_sonority(syllable)
    }

    fn compute_stress_candidates(&self, weights: &[Weight]) -> StressCandidates {
        stress_candidates(weights)
    }
}

impl<R: RuleTable + ?Sized> RuleTable for &R {
    fn split_segment(&self, segment: &str, lexicon: &Lexicon) -> Syllabification {
        (**self).split_segment(segment, lexicon)
    }

    fn classify_weight(&self, syllable: &str) -> Weight {
        (**self).classify_weight(syllable)
    }

    fn classify_sonority(&self, syllable: &str) -> Sonority {
        (**self).classify_sonority(syllable)
    }

    fn compute_stress_candidates(&self, weights: &[Weight]) -> StressCandidates {
        (**self).compute_stress_candidates(weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Stress;

    #[test]
    fn test_finnish_rules_delegate() {
        let rules = FinnishRules;
        let lexicon = Lexicon::empty();

        let split = rules.split_segment("kalat", &lexicon);
        assert_eq!(split.syllables, vec!["ka", "lat"]);
        assert_eq!(rules.classify_weight("lat"), Weight::Heavy);
        assert_eq!(rules.classify_sonority("lat"), Sonority::Low);
        assert_eq!(
            rules
                .compute_stress_candidates(&[Weight::Light, Weight::Heavy])
                .as_slice(),
            &[vec![Stress::Primary, Stress::Unstressed]]
        );
    }

    #[test]
    fn test_rule_table_as_trait_object() {
        let rules: Box<dyn RuleTable> = Box::new(FinnishRules);
        assert_eq!(rules.classify_weight("ka"), Weight::Light);
    }
}
