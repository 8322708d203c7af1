//! Core types for the finnsyll engine

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::MAX_STRESS_CANDIDATES;

/// Weight class of a syllable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    /// Open syllable with a short vowel nucleus (CV, V)
    Light,
    /// Closed syllable or long nucleus (CVC, CVV)
    Heavy,
}

impl Weight {
    /// One-character code used in weight patterns
    pub fn code(&self) -> char {
        match self {
            Weight::Light => 'L',
            Weight::Heavy => 'H',
        }
    }

    pub fn is_heavy(&self) -> bool {
        matches!(self, Weight::Heavy)
    }
}

impl Default for Weight {
    /// Unrecognised syllable shapes are treated as light.
    fn default() -> Self {
        Weight::Light
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Sonority class of a syllable nucleus
///
/// Finnish vowels rank low > mid > high; a syllable is classified by the
/// first vowel of its nucleus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sonority {
    /// a, ä
    Low,
    /// e, o, ö
    Mid,
    /// i, u, y
    High,
    /// No vowel nucleus (digits, abbreviations, stray consonants)
    Consonantal,
}

impl Sonority {
    /// One-character code used in sonority patterns
    pub fn code(&self) -> char {
        match self {
            Sonority::Low => 'A',
            Sonority::Mid => 'E',
            Sonority::High => 'I',
            Sonority::Consonantal => 'C',
        }
    }
}

impl Default for Sonority {
    fn default() -> Self {
        Sonority::Consonantal
    }
}

impl fmt::Display for Sonority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Stress marker carried by one syllable in a stress candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stress {
    Primary,
    Secondary,
    Unstressed,
}

impl Stress {
    /// One-character code used in stress patterns
    pub fn code(&self) -> char {
        match self {
            Stress::Primary => 'P',
            Stress::Secondary => 'S',
            Stress::Unstressed => 'U',
        }
    }

    /// Diacritic written before a stressed syllable, if any
    pub fn mark(&self) -> Option<char> {
        match self {
            Stress::Primary => Some(crate::config::PRIMARY_STRESS_MARK),
            Stress::Secondary => Some(crate::config::SECONDARY_STRESS_MARK),
            Stress::Unstressed => None,
        }
    }
}

impl fmt::Display for Stress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One fully specified stress-marker sequence, aligned with the syllables.
pub type StressPattern = Vec<Stress>;

/// The set of legal stress patterns for an annotation.
///
/// Candidates are kept in a deterministic order (the order in which the rule
/// table enumerated them) and never contain duplicates. The set is never
/// empty: a zero-syllable annotation holds exactly one empty candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StressCandidates(Vec<StressPattern>);

impl StressCandidates {
    /// The candidate set of a zero-syllable annotation.
    pub fn empty() -> Self {
        Self(vec![Vec::new()])
    }

    /// Build a candidate set, dropping duplicates while keeping first-seen order.
    ///
    /// An empty input yields [`StressCandidates::empty`].
    pub fn from_patterns<I>(patterns: I) -> Self
    where
        I: IntoIterator<Item = StressPattern>,
    {
        let mut unique: Vec<StressPattern> = Vec::new();
        for pattern in patterns {
            if !unique.contains(&pattern) {
                unique.push(pattern);
            }
        }
        if unique.is_empty() {
            Self::empty()
        } else {
            Self(unique)
        }
    }

    /// Whether the first candidate carries no stress positions at all.
    ///
    /// Such an annotation contributes nothing to stress composition.
    pub fn is_stressless(&self) -> bool {
        self.0.first().map_or(true, |p| p.is_empty())
    }

    /// Number of candidates
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StressPattern> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[StressPattern] {
        &self.0
    }

    /// Cartesian product with compound demotion.
    ///
    /// Every pair `(left, right)` yields `left ++ [Secondary] ++ right[1..]`:
    /// the right-hand primary stress is demoted so the composed word keeps a
    /// single primary stress on its first syllable. The product is cut off
    /// at [`MAX_STRESS_CANDIDATES`] patterns, keeping left-major order.
    pub fn demoting_product(&self, right: &StressCandidates) -> StressCandidates {
        let total = self.len().saturating_mul(right.len());
        let mut product = Vec::with_capacity(total.min(MAX_STRESS_CANDIDATES));
        'outer: for left in &self.0 {
            for tail in &right.0 {
                if product.len() >= MAX_STRESS_CANDIDATES {
                    tracing::warn!(
                        candidates = total,
                        max = MAX_STRESS_CANDIDATES,
                        "Truncating composed stress candidates"
                    );
                    break 'outer;
                }
                let mut pattern = Vec::with_capacity(left.len() + tail.len());
                pattern.extend_from_slice(left);
                pattern.push(Stress::Secondary);
                pattern.extend_from_slice(tail.get(1..).unwrap_or_default());
                product.push(pattern);
            }
        }
        StressCandidates(product)
    }
}

impl Default for StressCandidates {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a> IntoIterator for &'a StressCandidates {
    type Item = &'a StressPattern;
    type IntoIter = std::slice::Iter<'a, StressPattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Stress::{Primary as P, Secondary as S, Unstressed as U};

    #[test]
    fn test_codes() {
        assert_eq!(Weight::Light.code(), 'L');
        assert_eq!(Weight::Heavy.code(), 'H');
        assert_eq!(Stress::Secondary.code(), 'S');
        assert_eq!(Sonority::Low.code(), 'A');
        assert_eq!(Sonority::Consonantal.code(), 'C');
    }

    #[test]
    fn test_defaults_are_the_fallback_classes() {
        assert_eq!(Weight::default(), Weight::Light);
        assert_eq!(Sonority::default(), Sonority::Consonantal);
    }

    #[test]
    fn test_stress_marks() {
        assert_eq!(P.mark(), Some('´'));
        assert_eq!(S.mark(), Some('`'));
        assert_eq!(U.mark(), None);
    }

    #[test]
    fn test_empty_candidates_are_stressless() {
        let empty = StressCandidates::empty();
        assert_eq!(empty.len(), 1);
        assert!(empty.is_stressless());
        assert!(!empty.is_empty());
    }

    #[test]
    fn test_from_patterns_deduplicates_in_order() {
        let c = StressCandidates::from_patterns(vec![vec![P, U], vec![P, S], vec![P, U]]);
        assert_eq!(c.as_slice(), &[vec![P, U], vec![P, S]]);
    }

    #[test]
    fn test_from_no_patterns_is_empty_candidate() {
        let c = StressCandidates::from_patterns(Vec::new());
        assert_eq!(c, StressCandidates::empty());
    }

    #[test]
    fn test_demoting_product_cardinality_and_shape() {
        let left = StressCandidates::from_patterns(vec![vec![P, U, S, U, U], vec![P, U, U, S, U]]);
        let right = StressCandidates::from_patterns(vec![vec![P, U], vec![P, U, S]]);

        let product = left.demoting_product(&right);

        assert_eq!(product.len(), 4);
        assert_eq!(product.as_slice()[0], vec![P, U, S, U, U, S, U]);
        assert_eq!(product.as_slice()[1], vec![P, U, S, U, U, S, U, S]);
        for pattern in &product {
            assert_eq!(pattern.iter().filter(|s| **s == P).count(), 1);
            assert_eq!(pattern[0], P);
        }
    }

    #[test]
    fn test_demoting_product_is_bounded() {
        let left = StressCandidates::from_patterns((0..64).map(|i| {
            let mut pattern = vec![P];
            pattern.extend(std::iter::repeat(U).take(i + 1));
            pattern
        }));
        let right = left.clone();
        assert_eq!(left.len(), 64);

        let product = left.demoting_product(&right);
        assert_eq!(product.len(), MAX_STRESS_CANDIDATES);
        assert_eq!(product.as_slice()[0], vec![P, U, S, U]);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&StressCandidates::from_patterns(vec![vec![P, U]]))
            .unwrap_or_default();
        assert_eq!(json, r#"[["primary","unstressed"]]"#);
    }
}
