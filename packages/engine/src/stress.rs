//! Weight-sensitive stress assignment
//!
//! The first syllable carries primary stress. After a stressed syllable at
//! position `p`, secondary stress falls on `p + 2`. When `p + 2` is light and
//! `p + 3` is heavy, stress may skip to the heavy syllable instead, and both
//! placements are legal. The final syllable never receives secondary stress.
//!
//! Every legal placement is enumerated as its own candidate, so an
//! unambiguous weight sequence yields exactly one pattern. Enumeration stops
//! after [`MAX_STRESS_CANDIDATES`] patterns.

use crate::config::MAX_STRESS_CANDIDATES;
use crate::types::{Stress, StressCandidates, StressPattern, Weight};

/// Enumerate all legal stress patterns for a weight sequence.
pub fn stress_candidates(weights: &[Weight]) -> StressCandidates {
    let n = weights.len();
    if n == 0 {
        return StressCandidates::empty();
    }

    let mut initial: StressPattern = vec![Stress::Unstressed; n];
    initial[0] = Stress::Primary;

    let mut finished = Vec::new();
    let mut stack = vec![(initial, 0usize)];

    while let Some((pattern, last)) = stack.pop() {
        let next = last + 2;
        if next + 1 >= n {
            finished.push(pattern);
            if finished.len() >= MAX_STRESS_CANDIDATES {
                tracing::warn!(
                    syllables = n,
                    max = MAX_STRESS_CANDIDATES,
                    "Stress candidate limit reached"
                );
                break;
            }
            continue;
        }

        let can_skip = !weights[next].is_heavy() && next + 2 < n && weights[next + 1].is_heavy();
        if can_skip {
            let mut skipped = pattern.clone();
            skipped[next + 1] = Stress::Secondary;
            stack.push((skipped, next + 1));
        }

        let mut binary = pattern;
        binary[next] = Stress::Secondary;
        stack.push((binary, next));
    }

    StressCandidates::from_patterns(finished)
}
