//! Weight and sonority classification of single syllables
//!
//! Both classifiers are total: a syllable shape outside the known rule set
//! (no vowel nucleus, digits, symbols) falls back to the default class
//! instead of failing.

use crate::phonology::{is_consonant, is_vowel, vowel_sonority};
use crate::types::{Sonority, Weight};

/// Classify a syllable as light or heavy.
///
/// A syllable is heavy when it is closed (ends in a consonant) or when its
/// nucleus holds a long vowel or diphthong. Open syllables with a short
/// vowel are light. Syllables without a vowel classify as
/// [`Weight::default`].
pub fn classify_weight(syllable: &str) -> Weight {
    let chars: Vec<char> = syllable.chars().collect();
    let Some(first_vowel) = chars.iter().position(|c| is_vowel(*c)) else {
        tracing::trace!(syllable = %syllable, "No vowel nucleus, using default weight");
        return Weight::default();
    };

    let nucleus_len = chars[first_vowel..]
        .iter()
        .take_while(|c| is_vowel(**c))
        .count();
    let closed = chars.last().is_some_and(|c| is_consonant(*c));

    if closed || nucleus_len >= 2 {
        Weight::Heavy
    } else {
        Weight::Light
    }
}

/// Classify a syllable by the sonority of the first vowel in its nucleus.
pub fn classify_sonority(syllable: &str) -> Sonority {
    match syllable.chars().find_map(vowel_sonority) {
        Some(sonority) => sonority,
        None => {
            tracing::trace!(syllable = %syllable, "No vowel nucleus, using default sonority");
            Sonority::default()
        }
    }
}
