//! Rule-based syllable splitter
//!
//! Splits one compound-free segment into syllables. The exception table of
//! the lexicon is consulted first; otherwise a deterministic rule cascade
//! places syllable boundaries:
//!
//! - **T1**: a consonant followed by a vowel begins a new syllable, unless no
//!   vowel precedes it (word-initial clusters stay in the onset)
//! - **T2**: a vowel sequence splits between vowels that form neither a long
//!   vowel nor a diphthong
//! - **T3**: the rising diphthongs `ie`, `uo`, `yö` split outside the first
//!   syllable
//!
//! Splitting only ever inserts boundaries, so the syllables always
//! concatenate back to the input.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::lexicon::Lexicon;
use crate::phonology::{
    is_consonant, is_falling_diphthong, is_long_vowel, is_rising_diphthong, is_vowel,
};

/// A syllabification rule that placed at least one boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyllableRule {
    /// Pre-syllabified exception table
    #[serde(rename = "X")]
    Exception,
    /// Consonant-vowel onset boundary
    #[serde(rename = "T1")]
    ConsonantOnset,
    /// Vowel hiatus
    #[serde(rename = "T2")]
    VowelHiatus,
    /// Non-initial rising diphthong split
    #[serde(rename = "T3")]
    RisingDiphthong,
}

impl SyllableRule {
    pub fn code(&self) -> &'static str {
        match self {
            SyllableRule::Exception => "X",
            SyllableRule::ConsonantOnset => "T1",
            SyllableRule::VowelHiatus => "T2",
            SyllableRule::RisingDiphthong => "T3",
        }
    }
}

impl fmt::Display for SyllableRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Result of splitting one segment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Syllabification {
    /// Syllables in order; concatenation equals the segment
    pub syllables: Vec<String>,
    /// Rules that placed boundaries, in order of first application
    pub rules: Vec<SyllableRule>,
}

impl Syllabification {
    /// The whole segment as one syllable, or nothing for an empty segment.
    pub fn whole(segment: &str) -> Self {
        Self {
            syllables: if segment.is_empty() {
                Vec::new()
            } else {
                vec![segment.to_string()]
            },
            rules: Vec::new(),
        }
    }

    fn push_rule(&mut self, rule: SyllableRule) {
        if !self.rules.contains(&rule) {
            self.rules.push(rule);
        }
    }
}

/// Split a segment into syllables.
///
/// Consults the lexicon's exception table before the rule cascade. The
/// result is total: an empty segment yields no syllables and a segment
/// without vowels yields a single syllable.
pub fn split_segment(segment: &str, lexicon: &Lexicon) -> Syllabification {
    if segment.is_empty() {
        return Syllabification::default();
    }

    if let Some(exception) = lexicon.presyllabified(segment) {
        if let Some(syllables) = cut_like(segment, exception) {
            tracing::debug!(segment = %segment, "Using presyllabified exception");
            return Syllabification {
                syllables,
                rules: vec![SyllableRule::Exception],
            };
        }
    }

    split_by_rules(segment)
}

/// Apply the rule cascade without consulting any exception table.
pub fn split_by_rules(segment: &str) -> Syllabification {
    let chars: Vec<char> = segment.chars().collect();
    let n = chars.len();
    let mut result = Syllabification::default();
    if n == 0 {
        return result;
    }

    // boundary[i] means a syllable starts at chars[i]
    let mut boundary = vec![false; n];

    // T1
    let mut seen_vowel = false;
    for i in 0..n {
        if seen_vowel && is_consonant(chars[i]) && i + 1 < n && is_vowel(chars[i + 1]) {
            boundary[i] = true;
            result.push_rule(SyllableRule::ConsonantOnset);
        }
        if is_vowel(chars[i]) {
            seen_vowel = true;
        }
    }

    // T2 and T3 over each maximal vowel run
    let mut i = 0;
    let mut first_run = true;
    while i < n {
        if !is_vowel(chars[i]) {
            i += 1;
            continue;
        }
        let start = i;
        while i < n && is_vowel(chars[i]) {
            i += 1;
        }
        split_vowel_run(&chars, start, i, first_run, &mut boundary, &mut result);
        first_run = false;
    }

    let mut current = String::new();
    for (idx, c) in chars.iter().enumerate() {
        if boundary[idx] && !current.is_empty() {
            result.syllables.push(std::mem::take(&mut current));
        }
        current.push(*c);
    }
    if !current.is_empty() {
        result.syllables.push(current);
    }

    result
}

fn split_vowel_run(
    chars: &[char],
    start: usize,
    end: usize,
    first_run: bool,
    boundary: &mut [bool],
    result: &mut Syllabification,
) {
    let mut j = start;
    while j < end {
        if j + 1 < end {
            let (a, b) = (chars[j], chars[j + 1]);
            let rising = is_rising_diphthong(a, b);
            let nucleus = is_long_vowel(a, b)
                || is_falling_diphthong(a, b)
                || (rising && first_run && j == start);

            if nucleus {
                if j + 2 < end {
                    boundary[j + 2] = true;
                    result.push_rule(SyllableRule::VowelHiatus);
                }
                j += 2;
                continue;
            }

            boundary[j + 1] = true;
            result.push_rule(if rising {
                SyllableRule::RisingDiphthong
            } else {
                SyllableRule::VowelHiatus
            });
        }
        j += 1;
    }
}

/// Cut `segment` into pieces with the same character lengths as `template`.
///
/// Keeps the casing of the input while using the exception's boundaries.
/// Returns `None` if the template does not spell the segment.
fn cut_like(segment: &str, template: &[String]) -> Option<Vec<String>> {
    if template.concat() != segment.to_lowercase() {
        return None;
    }
    let mut chars = segment.chars();
    let pieces = template
        .iter()
        .map(|syll| chars.by_ref().take(syll.chars().count()).collect::<String>())
        .collect::<Vec<_>>();
    if chars.next().is_some() {
        return None;
    }
    Some(pieces)
}
