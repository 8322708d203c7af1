//! Pattern rendering
//!
//! Pure formatting over a finished [`Annotation`]. Nothing here mutates the
//! annotation, so rendering the same annotation twice yields identical output.
//!
//! For `nykyennuste` the renderer produces:
//!
//! ```text
//! .´ny.ky.`en.nus.te.
//!     Weight: LLHHL
//!     Stress: PUSUU
//!     Sonority: IIEIE
//! ```

use std::fmt;

use crate::annotation::Annotation;
use crate::config::SYLLABLE_SEPARATOR;
use crate::types::StressPattern;

/// One stress-marked syllable string per stress candidate.
///
/// Each string starts with the separator, and every syllable is followed by
/// it; stressed syllables are preceded by their stress diacritic
/// (`.´ka.la.`).
pub fn render_variants(annotation: &Annotation) -> Vec<String> {
    annotation
        .stresses
        .iter()
        .map(|pattern| render_variant(annotation, pattern))
        .collect()
}

fn render_variant(annotation: &Annotation, pattern: &StressPattern) -> String {
    let mut out = String::new();
    out.push(SYLLABLE_SEPARATOR);
    for (syllable, stress) in annotation.syllables.iter().zip(pattern) {
        if let Some(mark) = stress.mark() {
            out.push(mark);
        }
        out.push_str(syllable);
        out.push(SYLLABLE_SEPARATOR);
    }
    out
}

/// Syllables joined by the separator, without stress marks (`ka.la`).
pub fn render_plain(annotation: &Annotation) -> String {
    let mut buf = [0; 4];
    let separator: &str = SYLLABLE_SEPARATOR.encode_utf8(&mut buf);
    annotation.syllables.join(separator)
}

/// Plain syllabifications used as evaluation predictions.
///
/// Stress variants share one syllabification, so this is the plain
/// rendering alone; a word without syllables predicts nothing.
pub fn predicted_variants(annotation: &Annotation) -> Vec<String> {
    if annotation.syllables.is_empty() {
        return Vec::new();
    }
    vec![render_plain(annotation)]
}

/// Weight code per syllable (`LLHHL`).
pub fn weight_pattern(annotation: &Annotation) -> String {
    annotation.weights.iter().map(|w| w.code()).collect()
}

/// Stress codes per syllable, one string per candidate (`PUSUU`).
pub fn stress_pattern(annotation: &Annotation) -> Vec<String> {
    annotation
        .stresses
        .iter()
        .map(|pattern| pattern.iter().map(|s| s.code()).collect())
        .collect()
}

/// All stress patterns joined by `", "` (`PUSUU, PUUSU`).
pub fn stress_patterns_joined(annotation: &Annotation) -> String {
    stress_pattern(annotation).join(", ")
}

/// Sonority code per syllable (`AEE`).
pub fn sonority_pattern(annotation: &Annotation) -> String {
    annotation.sonorities.iter().map(|s| s.code()).collect()
}

/// Codes of the syllabification rules that fired (`T1 T2`).
pub fn rules_pattern(annotation: &Annotation) -> String {
    annotation
        .rules
        .iter()
        .map(|r| r.code())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Tab-indented weight, stress and sonority summary.
pub fn pattern_summary(annotation: &Annotation) -> String {
    format!(
        "\n\tWeight: {}\n\tStress: {}\n\tSonority: {}\n\t",
        weight_pattern(annotation),
        stress_patterns_joined(annotation),
        sonority_pattern(annotation),
    )
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            render_variants(self).join("\n"),
            pattern_summary(self)
        )
    }
}
