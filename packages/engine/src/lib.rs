//! Finnsyll Engine
//!
//! A rule-based annotator for Finnish orthographic words.
//! This library provides functionality for:
//! - Segmenting words into compound constituents and suffixes using a lexicon
//! - Splitting segments into syllables with the T-rules and an exception table
//! - Classifying syllable weight and sonority
//! - Enumerating legal stress patterns, with compound stress demotion
//! - Rendering annotations and scoring them against gold syllabifications
//!
//! # Example
//!
//! ```
//! use finnsyll_engine::{render_variants, Annotator, Lexicon};
//!
//! let lexicon = Lexicon::builder()
//!     .initial_compound("kala")
//!     .build()
//!     .unwrap();
//! let annotator = Annotator::new(&lexicon);
//!
//! let annotation = annotator.annotate_word("kalakauppa");
//! assert_eq!(render_variants(&annotation), vec![".´ka.la.`kaup.pa."]);
//! ```

pub mod annotation;
pub mod config;
pub mod engine;
pub mod error;
pub mod evaluate;
pub mod lexicon;
pub mod phonology;
pub mod render;
pub mod rules;
pub mod segment;
pub mod stress;
pub mod syllable;
pub mod types;
pub mod weight;

// Re-export commonly used items
pub use annotation::Annotation;
pub use engine::{annotate_word, normalize, Annotator};
pub use error::{EngineError, Result};
pub use evaluate::{evaluate_record, score, Evaluation, GoldRecord, Score, Summary, Verdict};
pub use lexicon::{Lexicon, LexiconBuilder};
pub use render::{
    pattern_summary, predicted_variants, render_plain, render_variants, rules_pattern,
    sonority_pattern, stress_pattern, stress_patterns_joined, weight_pattern,
};
pub use rules::{FinnishRules, RuleTable};
pub use segment::segment;
pub use stress::stress_candidates;
pub use syllable::{split_segment, Syllabification, SyllableRule};
pub use types::{Sonority, Stress, StressCandidates, StressPattern, Weight};
pub use weight::{classify_sonority, classify_weight};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }

    #[test]
    fn test_reexports() {
        let _weight = Weight::Heavy;
        let _stress = Stress::Secondary;
        let _verdict = Verdict::Unverified;
        let _lexicon = Lexicon::empty();
    }
}
