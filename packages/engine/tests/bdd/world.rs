//! World struct for Cucumber BDD tests
//!
//! Contains the test state that persists across steps in a scenario.

use cucumber::World;
use finnsyll_engine::{
    predicted_variants, score, segment, Annotation, Annotator, Lexicon, LexiconBuilder, Score,
};
use std::collections::BTreeSet;
use std::fmt;

/// Test world that holds state across steps in a Cucumber scenario.
#[derive(World, Default)]
pub struct AnnotationWorld {
    /// Lexicon entries collected by Given steps
    pub builder: LexiconBuilder,
    /// Lexicon built on the first When step
    pub lexicon: Option<Lexicon>,
    /// Segments of the last annotated word
    pub segments: Vec<String>,
    /// Last annotation
    pub annotation: Option<Annotation>,
    /// Predicted syllabifications to score
    pub predicted: BTreeSet<String>,
    /// Gold syllabifications, `None` when not supplied
    pub gold: Option<BTreeSet<String>>,
    /// Last score
    pub score: Option<Score>,
}

impl fmt::Debug for AnnotationWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnnotationWorld")
            .field("segments", &self.segments)
            .field("annotation", &self.annotation)
            .field("predicted", &self.predicted)
            .field("gold", &self.gold)
            .field("score", &self.score)
            .finish()
    }
}

impl AnnotationWorld {
    /// Build the lexicon from the collected entries.
    pub fn lexicon(&mut self) -> &Lexicon {
        if self.lexicon.is_none() {
            let builder = std::mem::take(&mut self.builder);
            let lexicon = builder
                .build()
                .unwrap_or_else(|e| panic!("Failed to build lexicon: {}", e));
            self.lexicon = Some(lexicon);
        }
        self.lexicon.as_ref().expect("lexicon was just built")
    }

    /// Segment and annotate a word against the scenario lexicon
    pub fn annotate(&mut self, word: &str) {
        let lexicon = self.lexicon().clone();
        let base = finnsyll_engine::normalize(word);
        self.segments = segment(&base, &lexicon);
        self.annotation = Some(Annotator::new(&lexicon).annotate_word(word));
    }

    /// Annotate a word and score its predictions against the gold set
    pub fn evaluate(&mut self, word: &str) {
        self.annotate(word);
        self.predicted = predicted_variants(self.annotation()).into_iter().collect();
        self.score_predictions();
    }

    pub fn score_predictions(&mut self) {
        self.score = Some(score(&self.predicted, self.gold.as_ref()));
    }

    pub fn annotation(&self) -> &Annotation {
        self.annotation
            .as_ref()
            .expect("No word has been annotated in this scenario")
    }

    pub fn score(&self) -> &Score {
        self.score
            .as_ref()
            .expect("No predictions have been scored in this scenario")
    }
}
