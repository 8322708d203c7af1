//! When step definitions
//!
//! Steps that run the annotation pipeline or the evaluator.

use cucumber::when;

use crate::world::AnnotationWorld;

#[when(expr = "the word {string} is annotated")]
fn annotate_word(world: &mut AnnotationWorld, word: String) {
    world.annotate(&word);
}

#[when(expr = "the word {string} is evaluated")]
fn evaluate_word(world: &mut AnnotationWorld, word: String) {
    world.evaluate(&word);
}

#[when("the predictions are scored")]
fn score_predictions(world: &mut AnnotationWorld) {
    world.score_predictions();
}
