//! Given step definitions
//!
//! Steps that set up the lexicon and the evaluation inputs.

use cucumber::given;

use super::list;
use crate::world::AnnotationWorld;

// =============================================================================
// Lexicon steps
// =============================================================================

#[given("an empty lexicon")]
fn empty_lexicon(world: &mut AnnotationWorld) {
    world.builder = Default::default();
    world.lexicon = None;
}

#[given(expr = "a lexicon with initial compounds {string}")]
fn initial_compounds(world: &mut AnnotationWorld, forms: String) {
    for form in list(&forms) {
        world.builder = std::mem::take(&mut world.builder).initial_compound(&form);
    }
}

#[given(expr = "a lexicon with suffixes {string}")]
fn suffixes(world: &mut AnnotationWorld, forms: String) {
    for form in list(&forms) {
        world.builder = std::mem::take(&mut world.builder).suffix(&form);
    }
}

#[given(expr = "the compound {string}")]
fn compound(world: &mut AnnotationWorld, entry: String) {
    world.builder = std::mem::take(&mut world.builder).compound(&entry);
}

#[given(expr = "the presyllabified form {string}")]
fn presyllabified(world: &mut AnnotationWorld, entry: String) {
    world.builder = std::mem::take(&mut world.builder).presyllabified(&entry);
}

// =============================================================================
// Evaluation steps
// =============================================================================

#[given(expr = "the predictions {string}")]
fn predictions(world: &mut AnnotationWorld, predicted: String) {
    world.predicted = list(&predicted).into_iter().collect();
}

#[given(expr = "the gold set {string}")]
fn gold_set(world: &mut AnnotationWorld, gold: String) {
    world.gold = Some(list(&gold).into_iter().collect());
}

#[given("an empty gold set")]
fn empty_gold_set(world: &mut AnnotationWorld) {
    world.gold = Some(Default::default());
}
