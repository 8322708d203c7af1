//! Then step definitions
//!
//! Steps that verify annotations, rendered patterns and scores.

use cucumber::then;
use finnsyll_engine::{
    render_plain, render_variants, rules_pattern, sonority_pattern, stress_patterns_joined,
    weight_pattern, Stress,
};

use super::list;
use crate::world::AnnotationWorld;

// =============================================================================
// Annotation steps
// =============================================================================

#[then(expr = "the segments are {string}")]
fn assert_segments(world: &mut AnnotationWorld, expected: String) {
    assert_eq!(world.segments, list(&expected));
}

#[then(expr = "the annotated word is {string}")]
fn assert_word(world: &mut AnnotationWorld, expected: String) {
    assert_eq!(world.annotation().word, expected);
}

#[then(expr = "the syllables are {string}")]
fn assert_syllables(world: &mut AnnotationWorld, expected: String) {
    assert_eq!(render_plain(world.annotation()), expected);
}

#[then(expr = "the stress patterns are {string}")]
fn assert_stress_patterns(world: &mut AnnotationWorld, expected: String) {
    assert_eq!(stress_patterns_joined(world.annotation()), expected);
}

#[then(expr = "the weight pattern is {string}")]
fn assert_weight_pattern(world: &mut AnnotationWorld, expected: String) {
    assert_eq!(weight_pattern(world.annotation()), expected);
}

#[then(expr = "the sonority pattern is {string}")]
fn assert_sonority_pattern(world: &mut AnnotationWorld, expected: String) {
    assert_eq!(sonority_pattern(world.annotation()), expected);
}

#[then(expr = "the rules that fired are {string}")]
fn assert_rules(world: &mut AnnotationWorld, expected: String) {
    assert_eq!(rules_pattern(world.annotation()), expected);
}

#[then(expr = "the rendered variants are {string}")]
fn assert_rendered_variants(world: &mut AnnotationWorld, expected: String) {
    assert_eq!(render_variants(world.annotation()), list(&expected));
}

#[then("every stress pattern has exactly one primary stress on the first syllable")]
fn assert_single_primary(world: &mut AnnotationWorld) {
    let annotation = world.annotation();
    for pattern in &annotation.stresses {
        assert_eq!(pattern.len(), annotation.syllables.len());
        let primaries: Vec<usize> = pattern
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Stress::Primary)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(
            primaries,
            vec![0],
            "Expected a single primary stress on the first syllable, got {:?}",
            pattern
        );
    }
}

// =============================================================================
// Evaluation steps
// =============================================================================

#[then(expr = "the precision is {float}")]
fn assert_precision(world: &mut AnnotationWorld, expected: f64) {
    let actual = world.score().precision;
    assert!(
        (actual - expected).abs() < 1e-9,
        "Expected precision {}, got {}",
        expected,
        actual
    );
}

#[then(expr = "the recall is {float}")]
fn assert_recall(world: &mut AnnotationWorld, expected: f64) {
    let actual = world.score().recall;
    assert!(
        (actual - expected).abs() < 1e-9,
        "Expected recall {}, got {}",
        expected,
        actual
    );
}

#[then(expr = "the verdict is {string}")]
fn assert_verdict(world: &mut AnnotationWorld, expected: String) {
    assert_eq!(world.score().verdict.as_str(), expected);
}
