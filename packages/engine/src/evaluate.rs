//! Evaluation against hand-verified gold syllabifications
//!
//! Scores predicted syllabifications against the accepted gold set of a
//! word with precision and recall, and reduces the comparison to a
//! tri-state verdict:
//!
//! - **Gold**: predictions and gold are identical (perfect precision and
//!   perfect recall); partial overlap is never credited
//! - **NotGold**: a gold set was supplied and differs from the predictions
//! - **Unverified**: no gold set has been supplied yet
//!
//! Division by zero is handled by policy: an empty prediction set has
//! precision `0.0` and an empty gold set has recall `0.0`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::engine::Annotator;
use crate::render::predicted_variants;
use crate::rules::RuleTable;

/// Tri-state correctness verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Predictions match the gold set exactly
    Gold,
    /// Predictions differ from the gold set
    NotGold,
    /// No gold set supplied
    Unverified,
}

impl Verdict {
    /// `Some(true)` / `Some(false)` for verified words, `None` otherwise.
    pub fn is_gold(&self) -> Option<bool> {
        match self {
            Verdict::Gold => Some(true),
            Verdict::NotGold => Some(false),
            Verdict::Unverified => None,
        }
    }

    /// CSS-style class name used by review tooling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Gold => "good",
            Verdict::NotGold => "bad",
            Verdict::Unverified => "unverified",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Precision, recall and verdict for one word
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub precision: f64,
    pub recall: f64,
    pub verdict: Verdict,
}

impl Score {
    /// `"P / R"` with both values rounded to two decimals.
    pub fn p_r(&self) -> String {
        format!("{} / {}", round_to(self.precision, 2), round_to(self.recall, 2))
    }
}

/// Score predicted syllabifications against a gold set.
///
/// `gold` is `None` when the word has not been hand-verified; the verdict is
/// then [`Verdict::Unverified`]. An empty supplied gold set is a verified
/// word with no accepted syllabification and can never be gold.
pub fn score(predicted: &BTreeSet<String>, gold: Option<&BTreeSet<String>>) -> Score {
    let empty = BTreeSet::new();
    let gold_set = gold.unwrap_or(&empty);
    let hits = predicted.intersection(gold_set).count() as f64;

    let precision = ratio(hits, predicted.len());
    let recall = ratio(hits, gold_set.len());

    let verdict = match gold {
        None => Verdict::Unverified,
        Some(g) if !g.is_empty() && g == predicted => Verdict::Gold,
        Some(_) => Verdict::NotGold,
    };

    Score {
        precision,
        recall,
        verdict,
    }
}

fn ratio(hits: f64, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        hits / total as f64
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// A word with its optional hand-verified syllabifications
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldRecord {
    /// Orthographic word form
    pub word: String,
    /// Accepted syllabifications, `None` if not yet verified
    #[serde(default)]
    pub gold: Option<BTreeSet<String>>,
}

impl GoldRecord {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            gold: None,
        }
    }

    pub fn with_gold<I, S>(mut self, gold: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.gold = Some(gold.into_iter().map(Into::into).collect());
        self
    }
}

/// Outcome of evaluating one gold record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub word: String,
    pub predicted: BTreeSet<String>,
    pub score: Score,
}

/// Annotate a record's word and score its predictions against the gold set.
pub fn evaluate_record<R: RuleTable>(
    annotator: &Annotator<'_, R>,
    record: &GoldRecord,
) -> Evaluation {
    let annotation = annotator.annotate_word(&record.word);
    let predicted: BTreeSet<String> = predicted_variants(&annotation).into_iter().collect();
    let score = score(&predicted, record.gold.as_ref());
    tracing::trace!(word = %record.word, verdict = %score.verdict, "Evaluated record");

    Evaluation {
        word: record.word.clone(),
        predicted,
        score,
    }
}

/// Corpus-level aggregate over many scores
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Summary {
    /// All scored words
    pub total: usize,
    /// Words with a supplied gold set
    pub verified: usize,
    pub gold: usize,
    pub not_gold: usize,
    pub unverified: usize,
    /// `gold / verified` as a percentage, two decimals
    pub accuracy: f64,
    /// Mean precision over verified words, four decimals
    pub mean_precision: f64,
    /// Mean recall over verified words, four decimals
    pub mean_recall: f64,
}

impl Summary {
    /// Aggregate scores; unverified words count toward `total` only.
    ///
    /// Each word's precision and recall are rounded to two decimals before
    /// they are averaged.
    pub fn from_scores<'a, I>(scores: I) -> Self
    where
        I: IntoIterator<Item = &'a Score>,
    {
        let mut summary = Summary::default();
        let mut precision_sum = 0.0;
        let mut recall_sum = 0.0;

        for s in scores {
            summary.total += 1;
            match s.verdict {
                Verdict::Gold => summary.gold += 1,
                Verdict::NotGold => summary.not_gold += 1,
                Verdict::Unverified => {
                    summary.unverified += 1;
                    continue;
                }
            }
            precision_sum += round_to(s.precision, 2);
            recall_sum += round_to(s.recall, 2);
        }

        summary.verified = summary.gold + summary.not_gold;
        if summary.verified > 0 {
            let verified = summary.verified as f64;
            summary.accuracy = round_to(summary.gold as f64 / verified * 100.0, 2);
            summary.mean_precision = round_to(precision_sum / verified, 4);
            summary.mean_recall = round_to(recall_sum / verified, 4);
        }

        tracing::debug!(
            total = summary.total,
            verified = summary.verified,
            gold = summary.gold,
            "Evaluation summary"
        );
        summary
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} correctly syllabified, {}% accuracy, P / R: {} / {}",
            self.gold, self.verified, self.accuracy, self.mean_precision, self.mean_recall
        )
    }
}
