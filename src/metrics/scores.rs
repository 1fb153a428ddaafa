//! Precision, recall and F1 for one image's confusion counts.

use crate::confusion::ConfusionCounts;
use crate::metrics::fbeta::{calculate_f1, calculate_precision, calculate_recall};
use serde::{Deserialize, Serialize};

/// Scores derived from [`ConfusionCounts`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
}

impl Scores {
    /// Score a confusion tally.
    ///
    /// TP is the diagonal of the bump/hole block and FP the none row. FN is
    /// fixed at zero, so features detected as none do not lower recall.
    /// When either `TP + FN` or `TP + FP` is zero all three scores are 0.0;
    /// this does not distinguish "no data" from a genuine zero.
    ///
    /// # Example
    ///
    /// ```
    /// use bumphole_eval::confusion::ConfusionCounts;
    /// use bumphole_eval::metrics::Scores;
    ///
    /// let counts = ConfusionCounts { bump_as_bump: 3, none_as_hole: 1, ..Default::default() };
    /// let scores = Scores::from_counts(&counts);
    /// assert_eq!(scores.precision, 0.75);
    /// assert_eq!(scores.recall, 1.0);
    /// ```
    pub fn from_counts(counts: &ConfusionCounts) -> Self {
        let tp = counts.true_positives();
        let fp = counts.false_positives();
        let fn_ = counts.false_negatives();

        let mut scores = Scores {
            true_positives: tp,
            false_positives: fp,
            false_negatives: fn_,
            ..Default::default()
        };

        if tp + fn_ > 0 && tp + fp > 0 {
            scores.recall = calculate_recall(tp, fn_);
            scores.precision = calculate_precision(tp, fp);
            scores.f1 = calculate_f1(scores.precision, scores.recall);
        }

        scores
    }
}
