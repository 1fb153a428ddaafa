//! Detection matching utilities for evaluating predictions against ground truth.

use crate::types::{DetectionRecord, FeatureKind};
use tracing::{debug, warn};

/// Maximum per-axis difference, in pixels, for two records to be the same feature.
pub const MATCH_TOLERANCE_PX: i32 = 25;

/// Whether two records refer to the same physical feature.
///
/// Row, column and diameter must each differ by less than
/// [`MATCH_TOLERANCE_PX`]. Kind is ignored; whether the kind was classified
/// correctly is judged by the confusion matrix.
///
/// # Example
///
/// ```
/// use bumphole_eval::matching::is_match;
/// use bumphole_eval::types::DetectionRecord;
///
/// let marked = DetectionRecord::bump(100, 100, 20);
/// let predicted = DetectionRecord::hole(110, 95, 30);
/// assert!(is_match(&marked, &predicted));
/// ```
pub fn is_match(a: &DetectionRecord, b: &DetectionRecord) -> bool {
    is_match_within(a, b, MATCH_TOLERANCE_PX)
}

/// [`is_match`] with an explicit tolerance in pixels.
///
/// A non-positive tolerance matches nothing.
pub fn is_match_within(a: &DetectionRecord, b: &DetectionRecord, tolerance: i32) -> bool {
    let Ok(tolerance) = u32::try_from(tolerance) else {
        return false;
    };
    a.row.abs_diff(b.row) < tolerance
        && a.col.abs_diff(b.col) < tolerance
        && a.diameter.abs_diff(b.diameter) < tolerance
}

/// What happened to one ground-truth record during matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Paired with the prediction at `prediction` (index into the predictions slice).
    Matched {
        prediction: usize,
        detected_as: FeatureKind,
    },
    /// No prediction was close enough.
    Unmatched,
}

impl MatchOutcome {
    pub fn is_matched(&self) -> bool {
        matches!(self, MatchOutcome::Matched { .. })
    }
}

/// Raw tallies from one greedy matching pass over a single image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    /// One outcome per ground-truth record, in input order.
    pub outcomes: Vec<MatchOutcome>,
    pub bump_as_bump: usize,
    pub bump_as_hole: usize,
    pub hole_as_bump: usize,
    pub hole_as_hole: usize,
    /// Pairwise tally of predicted bumps with no nearby feature, kept below
    /// the number of predictions.
    pub none_as_bump: usize,
    /// Same as `none_as_bump` for predicted holes.
    pub none_as_hole: usize,
}

/// Greedily pair ground-truth records with predictions for a single image.
///
/// Ground truth is the outer loop and predictions the inner loop, both in
/// input order. The first prediction within tolerance of an unconsumed
/// ground-truth record consumes that record and classifies it by the
/// prediction's kind. Consumption is tracked per position, so two identical
/// ground-truth records are consumed independently. Predictions are never
/// consumed and may pair with several ground-truth records.
///
/// Every prediction that fails to match a still-unconsumed ground-truth
/// record bumps the false-positive tally for its kind, and the tally is then
/// reduced modulo the number of predictions.
///
/// # Arguments
///
/// * `ground_truth` - Annotated records for this image
/// * `predictions` - Detector records for this image
/// * `tolerance` - Per-axis match tolerance in pixels
pub fn match_records(
    ground_truth: &[DetectionRecord],
    predictions: &[DetectionRecord],
    tolerance: i32,
) -> MatchResult {
    if ground_truth.is_empty() {
        warn!("no ground truth records; every count will be zero");
    }
    if predictions.is_empty() {
        warn!("no predictions; every ground truth record will be unmatched");
    }

    let mut result = MatchResult::default();
    let modulus = predictions.len();

    // Partner prediction index for each consumed ground-truth record
    let mut consumed: Vec<Option<usize>> = vec![None; ground_truth.len()];

    for (gt_idx, gt) in ground_truth.iter().enumerate() {
        for (pred_idx, pred) in predictions.iter().enumerate() {
            if consumed[gt_idx].is_some() {
                continue;
            }

            if is_match_within(gt, pred, tolerance) {
                let slot = match (gt.kind, pred.kind) {
                    (FeatureKind::Bump, FeatureKind::Bump) => &mut result.bump_as_bump,
                    (FeatureKind::Bump, FeatureKind::Hole) => &mut result.bump_as_hole,
                    (FeatureKind::Hole, FeatureKind::Bump) => &mut result.hole_as_bump,
                    (FeatureKind::Hole, FeatureKind::Hole) => &mut result.hole_as_hole,
                };
                *slot += 1;
                consumed[gt_idx] = Some(pred_idx);
                debug!(gt_idx, pred_idx, truth = %gt.kind, detected = %pred.kind, "matched");
            } else {
                let tally = match pred.kind {
                    FeatureKind::Bump => &mut result.none_as_bump,
                    FeatureKind::Hole => &mut result.none_as_hole,
                };
                *tally = (*tally + 1) % modulus;
            }
        }
    }

    result.outcomes = consumed
        .iter()
        .map(|partner| match partner {
            Some(pred_idx) => MatchOutcome::Matched {
                prediction: *pred_idx,
                detected_as: predictions[*pred_idx].kind,
            },
            None => MatchOutcome::Unmatched,
        })
        .collect();

    result
}

/// Count ground-truth records of each kind as `(bumps, holes)`.
pub fn count_kinds(records: &[DetectionRecord]) -> (usize, usize) {
    records.iter().fold((0, 0), |(bumps, holes), record| match record.kind {
        FeatureKind::Bump => (bumps + 1, holes),
        FeatureKind::Hole => (bumps, holes + 1),
    })
}
