//! Larger inputs to check the matcher stays correct at realistic feature counts.

use bumphole_eval::config::EvalConfig;
use bumphole_eval::evaluator::evaluate_records;
use bumphole_eval::types::{DetectionRecord, FeatureKind};

/// Grid of well separated features, alternating bump and hole.
fn grid(rows: i32, cols: i32, spacing: i32) -> Vec<DetectionRecord> {
    let mut records = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            let kind = if (r + c) % 2 == 0 {
                FeatureKind::Bump
            } else {
                FeatureKind::Hole
            };
            records.push(DetectionRecord::new(r * spacing, c * spacing, 20, kind));
        }
    }
    records
}

#[test]
fn test_large_perfect_grid() {
    let ground_truth = grid(20, 20, 100);
    // Small consistent localisation noise
    let predictions: Vec<DetectionRecord> = ground_truth
        .iter()
        .map(|r| DetectionRecord::new(r.row + 3, r.col + 2, r.diameter - 1, r.kind))
        .collect();

    let evaluation = evaluate_records(&ground_truth, &predictions, &EvalConfig::default());
    let counts = evaluation.counts;

    assert_eq!(counts.bump_as_bump + counts.hole_as_hole, 400);
    assert_eq!(counts.bump_as_hole + counts.hole_as_bump, 0);
    assert_eq!(counts.bump_as_none + counts.hole_as_none, 0);
    assert!(counts.none_as_bump < predictions.len());
    assert!(counts.none_as_hole < predictions.len());
    assert!(evaluation.outcomes.iter().all(|o| o.is_matched()));
    assert!(evaluation.scores.f1 > 0.0);
}

#[test]
fn test_large_grid_all_kinds_swapped() {
    let ground_truth = grid(15, 15, 80);
    let predictions: Vec<DetectionRecord> = ground_truth
        .iter()
        .map(|r| {
            let swapped = match r.kind {
                FeatureKind::Bump => FeatureKind::Hole,
                FeatureKind::Hole => FeatureKind::Bump,
            };
            DetectionRecord::new(r.row, r.col, r.diameter, swapped)
        })
        .collect();

    let evaluation = evaluate_records(&ground_truth, &predictions, &EvalConfig::default());
    assert_eq!(
        evaluation.counts.bump_as_hole + evaluation.counts.hole_as_bump,
        225
    );
    assert_eq!(evaluation.scores.f1, 0.0);
}

#[test]
fn test_large_disjoint_sets() {
    let ground_truth = grid(10, 10, 60);
    let predictions: Vec<DetectionRecord> = grid(10, 10, 60)
        .into_iter()
        .map(|r| DetectionRecord::new(r.row + 5000, r.col, r.diameter, r.kind))
        .collect();

    let evaluation = evaluate_records(&ground_truth, &predictions, &EvalConfig::default());
    assert_eq!(evaluation.counts.bump_as_none + evaluation.counts.hole_as_none, 100);
    assert!(evaluation.counts.false_positives() < 2 * predictions.len());
    assert_eq!(evaluation.scores.f1, 0.0);
}
