//! Integration tests for the complete evaluation pipeline.

use bumphole_eval::codec::{parse_ground_truth, write_ground_truth};
use bumphole_eval::config::{EvalConfig, ImageJob};
use bumphole_eval::evaluator::{evaluate, evaluate_image, evaluate_records};
use bumphole_eval::report::{confusion_matrix_to_string, format_report};
use bumphole_eval::types::DetectionRecord;
use std::fs;
use tempfile::TempDir;

fn write_predictions(dir: &TempDir, name: &str, rows: &[&str]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut body = String::from("row,col,diameter,kind\n");
    for row in rows {
        body.push_str(row);
        body.push('\n');
    }
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_single_close_bump() {
    let dir = TempDir::new().unwrap();
    let predictions = write_predictions(&dir, "alg.csv", &["12,11,19,1"]);

    let ground_truth = vec![DetectionRecord::bump(10, 10, 20)];
    let evaluation = evaluate(&ground_truth, &predictions).unwrap();

    assert_eq!(evaluation.scores.true_positives, 1);
    assert_eq!(evaluation.scores.false_positives, 0);
    assert_eq!(evaluation.scores.recall, 1.0);
    assert_eq!(evaluation.scores.precision, 1.0);
    assert_eq!(evaluation.scores.f1, 1.0);
}

#[test]
fn test_single_far_bump() {
    let dir = TempDir::new().unwrap();
    let predictions = write_predictions(&dir, "alg.csv", &["500,500,20,1"]);

    let ground_truth = vec![DetectionRecord::bump(10, 10, 20)];
    let evaluation = evaluate(&ground_truth, &predictions).unwrap();

    assert_eq!(evaluation.counts.bump_as_none, 1);
    // One non-matching pair, reduced modulo one prediction
    assert_eq!(evaluation.counts.none_as_bump, 0);
    assert_eq!(evaluation.scores.true_positives, 0);
    assert_eq!(evaluation.scores.recall, 0.0);
    assert_eq!(evaluation.scores.precision, 0.0);
    assert_eq!(evaluation.scores.f1, 0.0);
}

#[test]
fn test_empty_ground_truth() {
    let predictions = vec![DetectionRecord::hole(1, 1, 1)];
    let evaluation = evaluate_records(&[], &predictions, &EvalConfig::default());

    assert_eq!(evaluation.counts, Default::default());
    assert_eq!(evaluation.scores.f1, 0.0);
    assert_eq!(evaluation.scores.precision, 0.0);
    assert_eq!(evaluation.scores.recall, 0.0);
    assert!(evaluation.outcomes.is_empty());
}

#[test]
fn test_mixed_image() {
    // Two bumps and two holes marked; the detector finds one of each
    // correctly, confuses one hole for a bump and misses a bump.
    let ground_truth = vec![
        DetectionRecord::bump(50, 50, 20),
        DetectionRecord::hole(150, 60, 24),
        DetectionRecord::hole(300, 300, 30),
        DetectionRecord::bump(450, 80, 18),
    ];
    let predictions = vec![
        DetectionRecord::bump(52, 48, 22),
        DetectionRecord::hole(148, 63, 20),
        DetectionRecord::bump(305, 296, 28),
    ];

    let evaluation = evaluate_records(&ground_truth, &predictions, &EvalConfig::default());
    let counts = evaluation.counts;

    assert_eq!(counts.bump_as_bump, 1);
    assert_eq!(counts.hole_as_hole, 1);
    assert_eq!(counts.hole_as_bump, 1);
    assert_eq!(counts.bump_as_hole, 0);
    assert_eq!(counts.bump_as_none, 1);
    assert_eq!(counts.hole_as_none, 0);
    assert!(counts.none_as_bump < predictions.len());
    assert!(counts.none_as_hole < predictions.len());
    assert!(evaluation.scores.f1 > 0.0 && evaluation.scores.f1 <= 1.0);
}

#[test]
fn test_evaluate_image_writes_both_files() {
    let dir = TempDir::new().unwrap();
    let predictions = write_predictions(&dir, "alg.csv", &["210,30,20,2", "12,11,19,1", ""]);

    let mut job = ImageJob::new("SAM1_sub1", &predictions);
    job.ground_truth_out = Some(dir.path().join("gt.csv"));
    job.confusion_matrix_out = Some(dir.path().join("cm.csv"));

    let ground_truth = vec![
        DetectionRecord::hole(200, 30, 20),
        DetectionRecord::bump(10, 10, 20),
    ];
    let evaluation = evaluate_image(&job, 1, &ground_truth, &EvalConfig::default()).unwrap();

    let written = parse_ground_truth(dir.path().join("gt.csv")).unwrap();
    assert_eq!(
        written,
        vec![DetectionRecord::bump(10, 10, 20), DetectionRecord::hole(200, 30, 20)]
    );

    let matrix = fs::read_to_string(dir.path().join("cm.csv")).unwrap();
    assert_eq!(matrix, confusion_matrix_to_string(&evaluation.counts));
    assert!(matrix.lines().last().unwrap().ends_with(",N/A"));
}

#[test]
fn test_round_trip_then_evaluate_against_self() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gt.csv");

    let ground_truth = vec![
        DetectionRecord::bump(400, 10, 20),
        DetectionRecord::hole(20, 200, 25),
        DetectionRecord::bump(220, 220, 30),
    ];
    write_ground_truth(&path, &ground_truth).unwrap();

    // The written file doubles as a predictions file
    let evaluation = evaluate(&ground_truth, &path).unwrap();
    assert_eq!(evaluation.counts.bump_as_bump, 2);
    assert_eq!(evaluation.counts.hole_as_hole, 1);
    assert_eq!(evaluation.counts.bump_as_none, 0);
    assert_eq!(evaluation.counts.hole_as_none, 0);
    assert!(evaluation.outcomes.iter().all(|o| o.is_matched()));
}

#[test]
fn test_report_mentions_every_row() {
    let evaluation = evaluate_records(
        &[DetectionRecord::bump(10, 10, 20)],
        &[DetectionRecord::hole(10, 10, 20)],
        &EvalConfig::default(),
    );
    let report = format_report(&evaluation.counts, &evaluation.scores);

    assert!(report.contains("First row..."));
    assert!(report.contains("Second row..."));
    assert!(report.contains("Third row..."));
    assert!(report.contains("Truly a bump but detected as a hole: 1"));
    assert!(report.contains("Recall: 0.0000"));
}
