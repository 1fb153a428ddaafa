//! Per-image evaluation of detector predictions against annotated ground truth.

use crate::codec::{parse_predictions, write_ground_truth};
use crate::config::{EvalConfig, ImageJob};
use crate::confusion::ConfusionCounts;
use crate::error::Result;
use crate::matching::{match_records, MatchOutcome};
use crate::metrics::Scores;
use crate::report::write_confusion_matrix;
use crate::types::DetectionRecord;
use std::path::Path;
use tracing::{info, instrument};

/// Everything computed for one image.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub counts: ConfusionCounts,
    pub scores: Scores,
    /// One outcome per ground-truth record, in the order they were given.
    pub outcomes: Vec<MatchOutcome>,
}

/// Evaluate annotated ground truth against a predictions CSV file.
///
/// Uses the default match tolerance.
///
/// # Errors
///
/// Returns an error if the predictions file cannot be read or parsed.
///
/// # Example
///
/// ```no_run
/// use bumphole_eval::evaluator::evaluate;
/// use bumphole_eval::types::DetectionRecord;
///
/// let ground_truth = vec![DetectionRecord::bump(10, 10, 20)];
/// let evaluation = evaluate(&ground_truth, "SAM1_sub2_alg.csv").unwrap();
/// println!("F1: {:.4}", evaluation.scores.f1);
/// ```
pub fn evaluate<P: AsRef<Path>>(
    ground_truth: &[DetectionRecord],
    predictions_path: P,
) -> Result<Evaluation> {
    let predictions = parse_predictions(predictions_path)?;
    Ok(evaluate_records(
        ground_truth,
        &predictions,
        &EvalConfig::default(),
    ))
}

/// Evaluate ground truth against predictions already in memory.
///
/// # Example
///
/// ```
/// use bumphole_eval::config::EvalConfig;
/// use bumphole_eval::evaluator::evaluate_records;
/// use bumphole_eval::types::DetectionRecord;
///
/// let ground_truth = vec![DetectionRecord::bump(10, 10, 20)];
/// let predictions = vec![DetectionRecord::bump(12, 11, 19)];
/// let evaluation = evaluate_records(&ground_truth, &predictions, &EvalConfig::default());
/// assert_eq!(evaluation.scores.f1, 1.0);
/// ```
pub fn evaluate_records(
    ground_truth: &[DetectionRecord],
    predictions: &[DetectionRecord],
    config: &EvalConfig,
) -> Evaluation {
    let result = match_records(ground_truth, predictions, config.match_tolerance_px);
    let counts = ConfusionCounts::from_match(&result, ground_truth);
    let scores = Scores::from_counts(&counts);

    info!(
        ground_truth = ground_truth.len(),
        predictions = predictions.len(),
        tp = scores.true_positives,
        fp = scores.false_positives,
        f1 = scores.f1,
        "evaluated image"
    );

    Evaluation {
        counts,
        scores,
        outcomes: result.outcomes,
    }
}

/// Run the full per-image flow: save the ground truth, evaluate it against
/// the job's predictions and save the confusion matrix.
///
/// `number` is the 1-based position of the image in its session and picks
/// the default output file names.
///
/// # Errors
///
/// Returns an error if any file cannot be read, parsed or written. Nothing
/// is retried.
#[instrument(skip(ground_truth, config), fields(image = %job.name))]
pub fn evaluate_image(
    job: &ImageJob,
    number: usize,
    ground_truth: &[DetectionRecord],
    config: &EvalConfig,
) -> Result<Evaluation> {
    write_ground_truth(job.ground_truth_path(number), ground_truth)?;

    let predictions = parse_predictions(&job.predictions)?;
    let evaluation = evaluate_records(ground_truth, &predictions, config);

    write_confusion_matrix(job.confusion_matrix_path(number), &evaluation.counts)?;

    Ok(evaluation)
}
