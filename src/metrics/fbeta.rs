//! Precision, recall and F-beta primitives.
//!
//! These work on plain counts and return 0.0 instead of dividing by zero.

/// Precision = TP / (TP + FP)
///
/// # Examples
///
/// ```
/// # use bumphole_eval::metrics::fbeta::calculate_precision;
/// assert_eq!(calculate_precision(3, 1), 0.75);
/// assert_eq!(calculate_precision(0, 0), 0.0);
/// ```
#[must_use]
pub fn calculate_precision(tp: usize, fp: usize) -> f64 {
    ratio(tp, tp + fp)
}

/// Recall = TP / (TP + FN)
///
/// # Examples
///
/// ```
/// # use bumphole_eval::metrics::fbeta::calculate_recall;
/// assert_eq!(calculate_recall(4, 0), 1.0);
/// assert_eq!(calculate_recall(1, 3), 0.25);
/// ```
#[must_use]
pub fn calculate_recall(tp: usize, fn_: usize) -> f64 {
    ratio(tp, tp + fn_)
}

#[allow(clippy::cast_precision_loss)]
fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    let value = numerator as f64 / denominator as f64;
    debug_assert!((0.0..=1.0).contains(&value), "ratio out of range: {value}");
    value
}

/// F-beta = (1 + beta²) * precision * recall / ((beta² * precision) + recall)
///
/// # Panics
///
/// Panics if beta is not positive
///
/// # Examples
///
/// ```
/// # use bumphole_eval::metrics::fbeta::calculate_fbeta;
/// let f2 = calculate_fbeta(0.5, 1.0, 2.0);
/// assert!((f2 - 0.8333).abs() < 1e-3);
/// ```
#[must_use]
pub fn calculate_fbeta(precision: f64, recall: f64, beta: f64) -> f64 {
    assert!(beta > 0.0, "Beta must be positive, got {beta}");

    if precision + recall == 0.0 {
        return 0.0;
    }

    let beta_squared = beta * beta;
    let denominator = beta_squared * precision + recall;
    if denominator == 0.0 {
        return 0.0;
    }

    let fbeta = (1.0 + beta_squared) * precision * recall / denominator;
    debug_assert!(
        (0.0..=1.0).contains(&fbeta),
        "F-beta out of range: {fbeta} (precision={precision}, recall={recall}, beta={beta})"
    );
    fbeta
}

/// F1 = 2 * precision * recall / (precision + recall), i.e. F-beta with beta = 1.
///
/// # Examples
///
/// ```
/// # use bumphole_eval::metrics::fbeta::calculate_f1;
/// assert!((calculate_f1(1.0, 0.5) - 0.6667).abs() < 1e-3);
/// ```
#[must_use]
pub fn calculate_f1(precision: f64, recall: f64) -> f64 {
    calculate_fbeta(precision, recall, 1.0)
}
