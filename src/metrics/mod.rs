//! Metrics calculation modules for bump/hole evaluation.

pub mod fbeta;
pub mod scores;

pub use fbeta::{calculate_f1, calculate_fbeta, calculate_precision, calculate_recall};
pub use scores::Scores;
