//! # bumphole-eval
//!
//! Measures how well an automated bump/hole detector agrees with a human
//! annotator on a single image.
//!
//! The library provides:
//! - **CSV I/O** for ground-truth and prediction files
//! - **Proximity matching** with a fixed pixel tolerance on row, column and diameter
//! - **Greedy matching** of ground-truth records to predictions
//! - **Confusion counts** over {bump, hole, none} × {bump, hole, none}
//! - **Precision**, **Recall** and **F1** from those counts
//!
//! ## Quick Start
//!
//! ```rust
//! use bumphole_eval::codec::parse_predictions_from_str;
//! use bumphole_eval::config::EvalConfig;
//! use bumphole_eval::evaluator::evaluate_records;
//! use bumphole_eval::report::confusion_matrix_to_string;
//! use bumphole_eval::types::DetectionRecord;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ground_truth = vec![DetectionRecord::bump(10, 10, 20)];
//! let predictions = parse_predictions_from_str("row,col,diameter,kind\n12,11,19,1\n")?;
//!
//! let evaluation = evaluate_records(&ground_truth, &predictions, &EvalConfig::default());
//! println!("F1: {:.4}", evaluation.scores.f1);
//! println!("{}", confusion_matrix_to_string(&evaluation.counts));
//! # Ok(())
//! # }
//! ```
//!
//! ## CSV Format
//!
//! ```text
//! row,col,diameter,Bump (1) or Hole (2)
//! 120,40,22,1
//! 215,300,18,2
//! ```

pub mod error;
pub mod types;
pub mod codec;
pub mod matching;
pub mod confusion;
pub mod metrics;
pub mod report;
pub mod annotation;
pub mod config;
pub mod evaluator;

// Re-export commonly used types and functions
pub use error::{EvalError, Result};
pub use types::{Classification, DetectionRecord, FeatureKind};
pub use codec::{parse_predictions, write_ground_truth};
pub use matching::{is_match, match_records, MatchOutcome, MatchResult, MATCH_TOLERANCE_PX};
pub use confusion::ConfusionCounts;
pub use metrics::Scores;
pub use config::{EvalConfig, ImageJob, SessionConfig};
pub use evaluator::{evaluate, evaluate_image, evaluate_records, Evaluation};
