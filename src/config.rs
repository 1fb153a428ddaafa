//! Evaluation settings and JSON session files.
//!
//! A session lists the images evaluated in one sitting:
//!
//! ```json
//! {
//!   "match_tolerance_px": 25,
//!   "images": [
//!     { "name": "SAM1_sub1", "predictions": "SAM1_sub2_alg.csv" }
//!   ]
//! }
//! ```

use crate::error::{EvalError, Result};
use crate::matching::MATCH_TOLERANCE_PX;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

fn default_tolerance() -> i32 {
    MATCH_TOLERANCE_PX
}

/// Settings for a single matching pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalConfig {
    /// Per-axis tolerance, in pixels, for a prediction to match a ground-truth record.
    #[serde(default = "default_tolerance")]
    pub match_tolerance_px: i32,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            match_tolerance_px: MATCH_TOLERANCE_PX,
        }
    }
}

/// One image to evaluate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageJob {
    pub name: String,
    /// Detector output for this image.
    pub predictions: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ground_truth_out: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confusion_matrix_out: Option<PathBuf>,
}

impl ImageJob {
    pub fn new(name: impl Into<String>, predictions: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            predictions: predictions.into(),
            ground_truth_out: None,
            confusion_matrix_out: None,
        }
    }

    /// Where the ground truth for the `number`-th image (1-based) is written.
    pub fn ground_truth_path(&self, number: usize) -> PathBuf {
        self.ground_truth_out
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("SAM_sub{}_gt.csv", number)))
    }

    /// Where the confusion matrix for the `number`-th image (1-based) is written.
    pub fn confusion_matrix_path(&self, number: usize) -> PathBuf {
        self.confusion_matrix_out
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("confusion_matrix_img{}.csv", number)))
    }
}

/// A batch of images sharing one set of evaluation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_tolerance")]
    pub match_tolerance_px: i32,
    pub images: Vec<ImageJob>,
}

impl SessionConfig {
    pub fn eval_config(&self) -> EvalConfig {
        EvalConfig {
            match_tolerance_px: self.match_tolerance_px,
        }
    }
}

/// Load a session config from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or fails
/// validation.
pub fn load_config_from_file<P: AsRef<Path>>(path: P) -> Result<SessionConfig> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config: SessionConfig = serde_json::from_reader(reader)?;

    validate_config(&config)?;

    Ok(config)
}

/// Load a session config from a JSON string.
///
/// # Example
///
/// ```
/// use bumphole_eval::config::load_config_from_str;
///
/// let json = r#"{ "images": [ { "name": "img1", "predictions": "img1_alg.csv" } ] }"#;
/// let config = load_config_from_str(json).unwrap();
/// assert_eq!(config.match_tolerance_px, 25);
/// ```
pub fn load_config_from_str(json_str: &str) -> Result<SessionConfig> {
    let config: SessionConfig = serde_json::from_str(json_str)?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &SessionConfig) -> Result<()> {
    if config.match_tolerance_px <= 0 {
        return Err(EvalError::InvalidConfig(format!(
            "match_tolerance_px must be positive, got {}",
            config.match_tolerance_px
        )));
    }

    if config.images.is_empty() {
        return Err(EvalError::InvalidConfig(
            "session must list at least one image".to_string(),
        ));
    }

    for (index, image) in config.images.iter().enumerate() {
        if image.name.trim().is_empty() {
            return Err(EvalError::InvalidConfig(format!(
                "image {} has an empty name",
                index + 1
            )));
        }
    }

    Ok(())
}
