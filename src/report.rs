//! Console and CSV output for an evaluated image.

use crate::confusion::ConfusionCounts;
use crate::error::Result;
use crate::metrics::Scores;
use std::path::Path;
use tracing::debug;

/// Placeholder for the undefined "truly none, detected as none" cell.
pub const UNDEFINED_CELL: &str = "N/A";

/// Render the confusion matrix as CSV.
///
/// Rows are what the detector reported and columns are the truth:
///
/// ```text
///  ,Truly a bump,Truly a hole,Truly none
/// Detected as a bump,..
/// Detected as a hole,..
/// Detected as none,..,..,N/A
/// ```
pub fn confusion_matrix_to_string(counts: &ConfusionCounts) -> String {
    format!(
        " ,Truly a bump,Truly a hole,Truly none\n\
         Detected as a bump,{},{},{}\n\
         Detected as a hole,{},{},{}\n\
         Detected as none,{},{},{}\n",
        counts.bump_as_bump,
        counts.hole_as_bump,
        counts.none_as_bump,
        counts.bump_as_hole,
        counts.hole_as_hole,
        counts.none_as_hole,
        counts.bump_as_none,
        counts.hole_as_none,
        UNDEFINED_CELL,
    )
}

/// Write the confusion matrix CSV, overwriting any existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_confusion_matrix<P: AsRef<Path>>(path: P, counts: &ConfusionCounts) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, confusion_matrix_to_string(counts))?;
    debug!(path = %path.display(), "wrote confusion matrix");
    Ok(())
}

/// Human-readable breakdown of the counts followed by the scores.
pub fn format_report(counts: &ConfusionCounts, scores: &Scores) -> String {
    format!(
        "First row...\n\
         Truly a bump and detected as a bump: {}\n\
         Truly a hole but detected as a bump: {}\n\
         Truly none but detected as a bump: {}\n\
         \n\
         Second row...\n\
         Truly a bump but detected as a hole: {}\n\
         Truly a hole and detected as a hole: {}\n\
         Truly none but detected as a hole: {}\n\
         \n\
         Third row...\n\
         Truly a bump but detected as none: {}\n\
         Truly a hole but detected as none: {}\n\
         \n\
         Recall: {:.4}\n\
         Precision: {:.4}\n\
         F1 Measure: {:.4}\n",
        counts.bump_as_bump,
        counts.hole_as_bump,
        counts.none_as_bump,
        counts.bump_as_hole,
        counts.hole_as_hole,
        counts.none_as_hole,
        counts.bump_as_none,
        counts.hole_as_none,
        scores.recall,
        scores.precision,
        scores.f1,
    )
}
