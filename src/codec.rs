//! CSV reading and writing for detection records.
//!
//! Both ground-truth and prediction files share one layout: a header line
//! followed by `row,col,diameter,kind` rows, where `kind` is 1 for a bump and
//! 2 for a hole.

use crate::error::{EvalError, Result};
use crate::types::{sort_by_row, DetectionRecord, FeatureKind};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Header written at the top of every ground-truth file.
pub const GROUND_TRUTH_HEADER: &str = "row,col,diameter,Bump (1) or Hole (2)";

const FIELD_COUNT: usize = 4;

/// Write ground-truth records to a CSV file, sorted ascending by row.
///
/// The file is created or overwritten.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
///
/// # Example
///
/// ```no_run
/// use bumphole_eval::codec::write_ground_truth;
/// use bumphole_eval::types::DetectionRecord;
///
/// let records = vec![DetectionRecord::bump(40, 12, 18), DetectionRecord::hole(7, 90, 22)];
/// write_ground_truth("SAM_sub1_gt.csv", &records).unwrap();
/// ```
pub fn write_ground_truth<P: AsRef<Path>>(path: P, records: &[DetectionRecord]) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, ground_truth_to_string(records))?;
    debug!(path = %path.display(), records = records.len(), "wrote ground truth");
    Ok(())
}

/// Render ground-truth records as CSV text, sorted ascending by row.
pub fn ground_truth_to_string(records: &[DetectionRecord]) -> String {
    let mut sorted = records.to_vec();
    sort_by_row(&mut sorted);

    let mut out = format!("{}\n", GROUND_TRUTH_HEADER);
    for record in &sorted {
        out.push_str(&format!(
            "{},{},{},{}\n",
            record.row,
            record.col,
            record.diameter,
            record.kind.code()
        ));
    }
    out
}

/// Load detector predictions from a CSV file.
///
/// The header line is skipped. Parsing stops at the first blank line or at
/// end of file, so trailing blank lines are harmless. The returned records
/// are sorted ascending by row.
///
/// # Errors
///
/// Returns [`EvalError::Io`] if the file cannot be read and
/// [`EvalError::Parse`] if a row does not hold exactly four non-negative
/// integers with a kind code of 1 or 2.
///
/// # Example
///
/// ```no_run
/// use bumphole_eval::codec::parse_predictions;
///
/// let predictions = parse_predictions("SAM1_sub2_alg.csv").unwrap();
/// println!("Loaded {} predictions", predictions.len());
/// ```
pub fn parse_predictions<P: AsRef<Path>>(path: P) -> Result<Vec<DetectionRecord>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let records = parse_predictions_from_reader(BufReader::new(file))?;
    debug!(path = %path.display(), records = records.len(), "parsed predictions");
    Ok(records)
}

/// Load ground-truth records previously written by [`write_ground_truth`].
pub fn parse_ground_truth<P: AsRef<Path>>(path: P) -> Result<Vec<DetectionRecord>> {
    parse_predictions(path)
}

/// Parse predictions from CSV text.
///
/// # Example
///
/// ```
/// use bumphole_eval::codec::parse_predictions_from_str;
///
/// let csv = "row,col,diameter,kind\n50,60,20,1\n10,15,25,2\n\n";
/// let records = parse_predictions_from_str(csv).unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].row, 10);
/// ```
pub fn parse_predictions_from_str(csv: &str) -> Result<Vec<DetectionRecord>> {
    parse_predictions_from_reader(csv.as_bytes())
}

/// Parse predictions from any buffered reader.
///
/// A row that is not valid UTF-8 is a parse error; only failures of the
/// reader itself surface as [`EvalError::Io`].
pub fn parse_predictions_from_reader<R: BufRead>(reader: R) -> Result<Vec<DetectionRecord>> {
    let mut lines = reader.split(b'\n');

    // Header, whatever its encoding
    if lines.next().transpose()?.is_none() {
        return Ok(Vec::new());
    }

    let mut records = Vec::new();
    for (index, bytes) in lines.enumerate() {
        // Header is line 1
        let line_number = index + 2;
        let bytes = bytes?;
        let line = std::str::from_utf8(&bytes)
            .map_err(|_| EvalError::parse(line_number, "line is not valid UTF-8"))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            break;
        }
        records.push(parse_record_line(trimmed, line_number)?);
    }

    sort_by_row(&mut records);
    Ok(records)
}

fn parse_record_line(line: &str, line_number: usize) -> Result<DetectionRecord> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(EvalError::parse(
            line_number,
            format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
        ));
    }

    let row = parse_coordinate("row", fields[0], line_number)?;
    let col = parse_coordinate("col", fields[1], line_number)?;
    let diameter = parse_coordinate("diameter", fields[2], line_number)?;

    let code: i64 = fields[3].parse().map_err(|_| {
        EvalError::parse(line_number, format!("kind code '{}' is not numeric", fields[3]))
    })?;
    let kind = u8::try_from(code).ok().and_then(FeatureKind::from_code).ok_or_else(|| {
        EvalError::parse(line_number, format!("kind code must be 1 or 2, got {}", code))
    })?;

    Ok(DetectionRecord::new(row, col, diameter, kind))
}

fn parse_coordinate(name: &str, value: &str, line_number: usize) -> Result<i32> {
    let parsed: i32 = value.parse().map_err(|_| {
        EvalError::parse(line_number, format!("{} '{}' is not an integer", name, value))
    })?;
    if parsed < 0 {
        return Err(EvalError::parse(
            line_number,
            format!("{} must be non-negative, got {}", name, parsed),
        ));
    }
    Ok(parsed)
}
