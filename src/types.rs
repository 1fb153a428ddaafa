//! Core data types for detection records and their classifications.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two feature kinds a detector can report.
///
/// In CSV files a kind is written as an integer code: 1 for a bump and
/// 2 for a hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureKind {
    Bump,
    Hole,
}

impl FeatureKind {
    /// CSV code for this kind.
    pub fn code(self) -> u8 {
        match self {
            FeatureKind::Bump => 1,
            FeatureKind::Hole => 2,
        }
    }

    /// Look up a kind from its CSV code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(FeatureKind::Bump),
            2 => Some(FeatureKind::Hole),
            _ => None,
        }
    }

    /// Kind selected by the annotation front end: holding shift marks a hole.
    pub fn from_modifier(shift_held: bool) -> Self {
        if shift_held {
            FeatureKind::Hole
        } else {
            FeatureKind::Bump
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureKind::Bump => write!(f, "bump"),
            FeatureKind::Hole => write!(f, "hole"),
        }
    }
}

/// Outcome class used on both axes of the confusion matrix.
///
/// `None` means "no feature" and never appears on a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Bump,
    Hole,
    None,
}

impl From<FeatureKind> for Classification {
    fn from(kind: FeatureKind) -> Self {
        match kind {
            FeatureKind::Bump => Classification::Bump,
            FeatureKind::Hole => Classification::Hole,
        }
    }
}

/// A single marked or predicted feature.
///
/// `row` and `col` locate the centre of the feature in pixels and
/// `diameter` is its size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DetectionRecord {
    pub row: i32,
    pub col: i32,
    pub diameter: i32,
    pub kind: FeatureKind,
}

impl DetectionRecord {
    /// Create a new detection record.
    pub fn new(row: i32, col: i32, diameter: i32, kind: FeatureKind) -> Self {
        Self {
            row,
            col,
            diameter,
            kind,
        }
    }

    /// Shorthand for a bump record.
    pub fn bump(row: i32, col: i32, diameter: i32) -> Self {
        Self::new(row, col, diameter, FeatureKind::Bump)
    }

    /// Shorthand for a hole record.
    pub fn hole(row: i32, col: i32, diameter: i32) -> Self {
        Self::new(row, col, diameter, FeatureKind::Hole)
    }
}

/// Sort records ascending by row. Records sharing a row keep their order.
pub fn sort_by_row(records: &mut [DetectionRecord]) {
    records.sort_by_key(|record| record.row);
}
