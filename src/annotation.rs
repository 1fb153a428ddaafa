//! Ground-truth records built from shapes drawn by an annotator.
//!
//! Only the geometry lives here. The front end owns pointer handling and
//! hands over a finished [`DragBox`] for each marked feature.

use crate::types::{DetectionRecord, FeatureKind};

/// Rectangle dragged by the annotator. Width and height are negative when
/// the drag went left or up from the press point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl DragBox {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Box spanning a press point and a release point.
    pub fn from_corners(press: (i32, i32), release: (i32, i32)) -> Self {
        Self::new(
            press.0,
            press.1,
            release.0.saturating_sub(press.0),
            release.1.saturating_sub(press.1),
        )
    }

    /// Same box with its origin moved to the top-left corner and a
    /// non-negative extent.
    pub fn normalized(self) -> Self {
        let mut out = self;
        if out.width < 0 {
            out.x = out.x.saturating_add(out.width);
            out.width = out.width.saturating_neg();
        }
        if out.height < 0 {
            out.y = out.y.saturating_add(out.height);
            out.height = out.height.saturating_neg();
        }
        out
    }

    /// Circle inscribed in the box's width, centred on the box.
    pub fn to_record(self, kind: FeatureKind) -> DetectionRecord {
        let b = self.normalized();
        DetectionRecord::new(midpoint(b.x, b.width), midpoint(b.y, b.height), b.width, kind)
    }
}

/// Centre of the span `[start, start + extent]`, rounded toward zero.
fn midpoint(start: i32, extent: i32) -> i32 {
    let centre = (2 * i64::from(start) + i64::from(extent)) / 2;
    i32::try_from(centre).unwrap_or(if centre < 0 { i32::MIN } else { i32::MAX })
}

/// Ordered ground-truth records for the image currently being annotated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationSet {
    records: Vec<DetectionRecord>,
}

impl AnnotationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: DetectionRecord) {
        self.records.push(record);
    }

    /// Record a finished drag. Holding shift marks a hole, otherwise a bump.
    pub fn mark(&mut self, drag: DragBox, shift_held: bool) -> DetectionRecord {
        let record = drag.to_record(FeatureKind::from_modifier(shift_held));
        self.records.push(record);
        record
    }

    pub fn records(&self) -> &[DetectionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop all records before moving on to the next image.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_record_centre_and_diameter() {
        let record = DragBox::new(100, 40, 30, 20).to_record(FeatureKind::Bump);
        assert_eq!(record, DetectionRecord::bump(115, 50, 30));
    }

    #[test]
    fn test_drag_up_and_left() {
        let drag = DragBox::from_corners((130, 60), (100, 40));
        assert_eq!(drag.normalized(), DragBox::new(100, 40, 30, 20));
        assert_eq!(
            drag.to_record(FeatureKind::Hole),
            DetectionRecord::hole(115, 50, 30)
        );
    }

    #[test]
    fn test_extreme_boxes_do_not_overflow() {
        let record = DragBox::new(2_000_000_000, 1_500_000_000, 100, 40).to_record(FeatureKind::Bump);
        assert_eq!(record, DetectionRecord::bump(2_000_000_050, 1_500_000_020, 100));

        let drag = DragBox::from_corners((i32::MAX, i32::MIN), (i32::MIN, i32::MAX));
        let normalized = drag.normalized();
        assert!(normalized.width >= 0);
        assert!(normalized.height >= 0);

        let record = drag.to_record(FeatureKind::Hole);
        assert!(record.diameter >= 0);
    }

    #[test]
    fn test_mark_uses_shift_for_holes() {
        let mut set = AnnotationSet::new();
        let bump = set.mark(DragBox::new(0, 0, 10, 10), false);
        let hole = set.mark(DragBox::new(50, 50, 8, 8), true);

        assert_eq!(bump.kind, FeatureKind::Bump);
        assert_eq!(hole.kind, FeatureKind::Hole);
        assert_eq!(set.len(), 2);
        assert_eq!(set.records()[1], DetectionRecord::hole(54, 54, 8));

        set.clear();
        assert!(set.is_empty());
    }
}
