//! Basic evaluation example demonstrating core functionality.

use bumphole_eval::{
    annotation::{AnnotationSet, DragBox},
    codec::{parse_predictions_from_str, write_ground_truth},
    evaluate_records, is_match,
    report::{confusion_matrix_to_string, format_report},
    DetectionRecord, EvalConfig,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Bump/Hole Evaluation Example ===\n");

    // Example 1: Proximity matching
    println!("1. Proximity Matching");
    let marked = DetectionRecord::bump(100, 100, 20);
    let near = DetectionRecord::hole(110, 95, 24);
    let far = DetectionRecord::bump(160, 100, 20);
    println!("   near prediction matches: {}", is_match(&marked, &near));
    println!("   far prediction matches:  {}", is_match(&marked, &far));
    println!();

    // Example 2: Building ground truth from annotator drags
    println!("2. Annotating an Image");
    let mut annotations = AnnotationSet::new();
    annotations.mark(DragBox::from_corners((40, 40), (60, 60)), false);
    annotations.mark(DragBox::from_corners((230, 130), (200, 100)), true);
    annotations.mark(DragBox::from_corners((400, 20), (424, 44)), false);
    for record in annotations.records() {
        println!(
            "   {} at row {}, col {}, diameter {}",
            record.kind, record.row, record.col, record.diameter
        );
    }

    let gt_path = std::env::temp_dir().join("bumphole_demo_gt.csv");
    write_ground_truth(&gt_path, annotations.records())?;
    println!("   Ground truth written to {}", gt_path.display());
    println!();

    // Example 3: Loading detector output
    println!("3. Loading Predictions");
    let predictions_csv = "row,col,diameter,Bump (1) or Hole (2)\n\
                           52,49,21,1\n\
                           213,118,28,1\n\
                           700,700,15,2\n";
    let predictions = parse_predictions_from_str(predictions_csv)?;
    println!("   Loaded {} predictions", predictions.len());
    println!();

    // Example 4: Evaluation
    println!("4. Evaluation");
    let evaluation = evaluate_records(annotations.records(), &predictions, &EvalConfig::default());
    println!("{}", format_report(&evaluation.counts, &evaluation.scores));

    println!("Confusion matrix CSV:");
    print!("{}", confusion_matrix_to_string(&evaluation.counts));

    Ok(())
}
