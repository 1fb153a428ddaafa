//! bumphole-eval CLI - score a bump/hole detector against annotated ground truth.
//!
//! # Usage
//!
//! ```bash
//! # One image
//! bumphole-eval evaluate --ground-truth SAM_sub1_gt.csv --predictions SAM1_sub2_alg.csv
//!
//! # Every image listed in a session file
//! bumphole-eval batch --config session.json --ground-truth-dir annotations/
//! ```

use anyhow::{bail, Context, Result};
use bumphole_eval::codec::{parse_ground_truth, parse_predictions};
use bumphole_eval::config::{load_config_from_file, EvalConfig};
use bumphole_eval::evaluator::{evaluate_image, evaluate_records, Evaluation};
use bumphole_eval::report::{format_report, write_confusion_matrix};
use bumphole_eval::MATCH_TOLERANCE_PX;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bumphole-eval", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one ground-truth CSV against one predictions CSV.
    Evaluate {
        /// Annotated ground truth CSV.
        #[arg(long)]
        ground_truth: PathBuf,

        /// Detector predictions CSV.
        #[arg(long)]
        predictions: PathBuf,

        /// Where to write the confusion matrix CSV.
        #[arg(long)]
        confusion_out: Option<PathBuf>,

        /// Per-axis match tolerance in pixels.
        #[arg(long, default_value_t = MATCH_TOLERANCE_PX)]
        tolerance: i32,
    },

    /// Evaluate every image listed in a JSON session file.
    Batch {
        /// Session config (JSON).
        #[arg(long)]
        config: PathBuf,

        /// Directory holding `<image name>.csv` ground-truth files.
        #[arg(long)]
        ground_truth_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Evaluate {
            ground_truth,
            predictions,
            confusion_out,
            tolerance,
        } => {
            if tolerance <= 0 {
                bail!("--tolerance must be positive, got {}", tolerance);
            }
            let ground_truth_records = parse_ground_truth(&ground_truth)
                .with_context(|| format!("reading ground truth {}", ground_truth.display()))?;
            let prediction_records = parse_predictions(&predictions)
                .with_context(|| format!("reading predictions {}", predictions.display()))?;

            let config = EvalConfig {
                match_tolerance_px: tolerance,
            };
            let evaluation = evaluate_records(&ground_truth_records, &prediction_records, &config);

            if let Some(path) = confusion_out {
                write_confusion_matrix(&path, &evaluation.counts)
                    .with_context(|| format!("writing confusion matrix {}", path.display()))?;
            }
            print_evaluation("Confusion matrix", &evaluation);
        }
        Commands::Batch {
            config,
            ground_truth_dir,
        } => {
            let session = load_config_from_file(&config)
                .with_context(|| format!("loading session {}", config.display()))?;
            let eval_config = session.eval_config();

            let mut failures = 0;
            for (index, job) in session.images.iter().enumerate() {
                let number = index + 1;
                let source = ground_truth_dir.join(format!("{}.csv", job.name));

                let outcome = parse_ground_truth(&source)
                    .and_then(|records| evaluate_image(job, number, &records, &eval_config));

                match outcome {
                    Ok(evaluation) => {
                        print_evaluation(&format!("Confusion matrix for image {}", number), &evaluation)
                    }
                    Err(e) => {
                        error!("image {} ({}) failed: {}", number, job.name, e);
                        failures += 1;
                    }
                }
            }

            if failures > 0 {
                bail!("{} of {} images failed", failures, session.images.len());
            }
        }
    }

    Ok(())
}

fn print_evaluation(title: &str, evaluation: &Evaluation) {
    println!("\n{}\n", title);
    println!("{}", format_report(&evaluation.counts, &evaluation.scores));
}
