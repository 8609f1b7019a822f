use std::path::PathBuf;

use super::*;
use crate::input::artifact::ArtifactFormat;
use crate::input::synthetic::{SYNTHETIC_SEED, synthetic_results};
use crate::model::result::EvaluationResult;
use crate::pipeline::stage2_evaluate::{Stage2Params, run_stage2};
use crate::report::json::render_summary_json;
use crate::report::text::{render_report_text, render_stored_metrics};

fn artifact_loaded() -> LoadedResults {
    let result = EvaluationResult::new(
        vec![0.9, 0.2, 0.65, 0.4],
        vec![1, 0, 1, 1],
        StoredMetrics {
            accuracy: 0.8534,
            precision: 0.8,
            recall: 0.75,
            f1_score: 0.77419,
        },
    )
    .unwrap();
    LoadedResults {
        result,
        source: ResultsSource::Artifact {
            path: PathBuf::from("results/results_epoch_50.pkl"),
            format: ArtifactFormat::Pickle { gzip: false },
        },
    }
}

fn summary_for(loaded: &LoadedResults) -> SummaryData {
    let stage2 = run_stage2(
        &loaded.result,
        &Stage2Params {
            threshold: 0.5,
            bins: 4,
        },
    );
    build_summary(loaded, &stage2)
}

#[test]
fn test_format_four_decimals() {
    assert_eq!(format_f64_4(0.8534), "0.8534");
    assert_eq!(format_f64_4(0.85), "0.8500");
    assert_eq!(format_f64_4(1.0), "1.0000");
    assert_eq!(format_opt_f64_4(None), "n/a");
}

#[test]
fn test_stored_metrics_block() {
    let loaded = artifact_loaded();
    let text = render_stored_metrics(loaded.result.metrics());
    assert_eq!(
        text,
        "Accuracy: 0.8534\nPrecision: 0.8000\nRecall: 0.7500\nF1 Score: 0.7742\n"
    );
}

#[test]
fn test_report_text_sections() {
    let loaded = artifact_loaded();
    let text = render_report_text(&summary_for(&loaded));

    assert!(text.contains("Accuracy: 0.8534"));
    assert!(text.contains("results/results_epoch_50.pkl (pickle)"));
    assert!(text.contains("Samples: 4 (positives: 3, negatives: 1)"));
    assert!(text.contains("2. Recomputed at threshold 0.5000"));
    assert!(text.contains("ROC AUC: 1.0000"));
    assert!(text.contains("[0.75, 1.00]"));
    assert!(!text.contains("synthetic placeholder"));
}

#[test]
fn test_report_text_synthetic_note() {
    let loaded = LoadedResults {
        result: synthetic_results(SYNTHETIC_SEED, 100).unwrap(),
        source: ResultsSource::Synthetic {
            seed: SYNTHETIC_SEED,
            requested_path: PathBuf::from("../results/results_epoch_50.pkl"),
        },
    };
    let text = render_report_text(&summary_for(&loaded));
    assert!(text.contains("synthetic, seed 42"));
    assert!(text.contains("Accuracy: 0.8500"));
    assert!(text.contains("Precision: 0.8300"));
    assert!(text.contains("Recall: 0.8700"));
    assert!(text.contains("synthetic placeholder"));
}

#[test]
fn test_summary_json_shape() {
    let loaded = artifact_loaded();
    let json = render_summary_json(&summary_for(&loaded)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["source"]["kind"], "artifact");
    assert_eq!(value["source"]["format"], "pickle");
    assert_eq!(value["n_samples"], 4);
    assert_eq!(value["stored"]["accuracy"], 0.8534);
    assert_eq!(value["confusion"]["tp"], 2);
    assert_eq!(value["confusion"]["fn"], 1);
    assert_eq!(value["histogram"]["positives"].as_array().unwrap().len(), 4);
    assert_eq!(value["tool"]["name"], "evalreport");
}
