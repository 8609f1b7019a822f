use serde::Serialize;

pub mod json;
pub mod text;

use crate::input::{LoadedResults, ResultsSource};
use crate::model::confusion::{ClassificationMetrics, ConfusionCounts};
use crate::model::histogram::ScoreHistogram;
use crate::model::result::StoredMetrics;
use crate::pipeline::stage2_evaluate::Stage2Output;

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SourceSummary {
    pub kind: &'static str,
    pub path: String,
    pub format: Option<&'static str>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub source: SourceSummary,
    pub n_samples: usize,
    pub n_positives: usize,
    pub n_negatives: usize,
    pub stored: StoredMetrics,
    pub threshold: f64,
    pub recomputed: ClassificationMetrics,
    pub confusion: ConfusionCounts,
    pub roc_auc: Option<f64>,
    pub average_precision: Option<f64>,
    pub histogram: ScoreHistogram,
}

pub fn build_summary(loaded: &LoadedResults, stage2: &Stage2Output) -> SummaryData {
    let result = &loaded.result;
    let source = match &loaded.source {
        ResultsSource::Artifact { path, format } => SourceSummary {
            kind: "artifact",
            path: path.display().to_string(),
            format: Some(format.name()),
            seed: None,
        },
        ResultsSource::Synthetic {
            seed,
            requested_path,
        } => SourceSummary {
            kind: "synthetic",
            path: requested_path.display().to_string(),
            format: None,
            seed: Some(*seed),
        },
    };

    SummaryData {
        tool: ToolMeta {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        source,
        n_samples: result.n_samples(),
        n_positives: result.n_positives(),
        n_negatives: result.n_negatives(),
        stored: *result.metrics(),
        threshold: stage2.threshold,
        recomputed: stage2.recomputed,
        confusion: stage2.confusion,
        roc_auc: stage2.roc.as_ref().map(|r| r.auc),
        average_precision: stage2.pr.as_ref().map(|p| p.average_precision),
        histogram: stage2.histogram.clone(),
    }
}

pub fn format_f64_4(v: f64) -> String {
    format!("{:.4}", v)
}

pub fn format_opt_f64_4(v: Option<f64>) -> String {
    match v {
        Some(v) => format_f64_4(v),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
