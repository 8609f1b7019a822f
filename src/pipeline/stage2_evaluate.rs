use tracing::{info, warn};

use crate::model::confusion::{ClassificationMetrics, ConfusionCounts};
use crate::model::curves::{PrCurve, RocCurve, pr_curve, roc_curve};
use crate::model::histogram::ScoreHistogram;
use crate::model::result::EvaluationResult;
use crate::model::threshold::binarize;

#[derive(Debug, Clone, Copy)]
pub struct Stage2Params {
    pub threshold: f64,
    pub bins: usize,
}

#[derive(Debug, Clone)]
pub struct Stage2Output {
    pub threshold: f64,
    pub predicted: Vec<u8>,
    pub confusion: ConfusionCounts,
    pub recomputed: ClassificationMetrics,
    pub roc: Option<RocCurve>,
    pub pr: Option<PrCurve>,
    pub histogram: ScoreHistogram,
}

pub fn run_stage2(result: &EvaluationResult, params: &Stage2Params) -> Stage2Output {
    let predicted = binarize(result.predictions(), params.threshold);
    let confusion = ConfusionCounts::from_labels(result.labels(), &predicted);
    let recomputed = confusion.metrics();

    let roc = roc_curve(result.predictions(), result.labels());
    if roc.is_none() {
        warn!("ROC curve undefined: labels contain a single class");
    }
    let pr = pr_curve(result.predictions(), result.labels());
    if pr.is_none() {
        warn!("precision-recall curve undefined: no positive labels");
    }

    let histogram = ScoreHistogram::build(result.predictions(), result.labels(), params.bins);

    info!(
        "evaluated {} samples at threshold {:.4}: accuracy={:.4} f1={:.4}",
        result.n_samples(),
        params.threshold,
        recomputed.accuracy,
        recomputed.f1_score
    );

    Stage2Output {
        threshold: params.threshold,
        predicted,
        confusion,
        recomputed,
        roc,
        pr,
        histogram,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_evaluate.rs"]
mod tests;
