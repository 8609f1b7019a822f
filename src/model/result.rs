use serde::Serialize;

/// Summary metrics as stored by the process that produced the artifact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StoredMetrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
}

impl StoredMetrics {
    pub fn named(&self) -> [(&'static str, f64); 4] {
        [
            ("Accuracy", self.accuracy),
            ("Precision", self.precision),
            ("Recall", self.recall),
            ("F1 Score", self.f1_score),
        ]
    }
}

/// Per-sample scores and labels of one evaluation run.
///
/// Built once through [`EvaluationResult::new`], which enforces
/// `predictions.len() == labels.len()`; read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    predictions: Vec<f64>,
    labels: Vec<u8>,
    metrics: StoredMetrics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthMismatch {
    pub predictions: usize,
    pub labels: usize,
}

impl EvaluationResult {
    pub fn new(
        predictions: Vec<f64>,
        labels: Vec<u8>,
        metrics: StoredMetrics,
    ) -> Result<Self, LengthMismatch> {
        if predictions.len() != labels.len() {
            return Err(LengthMismatch {
                predictions: predictions.len(),
                labels: labels.len(),
            });
        }
        Ok(Self {
            predictions,
            labels,
            metrics,
        })
    }

    pub fn predictions(&self) -> &[f64] {
        &self.predictions
    }

    pub fn labels(&self) -> &[u8] {
        &self.labels
    }

    pub fn metrics(&self) -> &StoredMetrics {
        &self.metrics
    }

    pub fn n_samples(&self) -> usize {
        self.predictions.len()
    }

    pub fn n_positives(&self) -> usize {
        self.labels.iter().filter(|&&l| l == 1).count()
    }

    pub fn n_negatives(&self) -> usize {
        self.n_samples() - self.n_positives()
    }
}
