use serde::Serialize;

/// Binary confusion counts, positive class = 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConfusionCounts {
    pub tn: usize,
    pub fp: usize,
    #[serde(rename = "fn")]
    pub fn_: usize,
    pub tp: usize,
}

impl ConfusionCounts {
    pub fn from_labels(labels: &[u8], predicted: &[u8]) -> Self {
        let mut counts = Self::default();
        for (&actual, &pred) in labels.iter().zip(predicted.iter()) {
            match (actual, pred) {
                (0, 0) => counts.tn += 1,
                (0, _) => counts.fp += 1,
                (_, 0) => counts.fn_ += 1,
                _ => counts.tp += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.tn + self.fp + self.fn_ + self.tp
    }

    pub fn metrics(&self) -> ClassificationMetrics {
        let accuracy = ratio(self.tp + self.tn, self.total());
        let precision = ratio(self.tp, self.tp + self.fp);
        let recall = ratio(self.tp, self.tp + self.fn_);
        let specificity = ratio(self.tn, self.tn + self.fp);
        let f1_score = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };
        ClassificationMetrics {
            accuracy,
            precision,
            recall,
            specificity,
            f1_score,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassificationMetrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub specificity: f64,
    pub f1_score: f64,
}

fn ratio(num: usize, denom: usize) -> f64 {
    if denom == 0 {
        0.0
    } else {
        num as f64 / denom as f64
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/confusion.rs"]
mod tests;
